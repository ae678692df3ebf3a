use crate::initial_conditions::normal_impulse::*;
use crate::initial_conditions::rand::*;
use crate::initial_conditions::*;
use crate::par_slice;

/// Fill a global field with the requested initial condition.
pub fn generate_ic(buffer: &mut [f64], ic_type: ICType, chunk_size: usize) {
    match ic_type {
        ICType::Zero => par_slice::set_value(buffer, 0.0, chunk_size),
        ICType::Constant { value } => {
            par_slice::set_value(buffer, value, chunk_size)
        }
        ICType::Rand { max_val, seed } => {
            rand_ic(buffer, max_val, seed, chunk_size);
        }
        ICType::Impulse { variance } => {
            normal_ic_1d(buffer, variance, chunk_size);
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn constant_and_zero() {
        let mut b = vec![5.0; 33];
        generate_ic(&mut b, ICType::Zero, 4);
        assert!(b.iter().all(|v| *v == 0.0));
        generate_ic(&mut b, ICType::Constant { value: 3.0 }, 4);
        assert!(b.iter().all(|v| *v == 3.0));
    }
}
