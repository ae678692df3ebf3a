mod generate_ic;
pub mod normal_impulse;
pub mod rand;
use clap::ValueEnum;
pub use generate_ic::*;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum ICType {
    #[default]
    Zero,
    Constant {
        value: f64,
    },
    Rand {
        max_val: i32,
        seed: u64,
    },
    Impulse {
        variance: f64,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum, Default)]
pub enum ClapICType {
    Zero,
    Constant,
    Rand,
    #[default]
    Impulse,
}

impl ClapICType {
    pub fn to_ic_type(&self, dial: f64, seed: u64) -> ICType {
        match self {
            ClapICType::Zero => ICType::Zero,
            ClapICType::Constant => ICType::Constant { value: dial },
            ClapICType::Rand => ICType::Rand {
                max_val: (dial as i32).max(1),
                seed,
            },
            ClapICType::Impulse => ICType::Impulse { variance: dial },
        }
    }
}
