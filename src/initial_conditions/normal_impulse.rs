use rayon::prelude::*;

/// Generate normal like distribution over the buffer with spike in the
/// middle, all values are in [0, 1].
/// Larger `variance` gives a narrower spike, sigma is `n / variance`.
pub fn normal_ic_1d(buffer: &mut [f64], variance: f64, chunk_size: usize) {
    let chunk_size = chunk_size.max(1);
    let n_f = buffer.len() as f64;
    let sigma_sq: f64 = (n_f / variance) * (n_f / variance);
    buffer
        .par_chunks_mut(chunk_size)
        .enumerate()
        .for_each(|(i, chunk): (usize, &mut [f64])| {
            let offset = i * chunk_size;
            for (j, value_mut) in chunk.iter_mut().enumerate() {
                let x = ((offset + j) as f64) - (n_f / 2.0);
                let exp = -x * x / (2.0 * sigma_sq);
                *value_mut = exp.exp();
            }
        });
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn spike_in_middle() {
        let mut b = vec![0.0; 100];
        normal_ic_1d(&mut b, 10.0, 7);
        assert_approx_eq!(f64, b[50], 1.0);
        assert!(b.iter().all(|v| *v > 0.0 && *v <= 1.0));
        assert!(b[0] < b[25] && b[25] < b[50]);
        assert_approx_eq!(f64, b[40], b[60]);
    }
}
