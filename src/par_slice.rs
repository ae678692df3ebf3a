use crate::util::*;
use rayon::prelude::*;

/// Sets each element to the same value.
/// `chunk_size` is break the work into tasks for multi-threading.
pub fn set_value<NumType: NumTrait>(
    a_slice: &mut [NumType],
    value: NumType,
    chunk_size: usize,
) {
    a_slice
        .par_chunks_mut(chunk_size.max(1))
        .for_each(|a_chunk: &mut [NumType]| {
            for a in a_chunk {
                *a = value;
            }
        });
}

/// Sum of all elements, summed sequentially within each chunk.
/// The result depends on `chunk_size` only through round-off.
pub fn sum<NumType: NumTrait>(a_slice: &[NumType], chunk_size: usize) -> NumType {
    a_slice
        .par_chunks(chunk_size.max(1))
        .map(|a_chunk: &[NumType]| {
            a_chunk.iter().fold(NumType::zero(), |acc, a| acc + *a)
        })
        .reduce(NumType::zero, |a, b| a + b)
}

/// Largest absolute pointwise difference between two slices.
pub fn max_abs_diff(a_slice: &[f64], b_slice: &[f64], chunk_size: usize) -> f64 {
    debug_assert_eq!(a_slice.len(), b_slice.len());
    a_slice
        .par_chunks(chunk_size.max(1))
        .zip(b_slice.par_chunks(chunk_size.max(1)))
        .map(|(a_chunk, b_chunk)| {
            a_chunk
                .iter()
                .zip(b_chunk)
                .fold(0.0_f64, |m, (a, b)| m.max((a - b).abs()))
        })
        .reduce(|| 0.0, f64::max)
}

/// True when both slices hold the same bit patterns.
/// NaN results compare equal to themselves here, unlike `==`.
pub fn bitwise_eq(a_slice: &[f64], b_slice: &[f64], chunk_size: usize) -> bool {
    a_slice.len() == b_slice.len()
        && a_slice
            .par_chunks(chunk_size.max(1))
            .zip(b_slice.par_chunks(chunk_size.max(1)))
            .all(|(a_chunk, b_chunk)| {
                a_chunk
                    .iter()
                    .zip(b_chunk)
                    .all(|(a, b)| a.to_bits() == b.to_bits())
            })
}
