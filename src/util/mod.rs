pub use num_traits::{Num, One, Zero};

mod interval;
pub use interval::*;

/// Numeric types the chunked slice helpers operate on.
pub trait NumTrait: Num + Copy + Send + Sync {}

impl<T: Num + Copy + Send + Sync> NumTrait for T {}
