//! Grid geometry and the storage a kernel steps through.
//! Callers own the field they hand in, kernels own the two scratch
//! buffers and copy the result back before returning.

mod buffer_pair;
mod geometry;

pub use buffer_pair::*;
pub use geometry::*;
