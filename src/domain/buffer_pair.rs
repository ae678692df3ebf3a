use crate::error::*;

/// The two scratch buffers a kernel steps between.
/// Exactly one of them, `current`, holds the latest field.
/// Both are released when the pair is dropped, on every exit path.
pub struct BufferPair {
    current: Vec<f64>,
    next: Vec<f64>,
}

impl BufferPair {
    /// Allocate the pair and copy `initial` into `current`.
    pub fn try_from_slice(initial: &[f64]) -> Result<Self> {
        let len = initial.len();
        let mut current = try_alloc(len)?;
        current.extend_from_slice(initial);
        let mut next = try_alloc(len)?;
        next.resize(len, 0.0);
        Ok(BufferPair { current, next })
    }

    pub fn current(&self) -> &[f64] {
        &self.current
    }

    /// Borrow `current` for reading and `next` for writing at once.
    pub fn split(&mut self) -> (&[f64], &mut [f64]) {
        (&self.current, &mut self.next)
    }

    /// Exchange the roles of the two allocations, no values are copied.
    #[inline]
    pub fn rotate(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Copy `current` into the caller's buffer.
    pub fn write_back(&self, output: &mut [f64]) {
        output.copy_from_slice(&self.current);
    }
}

fn try_alloc(len: usize) -> Result<Vec<f64>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|source| HeatError::AllocationFailure { len, source })?;
    Ok(buffer)
}
