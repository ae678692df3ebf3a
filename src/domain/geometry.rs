use crate::error::*;

/// Grid geometry for one kernel invocation.
/// `nx` is the number of points owned by the caller, which is the whole
/// domain for the serial kernel and one slice for the distributed kernel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Geometry {
    dx: f64,
    nx: usize,
    dt: f64,
    nt: usize,
}

impl Geometry {
    /// Validate and build a geometry.
    /// Requires `nx >= 2` and finite, positive `dx` and `dt`.
    pub fn new(dx: f64, nx: usize, dt: f64, nt: usize) -> Result<Self> {
        if nx < 2 {
            return Err(HeatError::invalid_geometry(format!(
                "nx must be at least 2, got {nx}"
            )));
        }
        if !dx.is_finite() || dx <= 0.0 {
            return Err(HeatError::invalid_geometry(format!(
                "dx must be finite and positive, got {dx}"
            )));
        }
        if !dt.is_finite() || dt <= 0.0 {
            return Err(HeatError::invalid_geometry(format!(
                "dt must be finite and positive, got {dt}"
            )));
        }
        Ok(Geometry { dx, nx, dt, nt })
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of time steps.
    pub fn nt(&self) -> usize {
        self.nt
    }

    /// The dimensionless diffusion coefficient `dt / dx^2`.
    pub fn nu(&self) -> f64 {
        self.dt / (self.dx * self.dx)
    }

    /// Forward Euler is stable for `nu <= 0.5`.
    /// Nothing enforces this, callers pick their own steps.
    pub fn is_stable(&self) -> bool {
        self.nu() <= 0.5
    }

    /// Check that a caller buffer matches `nx`.
    pub fn check_buffer(&self, buffer: &[f64]) -> Result<()> {
        if buffer.len() != self.nx {
            return Err(HeatError::invalid_geometry(format!(
                "buffer holds {} values but nx is {}",
                buffer.len(),
                self.nx
            )));
        }
        Ok(())
    }

    pub(crate) fn warn_if_unstable(&self) {
        if !self.is_stable() {
            tracing::warn!(
                nu = self.nu(),
                "diffusion coefficient exceeds 0.5, forward euler will be unstable"
            );
        }
    }
}
