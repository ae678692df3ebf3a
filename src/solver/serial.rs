use crate::domain::*;
use crate::error::*;
use crate::stencil::*;

/// Advance the full periodic grid `u` by `nt` Forward Euler steps.
/// `u` must hold exactly `nx` values, on error it is left untouched.
pub fn advance_serial(
    u: &mut [f64],
    dx: f64,
    nx: usize,
    dt: f64,
    nt: usize,
) -> Result<()> {
    profiling::scope!("advance_serial");
    let geometry = Geometry::new(dx, nx, dt, nt)?;
    geometry.check_buffer(u)?;
    geometry.warn_if_unstable();
    tracing::debug!(nx, nt, nu = geometry.nu(), "advancing serial grid");
    if geometry.nt() == 0 {
        return Ok(());
    }

    let nx = geometry.nx();
    let stencil = HeatStencil::from_geometry(&geometry);
    let mut buffers = BufferPair::try_from_slice(u)?;
    for _ in 0..geometry.nt() {
        let (current, next) = buffers.split();
        stencil.apply_interior(current, next);
        next[0] = stencil.apply(current[nx - 1], current[0], current[1]);
        next[nx - 1] = stencil.apply(current[nx - 2], current[nx - 1], current[0]);
        buffers.rotate();
    }
    buffers.write_back(u);
    Ok(())
}
