use crate::comm::*;
use crate::domain::*;
use crate::error::*;
use crate::solver::step_phase::*;
use crate::stencil::*;

/// Edge values staged for the outbound sends of one step.
/// These are copies, rotating the buffers afterwards cannot change what
/// is in flight.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EdgeSample {
    /// `current[0]`, goes to the left neighbor.
    pub left: f64,
    /// `current[nx - 1]`, goes to the right neighbor.
    pub right: f64,
}

impl EdgeSample {
    pub fn of(current: &[f64]) -> Self {
        EdgeSample {
            left: current[0],
            right: current[current.len() - 1],
        }
    }
}

/// Advance this rank's slice `uk` of the global periodic grid by `nt`
/// Forward Euler steps, exchanging one ghost value with each ring neighbor
/// per step.
///
/// Each step posts both edge sends, computes the interior while they are
/// in flight, receives the right then the left ghost to close the two
/// edges, rotates, and only then waits for the sends.
///
/// On a transport error the contents of `uk` are unspecified and the whole
/// distributed computation should be abandoned.
pub fn advance_distributed<C: Communicator>(
    uk: &mut [f64],
    dx: f64,
    nx: usize,
    dt: f64,
    nt: usize,
    comm: &mut C,
) -> Result<()> {
    profiling::scope!("advance_distributed");
    let geometry = Geometry::new(dx, nx, dt, nt)?;
    geometry.check_buffer(uk)?;
    let neighbors = RingNeighbors::of_comm(comm)?;
    let rank = comm.rank();
    geometry.warn_if_unstable();
    tracing::debug!(
        rank,
        size = comm.size(),
        nx,
        nt,
        nu = geometry.nu(),
        "advancing distributed slice"
    );
    if geometry.nt() == 0 {
        return Ok(());
    }

    let nx = geometry.nx();
    let stencil = HeatStencil::from_geometry(&geometry);
    let mut buffers = BufferPair::try_from_slice(uk)?;
    let mut tracker = PhaseTracker::new(rank);
    for _ in 0..geometry.nt() {
        let edges = EdgeSample::of(buffers.current());
        tracker.enter(StepPhase::EdgesSampled);

        let left_request = comm.isend(edges.left, neighbors.left, GHOST_TAG)?;
        let right_request = comm.isend(edges.right, neighbors.right, GHOST_TAG)?;
        tracker.enter(StepPhase::SendsPosted);

        let (current, next) = buffers.split();
        {
            profiling::scope!("advance_distributed: interior");
            stencil.apply_interior(current, next);
        }
        tracker.enter(StepPhase::InteriorDone);

        let right_ghost = comm.recv(neighbors.right, GHOST_TAG)?;
        next[nx - 1] = stencil.apply(current[nx - 2], current[nx - 1], right_ghost);
        tracker.enter(StepPhase::RightEdgeClosed);

        let left_ghost = comm.recv(neighbors.left, GHOST_TAG)?;
        next[0] = stencil.apply(left_ghost, current[0], current[1]);
        tracker.enter(StepPhase::LeftEdgeClosed);

        buffers.rotate();
        tracker.enter(StepPhase::Rotated);

        comm.wait(left_request)?;
        comm.wait(right_request)?;
        tracker.enter(StepPhase::SendsDrained);
    }
    buffers.write_back(uk);
    Ok(())
}
