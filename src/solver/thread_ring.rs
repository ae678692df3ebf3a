use crate::comm::*;
use crate::decomposition::*;
use crate::domain::*;
use crate::error::*;
use crate::solver::advance_distributed;
use std::sync::Mutex;

/// Advance the global grid `u` with `ranks` ranks of the distributed
/// kernel, each on its own thread of a dedicated pool, connected by a
/// `ChannelComm` ring.
///
/// `u.len()` must split evenly into slices of at least 2 points.
/// If any rank fails the first error in rank order is returned and `u` is
/// left as it was.
pub fn advance_on_thread_ring(
    u: &mut [f64],
    dx: f64,
    dt: f64,
    nt: usize,
    ranks: usize,
) -> Result<()> {
    profiling::scope!("advance_on_thread_ring");
    let decomposition = RingDecomposition::new(u.len(), ranks)?;
    let nx = decomposition.nx();
    Geometry::new(dx, nx, dt, nt)?;

    // Each pool thread takes the work for its own index exactly once.
    let work: Vec<Mutex<Option<(ChannelComm, Vec<f64>)>>> = channel_ring(ranks)
        .into_iter()
        .zip(decomposition.scatter(u)?)
        .map(|w| Mutex::new(Some(w)))
        .collect();

    // Every rank blocks on its neighbors, so all of them must run at once.
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(ranks)
        .thread_name(|i| format!("heat_rank_{i}"))
        .build()?;

    let results: Vec<Result<Vec<f64>>> = pool.broadcast(|ctx| {
        let rank = ctx.index();
        let taken = work[rank].lock().ok().and_then(|mut w| w.take());
        let Some((mut comm, mut uk)) = taken else {
            return Err(HeatError::transport(rank, "rank has no work"));
        };
        let result = advance_distributed(&mut uk, dx, nx, dt, nt, &mut comm);
        // Disconnect right away so neighbors of a failed rank stop waiting.
        drop(comm);
        match result {
            Ok(()) => Ok(uk),
            Err(e) => {
                tracing::error!(rank, error = %e, "rank failed");
                Err(e)
            }
        }
    });

    let slices = results.into_iter().collect::<Result<Vec<_>>>()?;
    decomposition.gather(&slices, u)
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::solver::advance_serial;

    #[test]
    fn matches_serial() {
        let initial: Vec<f64> = (0..12).map(|i| ((i * 7) % 5) as f64).collect();
        let mut serial = initial.clone();
        advance_serial(&mut serial, 1.0, 12, 0.3, 9).unwrap();

        for ranks in [1, 2, 3, 6] {
            let mut u = initial.clone();
            advance_on_thread_ring(&mut u, 1.0, 0.3, 9, ranks).unwrap();
            assert_eq!(u, serial, "ranks = {ranks}");
        }
    }

    #[test]
    fn bad_split_leaves_buffer() {
        let mut u = vec![1.0; 10];
        assert!(advance_on_thread_ring(&mut u, 1.0, 0.25, 3, 4).is_err());
        assert!(advance_on_thread_ring(&mut u, 1.0, -0.25, 3, 5).is_err());
        assert_eq!(u, vec![1.0; 10]);
    }
}
