//! Uniform decomposition of a periodic global grid over a ring of ranks.
//!
//! Rank `r` owns the contiguous slice `[r * nx, (r + 1) * nx - 1]`.
//! Slices are disjoint and their union in rank order is the global grid.

use crate::error::*;
use crate::util::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RingDecomposition {
    global: Interval,
    ranks: usize,
    nx: usize,
}

impl RingDecomposition {
    /// Split `global_size` points over `ranks` ranks.
    /// Every rank must receive the same number of points, at least 2.
    pub fn new(global_size: usize, ranks: usize) -> Result<Self> {
        if ranks == 0 {
            return Err(HeatError::invalid_geometry("need at least one rank"));
        }
        if global_size % ranks != 0 {
            return Err(HeatError::invalid_geometry(format!(
                "{global_size} points do not split evenly over {ranks} ranks"
            )));
        }
        let nx = global_size / ranks;
        if nx < 2 {
            return Err(HeatError::invalid_geometry(format!(
                "each rank needs at least 2 points, got {nx}"
            )));
        }
        Ok(RingDecomposition {
            global: Interval::from_len(0, global_size),
            ranks,
            nx,
        })
    }

    pub fn global(&self) -> &Interval {
        &self.global
    }

    pub fn ranks(&self) -> usize {
        self.ranks
    }

    /// Points owned per rank.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Global indices owned by `rank`.
    pub fn slice_for(&self, rank: usize) -> Interval {
        debug_assert!(rank < self.ranks);
        Interval::from_len(rank * self.nx, self.nx)
    }

    /// Copy each rank's slice of `global` into its own buffer.
    pub fn scatter(&self, global: &[f64]) -> Result<Vec<Vec<f64>>> {
        self.check_global(global)?;
        Ok((0..self.ranks)
            .map(|rank| global[self.slice_for(rank).range()].to_vec())
            .collect())
    }

    /// Concatenate per rank slices back into `global`.
    pub fn gather(&self, slices: &[Vec<f64>], global: &mut [f64]) -> Result<()> {
        self.check_global(global)?;
        if slices.len() != self.ranks {
            return Err(HeatError::invalid_geometry(format!(
                "expected {} slices, got {}",
                self.ranks,
                slices.len()
            )));
        }
        for (rank, slice) in slices.iter().enumerate() {
            if slice.len() != self.nx {
                return Err(HeatError::invalid_geometry(format!(
                    "rank {rank} returned {} values, expected {}",
                    slice.len(),
                    self.nx
                )));
            }
        }
        for (rank, slice) in slices.iter().enumerate() {
            global[self.slice_for(rank).range()].copy_from_slice(slice);
        }
        Ok(())
    }

    fn check_global(&self, global: &[f64]) -> Result<()> {
        if global.len() != self.global.buffer_size() {
            return Err(HeatError::invalid_geometry(format!(
                "global buffer holds {} values, decomposition covers {}",
                global.len(),
                self.global
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn slices_cover_grid() {
        let d = RingDecomposition::new(16, 4).unwrap();
        assert_eq!(d.nx(), 4);
        let mut owned = vec![0usize; 16];
        for rank in 0..d.ranks() {
            let s = d.slice_for(rank);
            assert_eq!(s.buffer_size(), 4);
            for c in s.range() {
                owned[c] += 1;
            }
        }
        assert!(owned.iter().all(|&n| n == 1));
        assert_eq!(d.slice_for(3), Interval::new(12, 15));
    }

    #[test]
    fn rejects_uneven() {
        assert!(RingDecomposition::new(10, 4).is_err());
        assert!(RingDecomposition::new(4, 4).is_err());
        assert!(RingDecomposition::new(4, 0).is_err());
        assert!(RingDecomposition::new(4, 2).is_ok());
    }

    #[test]
    fn scatter_gather() {
        let d = RingDecomposition::new(6, 3).unwrap();
        let global: Vec<f64> = (0..6).map(|i| i as f64).collect();
        let slices = d.scatter(&global).unwrap();
        assert_eq!(slices, vec![vec![0.0, 1.0], vec![2.0, 3.0], vec![4.0, 5.0]]);

        let mut back = vec![0.0; 6];
        d.gather(&slices, &mut back).unwrap();
        assert_eq!(back, global);

        assert!(d.scatter(&global[0..5]).is_err());
        assert!(d.gather(&slices[0..2], &mut back).is_err());

        let short = vec![vec![9.0, 9.0], vec![9.0], vec![9.0, 9.0]];
        assert!(d.gather(&short, &mut back).is_err());
        assert_eq!(back, global);
    }
}
