//! Point to point messaging used for ghost cell exchange.
//!
//! Kernels only depend on the `Communicator` capability.
//! `ChannelComm` provides an in-process ring where every rank is a thread,
//! other transports implement the same four operations.

mod channel;

pub use channel::*;

use crate::error::*;

/// Message tag, matched together with the peer rank.
pub type Tag = i32;

/// The one tag all ghost messages carry.
pub const GHOST_TAG: Tag = 0;

/// A messaging context over a fixed set of ranks.
pub trait Communicator {
    /// Completion handle for a posted send.
    type Request;

    fn rank(&self) -> usize;

    fn size(&self) -> usize;

    /// Post a send of one value and return without waiting for delivery.
    /// The value is owned by the transport until the request completes.
    fn isend(&mut self, value: f64, dest: usize, tag: Tag) -> Result<Self::Request>;

    /// Block until one value with `tag` arrives from `source`.
    fn recv(&mut self, source: usize, tag: Tag) -> Result<f64>;

    /// Block until a posted send has completed.
    fn wait(&mut self, request: Self::Request) -> Result<()>;
}

/// Left and right neighbors of a rank on a periodic ring.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RingNeighbors {
    pub left: usize,
    pub right: usize,
}

impl RingNeighbors {
    pub fn of(rank: usize, size: usize) -> Result<Self> {
        if size == 0 || rank >= size {
            return Err(HeatError::transport(
                rank,
                format!("rank {rank} is not part of a ring of {size}"),
            ));
        }
        Ok(RingNeighbors {
            left: (rank + size - 1) % size,
            right: (rank + 1) % size,
        })
    }

    pub fn of_comm<C: Communicator>(comm: &C) -> Result<Self> {
        RingNeighbors::of(comm.rank(), comm.size())
    }
}
