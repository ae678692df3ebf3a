//! Error types for the heat kernels and their collaborators.

use std::collections::TryReserveError;
use thiserror::Error;

/// Result type for heat_ring operations.
pub type Result<T> = std::result::Result<T, HeatError>;

/// Errors surfaced by the kernels, the messaging layer, and the driver.
#[derive(Error, Debug)]
pub enum HeatError {
    /// Grid geometry rejected at entry, nothing was modified.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Scratch storage could not be obtained, nothing was modified.
    #[error("Failed to allocate {len} scratch values")]
    AllocationFailure {
        len: usize,
        #[source]
        source: TryReserveError,
    },

    /// A send, receive, or wait failed. The caller's slice must be
    /// considered invalid.
    #[error("Transport failure with rank {peer}: {reason}")]
    TransportFailure { peer: usize, reason: String },

    /// Serial and distributed runs of the same field disagreed.
    #[error("Serial and distributed results differ, max abs diff {max_abs_diff}")]
    KernelMismatch { max_abs_diff: f64 },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The thread pool hosting an in-process ring could not be built.
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl HeatError {
    /// Create an invalid geometry error.
    pub fn invalid_geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry(msg.into())
    }

    /// Create a transport error for the given peer rank.
    pub fn transport(peer: usize, reason: impl Into<String>) -> Self {
        Self::TransportFailure {
            peer,
            reason: reason.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::TransportFailure { .. })
    }
}
