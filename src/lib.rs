//! One dimensional heat equation on a periodic grid, advanced with
//! explicit Forward Euler steps.
//!
//! `solver::advance_serial` steps a whole grid, `solver::advance_distributed`
//! steps one rank's slice and exchanges ghost values with its two ring
//! neighbors through a `comm::Communicator`.

pub mod comm;
pub mod csv;
pub mod decomposition;
pub mod domain;
pub mod driver;
pub mod error;
pub mod initial_conditions;
pub mod par_slice;
pub mod solver;
pub mod stencil;
pub mod util;

pub use error::{HeatError, Result};
