#![allow(clippy::module_inception)]
mod stencil;

pub use stencil::*;
