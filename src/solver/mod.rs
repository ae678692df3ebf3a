mod distributed;
mod serial;
mod step_phase;
mod thread_ring;

pub use distributed::*;
pub use serial::*;
pub use step_phase::StepPhase;
pub use thread_ring::*;
