//! State management module
//!
//! The countdown state machine, the status text it produces, and the marker
//! record that makes the daemon discoverable.

pub mod marker;
pub mod status;
pub mod timer_state;

// Re-export main types
pub use marker::{MarkerStore, MemoryMarker, PidFile};
pub use status::Status;
pub use timer_state::{Phase, TimerState};
