//! Daemon tasks module
//!
//! The daemon's entry point and the countdown event loop it runs.

pub mod countdown;
pub mod daemon;

// Re-export main functions
pub use countdown::{countdown_task, DaemonContext, Event, Outcome};
pub use daemon::run_daemon;
