//! Utility functions module
//!
//! Duration parsing and the signal-based control channel.

pub mod duration;
pub mod signals;

// Re-export main functions
pub use duration::parse_duration;
pub use signals::{listen_for_control, Control};
