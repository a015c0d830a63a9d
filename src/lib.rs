//! tmuxstatus - A countdown timer in the tmux status line
//!
//! A controller invocation spawns a detached daemon that counts down in the
//! tmux `status-right` option; later invocations stop, pause or resume it
//! with signals, finding it through a pid marker file.

pub mod config;
pub mod control;
pub mod error;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use control::dispatch;
pub use error::{Error, Result};
pub use state::TimerState;
pub use tasks::Outcome;
