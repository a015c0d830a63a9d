//! External collaborators module
//!
//! This module wraps everything outside the process: the tmux status line,
//! the terminal bell, and OS processes and signals.

pub mod bell;
pub mod process;
pub mod tmux;

// Re-export main functions
pub use bell::*;
pub use process::*;
pub use tmux::*;
