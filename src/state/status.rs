//! Status line text pushed to tmux

use std::{fmt, time::Duration};

/// Prefix shown in front of every countdown status
pub const STATUS_PREFIX: &str = "🍅";

/// What the status line should currently show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running { remaining: Duration },
    Paused { remaining: Duration },
    Finished { elapsed: Duration },
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running { remaining } => write!(f, "{STATUS_PREFIX} {}", Clock(*remaining)),
            Self::Paused { remaining } => {
                write!(f, "{STATUS_PREFIX} PAUSED {}", Clock(*remaining))
            }
            Self::Finished { elapsed } => {
                write!(f, "{STATUS_PREFIX} {} passed", Clock(*elapsed))
            }
        }
    }
}

/// `MM:SS` with total minutes, sub-second part dropped
struct Clock(Duration);

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0.as_secs();
        write!(f, "{:02}:{:02}", secs / 60, secs % 60)
    }
}
