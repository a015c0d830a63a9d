//! Error types for controller and daemon operations

use std::io;

use crate::utils::duration::DurationError;

/// Everything a controller invocation or daemon startup can fail with
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid duration {input:?}: {source}")]
    InvalidDuration {
        input: String,
        #[source]
        source: DurationError,
    },

    #[error("a timer is already running")]
    AlreadyRunning,

    #[error("no timer is running")]
    NotRunning,

    #[error("not inside a tmux session")]
    NoSession,

    #[error("{0}")]
    TmuxUnavailable(String),

    #[error("failed to write marker record: {0}")]
    Marker(#[source] io::Error),

    #[error("failed to start timer in background: {0}")]
    Spawn(#[source] io::Error),

    #[error("failed to signal process {pid}: {source}")]
    Signal {
        pid: i32,
        #[source]
        source: nix::Error,
    },

    #[error("failed to install signal handlers: {0}")]
    SignalSetup(#[source] io::Error),
}

impl Error {
    /// Failures that are part of normal use and only exit nonzero
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::AlreadyRunning | Self::NotRunning | Self::NoSession)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
