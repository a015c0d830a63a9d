//! Configuration and CLI argument handling

use std::{env, path::PathBuf, time::Duration};

use clap::{Parser, Subcommand};

/// Duration used when `start` is given no argument
pub const DEFAULT_DURATION: &str = "45m";

/// Marker record holding the daemon's pid
pub const PID_FILE: &str = "/tmp/tmuxstatus.pid";

/// Where the detached daemon's stdout/stderr end up
pub const LOG_FILE: &str = "/tmp/tmuxstatus.log";

/// Set by tmux inside every session
pub const SESSION_ENV: &str = "TMUX";

/// Internal re-entry flag set on the spawned daemon
pub const DAEMON_ENV: &str = "TMUXSTATUS_DAEMON";

/// Optional tracing filter override
pub const LOG_ENV: &str = "TMUXSTATUS_LOG";

/// tmux option the countdown is written to
pub const STATUS_OPTION: &str = "status-right";

/// Period of the daemon's status refresh
pub const TICK: Duration = Duration::from_secs(1);

/// How long the "passed" status stays up before cleanup
pub const FINISH_GRACE: Duration = Duration::from_secs(5);

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "tmuxstatus")]
#[command(about = "A countdown timer in the tmux status line")]
#[command(version)]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,
}

/// Controller operations
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a countdown in the background
    Start {
        /// Length of the countdown, e.g. 25m, 1h30m, 90s
        #[arg(default_value = DEFAULT_DURATION)]
        duration: String,
    },
    /// Stop the running countdown
    Stop,
    /// Freeze the running countdown
    Pause,
    /// Continue a paused countdown
    Resume,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// True when this process was spawned as the detached daemon
    pub fn is_daemon(&self) -> bool {
        env::var_os(DAEMON_ENV).is_some_and(|v| !v.is_empty())
    }

    /// Location of the marker record
    pub fn pid_file(&self) -> PathBuf {
        PathBuf::from(PID_FILE)
    }

    /// Filter directive for the tracing subscriber
    pub fn log_filter(&self) -> String {
        match env::var(LOG_ENV) {
            Ok(filter) if !filter.is_empty() => filter,
            _ if self.is_daemon() => "tmuxstatus=info".to_string(),
            _ => "tmuxstatus=warn".to_string(),
        }
    }
}

/// True when running inside a tmux session
pub fn in_tmux_session() -> bool {
    env::var_os(SESSION_ENV).is_some_and(|v| !v.is_empty())
}
