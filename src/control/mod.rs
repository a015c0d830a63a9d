//! Controller module
//!
//! Routes a parsed subcommand either to one of the controller operations or,
//! for the spawned child, into daemon mode.

pub mod handlers;

use tracing::debug;

use crate::{
    config::{Command, Config},
    error::Result,
    services::SystemProcesses,
    state::PidFile,
    tasks::run_daemon,
};
use handlers::*;

/// Run the operation selected on the command line
pub async fn dispatch(config: &Config) -> Result<()> {
    let marker = PidFile::new(config.pid_file());
    let processes = SystemProcesses;

    match &config.command {
        Command::Start { duration } if config.is_daemon() => {
            let duration = validate_start(&marker, duration)?;
            let outcome = run_daemon(config, duration).await?;
            debug!("Daemon done: {:?}", outcome);
        }
        Command::Start { duration } => {
            start_handler(&marker, &processes, duration)?;
        }
        Command::Stop => stop_handler(&marker, &processes)?,
        Command::Pause => pause_handler(&marker, &processes)?,
        Command::Resume => resume_handler(&marker, &processes)?,
    }

    Ok(())
}
