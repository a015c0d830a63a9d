//! tmuxstatus - A countdown timer in the tmux status line
//!
//! This is the main entry point for both controller invocations and the
//! detached daemon.

use std::io::IsTerminal;

use tracing::{debug, warn};

use tmuxstatus::{config::Config, dispatch};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    debug!("Command: {:?}, daemon mode: {}", config.command, config.is_daemon());

    if let Err(e) = dispatch(&config).await {
        if e.is_silent() {
            debug!("{}", e);
        } else {
            warn!("{}", e);
        }
        std::process::exit(1);
    }

    Ok(())
}
