//! tmux status line access via the `tmux` command

use std::future::Future;

use tokio::process::Command;
use tracing::{debug, info};

/// Somewhere the countdown status can be shown
pub trait StatusDisplay {
    /// Replace the shown status; an empty value clears it
    fn set_status(&self, value: &str) -> impl Future<Output = Result<(), String>> + Send;
}

/// Writes the status into a global tmux option such as `status-right`
#[derive(Debug, Clone)]
pub struct TmuxStatus {
    option: String,
}

impl TmuxStatus {
    pub fn new(option: impl Into<String>) -> Self {
        Self {
            option: option.into(),
        }
    }
}

impl StatusDisplay for TmuxStatus {
    async fn set_status(&self, value: &str) -> Result<(), String> {
        debug!("Setting tmux {} to {:?}", self.option, value);
        run_tmux(&["set-option", "-g", &self.option, value]).await?;
        Ok(())
    }
}

/// Tty device of the tmux client attached to the current session
pub async fn client_tty() -> Result<String, String> {
    let tty = run_tmux(&["display-message", "-p", "#{client_tty}"]).await?;
    let tty = tty.trim();
    if tty.is_empty() {
        return Err("no tmux client attached".to_string());
    }
    Ok(tty.to_string())
}

/// Check if tmux is available on the system
pub async fn check_tmux_available() -> Result<(), String> {
    Command::new("tmux")
        .arg("-V")
        .output()
        .await
        .map_err(|_| "tmux is not available. tmuxstatus requires tmux.".to_string())?;

    info!("tmux is available");
    Ok(())
}

async fn run_tmux(args: &[&str]) -> Result<String, String> {
    let output = Command::new("tmux")
        .args(args)
        .output()
        .await
        .map_err(|e| format!("Failed to execute tmux {}: {}", args[0], e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("tmux {} failed: {}", args[0], stderr.trim()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
