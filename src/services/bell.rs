//! Terminal bell when a countdown finishes

use std::{fs::OpenOptions, future::Future, io::Write};

use tracing::debug;

use super::tmux::client_tty;

/// Something that can get the user's attention
pub trait Bell {
    fn ring(&self) -> impl Future<Output = Result<(), String>> + Send;
}

/// Writes BEL to the controlling terminal, or to the attached tmux client's
/// tty when running detached without one
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl Bell for TerminalBell {
    async fn ring(&self) -> Result<(), String> {
        if write_bell("/dev/tty").is_ok() {
            return Ok(());
        }

        let tty = client_tty().await?;
        debug!("No controlling terminal, ringing {}", tty);
        write_bell(&tty).map_err(|e| format!("Failed to write bell to {}: {}", tty, e))
    }
}

fn write_bell(path: &str) -> std::io::Result<()> {
    let mut tty = OpenOptions::new().write(true).open(path)?;
    tty.write_all(b"\x07")
}
