//! Daemon entry: preconditions, marker record, signal wiring

use std::{io, time::Duration};

use chrono::Local;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::{
    config::{in_tmux_session, Config, STATUS_OPTION},
    error::{Error, Result},
    services::{check_tmux_available, Bell, StatusDisplay, TerminalBell, TmuxStatus},
    state::{MarkerStore, PidFile},
    utils::{listen_for_control, Control},
};

use super::countdown::{countdown_task, DaemonContext, Outcome};

/// Become the countdown daemon for `duration`.
///
/// Exits early without touching the marker record or the status line when not
/// inside tmux.
pub async fn run_daemon(config: &Config, duration: Duration) -> Result<Outcome> {
    if !in_tmux_session() {
        return Err(Error::NoSession);
    }
    check_tmux_available().await.map_err(Error::TmuxUnavailable)?;

    let ctx = DaemonContext::new(
        TmuxStatus::new(STATUS_OPTION),
        TerminalBell,
        PidFile::new(config.pid_file()),
    );

    serve(&ctx, std::process::id(), duration, listen_for_control).await
}

/// Record `pid` in the marker, then run the countdown fed by `listen`.
pub async fn serve<D, B, M, L>(
    ctx: &DaemonContext<D, B, M>,
    pid: u32,
    duration: Duration,
    listen: L,
) -> Result<Outcome>
where
    D: StatusDisplay,
    B: Bell,
    M: MarkerStore,
    L: FnOnce() -> io::Result<mpsc::Receiver<Control>>,
{
    let pid = i32::try_from(pid).map_err(|_| {
        Error::Marker(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("pid {pid} out of range"),
        ))
    })?;

    ctx.marker.write(pid).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            Error::AlreadyRunning
        } else {
            error!("Failed to write PID file: {}", e);
            Error::Marker(e)
        }
    })?;

    let events = match listen() {
        Ok(events) => events,
        Err(e) => {
            ctx.cleanup().await;
            return Err(Error::SignalSetup(e));
        }
    };

    let ends_at = chrono::Duration::from_std(duration)
        .ok()
        .and_then(|d| Local::now().checked_add_signed(d));
    match ends_at {
        Some(at) => info!(
            "tmuxstatus daemon {} running until {}",
            pid,
            at.format("%H:%M:%S")
        ),
        None => info!("tmuxstatus daemon {} running for {:?}", pid, duration),
    }

    let outcome = countdown_task(ctx, duration, events).await;
    info!("tmuxstatus daemon exiting: {:?}", outcome);
    Ok(outcome)
}
