//! Controller operations: start, stop, pause and resume

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::{
    error::{Error, Result},
    services::ProcessControl,
    state::MarkerStore,
    utils::{parse_duration, Control},
};

/// Check that a new countdown of `duration` may start
pub fn validate_start<M: MarkerStore>(marker: &M, duration: &str) -> Result<Duration> {
    if marker.exists() {
        debug!("Marker record present, timer already running");
        return Err(Error::AlreadyRunning);
    }

    parse_duration(duration).map_err(|source| Error::InvalidDuration {
        input: duration.to_string(),
        source,
    })
}

/// Handle `start` - spawn a detached daemon and return its pid
pub fn start_handler<M, P>(marker: &M, processes: &P, duration: &str) -> Result<u32>
where
    M: MarkerStore,
    P: ProcessControl,
{
    validate_start(marker, duration)?;
    processes.spawn_daemon(duration).map_err(Error::Spawn)
}

/// Handle `stop` - ask the daemon to terminate and drop its marker record
pub fn stop_handler<M, P>(marker: &M, processes: &P) -> Result<()>
where
    M: MarkerStore,
    P: ProcessControl,
{
    let pid = running_pid(marker)?;

    if let Err(e) = processes.signal(pid, Control::Terminate) {
        warn!("Failed to signal timer process {}: {}", pid, e);
    }
    marker.remove();

    info!("Stop requested for {}", pid);
    Ok(())
}

/// Handle `pause` - freeze the running countdown
pub fn pause_handler<M, P>(marker: &M, processes: &P) -> Result<()>
where
    M: MarkerStore,
    P: ProcessControl,
{
    relay(marker, processes, Control::Pause)
}

/// Handle `resume` - continue a paused countdown
pub fn resume_handler<M, P>(marker: &M, processes: &P) -> Result<()>
where
    M: MarkerStore,
    P: ProcessControl,
{
    relay(marker, processes, Control::Resume)
}

fn relay<M, P>(marker: &M, processes: &P, control: Control) -> Result<()>
where
    M: MarkerStore,
    P: ProcessControl,
{
    let pid = running_pid(marker)?;
    processes
        .signal(pid, control)
        .map_err(|source| Error::Signal { pid, source })?;

    info!("{:?} requested for {}", control, pid);
    Ok(())
}

fn running_pid<M: MarkerStore>(marker: &M) -> Result<i32> {
    marker.read().ok_or_else(|| {
        debug!("No valid marker record, timer not running");
        Error::NotRunning
    })
}
