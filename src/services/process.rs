//! Spawning the detached daemon and signalling it

use std::{
    env,
    fs::OpenOptions,
    io,
    os::unix::process::CommandExt,
    process::{Command, Stdio},
};

use nix::{sys::signal::kill, unistd::Pid};
use tracing::{debug, info};

use crate::{
    config::{DAEMON_ENV, LOG_FILE},
    utils::Control,
};

/// Process-level operations the controller performs
pub trait ProcessControl {
    /// Run a countdown of `duration` in a detached background daemon and
    /// return its pid without waiting for it
    fn spawn_daemon(&self, duration: &str) -> io::Result<u32>;

    /// Deliver `control` to the process `pid`
    fn signal(&self, pid: i32, control: Control) -> nix::Result<()>;
}

/// Real processes and signals on this host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcesses;

impl ProcessControl for SystemProcesses {
    fn spawn_daemon(&self, duration: &str) -> io::Result<u32> {
        let exe = env::current_exe()?;
        let (stdout, stderr) = daemon_log()?;

        let mut cmd = Command::new(exe);
        cmd.args(["start", duration])
            .env(DAEMON_ENV, "1")
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(stderr);

        // SAFETY: setsid is async-signal-safe and runs in the child before exec.
        unsafe {
            cmd.pre_exec(|| {
                nix::unistd::setsid().map_err(io::Error::from)?;
                Ok(())
            });
        }

        let child = cmd.spawn()?;
        info!("Started tmuxstatus daemon (PID {})", child.id());
        Ok(child.id())
    }

    fn signal(&self, pid: i32, control: Control) -> nix::Result<()> {
        debug!("Sending {:?} to {}", control.signal(), pid);
        kill(Pid::from_raw(pid), control.signal())
    }
}

/// stdout/stderr for the daemon: the log file, or /dev/null if it can't be opened
fn daemon_log() -> io::Result<(Stdio, Stdio)> {
    match OpenOptions::new().create(true).append(true).open(LOG_FILE) {
        Ok(file) => {
            let stderr = file.try_clone()?;
            Ok((Stdio::from(file), Stdio::from(stderr)))
        }
        Err(e) => {
            debug!("Cannot open {}: {}, discarding daemon output", LOG_FILE, e);
            Ok((Stdio::null(), Stdio::null()))
        }
    }
}
