//! Marker record: the single persisted pid identifying the live daemon

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::PathBuf,
    sync::Mutex,
};

use tracing::{debug, warn};

/// Single-writer register naming the one live daemon.
///
/// Presence of a record means "a timer is running"; its value is the pid
/// controllers deliver signals to.
pub trait MarkerStore {
    /// Whether a record is present, valid or not
    fn exists(&self) -> bool;

    /// The recorded pid, or `None` when absent or unparseable
    fn read(&self) -> Option<i32>;

    /// Record `pid`. Fails with [`io::ErrorKind::AlreadyExists`] if a record
    /// is already present.
    fn write(&self, pid: i32) -> io::Result<()>;

    /// Drop the record. Absence is not an error.
    fn remove(&self);
}

/// Marker record kept in a file as the decimal pid
#[derive(Debug, Clone)]
pub struct PidFile {
    path: PathBuf,
}

impl PidFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MarkerStore for PidFile {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read(&self) -> Option<i32> {
        let contents = fs::read_to_string(&self.path).ok()?;
        parse_pid(&contents)
    }

    fn write(&self, pid: i32) -> io::Result<()> {
        // create_new fails if another daemon already holds the marker
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)?;
        write!(file, "{pid}")?;
        debug!("Wrote pid {} to {}", pid, self.path.display());
        Ok(())
    }

    fn remove(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!("Removed {}", self.path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove {}: {}", self.path.display(), e),
        }
    }
}

/// In-process marker register
#[derive(Debug, Default)]
pub struct MemoryMarker {
    record: Mutex<Option<String>>,
}

impl MemoryMarker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register pre-filled with raw contents, as if another process wrote it
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            record: Mutex::new(Some(contents.into())),
        }
    }

    fn record(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.record.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl MarkerStore for MemoryMarker {
    fn exists(&self) -> bool {
        self.record().is_some()
    }

    fn read(&self) -> Option<i32> {
        self.record().as_deref().and_then(parse_pid)
    }

    fn write(&self, pid: i32) -> io::Result<()> {
        let mut record = self.record();
        if record.is_some() {
            return Err(io::Error::from(io::ErrorKind::AlreadyExists));
        }
        *record = Some(pid.to_string());
        Ok(())
    }

    fn remove(&self) {
        self.record().take();
    }
}

fn parse_pid(contents: &str) -> Option<i32> {
    contents.trim().parse().ok().filter(|pid| *pid > 0)
}
