//! Test doubles for the daemon's external collaborators
//!
//! Only compiled in test builds. Each fake records what was asked of it so
//! tests can assert on the exact sequence of effects.

use std::{
    io,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Mutex,
    },
};

use crate::{
    services::{Bell, ProcessControl, StatusDisplay},
    utils::Control,
};

/// Status display that keeps every value pushed to it
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    history: Mutex<Vec<String>>,
    failing: AtomicBool,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent pushes fail (they are still recorded)
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn history(&self) -> Vec<String> {
        self.history.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.history.lock().unwrap().last().cloned()
    }
}

impl StatusDisplay for RecordingDisplay {
    async fn set_status(&self, value: &str) -> Result<(), String> {
        self.history.lock().unwrap().push(value.to_string());
        if self.failing.load(Ordering::SeqCst) {
            return Err("tmux unavailable".to_string());
        }
        Ok(())
    }
}

/// Bell that counts how often it rang
#[derive(Debug, Default)]
pub struct CountingBell {
    rings: AtomicUsize,
}

impl CountingBell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rings(&self) -> usize {
        self.rings.load(Ordering::SeqCst)
    }
}

impl Bell for CountingBell {
    async fn ring(&self) -> Result<(), String> {
        self.rings.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Process control that records spawns and signals instead of performing them
#[derive(Debug, Default)]
pub struct FakeProcesses {
    spawned: Mutex<Vec<String>>,
    signals: Mutex<Vec<(i32, Control)>>,
    signal_error: Mutex<Option<nix::Error>>,
}

impl FakeProcesses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every signal delivery fail with `error`
    pub fn failing_signals(error: nix::Error) -> Self {
        Self {
            signal_error: Mutex::new(Some(error)),
            ..Self::default()
        }
    }

    pub fn spawned(&self) -> Vec<String> {
        self.spawned.lock().unwrap().clone()
    }

    pub fn signals(&self) -> Vec<(i32, Control)> {
        self.signals.lock().unwrap().clone()
    }
}

impl ProcessControl for FakeProcesses {
    fn spawn_daemon(&self, duration: &str) -> io::Result<u32> {
        self.spawned.lock().unwrap().push(duration.to_string());
        Ok(4242)
    }

    fn signal(&self, pid: i32, control: Control) -> nix::Result<()> {
        self.signals.lock().unwrap().push((pid, control));
        match *self.signal_error.lock().unwrap() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
