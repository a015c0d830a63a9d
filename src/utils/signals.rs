//! Signals as the control channel between controller invocations and the daemon

use std::io;

use futures::stream::StreamExt;
use nix::sys::signal::Signal;
use signal_hook::consts::{SIGINT, SIGTERM, SIGUSR1, SIGUSR2};
use signal_hook_tokio::Signals;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// A request delivered to the daemon from outside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Terminate,
    Pause,
    Resume,
}

impl Control {
    /// Signal a controller sends for this request
    pub fn signal(self) -> Signal {
        match self {
            Self::Terminate => Signal::SIGTERM,
            Self::Pause => Signal::SIGUSR1,
            Self::Resume => Signal::SIGUSR2,
        }
    }

    /// Map a received raw signal number back to a request
    pub fn from_raw(signal: i32) -> Option<Self> {
        match signal {
            SIGINT | SIGTERM => Some(Self::Terminate),
            SIGUSR1 => Some(Self::Pause),
            SIGUSR2 => Some(Self::Resume),
            _ => None,
        }
    }
}

/// Install handlers for the four control signals and forward them into a channel
pub fn listen_for_control() -> io::Result<mpsc::Receiver<Control>> {
    let signals = Signals::new([SIGINT, SIGTERM, SIGUSR1, SIGUSR2])?;
    let (tx, rx) = mpsc::channel(8);

    tokio::spawn(forward_signals(signals, tx));

    Ok(rx)
}

async fn forward_signals(mut signals: Signals, tx: mpsc::Sender<Control>) {
    while let Some(signal) = signals.next().await {
        info!("Received signal: {}", signal);
        let Some(control) = Control::from_raw(signal) else {
            continue;
        };
        if tx.send(control).await.is_err() {
            debug!("Control channel closed, signal listener exiting");
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_map_to_distinct_signals() {
        assert_eq!(Control::Terminate.signal(), Signal::SIGTERM);
        assert_eq!(Control::Pause.signal(), Signal::SIGUSR1);
        assert_eq!(Control::Resume.signal(), Signal::SIGUSR2);
    }

    #[test]
    fn both_termination_signals_terminate() {
        assert_eq!(Control::from_raw(SIGTERM), Some(Control::Terminate));
        assert_eq!(Control::from_raw(SIGINT), Some(Control::Terminate));
    }

    #[test]
    fn sent_signal_maps_back_to_the_same_request() {
        for control in [Control::Terminate, Control::Pause, Control::Resume] {
            assert_eq!(Control::from_raw(control.signal() as i32), Some(control));
        }
    }

    #[test]
    fn unrelated_signals_are_ignored() {
        assert_eq!(Control::from_raw(signal_hook::consts::SIGHUP), None);
    }
}
