//! Countdown event loop run by the daemon

use std::time::Duration;

use tokio::{
    sync::mpsc,
    time::{interval_at, sleep, Instant, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::{
    config::{FINISH_GRACE, TICK},
    services::{Bell, StatusDisplay},
    state::{MarkerStore, Status, TimerState},
    utils::Control,
};

/// Everything the event loop handles, serialized one at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Tick,
    Pause,
    Resume,
    Terminate,
}

impl From<Control> for Event {
    fn from(control: Control) -> Self {
        match control {
            Control::Terminate => Self::Terminate,
            Control::Pause => Self::Pause,
            Control::Resume => Self::Resume,
        }
    }
}

/// How the daemon's countdown ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Ran down to zero
    Finished,
    /// Stopped by a termination request
    Terminated,
}

/// The daemon's collaborators and timing
#[derive(Debug)]
pub struct DaemonContext<D, B, M> {
    pub display: D,
    pub bell: B,
    pub marker: M,
    pub tick: Duration,
    pub grace: Duration,
}

impl<D, B, M> DaemonContext<D, B, M>
where
    D: StatusDisplay,
    B: Bell,
    M: MarkerStore,
{
    pub fn new(display: D, bell: B, marker: M) -> Self {
        Self {
            display,
            bell,
            marker,
            tick: TICK,
            grace: FINISH_GRACE,
        }
    }

    /// Push a status, logging failures; the next tick will try again
    async fn show(&self, status: &str) {
        if let Err(e) = self.display.set_status(status).await {
            warn!("Error updating tmux status: {}", e);
        }
    }

    /// Clear the status line and drop the marker record
    pub async fn cleanup(&self) {
        self.show("").await;
        self.marker.remove();
        debug!("Cleanup complete");
    }
}

/// Run a countdown of `duration` until it finishes or a termination request
/// arrives on `events`.
///
/// Ticks keep firing while paused so the frozen status is re-asserted if
/// something else overwrites it.
pub async fn countdown_task<D, B, M>(
    ctx: &DaemonContext<D, B, M>,
    duration: Duration,
    mut events: mpsc::Receiver<Control>,
) -> Outcome
where
    D: StatusDisplay,
    B: Bell,
    M: MarkerStore,
{
    let start = Instant::now();
    let mut timer = TimerState::start(start, duration);

    let mut interval = interval_at(start + ctx.tick, ctx.tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut events_open = true;

    info!("Countdown started for {:?}", duration);

    loop {
        let event = tokio::select! {
            _ = interval.tick() => Event::Tick,
            control = events.recv(), if events_open => match control {
                Some(control) => Event::from(control),
                None => {
                    debug!("Control channel closed, continuing without it");
                    events_open = false;
                    continue;
                }
            },
        };

        let now = Instant::now();
        match event {
            Event::Tick => match timer.tick(now) {
                Status::Finished { elapsed } => {
                    info!("Countdown finished after {:?}", elapsed);
                    ctx.show(&Status::Finished { elapsed }.to_string()).await;

                    if let Err(e) = ctx.bell.ring().await {
                        warn!("Failed to ring bell: {}", e);
                    }

                    // Termination requests during the grace period wait in the channel
                    sleep(ctx.grace).await;
                    ctx.cleanup().await;
                    return Outcome::Finished;
                }
                status => ctx.show(&status.to_string()).await,
            },
            Event::Pause => match timer.pause(now) {
                Some(status) => {
                    info!("Countdown paused with {:?} left", timer.remaining(now));
                    ctx.show(&status.to_string()).await;
                }
                None => debug!("Pause ignored, countdown is not running"),
            },
            Event::Resume => {
                if timer.resume(now) {
                    info!("Countdown resumed with {:?} left", timer.remaining(now));
                } else {
                    debug!("Resume ignored, countdown is not paused");
                }
            }
            Event::Terminate => {
                info!("Termination requested");
                ctx.cleanup().await;
                return Outcome::Terminated;
            }
        }
    }
}
