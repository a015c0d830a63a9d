//! Countdown state owned by the daemon's event loop

use std::time::Duration;

use tokio::time::Instant;

use super::Status;

/// Where the countdown is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// Frozen with the time that was left when pausing
    Paused { remaining: Duration },
    Finished,
}

/// Countdown state for a single timer run
#[derive(Debug, Clone)]
pub struct TimerState {
    start_time: Instant,
    end_time: Instant,
    phase: Phase,
}

impl TimerState {
    /// Start a countdown of `duration` at `now`
    pub fn start(now: Instant, duration: Duration) -> Self {
        Self {
            start_time: now,
            end_time: now + duration,
            phase: Phase::Running,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn end_time(&self) -> Instant {
        self.end_time
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.phase, Phase::Paused { .. })
    }

    /// Time left at `now`; frozen while paused
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.phase {
            Phase::Running => self.end_time.saturating_duration_since(now),
            Phase::Paused { remaining } => remaining,
            Phase::Finished => Duration::ZERO,
        }
    }

    /// Freeze the countdown.
    ///
    /// Returns the paused status to show right away, or `None` when the timer
    /// was not running.
    pub fn pause(&mut self, now: Instant) -> Option<Status> {
        if self.phase != Phase::Running {
            return None;
        }
        let remaining = self.end_time.saturating_duration_since(now);
        self.phase = Phase::Paused { remaining };
        Some(Status::Paused { remaining })
    }

    /// Continue a paused countdown. Returns false when it was not paused.
    pub fn resume(&mut self, now: Instant) -> bool {
        let Phase::Paused { remaining } = self.phase else {
            return false;
        };
        self.end_time = now + remaining;
        self.phase = Phase::Running;
        true
    }

    /// Re-evaluate on a tick and return what the status line should show.
    ///
    /// Reaching the end time moves the countdown to [`Phase::Finished`] and
    /// reports the time elapsed since the original start.
    pub fn tick(&mut self, now: Instant) -> Status {
        match self.phase {
            Phase::Paused { remaining } => Status::Paused { remaining },
            Phase::Running if now < self.end_time => Status::Running {
                remaining: self.end_time - now,
            },
            Phase::Running | Phase::Finished => {
                self.phase = Phase::Finished;
                Status::Finished {
                    elapsed: now.saturating_duration_since(self.start_time),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn counts_down_while_running() {
        let t0 = Instant::now();
        let mut timer = TimerState::start(t0, secs(600));

        assert_eq!(
            timer.tick(t0 + secs(1)),
            Status::Running {
                remaining: secs(599)
            }
        );
        assert_eq!(
            timer.tick(t0 + Duration::from_millis(2_500)),
            Status::Running {
                remaining: Duration::from_millis(597_500)
            }
        );
        assert_eq!(timer.phase(), Phase::Running);
    }

    #[test]
    fn remaining_never_increases_until_finished() {
        let t0 = Instant::now();
        let mut timer = TimerState::start(t0, secs(5));
        let mut last = secs(5);

        for n in 1..5 {
            match timer.tick(t0 + secs(n)) {
                Status::Running { remaining } => {
                    assert!(remaining <= last);
                    last = remaining;
                }
                other => panic!("unexpected status {other:?}"),
            }
        }

        assert_eq!(
            timer.tick(t0 + secs(5)),
            Status::Finished { elapsed: secs(5) }
        );
        assert_eq!(timer.phase(), Phase::Finished);
        assert!(matches!(
            timer.tick(t0 + secs(6)),
            Status::Finished { .. }
        ));
    }

    #[test]
    fn pause_freezes_remaining() {
        let t0 = Instant::now();
        let mut timer = TimerState::start(t0, secs(600));

        let status = timer.pause(t0 + secs(2));
        assert_eq!(
            status,
            Some(Status::Paused {
                remaining: secs(598)
            })
        );
        assert!(timer.is_paused());
        assert_eq!(
            timer.tick(t0 + secs(6)),
            Status::Paused {
                remaining: secs(598)
            }
        );
        assert_eq!(timer.remaining(t0 + secs(60)), secs(598));
    }

    #[test]
    fn second_pause_is_a_no_op() {
        let t0 = Instant::now();
        let mut timer = TimerState::start(t0, secs(600));

        timer.pause(t0 + secs(2));
        assert_eq!(timer.pause(t0 + secs(4)), None);
        assert_eq!(timer.remaining(t0 + secs(4)), secs(598));
    }

    #[test]
    fn resume_while_running_is_a_no_op() {
        let t0 = Instant::now();
        let mut timer = TimerState::start(t0, secs(600));

        assert!(!timer.resume(t0 + secs(3)));
        assert_eq!(timer.end_time(), t0 + secs(600));
    }

    #[test]
    fn paused_time_does_not_count_down() {
        let t0 = Instant::now();
        let mut timer = TimerState::start(t0, secs(600));

        timer.pause(t0 + secs(2));
        assert!(timer.resume(t0 + secs(7)));

        assert_eq!(timer.end_time(), t0 + secs(605));
        assert_eq!(timer.remaining(t0 + secs(7)), secs(598));
    }

    #[test]
    fn immediate_pause_resume_keeps_end_time() {
        let t0 = Instant::now();
        let mut timer = TimerState::start(t0, secs(600));

        let at = t0 + secs(30);
        timer.pause(at);
        timer.resume(at);

        assert_eq!(timer.end_time(), t0 + secs(600));
    }

    #[test]
    fn finished_elapsed_includes_paused_time() {
        let t0 = Instant::now();
        let mut timer = TimerState::start(t0, secs(3));

        timer.pause(t0 + secs(1));
        timer.resume(t0 + secs(4));

        assert!(matches!(timer.tick(t0 + secs(5)), Status::Running { .. }));
        assert_eq!(
            timer.tick(t0 + secs(6)),
            Status::Finished { elapsed: secs(6) }
        );
    }

    #[test]
    fn pause_after_finish_is_ignored() {
        let t0 = Instant::now();
        let mut timer = TimerState::start(t0, secs(1));

        timer.tick(t0 + secs(1));
        assert_eq!(timer.pause(t0 + secs(2)), None);
        assert_eq!(timer.phase(), Phase::Finished);
    }
}
