//! Rest countdown shown next to each exercise of a student's workout.
//!
//! This is only the state machine. The caller owns the clock and calls
//! [RestTimer::tick] once every [TICK_MILLIS] while the timer is running.

use tracing::debug;

/// Interval between two ticks
pub const TICK_MILLIS: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerStatus {
    #[default]
    Idle,
    Running,
    /// Reached zero. Behaves like `Idle` apart from the label
    Expired,
}

/// Emitted once per countdown, on the transition to [TimerStatus::Expired]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestTimer {
    duration: u32,
    remaining: u32,
    status: TimerStatus,
}

impl RestTimer {
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            status: TimerStatus::Idle,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    /// Restarts the countdown from the full duration. Allowed from any state
    pub fn start(&mut self) -> Option<TimerEvent> {
        self.remaining = self.duration;
        self.status = TimerStatus::Running;
        debug!(duration = self.duration, "Rest timer started");
        self.expire_if_done()
    }

    pub fn tick(&mut self) -> Option<TimerEvent> {
        if !self.is_running() {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        self.expire_if_done()
    }

    /// Swaps in a new duration. The remaining time jumps to it whatever the
    /// status; a running timer keeps running
    pub fn set_duration(&mut self, duration: u32) -> Option<TimerEvent> {
        if duration == self.duration {
            return None;
        }
        self.duration = duration;
        self.remaining = duration;
        self.expire_if_done()
    }

    fn expire_if_done(&mut self) -> Option<TimerEvent> {
        if self.is_running() && self.remaining == 0 {
            self.status = TimerStatus::Expired;
            debug!("Rest timer expired");
            Some(TimerEvent::Expired)
        } else {
            None
        }
    }
}
