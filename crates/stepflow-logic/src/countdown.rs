//! Per-puzzle countdown, driven by an external one-second tick.
//!
//! The countdown owns no clock. A host scheduler calls [`Countdown::tick`];
//! expiry is reported exactly once, after which the countdown is disarmed
//! and further ticks are inert.

use serde::{Deserialize, Serialize};

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickResult {
    /// Countdown not armed; nothing happened.
    Idle,
    /// Still running with this many seconds left.
    Running { remaining: u32 },
    /// Reached zero on this tick.
    Expired,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    remaining: u32,
    armed: bool,
}

impl Countdown {
    /// Armed countdown starting at `seconds`.
    pub fn start(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            armed: true,
        }
    }

    /// Disarmed countdown with nothing left.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn tick(&mut self) -> TickResult {
        if !self.armed {
            return TickResult::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.armed = false;
            TickResult::Expired
        } else {
            TickResult::Running {
                remaining: self.remaining,
            }
        }
    }

    /// Stop without expiring. Remaining time is kept for display.
    pub fn disarm(&mut self) {
        self.armed = false;
    }
}
