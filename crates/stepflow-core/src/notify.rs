//! Transient notifications for the presentation layer.
//!
//! The engine emits one notification per user-visible transition. The most
//! recent one is always observable; all of them are queued until drained so
//! a host polling once per frame does not miss any.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Upper bound on undrained notifications; oldest are dropped first.
const QUEUE_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationKind {
    Correct,
    LevelUp,
    Win,
    Incorrect,
    Timeout,
    PoolExhausted,
}

impl NotificationKind {
    pub fn severity(&self) -> Severity {
        match self {
            NotificationKind::Correct | NotificationKind::LevelUp | NotificationKind::Win => {
                Severity::Success
            }
            NotificationKind::PoolExhausted => Severity::Warning,
            NotificationKind::Incorrect | NotificationKind::Timeout => Severity::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub severity: Severity,
    pub title: String,
    pub text: String,
}

impl Notification {
    fn new(kind: NotificationKind, title: &str, text: String) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            title: title.to_string(),
            text,
        }
    }

    pub fn correct(points: u32) -> Self {
        Self::new(
            NotificationKind::Correct,
            "Correct!",
            format!("Well done, +{} points.", points),
        )
    }

    pub fn level_up(level: u32) -> Self {
        Self::new(
            NotificationKind::LevelUp,
            "Level up!",
            format!("Welcome to level {}.", level),
        )
    }

    pub fn win(score: u32) -> Self {
        Self::new(
            NotificationKind::Win,
            "You win!",
            format!("Every level cleared with {} points.", score),
        )
    }

    pub fn incorrect(penalty: u32) -> Self {
        Self::new(
            NotificationKind::Incorrect,
            "Wrong order",
            format!("That sequence is not right, -{} points. Game over.", penalty),
        )
    }

    pub fn timeout() -> Self {
        Self::new(
            NotificationKind::Timeout,
            "Time's up",
            "The timer ran out. Game over.".to_string(),
        )
    }

    pub fn pool_exhausted(level: u32) -> Self {
        Self::new(
            NotificationKind::PoolExhausted,
            "Out of puzzles",
            format!("No puzzles remain for level {}.", level),
        )
    }
}

/// Holds the latest notification and a bounded queue of undrained ones.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    last: Option<Notification>,
    pending: VecDeque<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, notification: Notification) {
        if self.pending.len() >= QUEUE_CAPACITY {
            self.pending.pop_front();
        }
        self.pending.push_back(notification.clone());
        self.last = Some(notification);
    }

    pub fn last(&self) -> Option<&Notification> {
        self.last.as_ref()
    }

    /// Take every queued notification, oldest first. `last` is kept.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.pending.drain(..).collect()
    }

    pub fn clear(&mut self) {
        self.last = None;
        self.pending.clear();
    }
}
