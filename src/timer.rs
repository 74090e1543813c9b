//! Show/hide delay timers as cancelable deadlines.
//!
//! The coordinator never blocks: it records a deadline here and the host
//! calls `tick` when time passes (or sleeps until `next_deadline` in the
//! simulator). Scheduling a kind replaces any outstanding deadline of that
//! kind, so at most one show and one hide timer exist at any moment.

use std::time::{Duration, Instant};

/// The two named delay timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Show,
    Hide,
}

impl TimerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Show => "show",
            Self::Hide => "hide",
        }
    }
}

/// Deadline slots for the show and hide timers.
#[derive(Debug, Default)]
pub struct DelayTimers {
    show_at: Option<Instant>,
    hide_at: Option<Instant>,
}

impl DelayTimers {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, kind: TimerKind) -> &mut Option<Instant> {
        match kind {
            TimerKind::Show => &mut self.show_at,
            TimerKind::Hide => &mut self.hide_at,
        }
    }

    /// Arm a timer, replacing any outstanding deadline of the same kind.
    pub fn schedule(&mut self, kind: TimerKind, now: Instant, delay: Duration) {
        *self.slot_mut(kind) = Some(now + delay);
    }

    pub fn cancel(&mut self, kind: TimerKind) {
        *self.slot_mut(kind) = None;
    }

    pub fn cancel_all(&mut self) {
        self.show_at = None;
        self.hide_at = None;
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        match kind {
            TimerKind::Show => self.show_at.is_some(),
            TimerKind::Hide => self.hide_at.is_some(),
        }
    }

    /// Consume the timer if its deadline has passed.
    pub fn take_due(&mut self, kind: TimerKind, now: Instant) -> bool {
        let slot = self.slot_mut(kind);
        match *slot {
            Some(at) if at <= now => {
                *slot = None;
                true
            }
            _ => false,
        }
    }

    /// Earliest outstanding deadline, for host sleep scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.show_at, self.hide_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
