// Idle detection with hysteresis.
//
// A countdown restarts on every activity event. When it elapses the
// detector flips to idle exactly once; the next activity flips it back to
// active exactly once, regardless of how many events arrive. The frame
// loop drives `tick(dt)`; input wiring calls `activity()`.

use super::constants::IDLE_TIMEOUT_MS;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdleTransition {
    BecameIdle,
    BecameActive,
}

pub struct IdleDetector {
    timeout: Duration,
    elapsed: Duration,
    idle: bool,
    enabled: bool,
}

impl Default for IdleDetector {
    fn default() -> Self {
        Self::new(Duration::from_millis(IDLE_TIMEOUT_MS))
    }
}

impl IdleDetector {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            elapsed: Duration::ZERO,
            idle: false,
            enabled: true,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.idle
    }

    /// Restart the countdown; reports `BecameActive` only on an actual
    /// idle-to-active transition, not on every event.
    pub fn activity(&mut self) -> Option<IdleTransition> {
        if !self.enabled {
            return None;
        }
        self.elapsed = Duration::ZERO;
        if self.idle {
            self.idle = false;
            return Some(IdleTransition::BecameActive);
        }
        None
    }

    /// Advance the countdown; reports `BecameIdle` exactly once when it
    /// elapses without an intervening activity.
    pub fn tick(&mut self, dt: Duration) -> Option<IdleTransition> {
        if !self.enabled || self.idle {
            return None;
        }
        self.elapsed += dt;
        if self.elapsed >= self.timeout {
            self.idle = true;
            return Some(IdleTransition::BecameIdle);
        }
        None
    }

    /// Disabling forces an active transition (if idle) and suspends the
    /// countdown; re-enabling resumes from a fresh countdown.
    pub fn set_enabled(&mut self, enabled: bool) -> Option<IdleTransition> {
        self.enabled = enabled;
        self.elapsed = Duration::ZERO;
        if !enabled && self.idle {
            self.idle = false;
            return Some(IdleTransition::BecameActive);
        }
        None
    }
}
