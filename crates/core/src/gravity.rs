//! Gravity cadence with a transient soft drop override.
//!
//! The clock is fed elapsed wall time by the shell and reports when a gravity
//! tick is due. At most one tick is reported per call; leftover time beyond one
//! interval is dropped so a stalled frame never produces a burst of ticks.

use crate::types::{GRAVITY_MS, SOFT_DROP_GRACE_MS, SOFT_DROP_MS};

#[derive(Debug, Clone)]
pub struct GravityClock {
    interval_ms: u32,
    soft_drop_interval_ms: u32,
    soft_drop_grace_ms: u32,
    elapsed_ms: u32,
    /// Remaining soft drop override time; 0 when inactive.
    soft_drop_left_ms: u32,
}

impl GravityClock {
    pub fn new(interval_ms: u32, soft_drop_interval_ms: u32, soft_drop_grace_ms: u32) -> Self {
        Self {
            interval_ms,
            soft_drop_interval_ms,
            soft_drop_grace_ms,
            elapsed_ms: 0,
            soft_drop_left_ms: 0,
        }
    }

    /// Current gravity interval, taking the soft drop override into account
    pub fn interval_ms(&self) -> u32 {
        if self.is_soft_dropping() {
            self.soft_drop_interval_ms.min(self.interval_ms)
        } else {
            self.interval_ms
        }
    }

    pub fn is_soft_dropping(&self) -> bool {
        self.soft_drop_left_ms > 0
    }

    /// Start or renew the soft drop override.
    pub fn soft_drop(&mut self) {
        if !self.is_soft_dropping() {
            // Let the faster cadence apply from now rather than after a full interval.
            self.elapsed_ms = self.elapsed_ms.min(self.soft_drop_interval_ms);
        }
        self.soft_drop_left_ms = self.soft_drop_grace_ms;
    }

    /// Drop the soft drop override immediately.
    pub fn cancel_soft_drop(&mut self) {
        self.soft_drop_left_ms = 0;
    }

    /// Restart the current interval from zero.
    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }

    /// Advance by `elapsed_ms`; returns true when one gravity tick is due.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        let interval = self.interval_ms();
        self.soft_drop_left_ms = self.soft_drop_left_ms.saturating_sub(elapsed_ms);
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);

        if self.elapsed_ms >= interval {
            self.elapsed_ms = 0;
            true
        } else {
            false
        }
    }
}

impl Default for GravityClock {
    fn default() -> Self {
        Self::new(GRAVITY_MS, SOFT_DROP_MS, SOFT_DROP_GRACE_MS)
    }
}
