//! Service-time estimate: minutes at the pump for a given volume.

use gs_core::Jitter;

/// Computes `ceil(liters / liters_per_minute)` minutes, then adds a ±1
/// jitter term when the base exceeds one minute.
///
/// The result is always at least 1: a one-minute base is never jittered,
/// and a zero base is raised to one.
pub struct ServiceEstimator<J: Jitter> {
    jitter:            J,
    liters_per_minute: u32,
}

impl<J: Jitter> ServiceEstimator<J> {
    /// `liters_per_minute` must be non-zero; [`SimBuilder`](crate::SimBuilder)
    /// checks this before construction.
    pub fn new(jitter: J, liters_per_minute: u32) -> Self {
        debug_assert!(liters_per_minute > 0);
        Self { jitter, liters_per_minute }
    }

    pub fn estimate(&mut self, liters: u32) -> u32 {
        let base = liters.div_ceil(self.liters_per_minute);
        if base > 1 {
            // base >= 2 and jitter >= -1, so the sum stays positive.
            base.saturating_add_signed(self.jitter.draw().clamp(-1, 1))
        } else {
            base.max(1)
        }
    }

    pub fn liters_per_minute(&self) -> u32 {
        self.liters_per_minute
    }
}
