//! Drop clock - host-driven gravity timer
//!
//! The clock never reads wall time. The host feeds elapsed milliseconds into
//! [`DropClock::advance`], which reports when a drop step is due. A stopped
//! clock accumulates nothing, so no stale step can fire after a restart.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropClock {
    /// None while stopped
    interval_ms: Option<u32>,
    elapsed_ms: u32,
}

impl DropClock {
    /// A stopped clock
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)start with `interval_ms`, measuring from now.
    pub fn restart(&mut self, interval_ms: u32) {
        self.interval_ms = Some(interval_ms.max(1));
        self.elapsed_ms = 0;
    }

    pub fn stop(&mut self) {
        self.interval_ms = None;
        self.elapsed_ms = 0;
    }

    pub fn is_running(&self) -> bool {
        self.interval_ms.is_some()
    }

    pub fn interval_ms(&self) -> Option<u32> {
        self.interval_ms
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Advance by `elapsed_ms`; true when a drop step is due.
    ///
    /// At most one step fires per call and the accumulator restarts from zero,
    /// so a long host stall does not produce a burst of drops.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        let Some(interval) = self.interval_ms else {
            return false;
        };

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms >= interval {
            self.elapsed_ms = 0;
            return true;
        }
        false
    }
}
