//! Session elapsed-time tracking over host-supplied millisecond timestamps.
//!
//! The host (browser, test harness) owns the clock and hands `now_ms` into
//! every time-sensitive call, which keeps this crate free of platform timers.

/// Start timestamp plus an optional freeze point. Once stopped, elapsed time
/// no longer advances; stopping again is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionClock {
    started_ms: u64,
    stopped_ms: Option<u64>,
}

impl SessionClock {
    /// Clock running from `now_ms`.
    #[must_use]
    pub const fn start(now_ms: u64) -> Self {
        Self {
            started_ms: now_ms,
            stopped_ms: None,
        }
    }

    /// Milliseconds elapsed, frozen at the stop point once stopped.
    #[must_use]
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        self.stopped_ms
            .unwrap_or(now_ms)
            .saturating_sub(self.started_ms)
    }

    /// Freeze the clock. Idempotent; the first stop wins.
    pub fn stop(&mut self, now_ms: u64) {
        if self.stopped_ms.is_none() {
            self.stopped_ms = Some(now_ms.max(self.started_ms));
        }
    }

    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        self.stopped_ms.is_some()
    }
}

/// Format an elapsed duration as `m:ss` (`0:00`, `1:07`, `12:45`).
#[must_use]
pub fn format_elapsed(elapsed_ms: u64) -> String {
    let total_seconds = elapsed_ms / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
