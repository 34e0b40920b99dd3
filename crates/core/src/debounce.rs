//! Input debounce gate.
//!
//! Key auto-repeat and multi-touch style duplicate clicks can deliver the same
//! answer twice within a few milliseconds. The gate accepts an input only when
//! at least `min_interval_ms` passed since the last *accepted* one.

/// Stateful gate over caller-provided monotonic timestamps.
#[derive(Debug, Clone)]
pub struct InputDebouncer {
    min_interval_ms: u64,
    last_accepted_ms: Option<u64>,
}

impl InputDebouncer {
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval_ms,
            last_accepted_ms: None,
        }
    }

    pub fn min_interval_ms(&self) -> u64 {
        self.min_interval_ms
    }

    pub fn last_accepted_ms(&self) -> Option<u64> {
        self.last_accepted_ms
    }

    /// Accept or suppress an input observed at `now_ms`.
    ///
    /// Suppressed inputs do not move the reference point.
    pub fn try_accept(&mut self, now_ms: u64) -> bool {
        if let Some(last) = self.last_accepted_ms {
            if now_ms.saturating_sub(last) < self.min_interval_ms {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }
}
