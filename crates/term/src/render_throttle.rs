//! Skip redraws when nothing on screen could have changed.

use crate::core::GameSnapshot;
use crate::game_view::Viewport;

/// Default upper bound between redraws of an unchanged frame.
pub const DEFAULT_REFRESH_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// Renders immediately when the fingerprint changed, otherwise at most once
    /// per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let due = !self.has_rendered
            || fingerprint != self.last_fingerprint
            || now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;
        if due {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        due
    }

    /// Force the next call to [`RenderThrottle::should_render`] to return true.
    pub fn invalidate(&mut self) {
        self.has_rendered = false;
    }
}

impl Default for RenderThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_MS)
    }
}

/// Fingerprint of everything that affects the drawn frame.
pub fn frame_fingerprint(snap: &GameSnapshot, viewport: Viewport, top_row: u32) -> u64 {
    let mut h = snap.fingerprint();
    for v in [viewport.width as u64, viewport.height as u64, top_row as u64] {
        h ^= v;
        h = h.wrapping_mul(0x100_0000_01b3);
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_always_renders() {
        let mut t = RenderThrottle::new(1000);
        assert!(t.should_render(0, 42));
    }

    #[test]
    fn test_unchanged_frame_waits_for_interval() {
        let mut t = RenderThrottle::new(1000);
        assert!(t.should_render(0, 42));
        assert!(!t.should_render(50, 42));
        assert!(!t.should_render(999, 42));
        assert!(t.should_render(1000, 42));
    }

    #[test]
    fn test_changed_fingerprint_renders_immediately() {
        let mut t = RenderThrottle::new(1000);
        assert!(t.should_render(0, 1));
        assert!(t.should_render(10, 2));
        assert!(!t.should_render(20, 2));
    }

    #[test]
    fn test_invalidate_forces_render() {
        let mut t = RenderThrottle::new(1000);
        assert!(t.should_render(0, 1));
        t.invalidate();
        assert!(t.should_render(10, 1));
    }
}
