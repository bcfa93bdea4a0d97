//! Skips redraws of frames that did not change.
//!
//! The view is a pure function of the snapshot and the pulse phase, so the
//! loop fingerprints both and only rebuilds the framebuffer when the
//! fingerprint moves. A periodic refresh still goes through so a terminal
//! scribbled on by another process recovers on its own.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    refresh_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(refresh_ms: u64) -> Self {
        Self {
            refresh_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// Renders the first frame, every fingerprint change, and otherwise at
    /// most once per `refresh_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.refresh_ms;
        if !changed && !stale {
            return false;
        }
        self.last_render_ms = now_ms;
        self.last_fingerprint = Some(fingerprint);
        true
    }

    /// Make the next call render regardless of fingerprint (e.g. on resize).
    pub fn invalidate(&mut self) {
        self.last_fingerprint = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidate_forces_next_frame() {
        let mut t = RenderThrottle::new(1_000);
        assert!(t.should_render(0, 7));
        assert!(!t.should_render(5, 7));
        t.invalidate();
        assert!(t.should_render(6, 7));
    }
}
