//! Frame pacing: skip redraws of frames that would look the same.

/// Decides per frame whether the framebuffer needs redrawing.
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

    /// Next call renders unconditionally (resize, screen switch).
    pub fn invalidate(&mut self) {
        self.has_rendered = false;
    }

    /// Decide whether to render a new frame.
    ///
    /// - `animating=true` (cards mid-flip): always render.
    /// - otherwise render on fingerprint change, and at most once per
    ///   `min_static_interval_ms` when nothing changed.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, animating: bool) -> bool {
        if !self.has_rendered || animating || fingerprint != self.last_fingerprint {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            return true;
        }

        if now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms {
            self.last_render_ms = now_ms;
            return true;
        }

        false
    }
}
