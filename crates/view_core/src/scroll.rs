//! Scroll sampling: normalized progress through the document.

use shared::domain::ScrollSample;

/// Offset past which the navigation bar switches to its opaque style.
pub const NAV_SCROLLED_THRESHOLD_PX: f32 = 50.0;

/// Fraction of the scrollable range covered by `sample`, clamped to `[0, 1]`.
///
/// Documents that fit inside the viewport have nothing to scroll through and
/// always report `0`.
pub fn scroll_progress(sample: &ScrollSample) -> f32 {
    let max_scrollable = sample.max_scrollable();
    if max_scrollable <= 0.0 {
        return 0.0;
    }
    let ratio = sample.scroll_offset / max_scrollable;
    if !ratio.is_finite() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub struct ScrollTracker {
    nav_scrolled_threshold: f32,
    last: Option<ScrollSample>,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(NAV_SCROLLED_THRESHOLD_PX)
    }
}

impl ScrollTracker {
    pub fn new(nav_scrolled_threshold: f32) -> Self {
        Self {
            nav_scrolled_threshold,
            last: None,
        }
    }

    /// Records `sample` and returns its progress.
    pub fn sample(&mut self, sample: ScrollSample) -> f32 {
        self.last = Some(sample);
        scroll_progress(&sample)
    }

    pub fn last_sample(&self) -> Option<ScrollSample> {
        self.last
    }

    pub fn scroll_offset(&self) -> f32 {
        self.last.map(|sample| sample.scroll_offset).unwrap_or(0.0)
    }

    pub fn nav_scrolled(&self) -> bool {
        self.scroll_offset() > self.nav_scrolled_threshold
    }
}
