//! Eased scroll animation for hosts implementing [`SectionHost::smooth_scroll_to`].
//!
//! [`SectionHost::smooth_scroll_to`]: crate::navigation::SectionHost::smooth_scroll_to

/// Default duration of a smooth scroll, in seconds.
pub const SMOOTH_SCROLL_SECS: f32 = 0.6;

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    started_at: f32,
    duration: f32,
}

impl SmoothScroll {
    pub fn new(from: f32, to: f32, now: f32) -> Self {
        Self::with_duration(from, to, now, SMOOTH_SCROLL_SECS)
    }

    pub fn with_duration(from: f32, to: f32, now: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            started_at: now,
            duration: duration.max(f32::EPSILON),
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Offset at time `now`, and whether the animation has finished.
    pub fn offset_at(&self, now: f32) -> (f32, bool) {
        let t = (now - self.started_at) / self.duration;
        if t >= 1.0 {
            return (self.to, true);
        }
        (self.from + (self.to - self.from) * ease_out_cubic(t), false)
    }

    /// Continues from wherever the running animation is toward a new target.
    pub fn retarget(&self, to: f32, now: f32) -> Self {
        let (current, _) = self.offset_at(now);
        Self::with_duration(current, to, now, self.duration)
    }

    /// Evenly spaced offsets for hosts without a frame clock.
    pub fn frames(&self, count: usize) -> Vec<f32> {
        let count = count.max(1);
        (1..=count)
            .map(|i| {
                let now = self.started_at + self.duration * i as f32 / count as f32;
                self.offset_at(now).0
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_target_after_duration() {
        let scroll = SmoothScroll::with_duration(0.0, 1000.0, 10.0, 0.5);
        assert_eq!(scroll.offset_at(10.0), (0.0, false));
        let (mid, done) = scroll.offset_at(10.25);
        assert!(!done);
        assert!(mid > 500.0 && mid < 1000.0);
        assert_eq!(scroll.offset_at(10.5), (1000.0, true));
        assert_eq!(scroll.offset_at(99.0), (1000.0, true));
    }

    #[test]
    fn retargeting_starts_from_current_position() {
        let scroll = SmoothScroll::with_duration(0.0, 1000.0, 0.0, 1.0);
        let (current, _) = scroll.offset_at(0.5);
        let retargeted = scroll.retarget(200.0, 0.5);
        assert_eq!(retargeted.offset_at(0.5).0, current);
        assert_eq!(retargeted.target(), 200.0);
        assert_eq!(retargeted.offset_at(1.5), (200.0, true));
    }

    #[test]
    fn frames_end_on_target_and_move_monotonically() {
        let frames = SmoothScroll::new(1600.0, 800.0, 0.0).frames(8);
        assert_eq!(frames.len(), 8);
        assert_eq!(frames.last().copied(), Some(800.0));
        assert!(frames.windows(2).all(|pair| pair[1] <= pair[0]));
    }
}
