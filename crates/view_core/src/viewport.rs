//! Viewport classification and reveal-once tracking.

use shared::domain::{SectionAnchor, SectionId, ViewportClass, ViewportSize, MOBILE_BREAKPOINT_PX};

/// Classifies the viewport on every resize. No hysteresis: each crossing of
/// the breakpoint flips the class exactly once.
#[derive(Debug, Clone)]
pub struct ViewportTracker {
    breakpoint: f32,
    class: Option<ViewportClass>,
}

impl Default for ViewportTracker {
    fn default() -> Self {
        Self::new(MOBILE_BREAKPOINT_PX)
    }
}

impl ViewportTracker {
    pub fn new(breakpoint: f32) -> Self {
        Self {
            breakpoint,
            class: None,
        }
    }

    /// Returns the new class when it differs from the previous one.
    pub fn resize(&mut self, size: ViewportSize) -> Option<ViewportClass> {
        let class = ViewportClass::from_width(size.width, self.breakpoint);
        if self.class == Some(class) {
            return None;
        }
        self.class = Some(class);
        Some(class)
    }

    /// `None` until the first measurement arrives.
    pub fn class(&self) -> Option<ViewportClass> {
        self.class
    }

    pub fn is_mounted(&self) -> bool {
        self.class.is_some()
    }
}

/// Content sections fade in the first time they enter the viewport and stay
/// visible afterwards. The hero is always shown.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: [bool; SectionId::ALL.len()],
}

impl RevealTracker {
    /// Marks sections whose top edge is above the viewport's bottom edge.
    /// Returns the sections revealed by this call, in document order.
    pub fn observe(
        &mut self,
        anchors: &[SectionAnchor],
        scroll_offset: f32,
        viewport_height: f32,
    ) -> Vec<SectionId> {
        let bottom = scroll_offset + viewport_height;
        let mut newly = Vec::new();
        for anchor in anchors {
            if anchor.id == SectionId::Hero || self.revealed[anchor.id.index()] {
                continue;
            }
            if anchor.vertical_offset < bottom {
                self.revealed[anchor.id.index()] = true;
                newly.push(anchor.id);
            }
        }
        newly
    }

    pub fn revealed(&self) -> Vec<SectionId> {
        SectionId::ALL
            .into_iter()
            .filter(|id| self.revealed[id.index()])
            .collect()
    }
}
