//! Active-section resolution from measured anchors.

use shared::domain::{SectionAnchor, SectionId};

/// Sections become active this many pixels before their top reaches the
/// top of the viewport.
pub const LOOK_AHEAD_PX: f32 = 200.0;

/// Host capability: where a section's root element currently sits.
///
/// Returns `None` when the element is not in the rendered tree.
pub trait SectionMeasure {
    fn measure(&self, section: SectionId) -> Option<f32>;
}

/// Measures every section in document order, skipping absent elements.
pub fn measure_anchors<M: SectionMeasure + ?Sized>(host: &M) -> Vec<SectionAnchor> {
    SectionId::ALL
        .into_iter()
        .filter_map(|id| {
            host.measure(id)
                .map(|vertical_offset| SectionAnchor::new(id, vertical_offset))
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct SectionLocator {
    look_ahead: f32,
}

impl Default for SectionLocator {
    fn default() -> Self {
        Self::new(LOOK_AHEAD_PX)
    }
}

impl SectionLocator {
    pub fn new(look_ahead: f32) -> Self {
        Self { look_ahead }
    }

    /// Bottommost anchor at or above `scroll_offset + look_ahead`.
    ///
    /// `anchors` must be in document order. Falls back to `previous` when no
    /// anchor qualifies.
    pub fn locate(
        &self,
        anchors: &[SectionAnchor],
        scroll_offset: f32,
        previous: SectionId,
    ) -> SectionId {
        let threshold = scroll_offset + self.look_ahead;
        anchors
            .iter()
            .rev()
            .find(|anchor| anchor.vertical_offset <= threshold)
            .map(|anchor| anchor.id)
            .unwrap_or(previous)
    }
}
