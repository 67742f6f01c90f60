use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ViewError;

/// Viewport widths strictly below this many logical pixels are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    #[default]
    Hero,
    Characteristics,
    Habitat,
    Behavior,
}

impl SectionId {
    /// Sections in document order, top to bottom.
    pub const ALL: [SectionId; 4] = [
        SectionId::Hero,
        SectionId::Characteristics,
        SectionId::Habitat,
        SectionId::Behavior,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Characteristics => "characteristics",
            SectionId::Habitat => "habitat",
            SectionId::Behavior => "behavior",
        }
    }

    pub fn index(self) -> usize {
        match self {
            SectionId::Hero => 0,
            SectionId::Characteristics => 1,
            SectionId::Habitat => 2,
            SectionId::Behavior => 3,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = ViewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim().trim_start_matches('#');
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ViewError::UnknownSection(value.to_string()))
    }
}

/// Top edge of a section's root element, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionAnchor {
    pub id: SectionId,
    pub vertical_offset: f32,
}

impl SectionAnchor {
    pub fn new(id: SectionId, vertical_offset: f32) -> Self {
        Self {
            id,
            vertical_offset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportClass {
    Mobile,
    #[default]
    Desktop,
}

impl ViewportClass {
    pub fn from_width(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == ViewportClass::Mobile
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

/// One reading of the host's scroll geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollSample {
    pub scroll_offset: f32,
    pub document_height: f32,
    pub viewport_height: f32,
}

impl ScrollSample {
    pub fn max_scrollable(&self) -> f32 {
        self.document_height - self.viewport_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_section_ids_from_anchor_names() {
        assert_eq!("habitat".parse::<SectionId>().ok(), Some(SectionId::Habitat));
        assert_eq!("#Behavior".parse::<SectionId>().ok(), Some(SectionId::Behavior));
        assert!(matches!(
            "conservation".parse::<SectionId>(),
            Err(ViewError::UnknownSection(name)) if name == "conservation"
        ));
    }

    #[test]
    fn document_order_matches_index() {
        for (position, id) in SectionId::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), position);
        }
        assert!(SectionId::Hero < SectionId::Behavior);
    }

    #[test]
    fn viewport_breakpoint_is_exclusive() {
        assert_eq!(
            ViewportClass::from_width(767.9, MOBILE_BREAKPOINT_PX),
            ViewportClass::Mobile
        );
        assert_eq!(
            ViewportClass::from_width(768.0, MOBILE_BREAKPOINT_PX),
            ViewportClass::Desktop
        );
    }

    #[test]
    fn serializes_section_ids_in_snake_case() {
        let json = serde_json::to_string(&SectionId::Characteristics).expect("serialize");
        assert_eq!(json, "\"characteristics\"");
    }
}
