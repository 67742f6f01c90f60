use serde::{Deserialize, Serialize};

use crate::{
    domain::{ScrollSample, SectionId, ViewportClass, ViewportSize},
    error::ViewError,
};

/// Notifications a host feeds into the view coordinator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum HostNotification {
    Scroll(ScrollSample),
    Resize(ViewportSize),
    Navigate { section: SectionId },
    ScrollToNext,
    NavigateToConservation,
    ToggleMobileMenu,
    CloseMobileMenu,
}

impl HostNotification {
    /// Rejects geometry the coordinator cannot reason about (NaN, infinities,
    /// negative sizes). Offsets may be negative during overscroll.
    pub fn validate(&self) -> Result<(), ViewError> {
        match self {
            HostNotification::Scroll(sample) => {
                finite("scroll_offset", sample.scroll_offset)?;
                non_negative("document_height", sample.document_height)?;
                non_negative("viewport_height", sample.viewport_height)
            }
            HostNotification::Resize(size) => {
                non_negative("viewport_width", size.width)?;
                non_negative("viewport_height", size.height)
            }
            _ => Ok(()),
        }
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ViewError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ViewError::InvalidGeometry { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ViewError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ViewError::InvalidGeometry { field, value });
    }
    Ok(())
}

/// Immutable snapshot of the committed view state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub scroll_progress: f32,
    pub active_section: SectionId,
    pub scroll_offset: f32,
    pub nav_scrolled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport_class: Option<ViewportClass>,
    pub mobile_menu_open: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub revealed: Vec<SectionId>,
}

impl Default for ViewSnapshot {
    fn default() -> Self {
        Self {
            scroll_progress: 0.0,
            active_section: SectionId::Hero,
            scroll_offset: 0.0,
            nav_scrolled: false,
            viewport_class: None,
            mobile_menu_open: false,
            revealed: Vec::new(),
        }
    }
}

impl ViewSnapshot {
    pub fn is_revealed(&self, section: SectionId) -> bool {
        section == SectionId::Hero || self.revealed.contains(&section)
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport_class.is_some_and(ViewportClass::is_mobile)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ViewEvent {
    ActiveSectionChanged {
        previous: SectionId,
        current: SectionId,
    },
    ViewportClassChanged {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        previous: Option<ViewportClass>,
        current: ViewportClass,
    },
    SectionRevealed {
        section: SectionId,
    },
    NavigationRequested {
        section: SectionId,
        target_offset: f32,
    },
    NavigationSkipped {
        section: SectionId,
    },
    MobileMenuChanged {
        open: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_notifications_use_tagged_wire_form() {
        let raw = r#"{"type":"navigate","payload":{"section":"habitat"}}"#;
        let parsed: HostNotification = serde_json::from_str(raw).expect("parse");
        assert_eq!(
            parsed,
            HostNotification::Navigate {
                section: SectionId::Habitat
            }
        );

        let raw = r#"{"type":"scroll","payload":{"scroll_offset":10.0,"document_height":3000.0,"viewport_height":800.0}}"#;
        let parsed: HostNotification = serde_json::from_str(raw).expect("parse");
        assert!(matches!(parsed, HostNotification::Scroll(sample) if sample.scroll_offset == 10.0));

        let raw = r#"{"type":"toggle_mobile_menu"}"#;
        let parsed: HostNotification = serde_json::from_str(raw).expect("parse");
        assert_eq!(parsed, HostNotification::ToggleMobileMenu);
    }

    #[test]
    fn rejects_non_finite_scroll_geometry() {
        let bad = HostNotification::Scroll(ScrollSample {
            scroll_offset: f32::NAN,
            document_height: 100.0,
            viewport_height: 50.0,
        });
        assert!(matches!(
            bad.validate(),
            Err(ViewError::InvalidGeometry {
                field: "scroll_offset",
                ..
            })
        ));

        let overscroll = HostNotification::Scroll(ScrollSample {
            scroll_offset: -12.0,
            document_height: 100.0,
            viewport_height: 50.0,
        });
        assert!(overscroll.validate().is_ok());

        let negative = HostNotification::Resize(ViewportSize {
            width: -1.0,
            height: 10.0,
        });
        assert!(negative.validate().is_err());
    }

    #[test]
    fn hero_is_always_revealed() {
        let snapshot = ViewSnapshot::default();
        assert!(snapshot.is_revealed(SectionId::Hero));
        assert!(!snapshot.is_revealed(SectionId::Habitat));
        assert!(!snapshot.is_mobile());
    }
}
