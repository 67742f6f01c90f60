//! Section navigation: maps section requests onto the host's smooth-scroll primitive.

use std::sync::Arc;

use shared::domain::SectionId;
use tracing::debug;

use crate::locator::SectionMeasure;

/// Host capabilities needed to navigate between sections.
///
/// `smooth_scroll_to` is fire-and-forget: the host animates toward
/// `target_offset` and reports progress through ordinary scroll
/// notifications. A later call retargets any animation still running.
pub trait SectionHost: SectionMeasure + Send + Sync {
    fn smooth_scroll_to(&self, section: SectionId, target_offset: f32);
}

/// Host with no rendered sections; every navigation is skipped.
pub struct MissingSectionHost;

impl SectionMeasure for MissingSectionHost {
    fn measure(&self, _section: SectionId) -> Option<f32> {
        None
    }
}

impl SectionHost for MissingSectionHost {
    fn smooth_scroll_to(&self, _section: SectionId, _target_offset: f32) {}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationOutcome {
    Requested {
        section: SectionId,
        target_offset: f32,
    },
    Skipped {
        section: SectionId,
    },
}

impl NavigationOutcome {
    pub fn section(&self) -> SectionId {
        match self {
            NavigationOutcome::Requested { section, .. } | NavigationOutcome::Skipped { section } => {
                *section
            }
        }
    }
}

pub struct NavigationController {
    host: Arc<dyn SectionHost>,
    mobile_menu_open: bool,
}

impl NavigationController {
    pub fn new(host: Arc<dyn SectionHost>) -> Self {
        Self {
            host,
            mobile_menu_open: false,
        }
    }

    pub fn host(&self) -> &Arc<dyn SectionHost> {
        &self.host
    }

    /// Scrolls `section`'s top edge to the top of the viewport.
    ///
    /// Sections missing from the rendered tree are skipped silently. The
    /// mobile menu is closed either way.
    pub fn navigate_to(&mut self, section: SectionId) -> NavigationOutcome {
        let outcome = match self.host.measure(section) {
            Some(target_offset) => {
                debug!(section = %section, target_offset, "requesting smooth scroll");
                self.host.smooth_scroll_to(section, target_offset);
                NavigationOutcome::Requested {
                    section,
                    target_offset,
                }
            }
            None => {
                debug!(section = %section, "navigation target not rendered; skipping");
                NavigationOutcome::Skipped { section }
            }
        };
        self.mobile_menu_open = false;
        outcome
    }

    /// "Discover more" from the hero.
    pub fn scroll_to_next(&mut self) -> NavigationOutcome {
        self.navigate_to(SectionId::Characteristics)
    }

    /// Conservation status lives in the habitat section.
    pub fn navigate_to_conservation(&mut self) -> NavigationOutcome {
        self.navigate_to(SectionId::Habitat)
    }

    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_menu_open
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingHost {
        offsets: Vec<(SectionId, f32)>,
        requests: Mutex<Vec<(SectionId, f32)>>,
    }

    impl SectionMeasure for RecordingHost {
        fn measure(&self, section: SectionId) -> Option<f32> {
            self.offsets
                .iter()
                .find(|(id, _)| *id == section)
                .map(|(_, offset)| *offset)
        }
    }

    impl SectionHost for RecordingHost {
        fn smooth_scroll_to(&self, section: SectionId, target_offset: f32) {
            self.requests
                .lock()
                .expect("requests lock")
                .push((section, target_offset));
        }
    }

    fn host_with(offsets: Vec<(SectionId, f32)>) -> Arc<RecordingHost> {
        Arc::new(RecordingHost {
            offsets,
            requests: Mutex::new(Vec::new()),
        })
    }

    #[test]
    fn requests_smooth_scroll_to_measured_anchor() {
        let host = host_with(vec![(SectionId::Habitat, 1600.0)]);
        let mut nav = NavigationController::new(host.clone());

        let outcome = nav.navigate_to(SectionId::Habitat);

        assert_eq!(
            outcome,
            NavigationOutcome::Requested {
                section: SectionId::Habitat,
                target_offset: 1600.0
            }
        );
        assert_eq!(
            *host.requests.lock().expect("requests lock"),
            vec![(SectionId::Habitat, 1600.0)]
        );
    }

    #[test]
    fn missing_target_is_a_silent_no_op() {
        let host = host_with(vec![(SectionId::Hero, 0.0)]);
        let mut nav = NavigationController::new(host.clone());

        let outcome = nav.navigate_to(SectionId::Habitat);

        assert_eq!(
            outcome,
            NavigationOutcome::Skipped {
                section: SectionId::Habitat
            }
        );
        assert!(host.requests.lock().expect("requests lock").is_empty());
    }

    #[test]
    fn navigation_closes_the_mobile_menu() {
        let host = host_with(vec![(SectionId::Characteristics, 800.0)]);
        let mut nav = NavigationController::new(host);

        assert!(nav.toggle_mobile_menu());
        nav.scroll_to_next();
        assert!(!nav.is_mobile_menu_open());

        nav.toggle_mobile_menu();
        nav.navigate_to_conservation();
        assert!(!nav.is_mobile_menu_open());
    }

    #[test]
    fn hero_shortcuts_target_fixed_sections() {
        let mut nav = NavigationController::new(Arc::new(MissingSectionHost));
        assert_eq!(nav.scroll_to_next().section(), SectionId::Characteristics);
        assert_eq!(nav.navigate_to_conservation().section(), SectionId::Habitat);
    }
}
