//! UI actions raised by widgets and the host-side scroll commands they lead to.

use shared::{domain::SectionId, protocol::HostNotification};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Navigate(SectionId),
    ScrollToNext,
    NavigateToConservation,
    ToggleMobileMenu,
    CloseMobileMenu,
}

impl UiAction {
    pub fn name(self) -> &'static str {
        match self {
            UiAction::Navigate(_) => "navigate",
            UiAction::ScrollToNext => "scroll_to_next",
            UiAction::NavigateToConservation => "navigate_to_conservation",
            UiAction::ToggleMobileMenu => "toggle_mobile_menu",
            UiAction::CloseMobileMenu => "close_mobile_menu",
        }
    }

    pub fn into_notification(self) -> HostNotification {
        match self {
            UiAction::Navigate(section) => HostNotification::Navigate { section },
            UiAction::ScrollToNext => HostNotification::ScrollToNext,
            UiAction::NavigateToConservation => HostNotification::NavigateToConservation,
            UiAction::ToggleMobileMenu => HostNotification::ToggleMobileMenu,
            UiAction::CloseMobileMenu => HostNotification::CloseMobileMenu,
        }
    }
}

/// Requests from the coordinator back to the page's scroll area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollCommand {
    SmoothScrollTo { section: SectionId, offset: f32 },
}
