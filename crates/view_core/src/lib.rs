//! Scroll-driven view-state coordination for the Harpy Eagle showcase.
//!
//! Hosts feed scroll and resize notifications in and read back the active
//! section, scroll progress and a per-frame model transform. Section
//! measurement and smooth scrolling stay with the host behind
//! [`SectionHost`].

pub mod config;
pub mod coordinator;
pub mod locator;
pub mod navigation;
pub mod orientation;
pub mod scroll;
pub mod smooth;
pub mod state;
pub mod viewport;

pub use config::{load_settings, load_settings_from, ViewSettings};
pub use coordinator::{spawn_coordinator, CoordinatorError, CoordinatorHandle, ViewCoordinator};
pub use locator::{measure_anchors, SectionLocator, SectionMeasure, LOOK_AHEAD_PX};
pub use navigation::{MissingSectionHost, NavigationController, NavigationOutcome, SectionHost};
pub use orientation::{
    ContainerPresentation, ModelClock, ModelOrientationDriver, ModelTransform, ResponsiveProfile,
};
pub use scroll::{scroll_progress, ScrollTracker};
pub use smooth::SmoothScroll;
pub use state::ViewState;
pub use viewport::{RevealTracker, ViewportTracker};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
