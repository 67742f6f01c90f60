//! Ties scroll tracking, section location, navigation and viewport tracking
//! to one owned [`ViewState`].

use std::sync::Arc;

use shared::{
    domain::{ScrollSample, SectionId, ViewportClass, ViewportSize},
    error::ViewError,
    protocol::{HostNotification, ViewEvent, ViewSnapshot},
};
use thiserror::Error;
use tokio::{
    sync::{broadcast, mpsc, watch},
    task::JoinHandle,
};
use tracing::{debug, info, warn};

use crate::{
    config::ViewSettings,
    locator::{measure_anchors, SectionLocator},
    navigation::{NavigationController, NavigationOutcome, SectionHost},
    orientation::{ModelOrientationDriver, ModelTransform},
    scroll::ScrollTracker,
    state::ViewState,
    viewport::{RevealTracker, ViewportTracker},
};

#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error("view coordinator is closed")]
    Closed,
    #[error("view coordinator intake is full")]
    Busy,
    #[error("rejected host notification: {0}")]
    Rejected(#[from] ViewError),
}

/// Synchronous coordinator for single-threaded hosts.
///
/// Every notification runs to completion before the next one; the host's
/// event loop provides the serialization.
pub struct ViewCoordinator {
    tracker: ScrollTracker,
    locator: SectionLocator,
    viewport: ViewportTracker,
    reveal: RevealTracker,
    navigation: NavigationController,
    driver: ModelOrientationDriver,
    state: ViewState,
}

impl ViewCoordinator {
    pub fn new(settings: &ViewSettings, host: Arc<dyn SectionHost>) -> Self {
        Self {
            tracker: ScrollTracker::new(settings.nav_scrolled_threshold_px),
            locator: SectionLocator::new(settings.look_ahead_px),
            viewport: ViewportTracker::new(settings.mobile_breakpoint_px),
            reveal: RevealTracker::default(),
            navigation: NavigationController::new(host),
            driver: ModelOrientationDriver,
            state: ViewState::new(settings.event_capacity),
        }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.state.subscribe()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ViewEvent> {
        self.state.subscribe_events()
    }

    /// Invalid geometry is rejected and leaves the state untouched.
    pub fn apply(&mut self, notification: HostNotification) -> Result<(), ViewError> {
        if let Err(err) = notification.validate() {
            warn!("skipping host notification: {err}");
            return Err(err);
        }

        match notification {
            HostNotification::Scroll(sample) => self.on_scroll(sample),
            HostNotification::Resize(size) => self.on_resize(size),
            HostNotification::Navigate { section } => {
                let outcome = self.navigation.navigate_to(section);
                self.after_navigation(outcome);
            }
            HostNotification::ScrollToNext => {
                let outcome = self.navigation.scroll_to_next();
                self.after_navigation(outcome);
            }
            HostNotification::NavigateToConservation => {
                let outcome = self.navigation.navigate_to_conservation();
                self.after_navigation(outcome);
            }
            HostNotification::ToggleMobileMenu => {
                self.navigation.toggle_mobile_menu();
                self.sync_menu();
            }
            HostNotification::CloseMobileMenu => {
                self.navigation.close_mobile_menu();
                self.sync_menu();
            }
        }
        Ok(())
    }

    /// Model transform for the current frame. `None` until the viewport has
    /// been measured; hosts show a loading placeholder meanwhile.
    pub fn model_frame(&self, elapsed_secs: f32) -> Option<ModelTransform> {
        let class = self.viewport.class()?;
        let progress = self.state.snapshot().scroll_progress;
        Some(self.driver.frame(progress, elapsed_secs, class))
    }

    fn on_scroll(&mut self, sample: ScrollSample) {
        let progress = self.tracker.sample(sample);
        self.relocate(sample, progress);
    }

    fn on_resize(&mut self, size: ViewportSize) {
        if let Some(current) = self.viewport.resize(size) {
            let previous = self.state.snapshot().viewport_class;
            info!(?previous, ?current, width = size.width, "viewport class changed");
            self.state.commit(|snapshot| snapshot.viewport_class = Some(current));
            self.state
                .publish(ViewEvent::ViewportClassChanged { previous, current });
        }

        // Layout offsets move on resize; re-run location against the last scroll position.
        if let Some(sample) = self.tracker.last_sample() {
            let sample = ScrollSample {
                viewport_height: size.height,
                ..sample
            };
            let progress = self.tracker.sample(sample);
            self.relocate(sample, progress);
        }
    }

    fn relocate(&mut self, sample: ScrollSample, progress: f32) {
        let host = Arc::clone(self.navigation.host());
        let anchors = measure_anchors(host.as_ref());
        let previous = self.state.snapshot().active_section;
        let active = self
            .locator
            .locate(&anchors, sample.scroll_offset, previous);
        let newly_revealed =
            self.reveal
                .observe(&anchors, sample.scroll_offset, sample.viewport_height);
        let revealed = self.reveal.revealed();
        let nav_scrolled = self.tracker.nav_scrolled();

        self.state.commit(|snapshot| {
            snapshot.scroll_progress = progress;
            snapshot.scroll_offset = sample.scroll_offset;
            snapshot.active_section = active;
            snapshot.nav_scrolled = nav_scrolled;
            snapshot.revealed = revealed;
        });

        debug!(
            offset = sample.scroll_offset,
            progress,
            active = %active,
            "scroll sample committed"
        );

        if active != previous {
            self.state.publish(ViewEvent::ActiveSectionChanged {
                previous,
                current: active,
            });
        }
        for section in newly_revealed {
            self.state.publish(ViewEvent::SectionRevealed { section });
        }
    }

    fn after_navigation(&mut self, outcome: NavigationOutcome) {
        let event = match outcome {
            NavigationOutcome::Requested {
                section,
                target_offset,
            } => ViewEvent::NavigationRequested {
                section,
                target_offset,
            },
            NavigationOutcome::Skipped { section } => ViewEvent::NavigationSkipped { section },
        };
        self.state.publish(event);
        self.sync_menu();
    }

    fn sync_menu(&mut self) {
        let open = self.navigation.is_mobile_menu_open();
        if self.state.commit(|snapshot| snapshot.mobile_menu_open = open) {
            self.state.publish(ViewEvent::MobileMenuChanged { open });
        }
    }

    pub fn active_section(&self) -> SectionId {
        self.state.snapshot().active_section
    }

    pub fn viewport_class(&self) -> Option<ViewportClass> {
        self.viewport.class()
    }
}

/// Cloneable intake for a coordinator running on its own task.
///
/// Handles can only send notifications and read; the task is the sole writer.
#[derive(Clone)]
pub struct CoordinatorHandle {
    intake: mpsc::Sender<HostNotification>,
    snapshots: watch::Receiver<ViewSnapshot>,
    events: broadcast::Sender<ViewEvent>,
}

impl CoordinatorHandle {
    pub async fn notify(&self, notification: HostNotification) -> Result<(), CoordinatorError> {
        notification.validate()?;
        self.intake
            .send(notification)
            .await
            .map_err(|_| CoordinatorError::Closed)
    }

    pub fn try_notify(&self, notification: HostNotification) -> Result<(), CoordinatorError> {
        notification.validate()?;
        self.intake.try_send(notification).map_err(|err| match err {
            mpsc::error::TrySendError::Full(_) => {
                warn!("view coordinator intake is full; dropping notification");
                CoordinatorError::Busy
            }
            mpsc::error::TrySendError::Closed(_) => CoordinatorError::Closed,
        })
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.snapshots.clone()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ViewEvent> {
        self.events.subscribe()
    }
}

/// Moves `coordinator` onto a task fed by a bounded channel. The task ends
/// once every handle is dropped and yields the final snapshot.
pub fn spawn_coordinator(
    mut coordinator: ViewCoordinator,
    intake_capacity: usize,
) -> (CoordinatorHandle, JoinHandle<ViewSnapshot>) {
    let (intake, mut rx) = mpsc::channel(intake_capacity.max(1));
    let handle = CoordinatorHandle {
        intake,
        snapshots: coordinator.subscribe(),
        events: coordinator.state.event_sender(),
    };

    let task = tokio::spawn(async move {
        info!("view coordinator started");
        while let Some(notification) = rx.recv().await {
            if let Err(err) = coordinator.apply(notification) {
                debug!("view coordinator skipped notification: {err}");
            }
        }
        info!("view coordinator stopped");
        coordinator.snapshot()
    });

    (handle, task)
}
