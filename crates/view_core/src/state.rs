//! Owned view-state container with subscribe/notify.

use shared::protocol::{ViewEvent, ViewSnapshot};
use tokio::sync::{broadcast, watch};

pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Single-writer store for the committed [`ViewSnapshot`].
///
/// Only the owner can commit; readers hold [`watch::Receiver`]s and always
/// observe the latest committed value. Dropping the store closes every
/// subscription.
pub struct ViewState {
    snapshot: watch::Sender<ViewSnapshot>,
    events: broadcast::Sender<ViewEvent>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

impl ViewState {
    pub fn new(event_capacity: usize) -> Self {
        let (snapshot, _) = watch::channel(ViewSnapshot::default());
        let (events, _) = broadcast::channel(event_capacity.max(1));
        Self { snapshot, events }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.snapshot.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.snapshot.subscribe()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ViewEvent> {
        self.events.subscribe()
    }

    /// Applies `update` and notifies subscribers only if the snapshot changed.
    pub fn commit(&mut self, update: impl FnOnce(&mut ViewSnapshot)) -> bool {
        self.snapshot.send_if_modified(|snapshot| {
            let before = snapshot.clone();
            update(snapshot);
            *snapshot != before
        })
    }

    /// Extra sender for handles that hand out event subscriptions.
    pub(crate) fn event_sender(&self) -> broadcast::Sender<ViewEvent> {
        self.events.clone()
    }

    pub fn publish(&self, event: ViewEvent) {
        // No subscribers is fine; events are advisory.
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
mod tests {
    use shared::domain::SectionId;

    use super::*;

    #[test]
    fn starts_at_top_of_hero() {
        let state = ViewState::default();
        let snapshot = state.snapshot();
        assert_eq!(snapshot.scroll_progress, 0.0);
        assert_eq!(snapshot.active_section, SectionId::Hero);
    }

    #[test]
    fn subscribers_see_latest_commit() {
        let mut state = ViewState::default();
        let mut reader = state.subscribe();

        assert!(state.commit(|snapshot| snapshot.scroll_progress = 0.25));
        assert!(state.commit(|snapshot| snapshot.active_section = SectionId::Habitat));

        assert!(reader.has_changed().expect("store alive"));
        let seen = reader.borrow_and_update().clone();
        assert_eq!(seen.scroll_progress, 0.25);
        assert_eq!(seen.active_section, SectionId::Habitat);
    }

    #[test]
    fn identical_commit_does_not_notify() {
        let mut state = ViewState::default();
        let reader = state.subscribe();
        assert!(!state.commit(|snapshot| snapshot.scroll_progress = 0.0));
        assert!(!reader.has_changed().expect("store alive"));
    }

    #[test]
    fn dropping_the_store_closes_subscriptions() {
        let state = ViewState::default();
        let reader = state.subscribe();
        drop(state);
        assert!(reader.has_changed().is_err());
    }

    #[tokio::test]
    async fn events_reach_subscribers() {
        let state = ViewState::default();
        let mut events = state.subscribe_events();
        state.publish(ViewEvent::SectionRevealed {
            section: SectionId::Behavior,
        });
        assert_eq!(
            events.recv().await.expect("event"),
            ViewEvent::SectionRevealed {
                section: SectionId::Behavior
            }
        );
    }
}
