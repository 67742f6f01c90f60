//! Queueing helpers between widgets, the view coordinator and the page host.

use crossbeam_channel::{Receiver, Sender, TrySendError};
use view_core::ViewCoordinator;

use crate::controller::events::UiAction;

pub fn queue_action(action_tx: &Sender<UiAction>, action: UiAction, status: &mut Option<String>) {
    let name = action.name();
    match action_tx.try_send(action) {
        Ok(()) => tracing::debug!(action = name, "queued ui action"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(action = name, "ui action queue is full");
            *status = Some("Too many clicks at once; please retry".to_string());
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(action = name, "ui action queue disconnected");
            *status = Some("Navigation is unavailable".to_string());
        }
    }
}

/// Applies every queued action to `coordinator` in arrival order.
pub fn drain_actions(action_rx: &Receiver<UiAction>, coordinator: &mut ViewCoordinator) -> usize {
    let mut applied = 0;
    while let Ok(action) = action_rx.try_recv() {
        if let Err(err) = coordinator.apply(action.into_notification()) {
            tracing::warn!(action = action.name(), "ui action rejected: {err}");
            continue;
        }
        applied += 1;
    }
    applied
}
