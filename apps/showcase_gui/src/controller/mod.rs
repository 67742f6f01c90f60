//! Controller layer: UI actions, queueing, and the hand-off to the view coordinator.

pub mod events;
pub mod orchestration;
