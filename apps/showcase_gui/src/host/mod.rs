//! Page host backing the coordinator's layout queries with egui geometry.
//!
//! Section offsets are recorded while the page is laid out each frame and
//! read back by the coordinator on the next notification. Smooth-scroll
//! requests are forwarded to the UI thread, which owns the scroll area.

use std::sync::Mutex;

use crossbeam_channel::{Sender, TrySendError};
use shared::domain::SectionId;
use view_core::{SectionHost, SectionMeasure};

use crate::controller::events::ScrollCommand;

pub struct EguiPageHost {
    offsets: Mutex<[Option<f32>; SectionId::ALL.len()]>,
    scroll_tx: Sender<ScrollCommand>,
}

impl EguiPageHost {
    pub fn new(scroll_tx: Sender<ScrollCommand>) -> Self {
        Self {
            offsets: Mutex::new([None; SectionId::ALL.len()]),
            scroll_tx,
        }
    }

    /// Stores where `section` starts, relative to the top of the page content.
    pub fn record(&self, section: SectionId, offset: f32) {
        match self.offsets.lock() {
            Ok(mut offsets) => offsets[section.index()] = Some(offset),
            Err(_) => tracing::error!(%section, "section offset table poisoned"),
        }
    }
}

impl SectionMeasure for EguiPageHost {
    fn measure(&self, section: SectionId) -> Option<f32> {
        self.offsets
            .lock()
            .ok()
            .and_then(|offsets| offsets[section.index()])
    }
}

impl SectionHost for EguiPageHost {
    fn smooth_scroll_to(&self, section: SectionId, target_offset: f32) {
        let command = ScrollCommand::SmoothScrollTo {
            section,
            offset: target_offset,
        };
        match self.scroll_tx.try_send(command) {
            Ok(()) => tracing::debug!(%section, target_offset, "queued smooth scroll"),
            Err(TrySendError::Full(_)) => {
                tracing::warn!(%section, "scroll command queue is full; dropping request")
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::error!(%section, "scroll command queue disconnected")
            }
        }
    }
}
