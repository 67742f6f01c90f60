use std::sync::{Arc, Mutex};

use shared::{
    domain::{ScrollSample, SectionId, ViewportSize},
    protocol::{HostNotification, ViewEvent},
};
use view_core::{spawn_coordinator, SectionHost, SectionMeasure, ViewCoordinator, ViewSettings};

/// Layout that jumps straight to the requested offset, like a host with
/// smooth scrolling disabled.
struct JumpingLayout {
    anchors: [(SectionId, f32); 4],
    pending: Mutex<Vec<f32>>,
}

impl SectionMeasure for JumpingLayout {
    fn measure(&self, section: SectionId) -> Option<f32> {
        self.anchors
            .iter()
            .find(|(id, _)| *id == section)
            .map(|(_, offset)| *offset)
    }
}

impl SectionHost for JumpingLayout {
    fn smooth_scroll_to(&self, _section: SectionId, target_offset: f32) {
        self.pending.lock().expect("pending lock").push(target_offset);
    }
}

#[tokio::test]
async fn visitor_reads_page_then_jumps_back_to_characteristics() {
    let layout = Arc::new(JumpingLayout {
        anchors: [
            (SectionId::Hero, 0.0),
            (SectionId::Characteristics, 1000.0),
            (SectionId::Habitat, 2100.0),
            (SectionId::Behavior, 3300.0),
        ],
        pending: Mutex::new(Vec::new()),
    });
    let coordinator = ViewCoordinator::new(&ViewSettings::default(), layout.clone());
    let (handle, task) = spawn_coordinator(coordinator, 32);
    let mut events = handle.subscribe_events();

    let sample = |scroll_offset| {
        HostNotification::Scroll(ScrollSample {
            scroll_offset,
            document_height: 4400.0,
            viewport_height: 1000.0,
        })
    };

    handle
        .notify(HostNotification::Resize(ViewportSize {
            width: 1440.0,
            height: 1000.0,
        }))
        .await
        .expect("resize");
    for offset in [0.0, 900.0, 2000.0, 3400.0] {
        handle.notify(sample(offset)).await.expect("scroll");
    }
    handle
        .notify(HostNotification::Navigate {
            section: SectionId::Characteristics,
        })
        .await
        .expect("navigate");

    let mut seen = Vec::new();
    while let Ok(Ok(event)) =
        tokio::time::timeout(std::time::Duration::from_millis(500), events.recv()).await
    {
        let done = matches!(event, ViewEvent::NavigationRequested { .. });
        seen.push(event);
        if done {
            break;
        }
    }

    let visited: Vec<SectionId> = seen
        .iter()
        .filter_map(|event| match event {
            ViewEvent::ActiveSectionChanged { current, .. } => Some(*current),
            _ => None,
        })
        .collect();
    assert_eq!(
        visited,
        vec![
            SectionId::Characteristics,
            SectionId::Habitat,
            SectionId::Behavior
        ]
    );

    let target = layout
        .pending
        .lock()
        .expect("pending lock")
        .pop()
        .expect("scroll requested");
    assert_eq!(target, 1000.0);
    handle.notify(sample(target)).await.expect("scroll");

    drop(events);
    drop(handle);
    let last = task.await.expect("join");
    assert_eq!(last.active_section, SectionId::Characteristics);
    assert_eq!(last.scroll_progress, 1000.0 / 3400.0);
    assert_eq!(
        last.revealed,
        vec![
            SectionId::Characteristics,
            SectionId::Habitat,
            SectionId::Behavior
        ]
    );
}
