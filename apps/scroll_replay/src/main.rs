use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use shared::{
    domain::{ScrollSample, SectionAnchor, SectionId, ViewportClass, ViewportSize},
    error::ErrorReport,
    protocol::{HostNotification, ViewEvent, ViewSnapshot},
};
use tokio::sync::broadcast;
use tokio_stream::wrappers::{BroadcastStream, WatchStream};
use tracing_subscriber::EnvFilter;
use view_core::{
    spawn_coordinator, CoordinatorError, ModelOrientationDriver, ModelTransform, SectionHost,
    SectionMeasure, SmoothScroll, ViewCoordinator, ViewSettings,
};

const NAVIGATION_TIMEOUT: Duration = Duration::from_secs(2);

/// Replays a recorded scroll trace through the view coordinator and prints
/// snapshots and events as JSON lines.
#[derive(Parser, Debug)]
struct Args {
    /// JSON trace: layout plus a list of host notifications.
    #[arg(long)]
    trace: PathBuf,
    /// Settings file; defaults to ./showcase.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Scroll samples emitted per smooth-scroll request.
    #[arg(long, default_value_t = 12)]
    scroll_frames: usize,
    /// Also print every committed snapshot.
    #[arg(long)]
    snapshots: bool,
    /// Print the model transform at this many seconds after mount.
    #[arg(long)]
    model_at: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct Trace {
    document_height: f32,
    viewport: ViewportSize,
    anchors: Vec<SectionAnchor>,
    steps: Vec<HostNotification>,
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum OutputLine<'a> {
    Event { event: &'a ViewEvent },
    Snapshot { snapshot: &'a ViewSnapshot },
    Rejected { step: usize, error: ErrorReport },
    Final { snapshot: &'a ViewSnapshot },
    Model {
        elapsed_secs: f32,
        viewport_class: ViewportClass,
        transform: ModelTransform,
    },
}

fn emit(line: &OutputLine<'_>) {
    match serde_json::to_string(line) {
        Ok(json) => println!("{json}"),
        Err(err) => tracing::error!("failed to encode output line: {err}"),
    }
}

/// Static layout from the trace. Smooth-scroll requests park the latest
/// target; a newer request replaces an older one.
struct TraceLayout {
    anchors: Vec<SectionAnchor>,
    pending_target: Mutex<Option<f32>>,
}

impl TraceLayout {
    fn take_pending(&self) -> Option<f32> {
        self.pending_target
            .lock()
            .map(|mut target| target.take())
            .unwrap_or_default()
    }
}

impl SectionMeasure for TraceLayout {
    fn measure(&self, section: SectionId) -> Option<f32> {
        self.anchors
            .iter()
            .find(|anchor| anchor.id == section)
            .map(|anchor| anchor.vertical_offset)
    }
}

impl SectionHost for TraceLayout {
    fn smooth_scroll_to(&self, section: SectionId, target_offset: f32) {
        tracing::debug!(section = %section, target_offset, "smooth scroll requested");
        if let Ok(mut target) = self.pending_target.lock() {
            *target = Some(target_offset);
        }
    }
}

/// Page geometry as the replayed host currently sees it.
#[derive(Debug, Clone, Copy)]
struct PageGeometry {
    offset: f32,
    document_height: f32,
    viewport: ViewportSize,
}

impl PageGeometry {
    fn new(trace: &Trace) -> Self {
        Self {
            offset: 0.0,
            document_height: trace.document_height,
            viewport: trace.viewport,
        }
    }

    /// Follows scroll and resize steps so later synthetic samples agree with
    /// what the coordinator last committed.
    fn observe(&mut self, notification: &HostNotification) {
        match notification {
            HostNotification::Scroll(sample) => {
                self.offset = sample.scroll_offset;
                self.document_height = sample.document_height;
                self.viewport.height = sample.viewport_height;
            }
            HostNotification::Resize(size) => self.viewport = *size,
            _ => {}
        }
    }

    /// Samples for an eased scroll to `target`; the page ends up there.
    fn smooth_scroll(&mut self, target: f32, frames: usize) -> Vec<ScrollSample> {
        let samples = SmoothScroll::new(self.offset, target, 0.0)
            .frames(frames)
            .into_iter()
            .map(|scroll_offset| ScrollSample {
                scroll_offset,
                document_height: self.document_height,
                viewport_height: self.viewport.height,
            })
            .collect();
        self.offset = target;
        samples
    }
}

fn is_navigation(notification: &HostNotification) -> bool {
    matches!(
        notification,
        HostNotification::Navigate { .. }
            | HostNotification::ScrollToNext
            | HostNotification::NavigateToConservation
    )
}

/// Waits until the coordinator has handled a navigation step.
async fn wait_for_navigation_outcome(events: &mut broadcast::Receiver<ViewEvent>) {
    let outcome = tokio::time::timeout(NAVIGATION_TIMEOUT, async {
        loop {
            match events.recv().await {
                Ok(ViewEvent::NavigationRequested { .. } | ViewEvent::NavigationSkipped { .. }) => {
                    return;
                }
                Ok(_) | Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return,
            }
        }
    })
    .await;
    if outcome.is_err() {
        tracing::warn!("navigation step was not acknowledged in time");
    }
}

fn load_trace(path: &Path) -> Result<Trace> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read trace '{}'", path.display()))?;
    let mut trace: Trace = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse trace '{}'", path.display()))?;
    trace
        .anchors
        .sort_by(|a, b| a.id.index().cmp(&b.id.index()));
    Ok(trace)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings: ViewSettings = match &args.config {
        Some(path) => view_core::load_settings_from(path)?,
        None => view_core::load_settings(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .with_writer(std::io::stderr)
        .init();

    let trace = load_trace(&args.trace)?;
    tracing::info!(
        steps = trace.steps.len(),
        anchors = trace.anchors.len(),
        "replaying scroll trace"
    );

    let layout = Arc::new(TraceLayout {
        anchors: trace.anchors.clone(),
        pending_target: Mutex::new(None),
    });
    let coordinator = ViewCoordinator::new(&settings, layout.clone());
    let (handle, task) = spawn_coordinator(coordinator, settings.event_capacity);

    let events = BroadcastStream::new(handle.subscribe_events());
    let printer = tokio::spawn(async move {
        events
            .for_each(|event| async move {
                match event {
                    Ok(event) => emit(&OutputLine::Event { event: &event }),
                    Err(err) => tracing::warn!("event stream lagged: {err}"),
                }
            })
            .await;
    });
    let snapshot_printer = args.snapshots.then(|| {
        let snapshots = WatchStream::from_changes(handle.subscribe());
        tokio::spawn(async move {
            snapshots
                .for_each(|snapshot| async move {
                    emit(&OutputLine::Snapshot {
                        snapshot: &snapshot,
                    })
                })
                .await;
        })
    });

    handle
        .notify(HostNotification::Resize(trace.viewport))
        .await
        .context("coordinator stopped before replay started")?;

    let mut page = PageGeometry::new(&trace);
    for (step, notification) in trace.steps.into_iter().enumerate() {
        if notification.validate().is_ok() {
            page.observe(&notification);
        }
        let navigates = is_navigation(&notification);
        let mut outcomes = handle.subscribe_events();
        match handle.notify(notification).await {
            Ok(()) => {}
            Err(CoordinatorError::Rejected(err)) => {
                emit(&OutputLine::Rejected {
                    step,
                    error: ErrorReport::from(&err),
                });
                continue;
            }
            Err(err) => return Err(err).context("coordinator stopped during replay"),
        }
        if !navigates {
            continue;
        }

        wait_for_navigation_outcome(&mut outcomes).await;
        if let Some(target) = layout.take_pending() {
            for sample in page.smooth_scroll(target, args.scroll_frames) {
                handle
                    .notify(HostNotification::Scroll(sample))
                    .await
                    .context("coordinator stopped during smooth scroll")?;
            }
        }
    }

    drop(handle);
    let last = task.await.context("view coordinator task failed")?;
    printer.await.context("event printer failed")?;
    if let Some(snapshot_printer) = snapshot_printer {
        snapshot_printer
            .await
            .context("snapshot printer failed")?;
    }
    emit(&OutputLine::Final { snapshot: &last });

    if let Some(elapsed_secs) = args.model_at {
        let viewport_class = last.viewport_class.unwrap_or_default();
        let transform =
            ModelOrientationDriver.frame(last.scroll_progress, elapsed_secs, viewport_class);
        emit(&OutputLine::Model {
            elapsed_secs,
            viewport_class,
            transform,
        });
    }

    Ok(())
}
