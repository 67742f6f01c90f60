use std::{sync::Arc, time::Duration};

use crossbeam_channel::{Receiver, Sender};
use shared::{
    domain::{ScrollSample, SectionId, ViewportSize},
    protocol::{HostNotification, ViewEvent, ViewSnapshot},
};
use tokio::sync::broadcast;
use view_core::{ContainerPresentation, ModelClock, SmoothScroll, ViewCoordinator};

use crate::{
    controller::{
        events::{ScrollCommand, UiAction},
        orchestration::{drain_actions, queue_action},
    },
    host::EguiPageHost,
    ui::{content, model_view, theme},
};

const PAGE_SCROLL_ID: &str = "showcase_page";
const MIN_HERO_HEIGHT: f32 = 480.0;

pub struct ShowcaseApp {
    coordinator: ViewCoordinator,
    host: Arc<EguiPageHost>,
    events: broadcast::Receiver<ViewEvent>,
    action_tx: Sender<UiAction>,
    action_rx: Receiver<UiAction>,
    scroll_rx: Receiver<ScrollCommand>,
    animation: Option<SmoothScroll>,
    clock: Option<ModelClock>,
    last_viewport: Option<ViewportSize>,
    last_sample: Option<ScrollSample>,
    status: Option<String>,
}

impl ShowcaseApp {
    pub fn new(
        ctx: &egui::Context,
        coordinator: ViewCoordinator,
        host: Arc<EguiPageHost>,
        actions: (Sender<UiAction>, Receiver<UiAction>),
        scroll_rx: Receiver<ScrollCommand>,
    ) -> Self {
        theme::apply(ctx);
        let events = coordinator.subscribe_events();
        let (action_tx, action_rx) = actions;
        Self {
            coordinator,
            host,
            events,
            action_tx,
            action_rx,
            scroll_rx,
            animation: None,
            clock: None,
            last_viewport: None,
            last_sample: None,
            status: None,
        }
    }

    fn queue(&mut self, action: UiAction) {
        queue_action(&self.action_tx, action, &mut self.status);
    }

    fn process_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            tracing::debug!(?event, "view event");
            match event {
                ViewEvent::NavigationSkipped { section } => {
                    self.status = Some(format!("The {section} section is not on the page yet"));
                }
                ViewEvent::NavigationRequested { .. } => self.status = None,
                ViewEvent::ViewportClassChanged { current, .. } => {
                    if self.clock.is_none() {
                        tracing::info!(class = ?current, "model mounted");
                        self.clock = Some(ModelClock::start());
                    }
                }
                _ => {}
            }
        }
    }

    /// Starts or redirects the page animation for queued scroll commands.
    fn process_scroll_commands(&mut self, now: f32) {
        while let Ok(ScrollCommand::SmoothScrollTo { section, offset }) = self.scroll_rx.try_recv()
        {
            tracing::debug!(%section, offset, "animating page scroll");
            self.animation = Some(match self.animation {
                Some(running) => running.retarget(offset, now),
                None => {
                    let from = self.last_sample.map_or(0.0, |sample| sample.scroll_offset);
                    SmoothScroll::new(from, offset, now)
                }
            });
        }
    }

    /// Offset the scroll area is driven to this frame, if animating.
    fn animated_offset(&mut self, ctx: &egui::Context, now: f32) -> Option<f32> {
        let user_scrolled = ctx.input(|i| i.smooth_scroll_delta.y != 0.0);
        if user_scrolled && self.animation.take().is_some() {
            tracing::debug!("page animation interrupted by user scroll");
            return None;
        }
        let animation = self.animation?;
        let (offset, done) = animation.offset_at(now);
        if done {
            self.animation = None;
        }
        Some(offset)
    }

    fn show_nav_bar(&mut self, ctx: &egui::Context, snapshot: &ViewSnapshot) -> egui::Rect {
        let frame = egui::Frame::NONE
            .fill(theme::nav_fill(snapshot.nav_scrolled))
            .inner_margin(egui::Margin::symmetric(24, 12));
        let mut clicked = None;
        let response = egui::TopBottomPanel::top("nav_bar")
            .frame(frame)
            .show_separator_line(snapshot.nav_scrolled)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let brand = egui::RichText::new(content::HERO_TITLE)
                        .strong()
                        .size(20.0)
                        .color(theme::ACCENT);
                    if ui.add(egui::Button::new(brand).frame(false)).clicked() {
                        clicked = Some(UiAction::Navigate(SectionId::Hero));
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if snapshot.is_mobile() {
                            let icon = if snapshot.mobile_menu_open { "✕" } else { "☰" };
                            if ui.button(egui::RichText::new(icon).size(18.0)).clicked() {
                                clicked = Some(UiAction::ToggleMobileMenu);
                            }
                            return;
                        }
                        for section in SectionId::ALL.iter().rev() {
                            if nav_item(ui, *section, snapshot.active_section).clicked() {
                                clicked = Some(UiAction::Navigate(*section));
                            }
                        }
                    });
                });
            })
            .response;
        if let Some(action) = clicked {
            self.queue(action);
        }
        response.rect
    }

    fn show_mobile_menu(&mut self, ctx: &egui::Context, snapshot: &ViewSnapshot, nav_rect: egui::Rect) {
        if !(snapshot.mobile_menu_open && snapshot.is_mobile()) {
            return;
        }
        let mut clicked = None;
        let menu = egui::TopBottomPanel::top("mobile_menu")
            .frame(
                egui::Frame::NONE
                    .fill(theme::CARD.gamma_multiply(0.95))
                    .inner_margin(egui::Margin::symmetric(24, 10)),
            )
            .show(ctx, |ui| {
                for section in SectionId::ALL {
                    if nav_item(ui, section, snapshot.active_section).clicked() {
                        clicked = Some(UiAction::Navigate(section));
                    }
                }
            })
            .response;

        let outside_click = ctx.input(|i| {
            i.pointer.primary_clicked()
                && i.pointer
                    .interact_pos()
                    .is_some_and(|pos| !menu.rect.contains(pos) && !nav_rect.contains(pos))
        });
        if let Some(action) = clicked {
            self.queue(action);
        } else if outside_click {
            self.queue(UiAction::CloseMobileMenu);
        }
    }

    fn show_status(&mut self, ctx: &egui::Context) {
        let Some(message) = self.status.clone() else {
            return;
        };
        egui::TopBottomPanel::bottom("status_strip")
            .frame(
                egui::Frame::NONE
                    .fill(theme::CARD)
                    .inner_margin(egui::Margin::symmetric(16, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(message).color(theme::MUTED));
                    if ui.small_button("Dismiss").clicked() {
                        self.status = None;
                    }
                });
            });
    }

    /// Lays out the page and reports what the host observed this frame.
    fn show_page(
        &mut self,
        ctx: &egui::Context,
        snapshot: &ViewSnapshot,
        forced_offset: Option<f32>,
        elapsed_secs: Option<f32>,
    ) -> (ViewportSize, ScrollSample) {
        let viewport_height = self
            .last_viewport
            .map_or(MIN_HERO_HEIGHT, |size| size.height.max(MIN_HERO_HEIGHT));
        let mut actions = Vec::new();

        let output = egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme::BACKGROUND))
            .show(ctx, |ui| {
                let mut area = egui::ScrollArea::vertical()
                    .id_salt(PAGE_SCROLL_ID)
                    .auto_shrink([false, false]);
                if let Some(offset) = forced_offset {
                    area = area.vertical_scroll_offset(offset);
                }
                area.show(ui, |ui| {
                    let origin = ui.cursor().top();
                    for section in SectionId::ALL {
                        self.host.record(section, ui.cursor().top() - origin);
                        match section {
                            SectionId::Hero => show_hero(
                                ui,
                                snapshot,
                                &self.coordinator,
                                elapsed_secs,
                                viewport_height,
                                &mut actions,
                            ),
                            _ => show_section(ui, snapshot, section, viewport_height),
                        }
                    }
                    show_footer(ui);
                })
            })
            .inner;

        for action in actions {
            self.queue(action);
        }

        let viewport = ViewportSize {
            width: output.inner_rect.width(),
            height: output.inner_rect.height(),
        };
        let sample = ScrollSample {
            scroll_offset: output.state.offset.y,
            document_height: output.content_size.y,
            viewport_height: viewport.height,
        };
        (viewport, sample)
    }

    /// Sends resize and scroll notifications when the observed geometry moved.
    fn report_geometry(&mut self, viewport: ViewportSize, sample: ScrollSample) {
        if self.last_viewport != Some(viewport) {
            self.last_viewport = Some(viewport);
            if let Err(err) = self.coordinator.apply(HostNotification::Resize(viewport)) {
                tracing::warn!("resize rejected: {err}");
            }
        }
        if self.last_sample != Some(sample) {
            self.last_sample = Some(sample);
            if let Err(err) = self.coordinator.apply(HostNotification::Scroll(sample)) {
                tracing::warn!("scroll sample rejected: {err}");
            }
        }
    }
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time) as f32;

        drain_actions(&self.action_rx, &mut self.coordinator);
        self.process_events();
        self.process_scroll_commands(now);
        let forced_offset = self.animated_offset(ctx, now);

        let snapshot = self.coordinator.snapshot();
        let elapsed_secs = self.clock.map(|clock| clock.elapsed_secs());
        let nav_rect = self.show_nav_bar(ctx, &snapshot);
        self.show_mobile_menu(ctx, &snapshot, nav_rect);
        self.show_status(ctx);
        let (viewport, sample) = self.show_page(ctx, &snapshot, forced_offset, elapsed_secs);
        self.report_geometry(viewport, sample);

        if self.animation.is_some() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}

fn nav_item(ui: &mut egui::Ui, section: SectionId, active: SectionId) -> egui::Response {
    let color = if section == active {
        theme::ACCENT
    } else {
        theme::MUTED
    };
    let mut text = egui::RichText::new(content::nav_label(section)).color(color);
    if section == active {
        text = text.strong();
    }
    ui.add(egui::Button::new(text).frame(false))
}

/// The hero model stays fully shown while the page scrolls; only the tilt
/// follows progress.
fn hero_container(snapshot: &ViewSnapshot) -> ContainerPresentation {
    ContainerPresentation::new(snapshot.scroll_progress, true)
}

fn show_hero(
    ui: &mut egui::Ui,
    snapshot: &ViewSnapshot,
    coordinator: &ViewCoordinator,
    elapsed_secs: Option<f32>,
    viewport_height: f32,
    actions: &mut Vec<UiAction>,
) {
    ui.vertical_centered(|ui| {
        ui.set_min_height(viewport_height);
        ui.add_space(24.0);
        ui.label(
            egui::RichText::new(content::HERO_TITLE)
                .size(if snapshot.is_mobile() { 48.0 } else { 72.0 })
                .strong()
                .color(theme::ACCENT),
        );
        ui.label(egui::RichText::new(content::HERO_SUBTITLE).size(22.0));
        ui.add_space(12.0);

        let frame = elapsed_secs.and_then(|elapsed| coordinator.model_frame(elapsed));
        let container = hero_container(snapshot);
        let height = if snapshot.is_mobile() { 260.0 } else { 360.0 };
        let size = egui::vec2(ui.available_width().min(640.0), height);
        model_view::show(ui, size, frame, snapshot.viewport_class, container);

        ui.add_space(12.0);
        ui.horizontal_wrapped(|ui| {
            for badge in content::HERO_BADGES {
                egui::Frame::new()
                    .fill(theme::CARD)
                    .corner_radius(12.0)
                    .inner_margin(egui::Margin::symmetric(10, 6))
                    .show(ui, |ui| ui.label(*badge));
            }
        });
        ui.add_space(16.0);
        ui.horizontal(|ui| {
            if ui.button("Discover more").clicked() {
                actions.push(UiAction::ScrollToNext);
            }
            if ui.button("Conservation").clicked() {
                actions.push(UiAction::NavigateToConservation);
            }
        });
        ui.add_space(24.0);
        let hint = egui::RichText::new(format!("{} ⌄", content::SCROLL_HINT)).color(theme::MUTED);
        if ui.add(egui::Button::new(hint).frame(false)).clicked() {
            actions.push(UiAction::ScrollToNext);
        }
    });
}

fn show_section(ui: &mut egui::Ui, snapshot: &ViewSnapshot, section: SectionId, min_height: f32) {
    let Some(copy) = content::section_copy(section) else {
        return;
    };
    let revealed = snapshot.is_revealed(section);
    let opacity = ui.ctx().animate_bool_with_time(
        egui::Id::new(("section_reveal", section.as_str())),
        revealed,
        0.6,
    );
    let card_width = if snapshot.is_mobile() { (ui.available_width() - 32.0).max(160.0) } else { 280.0 };

    ui.scope(|ui| {
        ui.multiply_opacity(opacity);
        ui.set_min_height(min_height * 0.8);
        egui::Frame::NONE
            .inner_margin(egui::Margin::symmetric(24, 32))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(copy.heading)
                        .size(32.0)
                        .strong()
                        .color(theme::ACCENT),
                );
                ui.label(egui::RichText::new(copy.lead).color(theme::MUTED));
                ui.add_space(16.0);
                ui.horizontal_wrapped(|ui| {
                    for card in copy.cards {
                        egui::Frame::new()
                            .fill(theme::CARD)
                            .corner_radius(12.0)
                            .inner_margin(egui::Margin::symmetric(16, 14))
                            .show(ui, |ui| {
                                ui.set_width(card_width);
                                ui.label(egui::RichText::new(card.title).strong().color(theme::ACCENT));
                                ui.label(card.body);
                            });
                    }
                });
                ui.add_space(16.0);
                egui::Grid::new(("section_facts", section.as_str()))
                    .num_columns(2)
                    .spacing([24.0, 6.0])
                    .show(ui, |ui| {
                        for fact in copy.facts {
                            ui.label(egui::RichText::new(fact.label).color(theme::MUTED));
                            ui.label(egui::RichText::new(fact.value).strong());
                            ui.end_row();
                        }
                    });
            });
    });
}

fn show_footer(ui: &mut egui::Ui) {
    egui::Frame::new()
        .fill(theme::CARD)
        .inner_margin(egui::Margin::symmetric(24, 24))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Quick facts").strong().color(theme::ACCENT));
            for fact in content::FOOTER_FACTS {
                ui.label(format!("{}: {}", fact.label, fact.value));
            }
            ui.add_space(12.0);
            ui.label(egui::RichText::new("Conservation").strong().color(theme::ACCENT));
            for partner in content::CONSERVATION_PARTNERS {
                ui.label(format!("{} · {}", partner.title, partner.body));
            }
        });
}
