use egui::Color32;

pub const ACCENT: Color32 = Color32::from_rgb(0xff, 0xc9, 0x47);
pub const BACKGROUND: Color32 = Color32::from_rgb(0x12, 0x16, 0x12);
pub const CARD: Color32 = Color32::from_rgb(0x1c, 0x22, 0x1c);
pub const TEXT: Color32 = Color32::from_rgb(0xee, 0xec, 0xe4);
pub const MUTED: Color32 = Color32::from_rgb(0x9a, 0xa0, 0x94);

/// Nav bar fill: transparent at the top of the page, solid once scrolled.
pub fn nav_fill(scrolled: bool) -> Color32 {
    if scrolled {
        CARD.gamma_multiply(0.95)
    } else {
        Color32::TRANSPARENT
    }
}

pub fn apply(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::dark();
    style.visuals.panel_fill = BACKGROUND;
    style.visuals.window_fill = CARD;
    style.visuals.override_text_color = Some(TEXT);
    style.visuals.selection.bg_fill = ACCENT.gamma_multiply(0.6);
    style.visuals.hyperlink_color = ACCENT;
    let radius = egui::CornerRadius::same(8);
    style.visuals.widgets.inactive.corner_radius = radius;
    style.visuals.widgets.hovered.corner_radius = radius;
    style.visuals.widgets.active.corner_radius = radius;
    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    ctx.set_style(style);
}
