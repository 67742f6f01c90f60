//! Wireframe eagle drawn with the egui painter.
//!
//! The silhouette lives in model space within ±0.4 on each axis. Each frame
//! it is scaled, spun about Y, moved to the bobbing position and projected
//! through the perspective camera of the current viewport profile. The
//! container presentation then fades, shrinks and tilts the projected shape.

use glam::{Quat, Vec3};
use shared::domain::ViewportClass;
use view_core::{ContainerPresentation, ModelTransform, ResponsiveProfile};

use crate::ui::theme;

const NEAR_PLANE: f32 = 0.1;

const EAGLE_POINTS: [Vec3; 12] = [
    Vec3::new(0.0, 0.32, 0.30),   // crest
    Vec3::new(0.0, 0.22, 0.36),   // head
    Vec3::new(0.0, 0.14, 0.40),   // beak
    Vec3::new(0.0, 0.10, 0.18),   // neck
    Vec3::new(0.0, 0.0, 0.0),     // body
    Vec3::new(0.0, -0.12, -0.40), // tail
    Vec3::new(-0.40, 0.12, -0.05),
    Vec3::new(-0.20, 0.06, 0.06),
    Vec3::new(0.40, 0.12, -0.05),
    Vec3::new(0.20, 0.06, 0.06),
    Vec3::new(-0.08, -0.28, 0.04),
    Vec3::new(0.08, -0.28, 0.04),
];

const EAGLE_EDGES: [(usize, usize); 14] = [
    (0, 1),
    (1, 2),
    (1, 3),
    (3, 4),
    (4, 5),
    (4, 7),
    (7, 6),
    (6, 5),
    (4, 9),
    (9, 8),
    (8, 5),
    (3, 7),
    (4, 10),
    (4, 11),
];

/// Moves a model-space point into world space.
pub fn to_world(point: Vec3, transform: &ModelTransform) -> Vec3 {
    Quat::from_rotation_y(transform.rotation_y) * (point * transform.scale)
        + transform.translation()
}

/// Projects a world-space point into `rect`. The camera looks down -Z.
/// Returns `None` for points at or behind the near plane.
pub fn project(world: Vec3, profile: &ResponsiveProfile, rect: egui::Rect) -> Option<egui::Pos2> {
    let view = world - profile.camera_position;
    let depth = -view.z;
    if depth <= NEAR_PLANE {
        return None;
    }
    let focal = 1.0 / (profile.camera_fov_deg.to_radians() * 0.5).tan();
    let aspect = rect.width() / rect.height().max(1.0);
    let ndc_x = view.x / depth * focal / aspect;
    let ndc_y = view.y / depth * focal;
    Some(egui::pos2(
        rect.center().x + ndc_x * rect.width() * 0.5,
        rect.center().y - ndc_y * rect.height() * 0.5,
    ))
}

/// Applies the container's scale and Y tilt around the centre of `rect`.
pub fn present(point: egui::Pos2, rect: egui::Rect, container: &ContainerPresentation) -> egui::Pos2 {
    let squash = container.rotate_y_deg.to_radians().cos();
    let center = rect.center();
    egui::pos2(
        center.x + (point.x - center.x) * container.scale * squash,
        center.y + (point.y - center.y) * container.scale,
    )
}

pub fn show(
    ui: &mut egui::Ui,
    size: egui::Vec2,
    frame: Option<ModelTransform>,
    class: Option<ViewportClass>,
    container: ContainerPresentation,
) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let (Some(transform), Some(class)) = (frame, class) else {
        ui.put(
            egui::Rect::from_center_size(rect.center(), egui::vec2(40.0, 40.0)),
            egui::Spinner::new().size(32.0).color(theme::ACCENT),
        );
        return;
    };

    let profile = ResponsiveProfile::for_class(class);
    let painter = ui.painter_at(rect);
    let color = theme::ACCENT.gamma_multiply(container.opacity);
    let stroke = egui::Stroke::new(2.0, color);

    let projected: Vec<Option<egui::Pos2>> = EAGLE_POINTS
        .iter()
        .map(|point| {
            project(to_world(*point, &transform), &profile, rect)
                .map(|screen| present(screen, rect, &container))
        })
        .collect();

    for (from, to) in EAGLE_EDGES {
        if let (Some(a), Some(b)) = (projected[from], projected[to]) {
            painter.line_segment([a, b], stroke);
        }
    }
    for point in projected.iter().flatten() {
        painter.circle_filled(*point, 2.5, color);
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn viewport() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn point_on_camera_axis_lands_on_horizontal_centre() {
        let profile = ResponsiveProfile::DESKTOP;
        let world = Vec3::new(profile.camera_position.x, profile.camera_position.y, 0.0);
        let screen = project(world, &profile, viewport()).expect("in front of camera");
        assert!((screen.x - 400.0).abs() < 1e-3);
        assert!((screen.y - 300.0).abs() < 1e-3);
    }

    #[test]
    fn points_behind_camera_are_culled() {
        let profile = ResponsiveProfile::MOBILE;
        let behind = profile.camera_position + Vec3::Z;
        assert!(project(behind, &profile, viewport()).is_none());
    }

    #[test]
    fn quarter_turn_moves_wing_tip_onto_depth_axis() {
        let transform = ModelTransform {
            rotation_y: FRAC_PI_2,
            bob_y: 0.0,
            scale: 1.0,
            base_position: Vec3::ZERO,
        };
        let tip = to_world(Vec3::new(0.4, 0.0, 0.0), &transform);
        assert!(tip.x.abs() < 1e-5);
        assert!((tip.z + 0.4).abs() < 1e-5);
    }

    #[test]
    fn hidden_container_pulls_points_toward_centre() {
        let rect = viewport();
        let point = egui::pos2(700.0, 100.0);
        let shown = present(point, rect, &ContainerPresentation::new(0.0, true));
        let hidden = present(point, rect, &ContainerPresentation::new(0.0, false));
        assert_eq!(shown, point);
        assert!((hidden.x - rect.center().x).abs() < (point.x - rect.center().x).abs());
        assert!((hidden.y - rect.center().y).abs() < (point.y - rect.center().y).abs());
    }
}
