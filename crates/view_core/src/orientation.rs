//! Per-frame model transform: scroll-coupled rotation, idle bob and the
//! responsive presentation profile.

use std::{f32::consts::PI, time::Instant};

use glam::Vec3;
use serde::Serialize;
use shared::domain::ViewportClass;

/// Quarter turn across the whole document.
pub const ROTATION_SPAN: f32 = PI * 0.5;
pub const BOB_ANGULAR_FREQUENCY: f32 = 1.2;
pub const BOB_AMPLITUDE: f32 = 0.3;
/// Degrees of container tilt at full scroll.
pub const CONTAINER_TILT_DEG: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResponsiveProfile {
    pub scale: f32,
    pub base_position: Vec3,
    pub camera_position: Vec3,
    pub camera_fov_deg: f32,
}

impl ResponsiveProfile {
    pub const MOBILE: ResponsiveProfile = ResponsiveProfile {
        scale: 1.8,
        base_position: Vec3::new(0.0, -0.2, 0.0),
        camera_position: Vec3::new(0.0, 0.5, 5.0),
        camera_fov_deg: 50.0,
    };

    pub const DESKTOP: ResponsiveProfile = ResponsiveProfile {
        scale: 5.0,
        base_position: Vec3::new(0.0, -0.3, 0.0),
        camera_position: Vec3::new(0.0, 0.5, 10.0),
        camera_fov_deg: 75.0,
    };

    pub fn for_class(class: ViewportClass) -> Self {
        match class {
            ViewportClass::Mobile => Self::MOBILE,
            ViewportClass::Desktop => Self::DESKTOP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelTransform {
    pub rotation_y: f32,
    pub bob_y: f32,
    pub scale: f32,
    pub base_position: Vec3,
}

impl ModelTransform {
    /// The bob drives the vertical axis each frame and replaces the
    /// profile's base height; x and z come from the profile.
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.base_position.x, self.bob_y, self.base_position.z)
    }
}

/// Styling of the element that hosts the model canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContainerPresentation {
    pub opacity: f32,
    pub scale: f32,
    pub rotate_y_deg: f32,
}

impl ContainerPresentation {
    pub fn new(scroll_progress: f32, visible: bool) -> Self {
        let (opacity, scale) = if visible { (1.0, 1.0) } else { (0.7, 0.9) };
        Self {
            opacity,
            scale,
            rotate_y_deg: scroll_progress * CONTAINER_TILT_DEG,
        }
    }
}

pub fn rotation_y(scroll_progress: f32) -> f32 {
    scroll_progress * ROTATION_SPAN
}

pub fn bob_y(elapsed_secs: f32) -> f32 {
    (elapsed_secs * BOB_ANGULAR_FREQUENCY).sin() * BOB_AMPLITUDE
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ModelOrientationDriver;

impl ModelOrientationDriver {
    pub fn frame(
        &self,
        scroll_progress: f32,
        elapsed_secs: f32,
        class: ViewportClass,
    ) -> ModelTransform {
        let profile = ResponsiveProfile::for_class(class);
        ModelTransform {
            rotation_y: rotation_y(scroll_progress),
            bob_y: bob_y(elapsed_secs),
            scale: profile.scale,
            base_position: profile.base_position,
        }
    }
}

/// Wall-clock seconds since the model was mounted.
#[derive(Debug, Clone, Copy)]
pub struct ModelClock {
    mounted_at: Instant,
}

impl Default for ModelClock {
    fn default() -> Self {
        Self::start()
    }
}

impl ModelClock {
    pub fn start() -> Self {
        Self {
            mounted_at: Instant::now(),
        }
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.mounted_at.elapsed().as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn rotation_spans_a_quarter_turn() {
        assert_eq!(rotation_y(0.0), 0.0);
        assert!((rotation_y(1.0) - PI / 2.0).abs() < EPS);
        assert!((rotation_y(0.5) - PI / 4.0).abs() < EPS);
    }

    #[test]
    fn bob_peaks_at_amplitude_regardless_of_scroll() {
        let driver = ModelOrientationDriver;
        let crest = (PI / 2.0) / BOB_ANGULAR_FREQUENCY;
        let trough = (3.0 * PI / 2.0) / BOB_ANGULAR_FREQUENCY;

        for progress in [0.0, 0.4, 1.0] {
            let up = driver.frame(progress, crest, ViewportClass::Desktop);
            let down = driver.frame(progress, trough, ViewportClass::Desktop);
            assert!((up.bob_y - 0.3).abs() < EPS);
            assert!((down.bob_y + 0.3).abs() < EPS);
        }
    }

    #[test]
    fn responsive_profile_follows_viewport_class() {
        let driver = ModelOrientationDriver;
        let mobile = driver.frame(0.0, 0.0, ViewportClass::Mobile);
        assert_eq!(mobile.scale, 1.8);
        assert_eq!(mobile.base_position, Vec3::new(0.0, -0.2, 0.0));

        let desktop = driver.frame(0.0, 0.0, ViewportClass::Desktop);
        assert_eq!(desktop.scale, 5.0);
        assert_eq!(desktop.base_position, Vec3::new(0.0, -0.3, 0.0));
        assert_eq!(ResponsiveProfile::DESKTOP.camera_fov_deg, 75.0);
        assert_eq!(ResponsiveProfile::MOBILE.camera_position.z, 5.0);
    }

    #[test]
    fn translation_takes_height_from_bob() {
        let transform = ModelOrientationDriver.frame(0.0, 0.0, ViewportClass::Mobile);
        assert_eq!(transform.translation(), Vec3::ZERO);
    }

    #[test]
    fn container_dims_when_hidden() {
        let shown = ContainerPresentation::new(0.5, true);
        assert_eq!((shown.opacity, shown.scale), (1.0, 1.0));
        assert_eq!(shown.rotate_y_deg, 10.0);

        let hidden = ContainerPresentation::new(0.0, false);
        assert_eq!((hidden.opacity, hidden.scale), (0.7, 0.9));
    }
}
