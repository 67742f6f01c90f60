use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;
use shared::domain::MOBILE_BREAKPOINT_PX;

use crate::{locator::LOOK_AHEAD_PX, scroll::NAV_SCROLLED_THRESHOLD_PX, state::DEFAULT_EVENT_CAPACITY};

pub const SETTINGS_FILE: &str = "showcase.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct ViewSettings {
    pub look_ahead_px: f32,
    pub mobile_breakpoint_px: f32,
    pub nav_scrolled_threshold_px: f32,
    pub event_capacity: usize,
    pub log_filter: String,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            look_ahead_px: LOOK_AHEAD_PX,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            nav_scrolled_threshold_px: NAV_SCROLLED_THRESHOLD_PX,
            event_capacity: DEFAULT_EVENT_CAPACITY,
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSettings {
    look_ahead_px: Option<f32>,
    mobile_breakpoint_px: Option<f32>,
    nav_scrolled_threshold_px: Option<f32>,
    event_capacity: Option<usize>,
    log_filter: Option<String>,
}

/// Defaults, then `showcase.toml` in the working directory, then `APP__*`
/// environment variables.
pub fn load_settings() -> ViewSettings {
    let mut settings = ViewSettings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        match apply_file_settings(&mut settings, &raw) {
            Ok(()) => tracing::debug!(file = SETTINGS_FILE, "loaded view settings"),
            Err(err) => tracing::warn!(file = SETTINGS_FILE, "ignoring settings file: {err:#}"),
        }
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    settings
}

/// Like [`load_settings`] but requires the given file to exist and parse.
pub fn load_settings_from(path: &Path) -> anyhow::Result<ViewSettings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    let mut settings = ViewSettings::default();
    apply_file_settings(&mut settings, &raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn apply_file_settings(settings: &mut ViewSettings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)?;
    if let Some(v) = file_cfg.look_ahead_px {
        settings.look_ahead_px = v;
    }
    if let Some(v) = file_cfg.mobile_breakpoint_px {
        settings.mobile_breakpoint_px = v;
    }
    if let Some(v) = file_cfg.nav_scrolled_threshold_px {
        settings.nav_scrolled_threshold_px = v;
    }
    if let Some(v) = file_cfg.event_capacity {
        settings.event_capacity = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    Ok(())
}

fn apply_env_overrides(settings: &mut ViewSettings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("APP__LOOK_AHEAD_PX").and_then(|v| v.trim().parse().ok()) {
        settings.look_ahead_px = v;
    }
    if let Some(v) = var("APP__MOBILE_BREAKPOINT_PX").and_then(|v| v.trim().parse().ok()) {
        settings.mobile_breakpoint_px = v;
    }
    if let Some(v) = var("APP__NAV_SCROLLED_THRESHOLD_PX").and_then(|v| v.trim().parse().ok()) {
        settings.nav_scrolled_threshold_px = v;
    }
    if let Some(v) = var("APP__EVENT_CAPACITY").and_then(|v| v.trim().parse().ok()) {
        settings.event_capacity = v;
    }
    if let Some(v) = var("RUST_LOG").or_else(|| var("APP__LOG_FILTER")) {
        if !v.trim().is_empty() {
            settings.log_filter = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        env,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_keep_the_two_hundred_pixel_look_ahead() {
        let settings = ViewSettings::default();
        assert_eq!(settings.look_ahead_px, 200.0);
        assert_eq!(settings.mobile_breakpoint_px, 768.0);
        assert_eq!(settings.nav_scrolled_threshold_px, 50.0);
    }

    #[test]
    fn file_values_override_defaults() {
        let mut settings = ViewSettings::default();
        apply_file_settings(
            &mut settings,
            "look_ahead_px = 120.0\nevent_capacity = 8\nlog_filter = \"view_core=debug\"\n",
        )
        .expect("parse");
        assert_eq!(settings.look_ahead_px, 120.0);
        assert_eq!(settings.event_capacity, 8);
        assert_eq!(settings.log_filter, "view_core=debug");
        assert_eq!(settings.mobile_breakpoint_px, 768.0);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut settings = ViewSettings::default();
        assert!(apply_file_settings(&mut settings, "look_ahead_px = \"far\"").is_err());
        assert_eq!(settings, ViewSettings::default());
    }

    #[test]
    fn env_overrides_ignore_unparseable_values() {
        let mut settings = ViewSettings::default();
        apply_env_overrides(
            &mut settings,
            env_from(&[
                ("APP__MOBILE_BREAKPOINT_PX", "1024"),
                ("APP__LOOK_AHEAD_PX", "not-a-number"),
                ("APP__LOG_FILTER", "warn"),
            ]),
        );
        assert_eq!(settings.mobile_breakpoint_px, 1024.0);
        assert_eq!(settings.look_ahead_px, 200.0);
        assert_eq!(settings.log_filter, "warn");
    }

    #[test]
    fn reports_missing_settings_file_with_path() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("showcase_missing_{suffix}.toml"));
        let err = load_settings_from(&path).expect_err("missing file");
        assert!(format!("{err:#}").contains("failed to read settings file"));
    }
}
