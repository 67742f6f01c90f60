mod controller;
mod host;
mod ui;

use std::{path::PathBuf, sync::Arc};

use anyhow::{anyhow, Result};
use clap::Parser;
use crossbeam_channel::bounded;
use tracing_subscriber::EnvFilter;
use view_core::{ViewCoordinator, ViewSettings};

use crate::{
    controller::events::{ScrollCommand, UiAction},
    host::EguiPageHost,
    ui::app::ShowcaseApp,
};

const ACTION_QUEUE_CAPACITY: usize = 64;
const SCROLL_QUEUE_CAPACITY: usize = 8;

/// Desktop showcase window for the Harpy Eagle page.
#[derive(Parser, Debug)]
struct Args {
    /// Settings file; defaults to ./showcase.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Initial window width in logical pixels.
    #[arg(long, default_value_t = 1280.0)]
    width: f32,
    /// Initial window height in logical pixels.
    #[arg(long, default_value_t = 820.0)]
    height: f32,
}

fn load_settings(args: &Args) -> Result<ViewSettings> {
    match &args.config {
        Some(path) => view_core::load_settings_from(path),
        None => Ok(view_core::load_settings()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_settings(&args)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();
    tracing::info!(?settings, "starting showcase window");

    let (scroll_tx, scroll_rx) = bounded::<ScrollCommand>(SCROLL_QUEUE_CAPACITY);
    let actions = bounded::<UiAction>(ACTION_QUEUE_CAPACITY);
    let host = Arc::new(EguiPageHost::new(scroll_tx));
    let coordinator = ViewCoordinator::new(&settings, host.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Harpy Eagle")
            .with_inner_size([args.width, args.height])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Harpy Eagle Showcase",
        options,
        Box::new(move |cc| {
            Ok(Box::new(ShowcaseApp::new(
                &cc.egui_ctx,
                coordinator,
                host,
                actions,
                scroll_rx,
            )))
        }),
    )
    .map_err(|err| anyhow!("showcase window failed: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_size_defaults_apply() {
        let args = Args::try_parse_from(["showcase_gui"]).expect("args");
        assert_eq!((args.width, args.height), (1280.0, 820.0));
        assert!(args.config.is_none());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args = Args::try_parse_from(["showcase_gui", "--config", "/nonexistent/showcase.toml"])
            .expect("args");
        assert!(load_settings(&args).is_err());
    }
}
