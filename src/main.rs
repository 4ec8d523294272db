mod app;
mod chart;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use eframe::egui;

use app::LaunchboardApp;
use state::AppState;

/// Default input file, looked up in the working directory.
const DEFAULT_DATA_PATH: &str = "spacex_launch_dash.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());

    // Load failure is fatal: the UI never starts without a dataset.
    let dataset = data::loader::load_file(Path::new(&path))
        .with_context(|| format!("loading launch records from {path}"))?;
    log::info!(
        "Loaded {} launch records across {} sites (payload {:.0}–{:.0} kg)",
        dataset.len(),
        dataset.sites.len(),
        dataset.min_payload,
        dataset.max_payload,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let state = AppState::new(dataset);
    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("starting UI: {e}"))
}
