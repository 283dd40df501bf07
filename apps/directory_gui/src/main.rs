mod backend_bridge;
mod controller;
mod ui;

use anyhow::anyhow;
use clap::Parser;
use crossbeam_channel::bounded;
use directory_client::config::{load_settings, prepare_api_base_url};
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::DirectoryApp;

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the employee API; overrides directory.toml and the environment.
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter.unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let raw_api_url = args.api_url.unwrap_or(load_settings().api_base_url);
    let api_base_url = prepare_api_base_url(&raw_api_url)?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(1024);
    backend_bridge::runtime::launch(api_base_url.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Employee Directory")
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Employee Directory",
        options,
        Box::new(move |_cc| {
            let app = DirectoryApp::new(cmd_tx, ui_rx, api_base_url);
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow!("employee directory window failed: {err}"))
}
