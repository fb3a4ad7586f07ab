#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
// Entry point stays minimal: logger, config, window options, run the app.

use eframe::egui;

mod app;
mod config;
mod logger;
mod state;
mod theme;
mod types;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    logger::init();
    config::load_config_from_disk();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 560.0])
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        "Repository filters",
        native_options,
        Box::new(|_cc| Box::new(app::PanelApp::default())),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
