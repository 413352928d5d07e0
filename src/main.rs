#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use paint_brush::{CanvasConfig, PaintApp};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = CanvasConfig::from_env();
    log::info!("Starting with a {}x{} canvas", config.width, config.height);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([950.0, 700.0])
            .with_min_inner_size([400.0, 300.0])
            .with_title("Paint Brush"),
        ..Default::default()
    };
    eframe::run_native(
        "Paint Brush",
        native_options,
        Box::new(|cc| Ok(Box::new(PaintApp::new(cc, config)?))),
    )
}
