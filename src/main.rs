//! Parley Client - a room chat client built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI
//! - Backend thread: runs a Tokio runtime for the WebSocket room channel
//! - Communication via crossbeam channels (lock-free, sync-safe)

use eframe::egui;

use parley_client::app::ParleyApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 620.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Parley",
        options,
        Box::new(|cc| Ok(Box::new(ParleyApp::new(cc)))),
    )
}
