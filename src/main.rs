//! Golf Lesson Viewer - launch monitor shots and radar videos per lesson
//!
//! Pick a lesson folder, browse its shot table, and inspect a single shot's
//! metrics next to its radar video.

mod config;
mod data;
mod gui;
mod logging;

use anyhow::Context;
use clap::Parser;
use config::{Args, ViewerConfig};
use eframe::egui;
use gui::LessonViewerApp;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init();

    let base_dir = match args.base_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };
    let config = ViewerConfig::resolve(args.config.as_deref(), &base_dir)?;
    tracing::info!("Lessons folder: {}", base_dir.display());

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1300.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Golf Launch Monitor Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Golf Launch Monitor Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(LessonViewerApp::new(cc, config, base_dir)))),
    )
    .map_err(|e| anyhow::anyhow!("Window error: {}", e))
}
