//! Native timeline window
//!
//! Run with: cargo run --bin timeline-view --features native

use house_timeline::app::{AppConfig, TimelineApp};
use house_timeline::core::validate_canonical;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> eframe::Result {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,house_timeline=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    if let Err(e) = validate_canonical() {
        warn!(error = %e, "Rendering the timeline despite invalid fest history");
    }

    let config = AppConfig::from_env();
    info!(animate = config.animate, "Opening timeline window");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Gir - House Trophy Timeline")
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "house-timeline",
        options,
        Box::new(move |cc| Ok(Box::new(TimelineApp::new(cc, config)))),
    )
}
