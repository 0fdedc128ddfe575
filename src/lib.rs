//! House trophy timeline
//!
//! Scroll-driven timeline of Gir's results across the Saavan, Margazhi and
//! Paradox fests:
//! - `core`: the fixed fest catalog, derived statistics, scroll-to-index mapping
//! - `app` (feature `gui`): the egui view, built for the browser (`wasm`) or a
//!   native window (`native`)

pub mod core;

#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
pub mod theme;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
mod web {
    use tracing::error;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::{AppConfig, TimelineApp};

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();

        // Initialize tracing for browser console
        tracing_wasm::set_as_global_default();

        let web_options = eframe::WebOptions::default();
        let config = AppConfig::from_env();

        wasm_bindgen_futures::spawn_local(async move {
            let canvas = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("canvas"))
                .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok());

            let Some(canvas) = canvas else {
                error!("No <canvas id=\"canvas\"> element found");
                return;
            };

            let started = eframe::WebRunner::new()
                .start(
                    canvas,
                    web_options,
                    Box::new(move |cc| Ok(Box::new(TimelineApp::new(cc, config)))),
                )
                .await;

            if let Err(e) = started {
                error!(error = ?e, "Failed to start eframe");
            }
        });
    }
}
