//! # Valentine
//!
//! A single interactive page asking "will you be my valentine?" with a "Yes" button
//! and a "No" button that runs away from the pointer.
//!
//! ## Features
//! - Proximity-based evasion: the "No" button relocates whenever the pointer comes
//!   within reach of it, or is hovered or clicked
//! - Spring-eased movement of the evasive button
//! - One-way transition from the question to a celebration screen
//! - Runs natively through `eframe` and in the browser on the `valentine_canvas` canvas

#![warn(missing_docs)]
#![cfg_attr(not(target_arch = "wasm32"), deny(unsafe_code))]

mod constants;
mod evasion;
mod page;
mod types;
mod ui;

// Re-export public types and functions
pub use evasion::{EvasionConfig, EvasionController};
pub use page::ValentinePage;
pub use types::*;
pub use ui::{AppConfig, ValentineApp};

/// Runs the valentine page in a native window with default settings.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// use valentine::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
#[cfg(not(target_arch = "wasm32"))]
pub fn run_app() -> Result<(), eframe::Error> {
    run_app_with(AppConfig::default())
}

/// Runs the valentine page in a native window with the given configuration.
#[cfg(not(target_arch = "wasm32"))]
pub fn run_app_with(config: AppConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0])
            .with_title("Will you be my valentine?"),
        ..Default::default()
    };
    eframe::run_native(
        "Valentine",
        options,
        Box::new(move |_cc| Ok(Box::new(ValentineApp::new(config)))),
    )
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppConfig, ValentineApp};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    /// Id of the canvas element the page is mounted on.
    const CANVAS_ID: &str = "valentine_canvas";

    /// Browser entry point.
    #[wasm_bindgen(start)]
    pub fn start() {
        // Ignore the error if a logger is already installed
        let _ = eframe::WebLogger::init(log::LevelFilter::Debug);

        wasm_bindgen_futures::spawn_local(async {
            if let Err(err) = mount().await {
                log::error!("Failed to start valentine page: {err:?}");
            }
        });
    }

    async fn mount() -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let canvas = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("canvas element not found"))?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(ValentineApp::new(AppConfig::default())))),
            )
            .await
    }
}
