//! Life Engine - Conway's Game of Life in WASM
//!
//! Toroidal B3/S23 board with mouse painting and play/pause/reset controls.
//!
//! Layout:
//! - core/       - grid storage, neighbor counting, random source
//! - domain/     - cell states, the rule, config, pointer input
//! - simulation/ - controller (start/stop/step), scheduler and render seams
//! - api/        - browser side: wasm-bindgen facade, canvas, DOM, frames

pub mod core;
pub mod domain;
pub mod simulation;
pub mod api;

use std::sync::Once;

use wasm_bindgen::prelude::*;

static LOGGER: Once = Once::new();

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logging. Safe to call twice.
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    LOGGER.call_once(|| wasm_logger::init(wasm_logger::Config::default()));

    log::info!("🦀 Life engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::api::wasm::LifeApp;
pub use crate::core::grid::Grid;
pub use crate::domain::cell::CellState;
pub use crate::domain::config::LifeConfig;
pub use crate::simulation::{FrameHandle, RenderSink, Scheduler, Simulation};
