//! Fortune wheel core crate.
//!
//! A browser canvas widget: equal-width sectors, a hidden weighted draw, and
//! a spin animation reconciled to stop the pre-drawn winner exactly under the
//! pointer. Selection, planning, and the spin state machine are pure Rust and
//! run under native `cargo test`; the `wheel` module wires them to the DOM,
//! canvas, and audio cues.

use wasm_bindgen::prelude::*;

pub mod wheel;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Default wheel data. Weights are hidden: more = more likely. Sectors render
// equal-width regardless, so the odds never show on screen.
// -----------------------------------------------------------------------------

pub const DEFAULT_OUTCOMES: &[(&str, u32)] = &[
    ("Kiss", 3),
    ("Spin Again", 1),
    ("Hug", 3),
    ("Slap", 2),
    ("Caress", 2),
    ("Gift", 1),
    ("Compliment", 2),
    ("Joke", 2),
];

pub const SEGMENT_COLORS: &[&str] = &[
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#8BC34A", "#E91E63",
];

// -----------------------------------------------------------------------------
// Unified entrypoints
// -----------------------------------------------------------------------------

/// Build the widget DOM and start the frame loop with the default wheel.
#[wasm_bindgen]
pub fn start_wheel() -> Result<(), JsValue> {
    wheel::start_wheel_mode(wheel::config::WheelConfig::default())
}

/// Same as [`start_wheel`] but configured from a JSON [`WheelConfig`]
/// (missing fields fall back to the defaults).
///
/// [`WheelConfig`]: wheel::config::WheelConfig
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_wheel_with_config(json: &str) -> Result<(), JsValue> {
    let config: wheel::config::WheelConfig =
        serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    wheel::start_wheel_mode(config)
}

/// Request a spin from JS. No-op while a spin is already in flight.
#[wasm_bindgen]
pub fn trigger_spin() {
    wheel::request_spin();
}

pub(crate) fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
