//! Browser-facing API: wasm-bindgen facade, canvas rendering, frame
//! scheduling and DOM event wiring.

pub mod canvas;
pub mod dom;
pub mod frame;
pub mod wasm;

use wasm_bindgen::JsValue;

/// Best-effort text of a thrown JS value.
pub(crate) fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
