//! Tauri Command Wrappers
//!
//! Frontend bindings to the host's window commands.

mod window;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// Re-export all public items
pub use window::*;
