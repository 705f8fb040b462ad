//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain. Every call
//! funnels through `invoke_command`, so success decoding and error strings
//! come back uniformly.

mod auth;
mod gig;
mod milestone;
mod summary;
mod transaction;

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Invoke a backend command and decode its result.
///
/// Command errors arrive as the display string the backend produced.
async fn invoke_command<T: DeserializeOwned>(cmd: &str, args: JsValue) -> Result<T, String> {
    match invoke(cmd, args).await {
        Ok(value) => serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string()),
        Err(err) => Err(err
            .as_string()
            .unwrap_or_else(|| format!("{:?}", err))),
    }
}

fn to_args<T: serde::Serialize>(args: &T) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())
}

// Re-export all public items
pub use auth::*;
pub use gig::*;
pub use milestone::*;
pub use summary::*;
pub use transaction::*;
