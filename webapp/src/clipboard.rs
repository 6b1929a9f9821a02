//! ==============================================================================
//! clipboard.rs - navigator clipboard writer
//! ==============================================================================
//!
//! purpose:
//!     web-sys implementation of the core's `ClipboardWriter` capability on
//!     top of `navigator.clipboard.writeText`.
//!
//! ==============================================================================

use async_trait::async_trait;
use shared::{ClipboardError, ClipboardWriter};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// `ClipboardWriter` backed by the async clipboard api
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigatorClipboard;

#[async_trait(?Send)]
impl ClipboardWriter for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let clipboard = window.navigator().clipboard();
        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|err| ClipboardError::Write(js_error_message(&err)))
    }
}

/// best-effort human-readable text for a rejected promise
fn js_error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
