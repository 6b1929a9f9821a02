//! ==============================================================================
//! error.rs - failure taxonomy
//! ==============================================================================
//!
//! purpose:
//!     typed errors for the two fallible edges of the widget: fetching a
//!     joke and writing to the clipboard. every failure is caught where it
//!     happens, written to the log, and kept out of the ui.
//!
//! ==============================================================================

use thiserror::Error;

/// why a joke fetch failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// the request could not be sent or the response body could not be read
    #[error("network error: {0}")]
    Network(String),

    /// the server answered with a non-success status code
    #[error("request failed with status {0}")]
    Status(u16),

    /// the response body was not a joke payload we understand
    #[error("malformed joke payload: {0}")]
    Malformed(String),
}

/// why a clipboard write failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// the platform exposes no clipboard object (e.g. insecure context)
    #[error("clipboard unavailable")]
    Unavailable,

    /// the platform refused or failed the write
    #[error("clipboard write failed: {0}")]
    Write(String),
}
