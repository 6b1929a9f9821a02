//! ==============================================================================
//! lib.rs - jokes generator core
//! ==============================================================================
//!
//! purpose:
//!     platform-neutral core of the programming jokes generator: the joke
//!     data model, the fetch and clipboard contracts, and the view-state
//!     machine the card renders from.
//!
//! relationships:
//!     - used by: webapp (leptos component + browser capability impls)
//!     - talks to: jokeapi.dev, through the HttpClient capability
//!
//! design rationale:
//!     the browser half of the app only does anything useful inside wasm,
//!     which makes it awkward to test. everything with behavior lives here
//!     instead, behind two small capability traits, so the whole contract
//!     runs under plain `cargo test` with fakes.
//!
//! ==============================================================================

pub mod client;
pub mod error;
pub mod joke;
pub mod state;

pub use client::{fetch_joke, ClipboardWriter, HttpClient, HttpResponse, JOKE_ENDPOINT};
pub use error::{ClipboardError, FetchError};
pub use joke::{Joke, JokeBody, JokeId, JokeKind};
pub use state::{CopyToken, FetchToken, JokeView, ViewState, COPIED_RESET_MS};
