//! ==============================================================================
//! lib.rs - programming jokes generator
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm front-end for the jokes generator. one page, one card:
//!     fetch a programming joke from jokeapi.dev, show it, copy it.
//!
//! architecture:
//!     - leptos csr (client-side rendering), mounted to the document body
//!     - behavior lives in the `shared` crate; this crate supplies the
//!       browser capabilities (gloo fetch, navigator clipboard) and markup
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use wasm_bindgen::prelude::*;

mod api;
mod clipboard;
mod components;

use components::JokeCard;

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Programming Jokes Generator"/>
        <main class="page">
            <JokeCard />
        </main>
    }
}
