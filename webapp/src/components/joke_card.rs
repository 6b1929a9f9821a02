//! Joke card component

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use shared::{fetch_joke, ClipboardWriter, JokeView, ViewState, COPIED_RESET_MS};

use crate::api::GlooHttpClient;
use crate::clipboard::NavigatorClipboard;

#[component]
pub fn JokeCard() -> impl IntoView {
    let (state, set_state) = signal(ViewState::new());
    // pending copied-indicator reset; replacing the handle cancels the old one
    let revert_timer = StoredValue::new_local(None::<Timeout>);

    // fetch action; completions present their token so superseded calls
    // cannot clobber a newer joke
    let generate = move || {
        let Some(token) = set_state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let outcome = fetch_joke(&GlooHttpClient).await;
            set_state.try_update(|s| s.finish_fetch(token, outcome));
        });
    };

    // first joke on mount
    Effect::new(move || generate());

    // copy action: write the displayed text, flip the indicator, schedule
    // the reset
    let copy = move |_| {
        let Some(text) = state.with_untracked(|s| s.display_text()) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match NavigatorClipboard.write_text(&text).await {
                Ok(()) => {
                    let Some(token) = set_state.try_update(|s| s.mark_copied(text)) else {
                        return;
                    };
                    let timer = Timeout::new(COPIED_RESET_MS, move || {
                        set_state.try_update(|s| s.revert_copied(token));
                    });
                    revert_timer.set_value(Some(timer));
                }
                Err(err) => log::error!("clipboard copy failed: {err}"),
            }
        });
    };

    // dropping the handle clears the timeout, so no reset callback can
    // outlive the card
    on_cleanup(move || revert_timer.set_value(None));

    view! {
        <div class="card">
            <h1>"Programming Jokes Generator"</h1>
            <hr/>
            <div class="card-content">
                {move || match state.with(|s| s.view()) {
                    JokeView::Loading => view! {
                        <div class="loading" role="status">
                            <span class="spinner"></span>
                        </div>
                    }
                    .into_any(),
                    JokeView::Ready { lines, copied } => view! {
                        <div class="joke">
                            <div class="joke-actions">
                                <button class="copy-btn" title="Copy to clipboard" on:click=copy>
                                    {if copied { "✓" } else { "⧉" }}
                                </button>
                            </div>
                            <div class="joke-text">
                                {lines
                                    .into_iter()
                                    .map(|line| view! { <p>{line}</p> })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>
                    }
                    .into_any(),
                    JokeView::Empty => view! { <div class="joke joke-empty"></div> }.into_any(),
                }}
            </div>
            <div class="card-footer">
                <button on:click=move |_| generate()>"Generate joke"</button>
            </div>
        </div>
    }
}
