//! ==============================================================================
//! state.rs - widget view state machine
//! ==============================================================================
//!
//! purpose:
//!     single source of truth for what the joke card shows: the loading
//!     flag, the current joke, and the transient copied indicator.
//!     transitions are synchronous and pure so the whole machine tests
//!     natively; the webapp drives them from async completions.
//!
//! sequencing:
//!     nothing stops the user from hitting "generate" while a fetch is in
//!     flight, and responses may settle in any order. each fetch gets a
//!     monotonically increasing token and only the latest token may apply
//!     its outcome, so the last *request* wins regardless of settlement
//!     order. the copied indicator uses the same trick for its delayed
//!     reset.
//!
//! ==============================================================================

use crate::error::FetchError;
use crate::joke::Joke;

/// how long the copied indicator stays on, in milliseconds
pub const COPIED_RESET_MS: u32 = 2_000;

// ==============================================================================
// tokens
// ==============================================================================

/// identifies one fetch call; only the latest may settle into state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// identifies one successful copy; only the latest may clear the indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyToken(u64);

// ==============================================================================
// view state
// ==============================================================================

/// complete mutable state of the joke card
///
/// lives inside one leptos signal for the lifetime of the component; nothing
/// is persisted across reloads.
#[derive(Debug, Clone)]
pub struct ViewState {
    loading: bool,
    joke: Option<Joke>,
    copied: Option<String>,
    fetch_seq: u64,
    copy_seq: u64,
}

/// what the content area of the card renders
#[derive(Debug, Clone, PartialEq)]
pub enum JokeView {
    /// indeterminate spinner, nothing else
    Loading,
    /// the joke lines plus the copy button; `copied` selects the check glyph
    Ready { lines: Vec<String>, copied: bool },
    /// no joke to show (only reachable when the very first fetch failed)
    Empty,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// state at mount: loading, no joke yet, nothing copied
    pub fn new() -> Self {
        Self {
            loading: true,
            joke: None,
            copied: None,
            fetch_seq: 0,
            copy_seq: 0,
        }
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn joke(&self) -> Option<&Joke> {
        self.joke.as_ref()
    }

    /// records the start of a fetch call
    ///
    /// turns the spinner on and returns the token the completion must
    /// present to [`finish_fetch`](Self::finish_fetch).
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.fetch_seq += 1;
        self.loading = true;
        FetchToken(self.fetch_seq)
    }

    /// records the settlement of a fetch call
    ///
    /// outcomes of superseded calls are discarded wholesale: they neither
    /// replace the joke nor touch the spinner, which stays on until the
    /// latest call settles. failures are logged here and swallowed; the
    /// previously displayed joke (or its absence) is kept as is.
    pub fn finish_fetch(&mut self, token: FetchToken, outcome: Result<Joke, FetchError>) {
        if token.0 != self.fetch_seq {
            log::debug!(
                "ignoring superseded fetch (token {}, latest {})",
                token.0,
                self.fetch_seq
            );
            return;
        }
        self.loading = false;
        match outcome {
            Ok(joke) => {
                log::debug!("displaying joke {}", joke.id);
                self.joke = Some(joke);
            }
            Err(err) => log::error!("joke fetch failed: {err}"),
        }
    }

    /// records a successful clipboard write of `text`
    ///
    /// returns the token the delayed reset must present to
    /// [`revert_copied`](Self::revert_copied); issuing a new token
    /// supersedes any reset still pending.
    pub fn mark_copied(&mut self, text: String) -> CopyToken {
        self.copy_seq += 1;
        self.copied = Some(text);
        CopyToken(self.copy_seq)
    }

    /// clears the copied indicator, unless a later copy superseded `token`
    pub fn revert_copied(&mut self, token: CopyToken) {
        if token.0 == self.copy_seq {
            self.copied = None;
        }
    }

    /// the text a copy action would place on the clipboard right now
    pub fn display_text(&self) -> Option<String> {
        self.joke.as_ref().map(Joke::display_text)
    }

    /// projects the state into what the content area shows
    pub fn view(&self) -> JokeView {
        if self.loading {
            return JokeView::Loading;
        }
        match &self.joke {
            Some(joke) => {
                let display = joke.display_text();
                JokeView::Ready {
                    lines: joke.display_lines(),
                    copied: self.copied.as_deref() == Some(display.as_str()),
                }
            }
            None => JokeView::Empty,
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================
