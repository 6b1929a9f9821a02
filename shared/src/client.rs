//! ==============================================================================
//! client.rs - injected platform capabilities
//! ==============================================================================
//!
//! purpose:
//!     the network and the clipboard are ambient browser apis this crate
//!     cannot own, so they are modeled as small capability traits. the
//!     webapp plugs in gloo/web-sys implementations; tests substitute fakes.
//!
//! relationships:
//!     - implemented by: webapp::api::GlooHttpClient,
//!       webapp::clipboard::NavigatorClipboard
//!     - used by: fetch_joke and the JokeCard component
//!
//! ==============================================================================

use async_trait::async_trait;

use crate::error::{ClipboardError, FetchError};
use crate::joke::Joke;

/// fixed jokeapi.dev endpoint: one programming joke per request
pub const JOKE_ENDPOINT: &str = "https://v2.jokeapi.dev/joke/Programming?amount=1";

// ==============================================================================
// capabilities
// ==============================================================================

/// a raw http response, reduced to what the fetch contract needs
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// outbound http, GET only
///
/// implementations map transport failures to [`FetchError::Network`] and
/// report every received status verbatim; status and body policy belong to
/// [`fetch_joke`], not to the adapter.
#[async_trait(?Send)]
pub trait HttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

/// system clipboard, write only
#[async_trait(?Send)]
pub trait ClipboardWriter {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

// ==============================================================================
// fetch contract
// ==============================================================================

/// fetches and normalizes one programming joke
///
/// any non-2xx status is a uniform failure and the body is only parsed on
/// success. callers hand the result to `ViewState::finish_fetch`, which is
/// where failures get logged and swallowed.
pub async fn fetch_joke(client: &impl HttpClient) -> Result<Joke, FetchError> {
    let response = client.get(JOKE_ENDPOINT).await?;
    if !(200..300).contains(&response.status) {
        return Err(FetchError::Status(response.status));
    }
    serde_json::from_str(&response.body).map_err(|err| FetchError::Malformed(err.to_string()))
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::joke::{JokeId, JokeKind};
    use futures::executor::block_on;
    use std::cell::RefCell;

    const SINGLE_BODY: &str =
        r#"{"error":false,"category":"Programming","type":"single","joke":"X","id":1,"safe":true,"lang":"en"}"#;
    const TWOPART_BODY: &str =
        r#"{"error":false,"category":"Programming","type":"twopart","setup":"A","delivery":"B","id":2,"safe":true,"lang":"en"}"#;

    /// fake http client answering every GET with one canned response
    struct FakeHttpClient {
        status: u16,
        body: &'static str,
    }

    #[async_trait(?Send)]
    impl HttpClient for FakeHttpClient {
        async fn get(&self, _url: &str) -> Result<HttpResponse, FetchError> {
            Ok(HttpResponse {
                status: self.status,
                body: self.body.to_string(),
            })
        }
    }

    /// fake http client failing at the transport layer
    struct DownHttpClient;

    #[async_trait(?Send)]
    impl HttpClient for DownHttpClient {
        async fn get(&self, _url: &str) -> Result<HttpResponse, FetchError> {
            Err(FetchError::Network("connection refused".to_string()))
        }
    }

    /// fake clipboard recording every write
    #[derive(Default)]
    struct FakeClipboard {
        writes: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl ClipboardWriter for FakeClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            self.writes.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_fetch_joke_success() {
        let client = FakeHttpClient {
            status: 200,
            body: SINGLE_BODY,
        };
        let joke = block_on(fetch_joke(&client)).unwrap();
        assert_eq!(joke.id, JokeId::Number(1));
        assert_eq!(joke.kind(), JokeKind::Single);
        assert_eq!(joke.display_text(), "X");
    }

    #[test]
    fn test_fetch_joke_non_success_status() {
        // every non-2xx answer fails the same way, body ignored
        for status in [301u16, 404, 429, 500] {
            let client = FakeHttpClient {
                status,
                body: SINGLE_BODY,
            };
            assert_eq!(
                block_on(fetch_joke(&client)),
                Err(FetchError::Status(status))
            );
        }
    }

    #[test]
    fn test_fetch_joke_network_failure() {
        assert!(matches!(
            block_on(fetch_joke(&DownHttpClient)),
            Err(FetchError::Network(_))
        ));
    }

    #[test]
    fn test_fetch_joke_malformed_body() {
        let client = FakeHttpClient {
            status: 200,
            body: "<!doctype html>",
        };
        assert!(matches!(
            block_on(fetch_joke(&client)),
            Err(FetchError::Malformed(_))
        ));
    }

    #[test]
    fn test_copy_payload_matches_display_text() {
        // the clipboard receives exactly the display text of each shape
        let single: Joke = serde_json::from_str(SINGLE_BODY).unwrap();
        let twopart: Joke = serde_json::from_str(TWOPART_BODY).unwrap();

        let clipboard = FakeClipboard::default();
        block_on(clipboard.write_text(&single.display_text())).unwrap();
        block_on(clipboard.write_text(&twopart.display_text())).unwrap();

        assert_eq!(
            *clipboard.writes.borrow(),
            vec!["X".to_string(), "A B".to_string()]
        );
    }
}
