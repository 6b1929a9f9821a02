//! ==============================================================================
//! api.rs - browser http client
//! ==============================================================================
//!
//! purpose:
//!     gloo-net implementation of the core's `HttpClient` capability. dumb
//!     on purpose: transport only. status and body policy belong to
//!     `shared::client::fetch_joke`, where they are testable natively.
//!
//! ==============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use shared::{FetchError, HttpClient, HttpResponse};

/// `HttpClient` backed by the browser's fetch api
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooHttpClient;

#[async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}
