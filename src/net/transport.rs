//! Concrete [`Transport`] implementations.
//!
//! Client-side (hydrate): `fetch` via `gloo-net`, relative to the page origin.
//! Native: `reqwest` against an explicit origin.

#[cfg(feature = "native")]
#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

#[cfg(any(feature = "hydrate", feature = "native"))]
use super::client::{HttpRequest, HttpResponse, JSON_CONTENT_TYPE, Method, Transport, TransportError};

// =============================================================================
// BROWSER
// =============================================================================

/// `fetch`-backed transport for the WASM build.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let builder = match request.method {
            Method::Get => gloo_net::http::Request::get(&request.url),
            Method::Post => gloo_net::http::Request::post(&request.url),
        };
        let prepared = match request.body {
            Some(body) => builder
                .header("Content-Type", JSON_CONTENT_TYPE)
                .body(body)
                .map_err(|e| TransportError(e.to_string()))?,
            None => builder.build().map_err(|e| TransportError(e.to_string()))?,
        };
        let resp = prepared.send().await.map_err(|e| TransportError(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| TransportError(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

// =============================================================================
// NATIVE
// =============================================================================

#[cfg(feature = "native")]
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:8000";

/// `reqwest`-backed transport for tools running outside the browser.
///
/// Request URLs that are origin-relative (`/api/...`) are joined onto
/// `origin`; absolute URLs are used as-is.
#[cfg(feature = "native")]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    origin: String,
}

#[cfg(feature = "native")]
impl ReqwestTransport {
    pub fn new(http: reqwest::Client, origin: &str) -> Self {
        Self { http, origin: origin.trim_end_matches('/').to_owned() }
    }

    /// Build from `MIRROR_API_ORIGIN` (default `http://127.0.0.1:8000`).
    pub fn from_env() -> Self {
        let origin = std::env::var("MIRROR_API_ORIGIN").unwrap_or_else(|_| DEFAULT_ORIGIN.to_owned());
        Self::new(reqwest::Client::new(), &origin)
    }

    fn absolute(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_owned()
        } else {
            format!("{}{url}", self.origin)
        }
    }
}

#[cfg(feature = "native")]
#[async_trait::async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = self.absolute(&request.url);
        let mut builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
        };
        if let Some(body) = request.body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, JSON_CONTENT_TYPE)
                .body(body);
        }
        let resp = builder.send().await.map_err(|e| TransportError(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| TransportError(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}
