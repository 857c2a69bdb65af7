//! JSON request client over a fixed base path.
//!
//! DESIGN
//! ======
//! The client only builds requests and interprets responses; the exchange
//! itself goes through [`Transport`] so the browser (`gloo-net`), native
//! (`reqwest`) and test transports share one success/error contract:
//! 2xx with a JSON body succeeds, anything else is an [`ApiError`].
//!
//! ERROR HANDLING
//! ==============
//! Failures are returned to the caller with method, path and status. Nothing
//! is retried or logged here.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;

pub const JSON_CONTENT_TYPE: &str = "application/json";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by [`RequestClient`] calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{method} {path} failed: {status}")]
    Status { method: Method, path: String, status: u16 },

    /// The response body was not valid JSON for the expected type.
    #[error("{method} {path} returned invalid JSON: {message}")]
    Parse { method: Method, path: String, message: String },

    /// The request body could not be serialized.
    #[error("{method} {path} body could not be encoded: {message}")]
    Encode { method: Method, path: String, message: String },

    /// The transport could not complete the exchange.
    #[error("{method} {path} request failed: {message}")]
    Transport { method: Method, path: String, message: String },
}

impl ApiError {
    /// HTTP status for [`ApiError::Status`], `None` otherwise.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failure reported by a [`Transport`] before any status was received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outgoing request as handed to a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    /// Fully resolved URL (`base + path`).
    pub url: String,
    /// JSON body; when present the transport sends `Content-Type: application/json`.
    pub body: Option<String>,
}

/// Status and raw body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// =============================================================================
// TRANSPORT TRAIT
// =============================================================================

/// Performs a single HTTP exchange. Enables mocking in tests.
///
/// Futures are `?Send`: browser fetch futures are tied to the JS event loop.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Send `request` and return the status and body.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if no response was received at all.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct RequestClient<T> {
    transport: T,
    base_path: String,
}

impl<T: Transport> RequestClient<T> {
    pub fn new(transport: T, config: &ClientConfig) -> Self {
        Self { transport, base_path: config.base_path.clone() }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Resolve `path` against the base path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_path)
    }

    /// `GET {base}{path}` and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for a non-2xx response,
    /// [`ApiError::Parse`] for a body that does not decode as `R`, and
    /// [`ApiError::Transport`] if the exchange did not complete.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.execute(Method::Get, path, None).await
    }

    /// `POST {base}{path}` with `body` as JSON and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Same as [`RequestClient::get`], plus [`ApiError::Encode`] if `body`
    /// cannot be serialized.
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let raw = serde_json::to_string(body).map_err(|e| ApiError::Encode {
            method: Method::Post,
            path: path.to_owned(),
            message: e.to_string(),
        })?;
        self.execute(Method::Post, path, Some(raw)).await
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<R, ApiError> {
        let url = self.url(path);
        log::debug!("{method} {url}");

        let request = HttpRequest { method, url, body };
        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| ApiError::Transport { method, path: path.to_owned(), message: e.0 })?;

        if !response.is_success() {
            return Err(ApiError::Status { method, path: path.to_owned(), status: response.status });
        }

        serde_json::from_str(&response.body).map_err(|e| ApiError::Parse {
            method,
            path: path.to_owned(),
            message: e.to_string(),
        })
    }
}
