//! HTTP transport seam.
//!
//! The executor builds an [`HttpRequest`] and hands it to a [`Transport`].
//! In the browser that is [`FetchTransport`](super::fetch::FetchTransport);
//! tests substitute a scripted one.

use async_trait::async_trait;

use super::request::HttpRequest;

/// Status line and body text of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// The request produced no HTTP response at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError(pub String);

/// Sends one request and waits for its response.
///
/// Futures are not `Send`: the browser runs everything on one thread, and
/// calls only suspend at `.await`. Implementations hold no per-call state, so
/// concurrent sends never wait on each other.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError>;
}
