//! API access layer: the only code that talks to the backend.
//!
//! - `config`: backend origin, fixed at startup
//! - `client`: request executor and JSON / multipart / delete wrappers
//! - `response`: two-outcome normalization of status + body
//! - `media`: media reference to absolute URL resolution
//! - `transport` / `fetch`: the HTTP seam and its browser implementation

pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod media;
pub mod request;
pub mod response;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::ApiClient;
pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;
pub use request::{FilePart, Method, MultipartForm, RequestBody, RequestOptions};
pub use response::ApiResponse;

use leptos::prelude::*;

/// The [`ApiClient`] provided at the root of the app.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not found in context")
}
