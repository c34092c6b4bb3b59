//! Request executor and its convenience wrappers.
//!
//! Every call targets `{base}/api{endpoint}`, omits ambient credentials, and
//! settles exactly once: either the decoded payload or one [`ApiError`].
//! Nothing here retries, caches or times out.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::config::ApiConfig;
use super::error::ApiError;
use super::fetch::FetchTransport;
use super::request::{
    HttpRequest, Method, MultipartForm, RequestBody, RequestOptions, CONTENT_TYPE,
    JSON_CONTENT_TYPE,
};
use super::response::{normalize, normalize_delete, ApiResponse};
use super::transport::Transport;

/// Handle to the backend API. Cheap to clone; provided through the Leptos
/// context so components never build URLs themselves.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Client using the browser's Fetch API.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_transport(config, Arc::new(FetchTransport))
    }

    pub fn with_transport(config: ApiConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Perform one request and normalize the outcome.
    ///
    /// Failures are logged once here and returned; callers decide how to
    /// degrade.
    pub async fn fetch_api(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, ApiError> {
        self.dispatch(endpoint, options, normalize).await
    }

    async fn dispatch(
        &self,
        endpoint: &str,
        options: RequestOptions,
        normalizer: fn(u16, &str) -> Result<ApiResponse, ApiError>,
    ) -> Result<ApiResponse, ApiError> {
        let result = self.execute(endpoint, options, normalizer).await;
        if let Err(err) = &result {
            log_failure(endpoint, err);
        }
        result
    }

    /// `GET` returning the raw outcome.
    pub async fn get(&self, endpoint: &str) -> Result<ApiResponse, ApiError> {
        self.fetch_api(endpoint, RequestOptions::new()).await
    }

    /// `GET` decoded into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let response = self.get(endpoint).await?;
        response.into_typed().map_err(|err| {
            log_failure(endpoint, &err);
            err
        })
    }

    /// JSON `POST` of `data`.
    pub async fn post_api<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        data: &T,
    ) -> Result<ApiResponse, ApiError> {
        let body = match RequestBody::json(data) {
            Ok(body) => body,
            Err(err) => {
                log_failure(endpoint, &err);
                return Err(err);
            }
        };
        let options = RequestOptions::new().method(Method::Post).body(body);
        self.fetch_api(endpoint, options).await
    }

    /// Send a prepared multipart payload with `method` (`POST` to create,
    /// `PATCH` to update in place). No JSON content type is ever attached.
    pub async fn send_multipart(
        &self,
        endpoint: &str,
        form: MultipartForm,
        method: Method,
    ) -> Result<ApiResponse, ApiError> {
        let options = RequestOptions::new()
            .method(method)
            .body(RequestBody::Multipart(form));
        self.fetch_api(endpoint, options).await
    }

    /// [`send_multipart`](Self::send_multipart) with `POST`.
    pub async fn post_multipart(
        &self,
        endpoint: &str,
        form: MultipartForm,
    ) -> Result<ApiResponse, ApiError> {
        self.send_multipart(endpoint, form, Method::Post).await
    }

    /// `DELETE`. A 204, or any 2xx without a JSON body, comes back as
    /// [`ApiResponse::NoContent`].
    pub async fn delete_api(&self, endpoint: &str) -> Result<ApiResponse, ApiError> {
        let options = RequestOptions::new().method(Method::Delete);
        self.dispatch(endpoint, options, normalize_delete).await
    }

    /// Resolve the request the transport will see.
    ///
    /// JSON and body-less requests get `Content-Type: application/json`
    /// unless the caller overrides it. Multipart requests never carry a
    /// `Content-Type`, overrides included.
    pub fn build_request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<HttpRequest, ApiError> {
        if !endpoint.starts_with('/') {
            return Err(ApiError::InvalidEndpoint(endpoint.to_string()));
        }

        let multipart = options
            .body
            .as_ref()
            .is_some_and(RequestBody::is_multipart);

        let mut headers: Vec<(String, String)> = Vec::new();
        if !multipart {
            headers.push((CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string()));
        }
        for (name, value) in options.headers {
            if name.eq_ignore_ascii_case(CONTENT_TYPE) {
                if multipart {
                    continue;
                }
                headers.retain(|(n, _)| !n.eq_ignore_ascii_case(CONTENT_TYPE));
            }
            headers.push((name, value));
        }

        Ok(HttpRequest {
            method: options.method,
            url: self.config.endpoint_url(endpoint),
            headers,
            body: options.body,
        })
    }

    async fn execute(
        &self,
        endpoint: &str,
        options: RequestOptions,
        normalizer: fn(u16, &str) -> Result<ApiResponse, ApiError>,
    ) -> Result<ApiResponse, ApiError> {
        let request = self.build_request(endpoint, options)?;
        log::debug!("{} {}", request.method.as_str(), request.url);

        let raw = self
            .transport
            .send(request)
            .await
            .map_err(|e| ApiError::Transport { detail: e.0 })?;

        normalizer(raw.status, &raw.body)
    }
}

fn log_failure(endpoint: &str, err: &ApiError) {
    match err {
        ApiError::Transport { detail } | ApiError::MalformedBody { detail } => {
            log::error!("API Error ({}): {} ({})", endpoint, err, detail)
        }
        _ => log::error!("API Error ({}): {}", endpoint, err),
    }
}
