//! Browser transport backed by the Fetch API (`gloo-net`).

use async_trait::async_trait;
use gloo_net::http::{Method as FetchMethod, RequestBuilder};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData, RequestCredentials, RequestMode};

use super::request::{FilePart, HttpRequest, Method, MultipartForm, MultipartPart, RequestBody};
use super::transport::{RawResponse, Transport, TransportError};

/// Sends requests with `window.fetch` in CORS mode.
///
/// Multipart payloads become a `FormData`, so the browser picks the boundary
/// and writes the `Content-Type` header itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

/// Cookies and other ambient credentials never travel with a request.
pub const CREDENTIALS_MODE: RequestCredentials = RequestCredentials::Omit;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        let mut builder = RequestBuilder::new(&request.url)
            .method(fetch_method(request.method))
            .mode(RequestMode::Cors)
            .credentials(CREDENTIALS_MODE);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let prepared = match request.body {
            None => builder.build(),
            Some(RequestBody::Json(json)) => builder.body(json),
            Some(RequestBody::Multipart(form)) => builder.body(form_data(&form)?),
        }
        .map_err(|e| TransportError(format!("Failed to build request: {}", e)))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| TransportError(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(format!("Failed to read response: {}", e)))?;

        Ok(RawResponse { status, body })
    }
}

fn fetch_method(method: Method) -> FetchMethod {
    match method {
        Method::Get => FetchMethod::GET,
        Method::Post => FetchMethod::POST,
        Method::Patch => FetchMethod::PATCH,
        Method::Delete => FetchMethod::DELETE,
    }
}


fn form_data(form: &MultipartForm) -> Result<FormData, TransportError> {
    let data = FormData::new().map_err(js_error)?;
    for (name, part) in form.parts() {
        match part {
            MultipartPart::Text(value) => data.append_with_str(name, value),
            MultipartPart::File(file) => {
                let blob = file_blob(file)?;
                data.append_with_blob_and_filename(name, &blob, &file.file_name)
            }
        }
        .map_err(js_error)?;
    }
    Ok(data)
}

fn file_blob(file: &FilePart) -> Result<Blob, TransportError> {
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&bytes);

    let properties = BlobPropertyBag::new();
    properties.set_type(&file.content_type);

    Blob::new_with_u8_array_sequence_and_options(&parts, &properties).map_err(js_error)
}

fn js_error(e: JsValue) -> TransportError {
    TransportError(format!("{e:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_are_omitted() {
        assert_eq!(CREDENTIALS_MODE, RequestCredentials::Omit);
    }

    #[test]
    fn test_method_mapping() {
        assert_eq!(fetch_method(Method::Get), FetchMethod::GET);
        assert_eq!(fetch_method(Method::Patch), FetchMethod::PATCH);
        assert_eq!(fetch_method(Method::Delete), FetchMethod::DELETE);
    }
}
