//! Request descriptors handed to a [`Transport`](super::transport::Transport).

use serde::Serialize;

use super::error::ApiError;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A file part of a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultipartPart {
    Text(String),
    File(FilePart),
}

/// Prepared multipart payload. The boundary and `Content-Type` are chosen by
/// the transport when the payload is sent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultipartForm {
    parts: Vec<(String, MultipartPart)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts
            .push((name.into(), MultipartPart::Text(value.into())));
        self
    }

    pub fn file(mut self, name: impl Into<String>, file: FilePart) -> Self {
        self.parts.push((name.into(), MultipartPart::File(file)));
        self
    }

    pub fn parts(&self) -> &[(String, MultipartPart)] {
        &self.parts
    }

    pub fn get(&self, name: &str) -> Option<&MultipartPart> {
        self.parts
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, part)| part)
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Request body. JSON and multipart are mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    Json(String),
    Multipart(MultipartForm),
}

impl RequestBody {
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, ApiError> {
        serde_json::to_string(value)
            .map(Self::Json)
            .map_err(|e| ApiError::Encode(e.to_string()))
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart(_))
    }
}

/// Per-call overrides of the request executor's defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Add or replace a header (names compare case-insensitively).
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }
}

/// Fully resolved request as the transport sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_override_is_case_insensitive() {
        let options = RequestOptions::new()
            .header("content-type", "text/plain")
            .header("Content-Type", "application/xml");
        assert_eq!(
            options.headers,
            vec![("Content-Type".to_string(), "application/xml".to_string())]
        );
    }

    #[test]
    fn test_multipart_builder() {
        let form = MultipartForm::new().text("title", "Hello").file(
            "cover_image",
            FilePart {
                file_name: "a.png".into(),
                content_type: "image/png".into(),
                bytes: vec![1, 2, 3],
            },
        );
        assert_eq!(form.parts().len(), 2);
        assert_eq!(form.get("title"), Some(&MultipartPart::Text("Hello".into())));
        assert!(form.get("missing").is_none());
    }

    #[test]
    fn test_json_body() {
        let body = RequestBody::json(&serde_json::json!({"name": "Jane"})).unwrap();
        assert_eq!(body, RequestBody::Json(r#"{"name":"Jane"}"#.to_string()));
        assert!(!body.is_multipart());
    }
}
