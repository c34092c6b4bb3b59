use serde::Deserialize;
use serde_json::Value;

/// Error payload produced by the backend for non-success responses.
///
/// Only `detail` is used; other keys (field errors and the like) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// Human-readable `detail` from a raw response body.
    ///
    /// `None` when the body is not JSON, has no `detail`, or `detail` is not a
    /// non-empty string.
    pub fn detail_from(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        match parsed.detail? {
            Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_from() {
        assert_eq!(
            ErrorBody::detail_from(r#"{"detail": "Not found."}"#),
            Some("Not found.".to_string())
        );
        assert_eq!(ErrorBody::detail_from(r#"{"title": ["required"]}"#), None);
        assert_eq!(ErrorBody::detail_from(r#"{"detail": ""}"#), None);
        assert_eq!(ErrorBody::detail_from(r#"{"detail": 42}"#), None);
        assert_eq!(ErrorBody::detail_from("<html>Server Error</html>"), None);
        assert_eq!(ErrorBody::detail_from(""), None);
        assert_eq!(ErrorBody::detail_from("[1, 2]"), None);
    }
}
