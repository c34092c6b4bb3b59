use thiserror::Error;

/// Failure of a single API call.
///
/// `Display` is the flat, user-facing message; the view layer shows it as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (offline, DNS, CORS).
    #[error("Network error. Please check your connection and try again.")]
    Transport { detail: String },

    /// Non-2xx status. `message` is the backend `detail` or `API Error: {status}`.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// 2xx response whose body is not the JSON the caller needs.
    #[error("The server sent an invalid response.")]
    MalformedBody { detail: String },

    /// Endpoint not rooted at `/`; rejected before any request is made.
    #[error("Invalid API endpoint: {0}")]
    InvalidEndpoint(String),

    /// The request body could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Error for a non-success status, preferring the backend's `detail`.
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        let message = detail.unwrap_or_else(|| format!("API Error: {}", status));
        Self::Http { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_detail_when_present() {
        let err = ApiError::from_status(404, Some("Not found.".to_string()));
        assert_eq!(err.to_string(), "Not found.");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_message_falls_back_to_status() {
        let err = ApiError::from_status(500, None);
        assert_eq!(err.to_string(), "API Error: 500");
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_transport_kinds() {
        let offline = ApiError::Transport {
            detail: "TypeError: Failed to fetch".into(),
        };
        let garbled = ApiError::MalformedBody {
            detail: "expected value at line 1 column 1".into(),
        };
        assert_eq!(offline.status(), None);
        assert_eq!(garbled.status(), None);
        assert!(!offline.to_string().contains("TypeError"));
    }
}
