use contracts::shared::error_body::ErrorBody;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;

pub const NO_CONTENT: u16 = 204;

/// Successful outcome of an API call.
///
/// `NoContent` (HTTP 204) is not a JSON value: it never compares equal to
/// `{}` or `null`, and there are no fields to read from it.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Json(Value),
    NoContent,
}

impl ApiResponse {
    pub fn is_no_content(&self) -> bool {
        matches!(self, Self::NoContent)
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::NoContent => None,
        }
    }

    /// Decode the payload into `T`. A 204 where a body was expected is a
    /// malformed response.
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        match self {
            Self::Json(value) => {
                serde_json::from_value(value).map_err(|e| ApiError::MalformedBody {
                    detail: e.to_string(),
                })
            }
            Self::NoContent => Err(ApiError::MalformedBody {
                detail: "expected a JSON body, got 204 No Content".to_string(),
            }),
        }
    }
}

/// Map a raw status and body to the two-outcome result.
///
/// - non-2xx: error message is the body's `detail`, else `API Error: {status}`
/// - 204: [`ApiResponse::NoContent`], the body is ignored
/// - other 2xx: the body parsed as JSON, unchanged; unparsable bodies fail
pub fn normalize(status: u16, body: &str) -> Result<ApiResponse, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, ErrorBody::detail_from(body)));
    }

    if status == NO_CONTENT {
        return Ok(ApiResponse::NoContent);
    }

    serde_json::from_str(body)
        .map(ApiResponse::Json)
        .map_err(|e| ApiError::MalformedBody {
            detail: e.to_string(),
        })
}

/// [`normalize`] for `DELETE`. A 2xx acknowledgement without a readable
/// JSON body (empty, or not JSON) counts as [`ApiResponse::NoContent`]; the
/// resource is gone either way.
pub fn normalize_delete(status: u16, body: &str) -> Result<ApiResponse, ApiError> {
    match normalize(status, body) {
        Err(ApiError::MalformedBody { .. }) => Ok(ApiResponse::NoContent),
        outcome => outcome,
    }
}
