use serde_json::Value;
use thiserror::Error;

/// Failure of one backend call, already mapped to what the screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 400, message taken from the response body.
    #[error("{0}")]
    Validation(String),

    /// 401 or a missing/expired token.
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,

    #[error("You do not have permission to perform this action.")]
    Permission,

    #[error("The requested resource was not found.")]
    NotFound,

    #[error("Internal server error. Please try again later.")]
    Server,

    #[error("Request failed ({status}): {message}")]
    UnknownHttp { status: u16, message: String },

    /// No response was received.
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

const VALIDATION_FALLBACK: &str = "Invalid request. Please check the entered data.";

impl ApiError {
    /// Maps a non-success HTTP status and its raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        match status {
            400 => ApiError::Validation(
                body_message(body).unwrap_or_else(|| VALIDATION_FALLBACK.to_string()),
            ),
            401 => ApiError::Unauthorized,
            403 => ApiError::Permission,
            404 => ApiError::NotFound,
            500 => ApiError::Server,
            _ => ApiError::UnknownHttp {
                status,
                message: body_message(body).unwrap_or_else(|| "Unexpected response".to_string()),
            },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Short category name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation",
            ApiError::Unauthorized => "unauthorized",
            ApiError::Permission => "permission",
            ApiError::NotFound => "not-found",
            ApiError::Server => "server",
            ApiError::UnknownHttp { .. } => "unknown-http",
            ApiError::Network(_) => "network",
            ApiError::Decode(_) => "decode",
        }
    }
}

/// Human-readable message of an error body.
///
/// JSON bodies are searched for `message`, then `error`; anything else is
/// used as plain text.
pub fn body_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(body) {
        Ok(json) => ["message", "error"]
            .iter()
            .filter_map(|key| json.get(key))
            .find_map(|v| match v {
                Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                Value::Object(inner) => inner
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                _ => None,
            }),
        Err(_) => Some(body.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_from_body() {
        let err = ApiError::from_response(400, r#"{"message":"Mobile number already exists"}"#);
        assert_eq!(err, ApiError::Validation("Mobile number already exists".into()));
        assert_eq!(err.to_string(), "Mobile number already exists");
    }

    #[test]
    fn test_validation_without_message_uses_fallback() {
        let err = ApiError::from_response(400, "");
        assert_eq!(err.to_string(), VALIDATION_FALLBACK);
        let err = ApiError::from_response(400, r#"{"status":false}"#);
        assert_eq!(err.to_string(), VALIDATION_FALLBACK);
    }

    #[test]
    fn test_status_taxonomy() {
        assert_eq!(ApiError::from_response(401, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_response(403, "denied"), ApiError::Permission);
        assert_eq!(ApiError::from_response(404, ""), ApiError::NotFound);
        assert_eq!(ApiError::from_response(500, "stack trace"), ApiError::Server);
        assert_eq!(
            ApiError::from_response(502, r#"{"error":"Bad gateway"}"#),
            ApiError::UnknownHttp {
                status: 502,
                message: "Bad gateway".into()
            }
        );
        assert!(ApiError::from_response(401, "").is_unauthorized());
    }

    #[test]
    fn test_body_message_variants() {
        assert_eq!(body_message("  plain text "), Some("plain text".into()));
        assert_eq!(
            body_message(r#"{"error":{"message":"nested"}}"#),
            Some("nested".into())
        );
        assert_eq!(body_message(r#"{"message":"  "}"#), None);
        assert_eq!(body_message("   "), None);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ApiError::Network("offline".into()).kind(), "network");
        assert_eq!(ApiError::Permission.kind(), "permission");
    }
}
