//! Current-session identity and the optimistic token expiry check.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use super::auth::TokenClaims;

/// Who is signed in. Read once from storage and passed to whatever builds
/// create/update payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub user_id: Option<String>,
    pub name: Option<String>,
}

impl SessionContext {
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            name: Some(name.into()),
        }
    }

    /// Author fields stamped into outgoing payloads.
    pub fn stamp(&self) -> AuthorStamp {
        AuthorStamp {
            created_by: self.name.clone().unwrap_or_default(),
            created_user_id: self.user_id.clone().unwrap_or_default(),
        }
    }
}

/// `created_by` / `created_userID` pair expected by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorStamp {
    pub created_by: String,
    #[serde(rename = "created_userID")]
    pub created_user_id: String,
}

/// Decodes the claims segment of a JWT without verifying the signature.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let mut parts = token.trim().split('.');
    let (_header, payload) = (parts.next()?, parts.next()?);
    parts.next()?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Client-side pre-check only; the server still has the final say via 401.
///
/// Undecodable tokens count as expired. A token without `exp` is left for
/// the server to judge.
pub fn is_token_expired(token: &str, now_unix: i64) -> bool {
    match decode_claims(token) {
        Some(TokenClaims { exp: Some(exp), .. }) => exp <= now_unix,
        Some(_) => false,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with(payload: &str) -> String {
        format!(
            "{}.{}.signature",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_expiry_compared_with_now() {
        let token = token_with(r#"{"exp":1700000000,"user_id":7}"#);
        assert!(!is_token_expired(&token, 1_699_999_999));
        assert!(is_token_expired(&token, 1_700_000_000));
        assert!(is_token_expired(&token, 1_800_000_000));
    }

    #[test]
    fn test_malformed_tokens_are_expired() {
        assert!(is_token_expired("", 0));
        assert!(is_token_expired("not-a-jwt", 0));
        assert!(is_token_expired("a.!!!.c", 0));
        assert!(is_token_expired(&token_with("not json"), 0));
    }

    #[test]
    fn test_token_without_exp_is_not_expired() {
        let token = token_with(r#"{"user_id":7}"#);
        assert!(!is_token_expired(&token, i64::MAX));
    }

    #[test]
    fn test_padded_payload_is_accepted() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"exp":10}"#);
        let token = format!("h.{}.s", payload);
        assert_eq!(decode_claims(&token).and_then(|c| c.exp), Some(10));
    }

    #[test]
    fn test_stamp_serializes_backend_field_names() {
        let session = SessionContext::new("42", "Priya");
        let json = serde_json::to_value(session.stamp()).unwrap();
        assert_eq!(json["created_by"], "Priya");
        assert_eq!(json["created_userID"], "42");

        let anonymous = SessionContext::default().stamp();
        assert_eq!(anonymous.created_by, "");
    }
}
