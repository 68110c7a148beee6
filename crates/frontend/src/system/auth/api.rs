use contracts::shared::api_error::ApiError;
use contracts::shared::payload::Payload;
use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Sign in with email and password. No bearer token is attached.
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };

    let response = Request::post(&api_url("/user/v1/login"))
        .json(&request)
        .map_err(|e| ApiError::Validation(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let err = match ApiError::from_response(status, &body) {
            // wrong credentials, not an expired session
            ApiError::Unauthorized => ApiError::Validation("Invalid email or password".to_string()),
            other => other,
        };
        log::warn!("login failed [{}]: {}", err.kind(), err);
        return Err(err);
    }

    response
        .json::<Payload<LoginResponse>>()
        .await
        .map(Payload::into_inner)
        .map_err(|e| ApiError::Decode(e.to_string()))
}
