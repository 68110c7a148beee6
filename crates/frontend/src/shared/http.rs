//! Authorized JSON requests against the backend.
//!
//! Every call attaches the bearer token, runs the optimistic expiry check
//! first and maps failures into [`ApiError`]. A 401 (or an expired token)
//! ends the session and sends the browser to the sign-in screen.

use contracts::shared::api_error::ApiError;
use contracts::shared::payload::Payload;
use contracts::system::session::is_token_expired;
use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::{storage, SIGN_IN_PATH};

fn bearer() -> Result<String, ApiError> {
    let token = storage::get_access_token().ok_or(ApiError::Unauthorized)?;
    if is_token_expired(&token, chrono::Utc::now().timestamp()) {
        log::info!("access token expired, signing out");
        return Err(ApiError::Unauthorized);
    }
    Ok(format!("Bearer {}", token))
}

/// Drops the stored session and navigates to the sign-in screen.
pub fn end_session() {
    storage::clear_session();
    if let Some(window) = web_sys::window() {
        let on_sign_in = window
            .location()
            .pathname()
            .map(|p| p == SIGN_IN_PATH)
            .unwrap_or(false);
        if !on_sign_in {
            let _ = window.location().set_href(SIGN_IN_PATH);
        }
    }
}

fn fail<T>(method: &str, url: &str, err: ApiError) -> Result<T, ApiError> {
    match &err {
        ApiError::Unauthorized => {
            log::warn!("{} {}: unauthorized", method, url);
            end_session();
        }
        ApiError::Network(_) | ApiError::Server => {
            log::error!("{} {} failed [{}]: {}", method, url, err.kind(), err)
        }
        _ => log::warn!("{} {} failed [{}]: {}", method, url, err.kind(), err),
    }
    Err(err)
}

async fn checked(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(status, &body))
}

async fn send(method: &str, url: &str, builder: RequestBuilder, body: Option<String>) -> Result<Response, ApiError> {
    let builder = builder.header("Authorization", &bearer()?);
    let sent = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(json)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await,
        None => builder.send().await,
    };
    let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;
    log::debug!("{} {} -> {}", method, url, response.status());
    checked(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<Payload<T>>()
        .await
        .map(Payload::into_inner)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Validation(format!("Failed to serialize request: {}", e)))
}

/// `GET` returning JSON.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let result = match send("GET", url, gloo_net::http::Request::get(url), None).await {
        Ok(response) => decode(response).await,
        Err(e) => Err(e),
    };
    result.or_else(|e| fail("GET", url, e))
}

/// `POST` a JSON body, ignoring the answer.
pub async fn post_unit<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    let result = match encode(body) {
        Ok(json) => send("POST", url, gloo_net::http::Request::post(url), Some(json))
            .await
            .map(|_| ()),
        Err(e) => Err(e),
    };
    result.or_else(|e| fail("POST", url, e))
}

pub async fn delete(url: &str) -> Result<(), ApiError> {
    let result = send("DELETE", url, gloo_net::http::Request::delete(url), None)
        .await
        .map(|_| ());
    result.or_else(|e| fail("DELETE", url, e))
}
