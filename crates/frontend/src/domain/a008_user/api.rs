use contracts::domain::a008_user::aggregate::User;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{api_url, api_url_with};
use crate::shared::http;

/// Fetch all registered users
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    http::get_json(&api_url("/user/v1/getAllUsers")).await
}

pub async fn delete_user(id: i64) -> Result<(), ApiError> {
    http::delete(&api_url_with("/user/v1/deleteUser", &id.to_string())).await
}
