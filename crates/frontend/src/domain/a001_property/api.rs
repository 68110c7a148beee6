use contracts::domain::a001_property::aggregate::{Property, UpdatePropertyStatusDto};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{api_url, api_url_with};
use crate::shared::http;

/// Fetch all listings, any status
pub async fn fetch_properties() -> Result<Vec<Property>, ApiError> {
    http::get_json(&api_url("/listings/v1/getAllProperties")).await
}

/// Approve or reject a listing
pub async fn update_status(dto: &UpdatePropertyStatusDto) -> Result<(), ApiError> {
    http::post_unit(&api_url("/listings/v1/updatePropertyStatus"), dto).await
}

pub async fn delete_property(unique_property_id: &str) -> Result<(), ApiError> {
    http::delete(&api_url_with("/listings/v1/deleteProperty", unique_property_id)).await
}
