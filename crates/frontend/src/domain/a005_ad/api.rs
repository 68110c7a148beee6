use contracts::domain::a005_ad::aggregate::{Ad, CreateAdDto};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{api_url, api_url_with};
use crate::shared::http;

pub async fn fetch_ads() -> Result<Vec<Ad>, ApiError> {
    http::get_json(&api_url("/adAssets/v1/getAllAds")).await
}

pub async fn create_ad(dto: &CreateAdDto) -> Result<(), ApiError> {
    http::post_unit(&api_url("/adAssets/v1/createAd"), dto).await
}

pub async fn delete_ad(id: i64) -> Result<(), ApiError> {
    http::delete(&api_url_with("/adAssets/v1/deleteAd", &id.to_string())).await
}
