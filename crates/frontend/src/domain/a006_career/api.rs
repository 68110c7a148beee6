use contracts::domain::a006_career::aggregate::{Career, CareerDto};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{api_url, api_url_with};
use crate::shared::http;

pub async fn fetch_careers() -> Result<Vec<Career>, ApiError> {
    http::get_json(&api_url("/careers/v1/getAllCareers")).await
}

pub async fn save_career(dto: &CareerDto) -> Result<(), ApiError> {
    let path = if dto.id.is_some() {
        "/careers/v1/updateCareer"
    } else {
        "/careers/v1/createCareer"
    };
    http::post_unit(&api_url(path), dto).await
}

pub async fn delete_career(id: i64) -> Result<(), ApiError> {
    http::delete(&api_url_with("/careers/v1/deleteCareer", &id.to_string())).await
}
