use contracts::domain::a002_lead::aggregate::{Lead, UpdateLeadStatusDto};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::api_url;
use crate::shared::http;

pub async fn fetch_leads() -> Result<Vec<Lead>, ApiError> {
    http::get_json(&api_url("/leads/v1/getAllLeads")).await
}

pub async fn update_status(dto: &UpdateLeadStatusDto) -> Result<(), ApiError> {
    http::post_unit(&api_url("/leads/v1/updateLeadStatus"), dto).await
}
