use contracts::dashboards::d400_overview::{CountResponse, OverviewCounts, PropertyViewsResponse};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::api_url;
use crate::shared::http;

async fn count(path: &str) -> Result<u64, ApiError> {
    let response: CountResponse = http::get_json(&api_url(path)).await?;
    Ok(response.count)
}

/// All four counters; any failed request fails the whole overview.
pub async fn fetch_overview() -> Result<OverviewCounts, ApiError> {
    let users = count("/user/v1/getAllUsersCount").await?;
    let properties = count("/listings/v1/getAllPropertiesCount").await?;
    let views: PropertyViewsResponse =
        http::get_json(&api_url("/listings/v1/getAllPropertyViews")).await?;
    let leads = count("/leads/v1/getLeadsCount").await?;

    Ok(OverviewCounts {
        users,
        properties,
        property_views: views.total_views,
        leads,
    })
}
