use contracts::domain::a004_subscription::aggregate::{Subscription, UpdateSubscriptionDto};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::api_url;
use crate::shared::http;

pub async fn fetch_subscriptions() -> Result<Vec<Subscription>, ApiError> {
    http::get_json(&api_url("/payments/getAllSubscriptions")).await
}

pub async fn update_subscription(dto: &UpdateSubscriptionDto) -> Result<(), ApiError> {
    http::post_unit(&api_url("/payments/updateSubscription"), dto).await
}
