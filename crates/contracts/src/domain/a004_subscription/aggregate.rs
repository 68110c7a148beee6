use serde::{Deserialize, Serialize};

use crate::shared::list_engine::RecordFilter;

pub const SUBSCRIPTION_STATUSES: [&str; 4] = ["active", "pending", "expired", "cancelled"];

pub const FACET_STATUS: &str = "subscription_status";
pub const FACET_PLAN: &str = "subscription_package";

/// Paid plan of a platform user, from `GET /payments/getAllSubscriptions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub subscription_package: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub subscription_status: Option<String>,
    #[serde(default)]
    pub payment_date: Option<String>,
    #[serde(default)]
    pub subscription_expiry_date: Option<String>,
}

impl Subscription {
    pub fn list_filter() -> RecordFilter<Subscription> {
        RecordFilter::<Subscription>::new()
            .search(|s| s.name.as_deref())
            .search(|s| s.mobile.as_deref())
            .search(|s| s.subscription_package.as_deref())
            .search(|s| s.transaction_id.as_deref())
            .facet(FACET_STATUS, "Status", |s| s.subscription_status.as_deref())
            .facet(FACET_PLAN, "Plan", |s| s.subscription_package.as_deref())
            .date(|s| s.payment_date.as_deref())
    }
}

/// Body of `POST /payments/updateSubscription`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSubscriptionDto {
    pub id: i64,
    pub subscription_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_expiry_date: Option<String>,
    pub updated_by: String,
}
