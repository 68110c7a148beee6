use serde::{Deserialize, Serialize};

/// Single counter returned by the `get*Count` endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    #[serde(alias = "total", alias = "totalCount")]
    pub count: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyViewsResponse {
    #[serde(alias = "views", alias = "totalViews")]
    pub total_views: u64,
}

/// Tiles of the overview dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverviewCounts {
    pub users: u64,
    pub properties: u64,
    pub property_views: u64,
    pub leads: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_aliases() {
        let a: CountResponse = serde_json::from_str(r#"{"count":12}"#).unwrap();
        let b: CountResponse = serde_json::from_str(r#"{"totalCount":12}"#).unwrap();
        assert_eq!(a, b);
        let v: PropertyViewsResponse = serde_json::from_str(r#"{"views":40}"#).unwrap();
        assert_eq!(v.total_views, 40);
    }
}
