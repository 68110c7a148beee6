use serde::{Deserialize, Serialize};

use crate::shared::list_engine::RecordFilter;

/// Follow-up state of a lead.
pub const LEAD_STATUSES: [&str; 4] = ["new", "contacted", "interested", "closed"];

pub const FACET_STATUS: &str = "status";
pub const FACET_SOURCE: &str = "source";

/// Enquiry left by a visitor on a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub property_name: Option<String>,
    #[serde(default)]
    pub unique_property_id: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Lead {
    pub fn list_filter() -> RecordFilter<Lead> {
        RecordFilter::<Lead>::new()
            .search(|l| Some(l.name.as_str()))
            .search(|l| l.mobile.as_deref())
            .search(|l| l.email.as_deref())
            .search(|l| l.property_name.as_deref())
            .search(|l| l.unique_property_id.as_deref())
            .facet(FACET_STATUS, "Status", |l| l.status.as_deref())
            .facet(FACET_SOURCE, "Source", |l| l.source.as_deref())
            .date(|l| l.created_at.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLeadStatusDto {
    pub id: i64,
    pub status: String,
    pub updated_by: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_engine::FilterState;

    #[test]
    fn test_lead_without_date_hidden_by_range() {
        let lead = Lead {
            id: 1,
            name: "Ravi".into(),
            mobile: Some("9876543210".into()),
            email: None,
            property_name: None,
            unique_property_id: None,
            source: None,
            status: Some("new".into()),
            created_at: None,
        };
        let filter = Lead::list_filter();

        let mut state = FilterState::default();
        state.query = "98765".into();
        assert!(filter.matches(&lead, &state));

        state.date_range.start = Some("2024-01-01".into());
        assert!(!filter.matches(&lead, &state));
    }
}
