use serde::{Deserialize, Serialize};

use crate::shared::list_engine::RecordFilter;

// ============================================================================
// Listing
// ============================================================================

/// Moderation state of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Pending,
    Approved,
    Rejected,
}

impl PropertyStatus {
    pub const ALL: [PropertyStatus; 3] = [
        PropertyStatus::Pending,
        PropertyStatus::Approved,
        PropertyStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Pending => "pending",
            PropertyStatus::Approved => "approved",
            PropertyStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyStatus::Pending => "Pending",
            PropertyStatus::Approved => "Approved",
            PropertyStatus::Rejected => "Rejected",
        }
    }
}

/// Property listing as returned by `GET /listings/v1/getAllProperties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    pub unique_property_id: String,
    pub property_name: String,
    #[serde(default)]
    pub property_in: Option<String>,
    #[serde(default)]
    pub property_for: Option<String>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub property_cost: Option<f64>,
    #[serde(default)]
    pub property_status: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub owner_mobile: Option<String>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub created_date: Option<String>,
}

pub const FACET_CITY: &str = "city";
pub const FACET_STATE: &str = "state";
pub const FACET_STATUS: &str = "property_status";
pub const FACET_PROPERTY_FOR: &str = "property_for";

impl Property {
    pub fn status(&self) -> Option<PropertyStatus> {
        match self.property_status.as_deref()? {
            "pending" => Some(PropertyStatus::Pending),
            "approved" => Some(PropertyStatus::Approved),
            "rejected" => Some(PropertyStatus::Rejected),
            _ => None,
        }
    }

    /// Filter configuration of the listings screen.
    pub fn list_filter() -> RecordFilter<Property> {
        RecordFilter::<Property>::new()
            .search(|p| Some(p.property_name.as_str()))
            .search(|p| Some(p.unique_property_id.as_str()))
            .search(|p| p.locality.as_deref())
            .search(|p| p.owner_name.as_deref())
            .search(|p| p.owner_mobile.as_deref())
            .facet(FACET_CITY, "City", |p| p.city.as_deref())
            .facet(FACET_STATE, "State", |p| p.state.as_deref())
            .facet(FACET_STATUS, "Status", |p| p.property_status.as_deref())
            .facet(FACET_PROPERTY_FOR, "Listed for", |p| p.property_for.as_deref())
            .date(|p| p.created_date.as_deref())
    }
}

// ============================================================================
// Commands
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePropertyStatusDto {
    pub unique_property_id: String,
    pub property_status: PropertyStatus,
    pub updated_by: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_engine::ListView;

    fn property(id: i64, city: &str, status: &str) -> Property {
        Property {
            id,
            unique_property_id: format!("MP{:04}", id),
            property_name: format!("Listing {}", id),
            property_in: Some("Residential".into()),
            property_for: Some("Sell".into()),
            property_type: None,
            locality: Some("Madhapur".into()),
            city: Some(city.into()),
            state: Some("Telangana".into()),
            property_cost: Some(4_500_000.0),
            property_status: Some(status.into()),
            owner_name: None,
            owner_mobile: None,
            views: None,
            created_date: Some("2024-05-01T10:00:00.000Z".into()),
        }
    }

    #[test]
    fn test_deserialize_minimal_listing() {
        let json = r#"{"id":1,"unique_property_id":"MP0001","property_name":"Sky Villa"}"#;
        let p: Property = serde_json::from_str(json).unwrap();
        assert_eq!(p.property_name, "Sky Villa");
        assert!(p.city.is_none());
        assert!(p.status().is_none());
    }

    #[test]
    fn test_search_by_unique_id_and_city_facet() {
        let rows = vec![
            property(1, "Hyderabad", "approved"),
            property(2, "Vizag", "pending"),
            property(3, "Hyderabad", "pending"),
        ];
        let mut view = ListView::default();
        view.set_facet(FACET_CITY, "Hyderabad");
        view.set_query("mp0003");

        let page = view.page_of(&Property::list_filter(), &rows);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, 3);
        assert_eq!(page.items[0].status(), Some(PropertyStatus::Pending));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let dto = UpdatePropertyStatusDto {
            unique_property_id: "MP0001".into(),
            property_status: PropertyStatus::Approved,
            updated_by: "admin".into(),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["property_status"], "approved");
    }
}
