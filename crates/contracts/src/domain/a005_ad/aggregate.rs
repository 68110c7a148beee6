use serde::{Deserialize, Serialize};

use crate::shared::list_engine::RecordFilter;
use crate::system::session::AuthorStamp;

pub const AD_TYPES: [&str; 3] = ["banner", "sidebar", "popup"];

pub const FACET_AD_TYPE: &str = "ad_type";
pub const FACET_CITY: &str = "city";

/// Advertisement slot shown on the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ad {
    pub id: i64,
    pub ad_title: String,
    #[serde(default)]
    pub ad_description: Option<String>,
    #[serde(default)]
    pub ad_type: Option<String>,
    #[serde(default)]
    pub ad_link: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub created_date: Option<String>,
}

impl Ad {
    pub fn list_filter() -> RecordFilter<Ad> {
        RecordFilter::<Ad>::new()
            .search(|a| Some(a.ad_title.as_str()))
            .search(|a| a.ad_description.as_deref())
            .search(|a| a.ad_link.as_deref())
            .facet(FACET_AD_TYPE, "Placement", |a| a.ad_type.as_deref())
            .facet(FACET_CITY, "City", |a| a.city.as_deref())
            .date(|a| a.start_date.as_deref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAdDto {
    pub ad_title: String,
    pub ad_description: String,
    pub ad_type: String,
    pub ad_link: String,
    pub image_url: String,
    pub city: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(flatten)]
    pub author: AuthorStamp,
}

impl CreateAdDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.ad_title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        if self.ad_type.trim().is_empty() {
            return Err("Placement is required".to_string());
        }
        if !self.start_date.is_empty() && !self.end_date.is_empty() && self.end_date < self.start_date {
            return Err("End date must not be before start date".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dates() {
        let dto = CreateAdDto {
            ad_title: "Monsoon offer".into(),
            ad_type: "banner".into(),
            start_date: "2024-07-10".into(),
            end_date: "2024-07-01".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());

        let dto = CreateAdDto {
            end_date: "2024-07-31".into(),
            ..dto
        };
        assert_eq!(dto.validate(), Ok(()));
    }
}
