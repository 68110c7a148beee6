use serde::{Deserialize, Serialize};

use crate::shared::list_engine::RecordFilter;
use crate::system::session::AuthorStamp;

pub const EMPLOYMENT_TYPES: [&str; 3] = ["Full-time", "Part-time", "Internship"];

pub const FACET_LOCATION: &str = "location";
pub const FACET_EMPLOYMENT_TYPE: &str = "employment_type";

/// Job opening published on the careers page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub id: i64,
    pub job_title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub employment_type: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub posted_date: Option<String>,
}

impl Career {
    pub fn list_filter() -> RecordFilter<Career> {
        RecordFilter::<Career>::new()
            .search(|c| Some(c.job_title.as_str()))
            .search(|c| c.location.as_deref())
            .search(|c| c.description.as_deref())
            .facet(FACET_LOCATION, "Location", |c| c.location.as_deref())
            .facet(FACET_EMPLOYMENT_TYPE, "Type", |c| c.employment_type.as_deref())
            .date(|c| c.posted_date.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub job_title: String,
    pub location: String,
    pub employment_type: String,
    pub experience: String,
    pub description: String,
    #[serde(flatten)]
    pub author: AuthorStamp,
}

impl CareerDto {
    pub fn from_career(c: &Career) -> Self {
        Self {
            id: Some(c.id),
            job_title: c.job_title.clone(),
            location: c.location.clone().unwrap_or_default(),
            employment_type: c.employment_type.clone().unwrap_or_default(),
            experience: c.experience.clone().unwrap_or_default(),
            description: c.description.clone().unwrap_or_default(),
            author: AuthorStamp::default(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.job_title.trim().is_empty() {
            return Err("Job title is required".to_string());
        }
        if self.description.trim().is_empty() {
            return Err("Description is required".to_string());
        }
        Ok(())
    }
}
