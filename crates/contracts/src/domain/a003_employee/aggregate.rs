use serde::{Deserialize, Serialize};

use crate::shared::list_engine::RecordFilter;
use crate::system::session::AuthorStamp;

pub const EMPLOYEE_ROLES: [&str; 4] = ["admin", "manager", "telecaller", "marketing_executive"];

pub const FACET_USER_TYPE: &str = "user_type";
pub const FACET_CITY: &str = "city";

/// Back-office staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub created_date: Option<String>,
}

impl Employee {
    pub fn list_filter() -> RecordFilter<Employee> {
        RecordFilter::<Employee>::new()
            .search(|e| Some(e.name.as_str()))
            .search(|e| e.email.as_deref())
            .search(|e| e.mobile.as_deref())
            .search(|e| e.designation.as_deref())
            .facet(FACET_USER_TYPE, "Role", |e| e.user_type.as_deref())
            .facet(FACET_CITY, "City", |e| e.city.as_deref())
            .date(|e| e.created_date.as_deref())
    }
}

/// Create/update payload of the employee form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub designation: String,
    pub user_type: String,
    pub city: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(flatten)]
    pub author: AuthorStamp,
}

impl EmployeeDto {
    pub fn from_employee(e: &Employee) -> Self {
        Self {
            id: Some(e.id),
            name: e.name.clone(),
            email: e.email.clone().unwrap_or_default(),
            mobile: e.mobile.clone().unwrap_or_default(),
            designation: e.designation.clone().unwrap_or_default(),
            user_type: e.user_type.clone().unwrap_or_default(),
            city: e.city.clone().unwrap_or_default(),
            state: e.state.clone().unwrap_or_default(),
            password: None,
            author: AuthorStamp::default(),
        }
    }

    /// First validation problem of the form, if any.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        let mobile = self.mobile.trim();
        if mobile.len() != 10 || !mobile.chars().all(|c| c.is_ascii_digit()) {
            return Err("Mobile number must have 10 digits".to_string());
        }
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            return Err("Email address is not valid".to_string());
        }
        if self.user_type.trim().is_empty() {
            return Err("Role is required".to_string());
        }
        if self.id.is_none() && self.password.as_deref().map_or(true, |p| p.len() < 6) {
            return Err("Password must be at least 6 characters".to_string());
        }
        Ok(())
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::session::SessionContext;

    fn valid_new() -> EmployeeDto {
        EmployeeDto {
            name: "Sneha".into(),
            email: "sneha@example.com".into(),
            mobile: "9000000001".into(),
            user_type: "telecaller".into(),
            password: Some("secret1".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate() {
        assert_eq!(valid_new().validate(), Ok(()));

        let bad_mobile = EmployeeDto {
            mobile: "12345".into(),
            ..valid_new()
        };
        assert!(bad_mobile.validate().is_err());

        let no_password = EmployeeDto {
            password: None,
            ..valid_new()
        };
        assert!(no_password.validate().is_err());

        let edit_without_password = EmployeeDto {
            id: Some(3),
            password: None,
            ..valid_new()
        };
        assert_eq!(edit_without_password.validate(), Ok(()));
    }

    #[test]
    fn test_payload_carries_author_fields() {
        let dto = EmployeeDto {
            author: SessionContext::new("11", "Admin").stamp(),
            ..valid_new()
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["created_by"], "Admin");
        assert_eq!(json["created_userID"], "11");
        assert!(json.get("id").is_none());
    }
}
