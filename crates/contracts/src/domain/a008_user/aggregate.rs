use serde::{Deserialize, Serialize};

use crate::shared::list_engine::RecordFilter;

pub const USER_TYPES: [&str; 4] = ["customer", "owner", "agent", "builder"];

pub const FACET_USER_TYPE: &str = "user_type";
pub const FACET_CITY: &str = "city";
pub const FACET_STATE: &str = "state";

/// Registered user of the public portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub created_date: Option<String>,
}

impl User {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.trim().is_empty()).unwrap_or("N/A")
    }

    pub fn list_filter() -> RecordFilter<User> {
        RecordFilter::<User>::new()
            .search(|u| u.name.as_deref())
            .search(|u| u.email.as_deref())
            .search(|u| u.mobile.as_deref())
            .facet(FACET_USER_TYPE, "User type", |u| u.user_type.as_deref())
            .facet(FACET_CITY, "City", |u| u.city.as_deref())
            .facet(FACET_STATE, "State", |u| u.state.as_deref())
            .date(|u| u.created_date.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_engine::ListView;

    fn user(id: i64, user_type: &str, created: Option<&str>) -> User {
        User {
            id,
            name: Some(format!("User {}", id)),
            email: None,
            mobile: None,
            user_type: Some(user_type.into()),
            city: None,
            state: None,
            created_date: created.map(str::to_string),
        }
    }

    #[test]
    fn test_user_type_and_date_filters_combine() {
        let rows = vec![
            user(1, "agent", Some("2024-03-01")),
            user(2, "owner", Some("2024-03-02")),
            user(3, "agent", None),
            user(4, "agent", Some("2024-04-09")),
        ];
        let mut view = ListView::default();
        view.set_facet(FACET_USER_TYPE, "agent");
        assert_eq!(view.page_of(&User::list_filter(), &rows).total_items, 3);

        view.set_date_range("2024-03-01", "2024-03-31");
        let page = view.page_of(&User::list_filter(), &rows);
        assert_eq!(page.items.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_display_name_fallback() {
        let mut u = user(1, "agent", None);
        u.name = Some("  ".into());
        assert_eq!(u.display_name(), "N/A");
    }
}
