//! Predicate builder for list screens.
//!
//! A [`RecordFilter`] is configured once per record type with accessor
//! functions, then evaluated against the screen's current [`FilterState`].

use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Accessor returning a string view of one record field.
pub type FieldAccessor<T> = fn(&T) -> Option<&str>;

/// Inclusive date range in `YYYY-MM-DD` form. Empty strings mean "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    pub fn start(&self) -> Option<&str> {
        valid_bound(self.start.as_deref())
    }

    pub fn end(&self) -> Option<&str> {
        valid_bound(self.end.as_deref())
    }

    /// At least one bound is set to a valid date.
    pub fn is_active(&self) -> bool {
        self.start().is_some() || self.end().is_some()
    }

    /// Checks a record date against the range.
    ///
    /// Without bounds every record matches, including ones with no date.
    /// With a bound, a missing or malformed record date never matches.
    pub fn contains(&self, date: Option<&str>) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(day) = date.and_then(parse_day) else {
            return false;
        };
        // compare as dates: "2024-1-5" is valid but sorts wrong as text
        if let Some(start) = self.start().and_then(parse_day) {
            if day < start {
                return false;
            }
        }
        if let Some(end) = self.end().and_then(parse_day) {
            if day > end {
                return false;
            }
        }
        true
    }
}

/// Truncates an ISO date/datetime to its date component and validates it.
///
/// `"2024-03-15T14:02:26Z"` -> `Some("2024-03-15")`, `"garbage"` -> `None`.
pub fn date_part(value: &str) -> Option<&str> {
    let day = value.trim().split('T').next()?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()?;
    Some(day)
}

/// Calendar date of an ISO date/datetime, zero padding optional.
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    let day = value.trim().split('T').next()?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn valid_bound(bound: Option<&str>) -> Option<&str> {
    let bound = bound?.trim();
    if bound.is_empty() {
        return None;
    }
    date_part(bound)
}

/// Current filter input of a list screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub facets: BTreeMap<String, String>,
    pub date_range: DateRange,
}

impl FilterState {
    /// Selected value of a facet; empty selections read as `None`.
    pub fn facet(&self, key: &str) -> Option<&str> {
        self.facets
            .get(key)
            .map(|v| v.as_str())
            .filter(|v| !v.is_empty())
    }

    /// Number of active filters, for the filter panel badge.
    pub fn active_count(&self) -> usize {
        let text = usize::from(!self.query.trim().is_empty());
        let facets = self.facets.values().filter(|v| !v.is_empty()).count();
        let dates = usize::from(self.date_range.is_active());
        text + facets + dates
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

/// Discrete filter dimension of a record type.
pub struct Facet<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub accessor: FieldAccessor<T>,
}

impl<T> Clone for Facet<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            accessor: self.accessor,
        }
    }
}

/// Generic predicate over records of type `T`.
///
/// ```
/// use contracts::shared::list_engine::{FilterState, RecordFilter};
///
/// struct Row { name: String, city: Option<String> }
///
/// let filter = RecordFilter::<Row>::new()
///     .search(|r| Some(r.name.as_str()))
///     .facet("city", "City", |r| r.city.as_deref());
///
/// let row = Row { name: "Green Villa".into(), city: Some("Pune".into()) };
/// let mut state = FilterState::default();
/// state.query = "villa".into();
/// assert!(filter.matches(&row, &state));
/// ```
pub struct RecordFilter<T> {
    search_fields: Vec<FieldAccessor<T>>,
    facets: Vec<Facet<T>>,
    date_field: Option<FieldAccessor<T>>,
}

impl<T> Clone for RecordFilter<T> {
    fn clone(&self) -> Self {
        Self {
            search_fields: self.search_fields.clone(),
            facets: self.facets.clone(),
            date_field: self.date_field,
        }
    }
}

impl<T> Default for RecordFilter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecordFilter<T> {
    pub fn new() -> Self {
        Self {
            search_fields: Vec::new(),
            facets: Vec::new(),
            date_field: None,
        }
    }

    /// Adds a field to the free-text search.
    pub fn search(mut self, accessor: FieldAccessor<T>) -> Self {
        self.search_fields.push(accessor);
        self
    }

    pub fn facet(mut self, key: &'static str, label: &'static str, accessor: FieldAccessor<T>) -> Self {
        self.facets.push(Facet {
            key,
            label,
            accessor,
        });
        self
    }

    /// Sets the field used by the date range.
    pub fn date(mut self, accessor: FieldAccessor<T>) -> Self {
        self.date_field = Some(accessor);
        self
    }

    pub fn facets(&self) -> &[Facet<T>] {
        &self.facets
    }

    pub fn has_date(&self) -> bool {
        self.date_field.is_some()
    }

    /// Distinct non-empty values of a facet over `records`, sorted.
    /// Feeds the facet dropdowns.
    pub fn facet_options(&self, records: &[T], key: &str) -> Vec<String> {
        let Some(facet) = self.facets.iter().find(|f| f.key == key) else {
            return Vec::new();
        };
        let mut values: Vec<String> = records
            .iter()
            .filter_map(|r| (facet.accessor)(r))
            .filter(|v| !v.trim().is_empty())
            .map(str::to_string)
            .collect();
        values.sort();
        values.dedup();
        values
    }

    /// Case-insensitive substring match against any search field.
    pub fn matches_text(&self, record: &T, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.search_fields.iter().any(|field| {
            field(record)
                .unwrap_or("")
                .to_lowercase()
                .contains(&query)
        })
    }

    pub fn matches_facets(&self, record: &T, state: &FilterState) -> bool {
        self.facets.iter().all(|facet| match state.facet(facet.key) {
            Some(selected) => (facet.accessor)(record) == Some(selected),
            None => true,
        })
    }

    /// A filter without a date field ignores the range.
    pub fn matches_date(&self, record: &T, range: &DateRange) -> bool {
        match self.date_field {
            Some(field) => range.contains(field(record)),
            None => true,
        }
    }

    pub fn matches(&self, record: &T, state: &FilterState) -> bool {
        self.matches_text(record, &state.query)
            && self.matches_facets(record, state)
            && self.matches_date(record, &state.date_range)
    }

    /// Records satisfying the filter, in their original order.
    pub fn apply<'a>(&self, records: &'a [T], state: &FilterState) -> Vec<&'a T> {
        records.iter().filter(|r| self.matches(r, state)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        email: Option<&'static str>,
        user_type: Option<&'static str>,
        date: Option<&'static str>,
    }

    fn row(name: &'static str, date: Option<&'static str>) -> Row {
        Row {
            name,
            email: None,
            user_type: None,
            date,
        }
    }

    fn row_filter() -> RecordFilter<Row> {
        RecordFilter::<Row>::new()
            .search(|r| Some(r.name))
            .search(|r| r.email)
            .facet("user_type", "User type", |r| r.user_type)
            .date(|r| r.date)
    }

    fn with_range(start: &str, end: &str) -> FilterState {
        FilterState {
            date_range: DateRange::new(start, end),
            ..Default::default()
        }
    }

    #[test]
    fn test_text_matches_any_field_case_insensitive() {
        let filter = row_filter();
        let r = Row {
            email: Some("Owner@Example.com"),
            ..row("Anita", None)
        };
        let mut state = FilterState::default();

        state.query = "ANI".into();
        assert!(filter.matches(&r, &state));
        state.query = "example".into();
        assert!(filter.matches(&r, &state));
        state.query = "nobody".into();
        assert!(!filter.matches(&r, &state));
    }

    #[test]
    fn test_blank_query_matches_everything() {
        let filter = row_filter();
        let mut state = FilterState::default();
        state.query = "   ".into();
        assert!(filter.matches(&row("x", None), &state));
    }

    #[test]
    fn test_facet_equality_and_match_all() {
        let filter = row_filter();
        let agent = Row {
            user_type: Some("agent"),
            ..row("a", None)
        };
        let untyped = row("b", None);
        let mut state = FilterState::default();

        state.facets.insert("user_type".into(), String::new());
        assert!(filter.matches(&agent, &state));
        assert!(filter.matches(&untyped, &state));

        state.facets.insert("user_type".into(), "agent".into());
        assert!(filter.matches(&agent, &state));
        assert!(!filter.matches(&untyped, &state));

        state.facets.insert("user_type".into(), "owner".into());
        assert!(!filter.matches(&agent, &state));
    }

    #[test]
    fn test_date_range_scenario() {
        let filter = row_filter();
        let rows = vec![
            row("A", Some("2024-01-05")),
            row("B", Some("2024-02-10")),
            row("C", None),
        ];
        let state = with_range("2024-01-01", "2024-01-31");

        let names: Vec<_> = filter.apply(&rows, &state).iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["A"]);
    }

    #[test]
    fn test_missing_date_only_excluded_when_bound_active() {
        let filter = row_filter();
        let undated = row("C", None);
        let empty = row("D", Some(""));

        assert!(filter.matches(&undated, &FilterState::default()));
        assert!(filter.matches(&empty, &FilterState::default()));

        let start_only = FilterState {
            date_range: DateRange {
                start: Some("2024-01-01".into()),
                end: None,
            },
            ..Default::default()
        };
        assert!(!filter.matches(&undated, &start_only));
        assert!(!filter.matches(&empty, &start_only));

        let end_only = FilterState {
            date_range: DateRange {
                start: Some(String::new()),
                end: Some("2024-01-01".into()),
            },
            ..Default::default()
        };
        assert!(!filter.matches(&undated, &end_only));
    }

    #[test]
    fn test_datetime_values_are_truncated_and_bounds_inclusive() {
        let filter = row_filter();
        let state = with_range("2024-01-05", "2024-01-05");
        assert!(filter.matches(&row("A", Some("2024-01-05T23:59:59.000Z")), &state));
        assert!(!filter.matches(&row("B", Some("2024-01-06T00:00:00Z")), &state));
    }

    #[test]
    fn test_malformed_record_date_is_no_match() {
        let filter = row_filter();
        let state = with_range("2024-01-01", "2024-12-31");
        assert!(!filter.matches(&row("A", Some("05/01/2024")), &state));
        assert!(!filter.matches(&row("B", Some("2024-13-40")), &state));
    }

    #[test]
    fn test_unpadded_dates_compare_as_dates() {
        assert_eq!(parse_day("2024-1-5"), NaiveDate::from_ymd_opt(2024, 1, 5));

        let january = DateRange::new("2024-01-01", "2024-01-31");
        assert!(january.contains(Some("2024-1-5")));
        assert!(!january.contains(Some("2024-2-1")));

        let from_first = DateRange::new("2024-1-1", "");
        assert!(from_first.is_active());
        assert!(from_first.contains(Some("2024-01-05")));
        assert!(!from_first.contains(Some("2023-12-31")));

        let until_ninth = DateRange::new("", "2024-1-9");
        assert!(until_ninth.contains(Some("2024-01-09T10:00:00Z")));
        assert!(!until_ninth.contains(Some("2024-01-10")));
    }

    #[test]
    fn test_range_ignored_without_date_field() {
        let filter = RecordFilter::<Row>::new().search(|r| Some(r.name));
        let state = with_range("2024-01-01", "2024-01-31");
        assert!(!filter.has_date());
        assert!(filter.matches(&row("A", None), &state));
        assert!(filter.matches(&row("B", Some("2023-06-01")), &state));
    }

    #[test]
    fn test_malformed_bound_is_ignored() {
        let range = DateRange::new("not-a-date", "");
        assert!(!range.is_active());
        assert!(range.contains(None));
    }

    #[test]
    fn test_predicate_is_idempotent() {
        let filter = row_filter();
        let state = FilterState {
            query: "a".into(),
            ..with_range("2024-01-01", "2024-01-31")
        };
        for r in [row("A", Some("2024-01-05")), row("B", None), row("xa", Some("bad"))] {
            assert_eq!(filter.matches(&r, &state), filter.matches(&r, &state));
        }
    }

    #[test]
    fn test_facet_options_are_distinct_and_sorted() {
        let filter = row_filter();
        let rows = vec![
            Row { user_type: Some("owner"), ..row("a", None) },
            Row { user_type: Some("agent"), ..row("b", None) },
            Row { user_type: Some("owner"), ..row("c", None) },
            Row { user_type: Some(" "), ..row("d", None) },
            row("e", None),
        ];
        assert_eq!(filter.facet_options(&rows, "user_type"), vec!["agent", "owner"]);
        assert!(filter.facet_options(&rows, "city").is_empty());
    }

    #[test]
    fn test_active_count() {
        let mut state = with_range("2024-01-01", "");
        state.query = "x".into();
        state.facets.insert("user_type".into(), "agent".into());
        state.facets.insert("city".into(), String::new());
        assert_eq!(state.active_count(), 3);
        assert!(FilterState::default().is_empty());
    }
}
