use super::filter::{DateRange, FilterState, RecordFilter};
use super::paginator::{pagination_items, paginate, PageSlice, PageState, DEFAULT_WINDOW};

/// Filter and page state of one list screen.
///
/// Every filter mutation sends the user back to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub filter: FilterState,
    pub page: PageState,
    pub window: usize,
    /// Bumped by every `clear_filters`, so inputs holding unsent text can
    /// drop it even when the cleared value equals the old one.
    pub resets: u64,
}

impl Default for ListView {
    fn default() -> Self {
        Self {
            filter: FilterState::default(),
            page: PageState::default(),
            window: DEFAULT_WINDOW,
            resets: 0,
        }
    }
}

impl ListView {
    pub fn with_page_size(items_per_page: usize) -> Self {
        Self {
            page: PageState::new(items_per_page),
            ..Self::default()
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        self.page.reset();
    }

    /// Selects a facet value; an empty value clears the facet.
    pub fn set_facet(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.filter.facets.remove(key);
        } else {
            self.filter.facets.insert(key.to_string(), value);
        }
        self.page.reset();
    }

    pub fn set_date_range(&mut self, start: impl Into<String>, end: impl Into<String>) {
        self.filter.date_range = DateRange::new(start, end);
        self.page.reset();
    }

    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
        self.page.reset();
        self.resets += 1;
    }

    pub fn set_page_size(&mut self, items_per_page: usize) {
        self.page.set_items_per_page(items_per_page);
    }

    pub fn go_to_page(&mut self, page: usize, total_items: usize) {
        self.page.go_to(page, total_items);
    }

    pub fn previous_page(&mut self) {
        self.page.previous();
    }

    pub fn next_page(&mut self, total_items: usize) {
        self.page.next(total_items);
    }

    /// Filters `records` and cuts out the current page.
    ///
    /// A stale `current_page` (the list shrank after a reload) is clamped to
    /// the last page for rendering; the stored state is left untouched.
    pub fn page_of<T: Clone>(&self, filter: &RecordFilter<T>, records: &[T]) -> PageSlice<T> {
        let filtered = filter.apply(records, &self.filter);
        let total_items = filtered.len();

        let mut page = self.page;
        page.current_page = page.effective_page(total_items);

        PageSlice {
            items: paginate(&filtered, &page).iter().map(|r| (*r).clone()).collect(),
            total_items,
            total_pages: page.total_pages(total_items),
            current_page: page.current_page,
            start_index: page.start_index(),
            end_index: page.end_index(total_items),
            pagination: pagination_items(page.current_page, page.total_pages(total_items), self.window),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_engine::PaginationItem;

    #[derive(Debug, Clone, PartialEq)]
    struct Lead {
        id: usize,
        name: String,
        status: String,
        created_at: Option<String>,
    }

    fn leads(n: usize) -> Vec<Lead> {
        (0..n)
            .map(|id| Lead {
                id,
                name: format!("Lead {}", id),
                status: if id % 2 == 0 { "new".into() } else { "closed".into() },
                created_at: Some(format!("2024-01-{:02}", id % 28 + 1)),
            })
            .collect()
    }

    fn lead_filter() -> RecordFilter<Lead> {
        RecordFilter::<Lead>::new()
            .search(|l| Some(l.name.as_str()))
            .facet("status", "Status", |l| Some(l.status.as_str()))
            .date(|l| l.created_at.as_deref())
    }

    fn on_page_three() -> ListView {
        let mut view = ListView::default();
        view.go_to_page(3, 100);
        assert_eq!(view.page.current_page, 3);
        view
    }

    #[test]
    fn test_page_of_twenty_three_records() {
        let records = leads(23);
        let mut view = ListView::default();
        view.go_to_page(3, records.len());

        let page = view.page_of(&lead_filter(), &records);
        assert_eq!(page.start_index, 20);
        assert_eq!(page.end_index, 23);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items[0].id, 20);
        assert!(!page.has_next());
    }

    #[test]
    fn test_january_range_pages_to_single_record() {
        let lead = |id: usize, created_at: Option<&str>| Lead {
            id,
            name: format!("Lead {}", id),
            status: "new".into(),
            created_at: created_at.map(String::from),
        };
        let records = vec![lead(1, Some("2024-01-05")), lead(2, Some("2024-02-10")), lead(3, None)];
        let mut view = ListView::default();
        view.set_date_range("2024-01-01", "2024-01-31");

        let page = view.page_of(&lead_filter(), &records);
        assert_eq!(page.total_items, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, 1);
        assert_eq!(page.pagination, vec![PaginationItem::Page(1)]);
    }

    #[test]
    fn test_row_numbers_follow_the_filter() {
        let records = leads(12);
        let mut view = ListView::default();
        view.go_to_page(2, records.len());

        let numbered = view.page_of(&lead_filter(), &records).numbered();
        assert_eq!(numbered[0].0, 11);
        assert_eq!(numbered[0].1.id, 10);

        view.set_query("lead 10");
        let numbered = view.page_of(&lead_filter(), &records).numbered();
        assert_eq!(numbered.len(), 1);
        assert_eq!((numbered[0].0, numbered[0].1.id), (1, 10));
    }

    #[test]
    fn test_query_change_resets_page() {
        let mut view = on_page_three();
        view.set_query("lead 1");
        assert_eq!(view.page.current_page, 1);
    }

    #[test]
    fn test_facet_change_resets_page() {
        let mut view = on_page_three();
        view.set_facet("status", "new");
        assert_eq!(view.page.current_page, 1);
        assert_eq!(view.filter.facet("status"), Some("new"));

        view.go_to_page(2, 100);
        view.set_facet("status", "");
        assert_eq!(view.page.current_page, 1);
        assert_eq!(view.filter.facet("status"), None);
    }

    #[test]
    fn test_date_change_resets_page() {
        let mut view = on_page_three();
        view.set_date_range("2024-01-01", "");
        assert_eq!(view.page.current_page, 1);

        let mut view = on_page_three();
        view.clear_filters();
        assert_eq!(view.page.current_page, 1);
    }

    #[test]
    fn test_clear_with_empty_query_still_counts_as_reset() {
        let mut view = ListView::default();
        view.set_facet("status", "new");
        view.clear_filters();
        let after_first = view.clone();
        assert_eq!(after_first.resets, 1);

        // query was "" before and after: only the counter tells the search box
        view.clear_filters();
        assert_eq!(view.filter, after_first.filter);
        assert_eq!(view.resets, 2);
        assert_ne!(view, after_first);

        view.set_query("villa");
        assert_eq!(view.resets, 2);
    }

    #[test]
    fn test_filtered_page_of() {
        let records = leads(40);
        let mut view = ListView::default();
        view.set_facet("status", "new");
        view.set_date_range("2024-01-01", "2024-01-10");

        let page = view.page_of(&lead_filter(), &records);
        assert!(page.items.iter().all(|l| l.status == "new"));
        // ids 0,2,4,6,8 and 28,30,32,34,36 fall on 1..=10 January
        assert_eq!(page.total_items, 10);
        assert_eq!(page.pagination, vec![PaginationItem::Page(1)]);
    }

    #[test]
    fn test_stale_page_is_clamped_for_rendering() {
        let records = leads(12);
        let mut view = ListView::default();
        view.page.current_page = 7;

        let page = view.page_of(&lead_filter(), &records);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn test_empty_result() {
        let records = leads(5);
        let mut view = ListView::default();
        view.set_query("no such lead");

        let page = view.page_of(&lead_filter(), &records);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.current_page, 1);
        assert!(page.pagination.is_empty());
    }
}
