//! Reactive wrapper that connects a remote record list to the list engine.
//!
//! Each list screen creates one [`ListState`] with its record filter and
//! reads `page` for the rows and the pagination bar.

use contracts::shared::list_engine::{ListView, PageMeta, PageSlice, RecordFilter};
use leptos::prelude::*;

use super::resource::RemoteList;

pub struct ListState<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub remote: RemoteList<T>,
    pub view: RwSignal<ListView>,
    pub page: Memo<PageSlice<T>>,
    filter: StoredValue<RecordFilter<T>>,
}

impl<T> Clone for ListState<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListState<T> where T: Clone + PartialEq + Send + Sync + 'static {}

impl<T> ListState<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(label: &'static str, filter: RecordFilter<T>, items_per_page: usize) -> Self {
        let remote = RemoteList::empty(label);
        let view = RwSignal::new(ListView::with_page_size(items_per_page));
        let filter = StoredValue::new(filter);
        let page = Memo::new(move |_| {
            view.with(|v| filter.with_value(|f| remote.data.with(|records| v.page_of(f, records))))
        });
        Self {
            remote,
            view,
            page,
            filter,
        }
    }

    pub fn meta(&self) -> Signal<PageMeta> {
        let page = self.page;
        Signal::derive(move || page.with(|p| p.meta()))
    }

    /// Rows of the current page with their 1-based position in the filtered list.
    pub fn numbered_rows(&self) -> Signal<Vec<(usize, T)>> {
        let page = self.page;
        Signal::derive(move || page.with(|p| p.numbered()))
    }

    pub fn query(&self) -> Signal<String> {
        let view = self.view;
        Signal::derive(move || view.with(|v| v.filter.query.clone()))
    }

    /// Changes on every "Reset filters", even when the query was already empty.
    pub fn search_reset(&self) -> Signal<u64> {
        let view = self.view;
        Signal::derive(move || view.with(|v| v.resets))
    }

    pub fn facet_value(&self, key: &'static str) -> Signal<String> {
        let view = self.view;
        Signal::derive(move || view.with(|v| v.filter.facet(key).unwrap_or_default().to_string()))
    }

    /// Distinct values of a facet in the loaded data.
    pub fn facet_options(&self, key: &'static str) -> Signal<Vec<String>> {
        let filter = self.filter;
        let data = self.remote.data;
        Signal::derive(move || filter.with_value(|f| data.with(|records| f.facet_options(records, key))))
    }

    pub fn date_bounds(&self) -> Signal<(String, String)> {
        let view = self.view;
        Signal::derive(move || {
            view.with(|v| {
                let range = &v.filter.date_range;
                (
                    range.start.clone().unwrap_or_default(),
                    range.end.clone().unwrap_or_default(),
                )
            })
        })
    }

    pub fn active_filters(&self) -> Signal<usize> {
        let view = self.view;
        Signal::derive(move || view.with(|v| v.filter.active_count()))
    }

    pub fn set_query(&self, query: String) {
        self.view.update(|v| v.set_query(query));
    }

    pub fn set_facet(&self, key: &str, value: String) {
        self.view.update(|v| v.set_facet(key, value));
    }

    pub fn set_date_range(&self, start: String, end: String) {
        self.view.update(|v| v.set_date_range(start, end));
    }

    pub fn clear_filters(&self) {
        self.view.update(|v| v.clear_filters());
    }

    pub fn go_to_page(&self, page: usize) {
        let total = self.page.with_untracked(|p| p.total_items);
        self.view.update(|v| v.go_to_page(page, total));
    }

    pub fn set_page_size(&self, size: usize) {
        self.view.update(|v| v.set_page_size(size));
    }

    pub fn page_change(&self) -> Callback<usize> {
        let this = *self;
        Callback::new(move |page| this.go_to_page(page))
    }

    pub fn page_size_change(&self) -> Callback<usize> {
        let this = *self;
        Callback::new(move |size| this.set_page_size(size))
    }

    pub fn page_size(&self) -> Signal<usize> {
        let view = self.view;
        Signal::derive(move || view.with(|v| v.page.items_per_page))
    }
}
