//! Tabular filter-and-paginate engine shared by every list screen.
//!
//! Pipeline: records -> [`RecordFilter::apply`] -> [`paginate`] -> view.
//! [`ListView`] holds the per-screen state and keeps the
//! "filter change resets to page 1" rule in one place.

mod filter;
mod list_view;
mod paginator;

pub use filter::{date_part, parse_day, DateRange, Facet, FieldAccessor, FilterState, RecordFilter};
pub use list_view::ListView;
pub use paginator::{
    paginate, pagination_items, PageMeta, PageSlice, PageState, PaginationItem, DEFAULT_ITEMS_PER_PAGE,
    DEFAULT_WINDOW,
};
