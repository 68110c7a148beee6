//! Client-side pagination: page arithmetic and the page-control model.

/// Rows per page unless a screen picks another size.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Number of numbered buttons around the current page.
pub const DEFAULT_WINDOW: usize = 5;

/// One element of the page-control bar: `1 … 4 5 [6] 7 8 … 42`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaginationItem {
    Page(usize),
    Ellipsis,
}

/// Current page (1-based) and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl PageState {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    /// `ceil(total_items / items_per_page)`, zero for an empty list.
    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.items_per_page.max(1))
    }

    /// Current page clamped into `1..=max(1, total_pages)`.
    pub fn effective_page(&self, total_items: usize) -> usize {
        let last = self.total_pages(total_items).max(1);
        self.current_page.clamp(1, last)
    }

    pub fn start_index(&self) -> usize {
        (self.current_page.max(1) - 1) * self.items_per_page.max(1)
    }

    pub fn end_index(&self, total_items: usize) -> usize {
        (self.start_index() + self.items_per_page.max(1)).min(total_items)
    }

    /// Moves to `page`, clamped to the valid range.
    pub fn go_to(&mut self, page: usize, total_items: usize) {
        self.current_page = page.clamp(1, self.total_pages(total_items).max(1));
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, total_items: usize) -> bool {
        self.current_page < self.total_pages(total_items)
    }

    pub fn previous(&mut self) {
        if self.has_previous() {
            self.current_page -= 1;
        }
    }

    pub fn next(&mut self, total_items: usize) {
        if self.has_next(total_items) {
            self.current_page += 1;
        }
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page.max(1);
        self.reset();
    }
}

/// The visible part of `items` for `state`. Out-of-range pages are empty.
pub fn paginate<'a, T>(items: &'a [T], state: &PageState) -> &'a [T] {
    let start = state.start_index();
    if start >= items.len() {
        return &[];
    }
    &items[start..state.end_index(items.len())]
}

/// Builds the page-control model.
///
/// Up to `window + 2` pages everything is listed. Beyond that the first and
/// last pages are anchors, `window` pages are centered on `current_page`
/// (shifted to stay between the anchors) and gaps become ellipses.
pub fn pagination_items(current_page: usize, total_pages: usize, window: usize) -> Vec<PaginationItem> {
    let window = window.max(1);
    if total_pages <= window + 2 {
        return (1..=total_pages).map(PaginationItem::Page).collect();
    }

    let current = current_page.clamp(1, total_pages);
    let last_inner = total_pages - 1;
    let mut start = current.saturating_sub(window / 2).max(2);
    let mut end = start + window - 1;
    if end > last_inner {
        end = last_inner;
        start = end + 1 - window;
    }

    let mut items = Vec::with_capacity(window + 4);
    items.push(PaginationItem::Page(1));
    if start > 2 {
        items.push(PaginationItem::Ellipsis);
    }
    items.extend((start..=end).map(PaginationItem::Page));
    if end < last_inner {
        items.push(PaginationItem::Ellipsis);
    }
    items.push(PaginationItem::Page(total_pages));
    items
}

/// Everything a list screen renders for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub pagination: Vec<PaginationItem>,
}

impl<T> Default for PageSlice<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            total_pages: 0,
            current_page: 1,
            start_index: 0,
            end_index: 0,
            pagination: Vec::new(),
        }
    }
}

impl<T> PageSlice<T> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Rows with their 1-based position in the filtered list. The position
    /// changes with the filter, so row views keyed on a record must key on it too.
    pub fn numbered(&self) -> Vec<(usize, T)>
    where
        T: Clone,
    {
        self.items
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, row)| (self.start_index + i + 1, row))
            .collect()
    }

    /// Everything except the rows, for the page-control bar.
    pub fn meta(&self) -> PageMeta {
        PageMeta {
            total_items: self.total_items,
            total_pages: self.total_pages,
            current_page: self.current_page,
            start_index: self.start_index,
            end_index: self.end_index,
            pagination: self.pagination.clone(),
        }
    }
}

/// Row-independent part of a [`PageSlice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub pagination: Vec<PaginationItem>,
}

impl Default for PageMeta {
    fn default() -> Self {
        PageSlice::<()>::default().meta()
    }
}

#[cfg(test)]
mod tests {
    use super::PaginationItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn test_indexes_for_last_partial_page() {
        let state = PageState {
            current_page: 3,
            items_per_page: 10,
        };
        let items: Vec<u32> = (0..23).collect();

        assert_eq!(state.start_index(), 20);
        assert_eq!(state.end_index(items.len()), 23);
        assert_eq!(state.total_pages(items.len()), 3);
        assert_eq!(paginate(&items, &state), &[20, 21, 22]);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        let state = PageState::new(10);
        assert_eq!(state.total_pages(0), 0);
        assert_eq!(state.total_pages(1), 1);
        assert_eq!(state.total_pages(10), 1);
        assert_eq!(state.total_pages(11), 2);
    }

    #[test]
    fn test_empty_list() {
        let state = PageState::new(10);
        let items: Vec<u32> = Vec::new();
        assert!(paginate(&items, &state).is_empty());
        assert_eq!(state.effective_page(0), 1);
        assert!(pagination_items(1, 0, DEFAULT_WINDOW).is_empty());
    }

    #[test]
    fn test_pages_concatenate_to_original() {
        let items: Vec<u32> = (0..47).collect();
        for per_page in [1, 3, 10, 47, 50] {
            let mut state = PageState::new(per_page);
            let mut joined = Vec::new();
            for page in 1..=state.total_pages(items.len()) {
                state.go_to(page, items.len());
                joined.extend_from_slice(paginate(&items, &state));
            }
            assert_eq!(joined, items, "items_per_page = {}", per_page);
        }
    }

    #[test]
    fn test_page_beyond_end_is_empty() {
        let state = PageState {
            current_page: 9,
            items_per_page: 10,
        };
        let items: Vec<u32> = (0..15).collect();
        assert!(paginate(&items, &state).is_empty());
        assert_eq!(state.effective_page(items.len()), 2);
    }

    #[test]
    fn test_navigation_boundaries() {
        let mut state = PageState::new(10);
        state.previous();
        assert_eq!(state.current_page, 1);

        state.next(25);
        state.next(25);
        state.next(25);
        assert_eq!(state.current_page, 3);
        assert!(!state.has_next(25));

        state.go_to(100, 25);
        assert_eq!(state.current_page, 3);
        state.go_to(0, 25);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_changing_page_size_resets_page() {
        let mut state = PageState::new(10);
        state.go_to(4, 100);
        state.set_items_per_page(25);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.items_per_page, 25);
    }

    #[test]
    fn test_window_centered_on_current_page() {
        assert_eq!(
            pagination_items(10, 20, 5),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(11), Page(12), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_window_near_edges() {
        assert_eq!(
            pagination_items(1, 20, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Ellipsis, Page(20)]
        );
        assert_eq!(
            pagination_items(20, 20, 5),
            vec![Page(1), Ellipsis, Page(15), Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
        assert_eq!(
            pagination_items(4, 20, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_small_page_counts_list_every_page() {
        assert_eq!(pagination_items(1, 1, 5), vec![Page(1)]);
        assert_eq!(
            pagination_items(3, 7, 5),
            (1..=7).map(Page).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_wider_window() {
        assert_eq!(
            pagination_items(6, 42, 7),
            vec![
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Page(8),
                Page(9),
                Ellipsis,
                Page(42)
            ]
        );
    }
}
