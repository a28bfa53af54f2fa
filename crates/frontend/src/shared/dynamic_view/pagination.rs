use contracts::shared::dynamic_view::{DataResponse, Row};

/// Rows per data query
pub const PAGE_SIZE: u32 = 20;
/// Pages always shown at each end of the paginator
pub const MARGIN_PAGES: u32 = 2;
/// Pages shown around the current one
pub const PAGE_RANGE: u32 = 5;

/// Paging state of a view (pages are 1-indexed)
///
/// `current_page` only ever changes from a server response: the requested page
/// and the page the server returns may differ (clamping), and the server wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: u32,
    pub total_pages: u32,
    pub page_size: u32,
    pub loading: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            page_size: PAGE_SIZE,
            loading: true,
        }
    }
}

impl PageState {
    /// Paginator selection (0-indexed) -> logical page to request
    pub fn page_clicked(&mut self, index: usize) -> u32 {
        self.loading = true;
        u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1)
    }

    pub fn begin_query(&mut self) {
        self.loading = true;
    }

    /// Take page and total from the server
    pub fn query_completed(&mut self, server_page: u32, server_total: u32) {
        self.current_page = server_page.max(1);
        self.total_pages = server_total.max(1);
        self.loading = false;
    }

    /// Apply a data response for `requested_page`; missing values fall back to
    /// the requested page and a single page.
    pub fn apply_response(&mut self, requested_page: u32, response: &DataResponse) {
        self.query_completed(
            response.page.unwrap_or(requested_page),
            response.total_page.unwrap_or(1),
        );
    }

    pub fn query_failed(&mut self) {
        self.loading = false;
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// What the refresh button re-issues: the layout until it has loaded,
    /// then the current page.
    pub fn refresh_target(&self, layout_loaded: bool) -> RefreshTarget {
        if layout_loaded {
            RefreshTarget::Data(self.current_page)
        } else {
            RefreshTarget::Layout
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTarget {
    Layout,
    Data(u32),
}

/// Rows of the current page and the error of the last data query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableData {
    pub rows: Vec<Row>,
    pub error: Option<String>,
}

impl TableData {
    pub fn loaded(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.error = None;
    }

    /// Rows of an earlier query are not shown next to a failure
    pub fn failed(&mut self, error: impl Into<String>) {
        self.rows.clear();
        self.error = Some(error.into());
    }
}

/// One control of the paginator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Previous { enabled: bool },
    /// `index` is the 0-indexed selection reported back on click
    Page { index: usize, number: u32, active: bool },
    Break,
    Next { enabled: bool },
}

/// Paginator controls: Prev, margin pages, a window around the current page,
/// `…` for every gap, margin pages, Next.
pub fn page_items(current_page: u32, total_pages: u32) -> Vec<PageItem> {
    let total = total_pages.max(1);
    let current = current_page.clamp(1, total);

    let window_end = (current.saturating_sub(PAGE_RANGE / 2).max(1) + PAGE_RANGE - 1).min(total);
    let window_start = window_end.saturating_sub(PAGE_RANGE - 1).max(1);

    let mut items = vec![PageItem::Previous {
        enabled: current > 1,
    }];
    let mut last_shown = 0;
    for number in 1..=total {
        let in_margin = number <= MARGIN_PAGES || number > total.saturating_sub(MARGIN_PAGES);
        let in_window = (window_start..=window_end).contains(&number);
        if !(in_margin || in_window) {
            continue;
        }
        if number > last_shown + 1 {
            items.push(PageItem::Break);
        }
        items.push(PageItem::Page {
            index: (number - 1) as usize,
            number,
            active: number == current,
        });
        last_shown = number;
    }
    items.push(PageItem::Next {
        enabled: current < total,
    });
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(items: &[PageItem]) -> Vec<Option<u32>> {
        items
            .iter()
            .filter_map(|item| match item {
                PageItem::Page { number, .. } => Some(Some(*number)),
                PageItem::Break => Some(None),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let state = PageState::default();
        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.page_size, 20);
        assert!(state.loading);
    }

    #[test]
    fn test_page_click_is_one_indexed() {
        let mut state = PageState::default();
        state.query_completed(1, 10);
        for k in [0usize, 1, 4, 9] {
            assert_eq!(state.page_clicked(k), k as u32 + 1);
            assert!(state.loading);
        }
        // the click alone does not move the current page
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_server_page_wins() {
        let mut state = PageState::default();
        let requested = state.page_clicked(7);
        assert_eq!(requested, 8);
        state.query_completed(5, 5);
        assert_eq!(state.current_page, 5);
        assert_eq!(state.total_pages, 5);
        assert!(!state.loading);
    }

    #[test]
    fn test_apply_response_fallbacks_and_clamping() {
        let mut state = PageState::default();
        state.apply_response(3, &DataResponse::default());
        assert_eq!((state.current_page, state.total_pages), (3, 1));

        state.apply_response(
            2,
            &DataResponse {
                items: Vec::new(),
                page: Some(0),
                total_page: Some(0),
            },
        );
        assert_eq!((state.current_page, state.total_pages), (1, 1));
    }

    #[test]
    fn test_failure_clears_loading_only() {
        let mut state = PageState::default();
        state.query_completed(2, 4);
        state.begin_query();
        state.query_failed();
        assert!(!state.loading);
        assert_eq!(state.current_page, 2);
        assert!(state.has_previous());
        assert!(state.has_next());
    }

    #[test]
    fn test_refresh_reloads_layout_until_loaded() {
        let mut state = PageState::default();
        state.query_failed();
        assert_eq!(state.refresh_target(false), RefreshTarget::Layout);

        state.query_completed(3, 5);
        assert_eq!(state.refresh_target(true), RefreshTarget::Data(3));
    }

    #[test]
    fn test_failed_query_empties_table() {
        let mut data = TableData::default();
        data.loaded(vec![Row::new(), Row::new()]);
        assert_eq!(data.rows.len(), 2);

        data.failed("server error (500)");
        assert!(data.rows.is_empty());
        assert_eq!(data.error.as_deref(), Some("server error (500)"));

        data.loaded(vec![Row::new()]);
        assert_eq!(data.rows.len(), 1);
        assert_eq!(data.error, None);
    }

    #[test]
    fn test_page_items_small() {
        let items = page_items(1, 1);
        assert_eq!(items.first(), Some(&PageItem::Previous { enabled: false }));
        assert_eq!(items.last(), Some(&PageItem::Next { enabled: false }));
        assert_eq!(numbers(&items), vec![Some(1)]);

        assert_eq!(
            numbers(&page_items(2, 4)),
            vec![Some(1), Some(2), Some(3), Some(4)]
        );
    }

    #[test]
    fn test_page_items_with_breaks() {
        assert_eq!(
            numbers(&page_items(10, 20)),
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(19),
                Some(20)
            ]
        );
        assert_eq!(
            numbers(&page_items(1, 20)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(19), Some(20)]
        );
        assert_eq!(
            numbers(&page_items(20, 20)),
            vec![Some(1), Some(2), None, Some(16), Some(17), Some(18), Some(19), Some(20)]
        );
    }

    #[test]
    fn test_page_items_active_and_index() {
        let items = page_items(3, 6);
        let active: Vec<_> = items
            .iter()
            .filter_map(|i| match i {
                PageItem::Page { index, number, active: true } => Some((*index, *number)),
                _ => None,
            })
            .collect();
        assert_eq!(active, vec![(2, 3)]);
        assert_eq!(items.first(), Some(&PageItem::Previous { enabled: true }));
        assert_eq!(items.last(), Some(&PageItem::Next { enabled: true }));
    }
}
