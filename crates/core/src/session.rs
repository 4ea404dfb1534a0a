//! Browse session - filter plus pagination state for the catalog view
//!
//! Any edit to the filter resets the page to 1; a stale page number after a
//! filter change would silently show the wrong slice.

use crate::filter::SpaceFilter;
use crate::models::Space;
use crate::page::{paginate, total_pages};

/// Per-view catalog browsing state
#[derive(Debug, Clone)]
pub struct BrowseSession {
    filter: SpaceFilter,
    page: usize,
    page_size: usize,
}

impl BrowseSession {
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: SpaceFilter::default(),
            page: 1,
            page_size,
        }
    }

    pub fn filter(&self) -> &SpaceFilter {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace the whole filter; resets to page 1
    pub fn set_filter(&mut self, filter: SpaceFilter) {
        self.filter = filter;
        self.page = 1;
    }

    /// Edit the filter in place; resets to page 1
    pub fn edit_filter(&mut self, edit: impl FnOnce(&mut SpaceFilter)) {
        edit(&mut self.filter);
        self.page = 1;
    }

    /// Reset every predicate; resets to page 1
    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.page = 1;
    }

    /// Navigate to a page. No clamping: an out-of-range page renders empty,
    /// which the view treats as "no results".
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// The spaces the current page shows: filter, then slice
    pub fn visible(&self, spaces: &[Space]) -> Vec<Space> {
        let filtered = self.filter.apply(spaces);
        paginate(&filtered, self.page_size, self.page).to_vec()
    }

    pub fn total_pages(&self, spaces: &[Space]) -> usize {
        total_pages(self.filter.apply(spaces).len(), self.page_size)
    }
}
