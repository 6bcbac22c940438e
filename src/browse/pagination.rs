use super::state::BrowseState;

/// Prev/next navigation for a filtered listing.
///
/// Links re-encode the whole browse state with only `page` changed, so
/// active filters survive page navigation (merge, never replace).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub total_pages: u32,
}

impl Pagination {
    pub fn new(page: u32, total: i64, per_page: u32) -> Self {
        let total_pages = if total <= 0 {
            0
        } else {
            ((total as u64).div_ceil(per_page.max(1) as u64)) as u32
        };
        Self { page: page.max(1), total_pages }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Query string for the previous page, when one exists
    pub fn prev_url(&self, state: &BrowseState) -> Option<String> {
        self.has_prev()
            .then(|| format!("?{}", state.with_page(self.page - 1).encode()))
    }

    /// Query string for the next page, when one exists
    pub fn next_url(&self, state: &BrowseState) -> Option<String> {
        self.has_next()
            .then(|| format!("?{}", state.with_page(self.page + 1).encode()))
    }
}
