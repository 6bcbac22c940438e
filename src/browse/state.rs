use url::form_urlencoded;

use crate::catalog::ToolFilters;

/// Canonical query-string representation of a catalog view.
///
/// The URL is the source of truth for what the user is looking at: search
/// term, selected filter chips and page. Every transition below returns the
/// state to a shareable, bookmarkable form. No hidden shared state; callers
/// pass the value around explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    pub q: String,
    pub categories: Vec<String>,
    pub pricing: Vec<String>,
    pub page: u32,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            q: String::new(),
            categories: vec![],
            pricing: vec![],
            page: 1,
        }
    }
}

impl BrowseState {
    /// Parse a raw query string (without the leading '?').
    ///
    /// `category` and `pricing` are repeatable keys; for `q` and `page` the
    /// last occurrence wins. Malformed or missing `page` defaults to 1.
    pub fn decode(query_string: &str) -> Self {
        let mut state = Self::default();
        for (key, value) in form_urlencoded::parse(query_string.as_bytes()) {
            match key.as_ref() {
                "q" => state.q = value.into_owned(),
                "category" => state.categories.push(value.into_owned()),
                "pricing" => state.pricing.push(value.into_owned()),
                "page" => state.page = value.parse().unwrap_or(1).max(1),
                _ => {}
            }
        }
        state
    }

    /// Serialize back to the canonical query string. Empty search terms are
    /// omitted; `page` is always emitted.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if !self.q.is_empty() {
            serializer.append_pair("q", &self.q);
        }
        for category in &self.categories {
            serializer.append_pair("category", category);
        }
        for pricing in &self.pricing {
            serializer.append_pair("pricing", pricing);
        }
        serializer.append_pair("page", &self.page.to_string());
        serializer.finish()
    }

    /// Commit a new search term. Changing the result set invalidates the
    /// previous pagination context, so page resets to 1.
    pub fn set_query(&mut self, term: &str) {
        self.q = term.to_string();
        self.page = 1;
    }

    /// Multi-select toggle: selecting a present value removes it, an absent
    /// value adds it. Resets page to 1 either way.
    pub fn toggle_category(&mut self, slug: &str) {
        toggle(&mut self.categories, slug);
        self.page = 1;
    }

    pub fn toggle_pricing(&mut self, value: &str) {
        toggle(&mut self.pricing, value);
        self.page = 1;
    }

    /// Drop category and pricing selections, keep the search term
    pub fn clear_filters(&mut self) {
        self.categories.clear();
        self.pricing.clear();
        self.page = 1;
    }

    pub fn has_filters(&self) -> bool {
        !self.categories.is_empty() || !self.pricing.is_empty()
    }

    pub fn with_page(&self, page: u32) -> Self {
        let mut next = self.clone();
        next.page = page.max(1);
        next
    }

    /// Project onto the single-valued server-side filter parameters. The
    /// listing endpoint takes one category and one pricing value; the first
    /// selection wins.
    pub fn to_filters(&self, per_page: u32) -> ToolFilters {
        ToolFilters {
            query: self.q.clone(),
            category: self.categories.first().cloned().unwrap_or_default(),
            pricing: self.pricing.first().cloned().unwrap_or_default(),
            page: self.page,
            per_page,
        }
    }
}

fn toggle(values: &mut Vec<String>, value: &str) {
    if values.iter().any(|v| v == value) {
        values.retain(|v| v != value);
    } else {
        values.push(value.to_string());
    }
}
