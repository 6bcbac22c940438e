use super::types::ToolFilters;

/// Columns fetched for a tool-with-category row. Category columns carry a
/// `cat_` alias prefix so the joined row decodes into nested models.
pub(crate) const SELECT_COLUMNS: &str = "t.id, t.slug, t.name, t.description, t.website_url, \
     t.pricing_type, t.monthly_price, t.yearly_price, t.pricing_note, t.features, \
     t.is_popular, t.last_verified_at, t.category_id, t.created_at, t.updated_at, \
     c.id AS cat_id, c.slug AS cat_slug, c.name AS cat_name, c.icon AS cat_icon, \
     c.description AS cat_description, c.created_at AS cat_created_at, \
     c.updated_at AS cat_updated_at";

pub(crate) const FROM_CLAUSE: &str = "FROM tools t JOIN categories c ON c.id = t.category_id";

/// Parameterized SQL for one catalog listing request.
///
/// Translates the advisory filter parameters into a predicate over the
/// tool/category join. All user-supplied values are bound, never interpolated;
/// an unrecognized pricing value is bound literally and matches nothing.
pub struct CatalogQuery {
    conditions: Vec<String>,
    params: Vec<String>,
    page: u32,
    per_page: u32,
}

impl CatalogQuery {
    pub fn new(filters: &ToolFilters) -> Self {
        let mut query = Self {
            conditions: vec![],
            params: vec![],
            page: filters.effective_page(),
            per_page: filters.per_page,
        };

        // Free-text search: case-insensitive substring over name and description
        if !filters.query.is_empty() {
            let pattern = format!("%{}%", escape_like(&filters.query));
            let name_param = query.param(pattern.clone());
            let desc_param = query.param(pattern);
            query.conditions.push(format!(
                "(t.name ILIKE {} ESCAPE '\\' OR t.description ILIKE {} ESCAPE '\\')",
                name_param, desc_param
            ));
        }

        // Category filter by slug, exact match
        if !filters.category.is_empty() {
            let param = query.param(filters.category.clone());
            query.conditions.push(format!("c.slug = {}", param));
        }

        // Pricing classification, exact match
        if !filters.pricing.is_empty() {
            let param = query.param(filters.pricing.clone());
            query.conditions.push(format!("t.pricing_type = {}", param));
        }

        query
    }

    /// SELECT for the requested page window, sorted ascending by name
    pub fn page_sql(&self) -> String {
        let offset = (self.page as i64 - 1) * self.per_page as i64;
        [
            format!("SELECT {}", SELECT_COLUMNS),
            FROM_CLAUSE.to_string(),
            self.where_clause(),
            "ORDER BY t.name ASC".to_string(),
            format!("LIMIT {} OFFSET {}", self.per_page, offset),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// COUNT over the same predicate, independent of the page window
    pub fn count_sql(&self) -> String {
        [
            "SELECT COUNT(*) AS count".to_string(),
            FROM_CLAUSE.to_string(),
            self.where_clause(),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.conditions.join(" AND "))
        }
    }

    fn param(&mut self, value: String) -> String {
        self.params.push(value);
        format!("${}", self.params.len())
    }
}

/// Escape LIKE metacharacters so user input matches as a literal substring
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters() -> ToolFilters {
        ToolFilters {
            query: String::new(),
            category: String::new(),
            pricing: String::new(),
            page: 1,
            per_page: 12,
        }
    }

    #[test]
    fn unfiltered_listing_has_no_where_clause() {
        let q = CatalogQuery::new(&filters());
        let sql = q.page_sql();
        assert!(!sql.contains("WHERE"), "unexpected WHERE in: {}", sql);
        assert!(sql.ends_with("ORDER BY t.name ASC LIMIT 12 OFFSET 0"));
        assert!(q.params().is_empty());
    }

    #[test]
    fn text_search_matches_name_or_description() {
        let q = CatalogQuery::new(&ToolFilters { query: "chat".into(), ..filters() });
        let sql = q.page_sql();
        assert!(sql.contains("(t.name ILIKE $1 ESCAPE '\\' OR t.description ILIKE $2 ESCAPE '\\')"));
        assert_eq!(q.params(), &["%chat%".to_string(), "%chat%".to_string()]);
    }

    #[test]
    fn category_and_pricing_are_exact_matches() {
        let q = CatalogQuery::new(&ToolFilters {
            category: "llms".into(),
            pricing: "FREE".into(),
            ..filters()
        });
        let sql = q.page_sql();
        assert!(sql.contains("WHERE c.slug = $1 AND t.pricing_type = $2"));
        assert_eq!(q.params(), &["llms".to_string(), "FREE".to_string()]);
    }

    #[test]
    fn combined_filters_number_params_in_order() {
        let q = CatalogQuery::new(&ToolFilters {
            query: "ai".into(),
            category: "coding".into(),
            pricing: "FREEMIUM".into(),
            ..filters()
        });
        let sql = q.page_sql();
        assert!(sql.contains("ILIKE $1"));
        assert!(sql.contains("ILIKE $2"));
        assert!(sql.contains("c.slug = $3"));
        assert!(sql.contains("t.pricing_type = $4"));
        assert_eq!(q.params().len(), 4);
    }

    #[test]
    fn count_sql_shares_predicate_but_not_paging() {
        let q = CatalogQuery::new(&ToolFilters { category: "llms".into(), ..filters() });
        let sql = q.count_sql();
        assert!(sql.starts_with("SELECT COUNT(*) AS count"));
        assert!(sql.contains("WHERE c.slug = $1"));
        assert!(!sql.contains("LIMIT"));
        assert!(!sql.contains("ORDER BY"));
    }

    #[test]
    fn pagination_window_follows_page_number() {
        let q = CatalogQuery::new(&ToolFilters { page: 2, ..filters() });
        assert!(q.page_sql().ends_with("LIMIT 12 OFFSET 12"));

        // Pages below 1 clamp to the first page
        let q = CatalogQuery::new(&ToolFilters { page: 0, ..filters() });
        assert!(q.page_sql().ends_with("LIMIT 12 OFFSET 0"));
    }

    #[test]
    fn like_metacharacters_match_literally() {
        let q = CatalogQuery::new(&ToolFilters { query: "100%_done".into(), ..filters() });
        assert_eq!(q.params()[0], "%100\\%\\_done%");

        let q = CatalogQuery::new(&ToolFilters { query: "a\\b".into(), ..filters() });
        assert_eq!(q.params()[0], "%a\\\\b%");
    }
}
