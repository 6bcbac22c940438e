//! Test doubles and fixtures. Only compiled for tests.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::catalog::{CatalogStore, ToolFilters, ToolPage};
use crate::database::manager::DatabaseError;
use crate::database::models::{Category, Tool, ToolWithCategory};

/// In-memory catalog store with the same predicate semantics as the
/// Postgres-backed one: case-insensitive substring search over name and
/// description, exact category-slug and pricing matches, name-ascending
/// sort, offset/limit paging with a window-independent total.
#[derive(Default)]
pub struct MemoryCatalogStore {
    categories: Vec<Category>,
    tools: Vec<ToolWithCategory>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_category(&mut self, slug: &str, name: &str) {
        let now = Utc::now();
        self.categories.push(Category {
            id: Uuid::new_v4(),
            slug: slug.to_string(),
            name: name.to_string(),
            icon: "Sparkles".to_string(),
            description: format!("{} tools", name),
            created_at: now,
            updated_at: now,
        });
    }

    pub fn add_tool(&mut self, name: &str, slug: &str, description: &str, pricing: &str, category_slug: &str) {
        let category = self
            .categories
            .iter()
            .find(|c| c.slug == category_slug)
            .expect("fixture category must exist before its tools")
            .clone();
        let now = Utc::now();
        self.tools.push(ToolWithCategory {
            tool: Tool {
                id: Uuid::new_v4(),
                slug: slug.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                website_url: format!("https://{}.example.com", slug),
                pricing_type: pricing.to_string(),
                monthly_price: None,
                yearly_price: None,
                pricing_note: None,
                features: None,
                is_popular: false,
                last_verified_at: None,
                category_id: category.id,
                created_at: now,
                updated_at: now,
            },
            category,
        });
    }

    /// Small corpus mirroring the shape of the real seed data
    pub fn with_default_fixtures() -> Self {
        let mut store = Self::new();
        store.add_category("llms", "Large Language Models");
        store.add_category("coding", "Coding & Developer");
        store.add_tool("ChatGPT", "chatgpt", "OpenAI's conversational AI assistant.", "FREEMIUM", "llms");
        store.add_tool("Claude", "claude", "Anthropic's AI assistant focused on helpfulness.", "FREEMIUM", "llms");
        store.add_tool("Mistral", "mistral", "Open-source AI assistant from Mistral AI.", "FREE", "llms");
        store.add_tool("Llama", "llama", "Meta's open-source large language model.", "FREE", "llms");
        store.add_tool("Cursor", "cursor", "AI-first code editor built on VS Code.", "FREEMIUM", "coding");
        store
    }

    fn matches(&self, tool: &ToolWithCategory, filters: &ToolFilters) -> bool {
        if !filters.query.is_empty() {
            let q = filters.query.to_lowercase();
            let hit = tool.tool.name.to_lowercase().contains(&q)
                || tool.tool.description.to_lowercase().contains(&q);
            if !hit {
                return false;
            }
        }
        if !filters.category.is_empty() && tool.category.slug != filters.category {
            return false;
        }
        if !filters.pricing.is_empty() && tool.tool.pricing_type != filters.pricing {
            return false;
        }
        true
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn fetch_page(&self, filters: &ToolFilters) -> Result<ToolPage, DatabaseError> {
        let mut matches: Vec<_> = self
            .tools
            .iter()
            .filter(|t| self.matches(t, filters))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.tool.name.cmp(&b.tool.name));

        let total = matches.len() as i64;
        let tools = matches
            .into_iter()
            .skip(filters.offset() as usize)
            .take(filters.per_page as usize)
            .collect();

        Ok(ToolPage {
            tools,
            total,
            page: filters.effective_page(),
            per_page: filters.per_page,
        })
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ToolWithCategory>, DatabaseError> {
        Ok(self.tools.iter().find(|t| t.tool.slug == slug).cloned())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, DatabaseError> {
        let mut categories = self.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }
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

    fn names(page: &ToolPage) -> Vec<&str> {
        page.tools.iter().map(|t| t.tool.name.as_str()).collect()
    }

    #[tokio::test]
    async fn text_search_matches_name_substring_case_insensitively() {
        let store = MemoryCatalogStore::with_default_fixtures();
        let page = store
            .fetch_page(&ToolFilters { query: "chat".into(), ..filters() })
            .await
            .unwrap();
        assert_eq!(names(&page), vec!["ChatGPT"]);
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn category_plus_pricing_narrows_and_sorts_by_name() {
        let store = MemoryCatalogStore::with_default_fixtures();
        let page = store
            .fetch_page(&ToolFilters {
                category: "llms".into(),
                pricing: "FREE".into(),
                ..filters()
            })
            .await
            .unwrap();
        assert_eq!(names(&page), vec!["Llama", "Mistral"]);
        assert_eq!(page.total, 2);
    }

    #[tokio::test]
    async fn empty_filters_return_the_whole_catalog() {
        let store = MemoryCatalogStore::with_default_fixtures();
        let page = store.fetch_page(&filters()).await.unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(page.tools.len(), 5);
    }

    #[tokio::test]
    async fn pages_partition_the_sorted_result_set() {
        let mut store = MemoryCatalogStore::new();
        store.add_category("llms", "Large Language Models");
        for i in 1..=15 {
            store.add_tool(
                &format!("Tool {:02}", i),
                &format!("tool-{:02}", i),
                "An AI tool.",
                "FREE",
                "llms",
            );
        }

        let first = store
            .fetch_page(&ToolFilters { page: 1, ..filters() })
            .await
            .unwrap();
        let second = store
            .fetch_page(&ToolFilters { page: 2, ..filters() })
            .await
            .unwrap();

        // Total is independent of the page window
        assert_eq!(first.total, 15);
        assert_eq!(second.total, 15);
        assert_eq!(first.tools.len(), 12);
        assert_eq!(second.tools.len(), 3);

        // Contiguous, non-overlapping partition of the sorted set
        let mut all: Vec<String> = first
            .tools
            .iter()
            .chain(second.tools.iter())
            .map(|t| t.tool.name.clone())
            .collect();
        let mut sorted = all.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(all.len(), 15);
        all.sort();
        assert_eq!(all, sorted);
    }

    #[tokio::test]
    async fn repeated_queries_yield_identical_ordered_results() {
        let store = MemoryCatalogStore::with_default_fixtures();
        let query = ToolFilters { category: "llms".into(), ..filters() };
        let first = store.fetch_page(&query).await.unwrap();
        let second = store.fetch_page(&query).await.unwrap();
        assert_eq!(names(&first), names(&second));
        assert_eq!(first.total, second.total);
    }

    #[tokio::test]
    async fn slug_lookup_is_exact_and_case_sensitive() {
        let store = MemoryCatalogStore::with_default_fixtures();
        assert!(store.find_by_slug("chatgpt").await.unwrap().is_some());
        assert!(store.find_by_slug("CHATGPT").await.unwrap().is_none());
        assert!(store.find_by_slug("nonexistent-tool").await.unwrap().is_none());
    }
}
