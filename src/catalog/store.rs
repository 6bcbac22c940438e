use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::database::manager::DatabaseError;
use crate::database::models::{Category, ToolWithCategory};

use super::query::CatalogQuery;
use super::types::{ToolFilters, ToolPage};

/// Read-only access to the tool catalog.
///
/// The seam between handlers and the backing store; tests substitute an
/// in-memory implementation with the same predicate semantics.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Paginated, counted, filtered listing. `total` reflects the full
    /// predicate-matched set, independent of the page window.
    async fn fetch_page(&self, filters: &ToolFilters) -> Result<ToolPage, DatabaseError>;

    /// Exact, case-sensitive slug lookup. A miss is `None`, never an error.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<ToolWithCategory>, DatabaseError>;

    /// All categories, sorted ascending by name.
    async fn list_categories(&self) -> Result<Vec<Category>, DatabaseError>;
}

/// Postgres-backed catalog store
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn fetch_page(&self, filters: &ToolFilters) -> Result<ToolPage, DatabaseError> {
        let query = CatalogQuery::new(filters);
        let page_sql = query.page_sql();
        let count_sql = query.count_sql();
        let params = query.params();

        if crate::config::config().catalog.debug_logging {
            tracing::debug!(sql = %page_sql, "catalog page query");
        }

        let fetch = async {
            let mut q = sqlx::query_as::<_, ToolWithCategory>(&page_sql);
            for p in params {
                q = q.bind(p);
            }
            q.fetch_all(&self.pool).await
        };

        let count = async {
            let mut q = sqlx::query(&count_sql);
            for p in params {
                q = q.bind(p);
            }
            let row = q.fetch_one(&self.pool).await?;
            row.try_get::<i64, _>("count")
        };

        // Independent read-only queries; issue both concurrently and fail the
        // whole request if either fails. No transactional consistency needed.
        let (tools, total) = tokio::try_join!(fetch, count)?;

        Ok(ToolPage {
            tools,
            total,
            page: filters.effective_page(),
            per_page: filters.per_page,
        })
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ToolWithCategory>, DatabaseError> {
        let sql = format!(
            "SELECT {} {} WHERE t.slug = $1",
            super::query::SELECT_COLUMNS,
            super::query::FROM_CLAUSE
        );
        let tool = sqlx::query_as::<_, ToolWithCategory>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        Ok(tool)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, DatabaseError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, slug, name, icon, description, created_at, updated_at \
             FROM categories ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(categories)
    }
}
