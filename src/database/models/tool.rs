use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use uuid::Uuid;

use super::category::Category;

/// A catalog entry. Slug is globally unique and immutable once assigned;
/// rows are created by the seeder and read-only from the browsing flow.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tool {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub website_url: String,
    /// One of the PricingType enumeration values, stored as TEXT
    pub pricing_type: String,
    pub monthly_price: Option<Decimal>,
    pub yearly_price: Option<Decimal>,
    pub pricing_note: Option<String>,
    pub features: Option<Vec<String>>,
    pub is_popular: bool,
    pub last_verified_at: Option<DateTime<Utc>>,
    pub category_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Tool joined with its owning category.
///
/// Decoded from a joined row where category columns carry a `cat_` alias
/// prefix (see `CatalogQuery::page_sql`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolWithCategory {
    #[serde(flatten)]
    pub tool: Tool,
    pub category: Category,
}

impl<'r> FromRow<'r, PgRow> for ToolWithCategory {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let tool = Tool {
            id: row.try_get("id")?,
            slug: row.try_get("slug")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            website_url: row.try_get("website_url")?,
            pricing_type: row.try_get("pricing_type")?,
            monthly_price: row.try_get("monthly_price")?,
            yearly_price: row.try_get("yearly_price")?,
            pricing_note: row.try_get("pricing_note")?,
            features: row.try_get("features")?,
            is_popular: row.try_get("is_popular")?,
            last_verified_at: row.try_get("last_verified_at")?,
            category_id: row.try_get("category_id")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        };
        let category = Category {
            id: row.try_get("cat_id")?,
            slug: row.try_get("cat_slug")?,
            name: row.try_get("cat_name")?,
            icon: row.try_get("cat_icon")?,
            description: row.try_get("cat_description")?,
            created_at: row.try_get("cat_created_at")?,
            updated_at: row.try_get("cat_updated_at")?,
        };
        Ok(Self { tool, category })
    }
}
