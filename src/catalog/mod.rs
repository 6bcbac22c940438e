pub mod query;
pub mod seed;
pub mod store;
pub mod types;

pub use query::CatalogQuery;
pub use store::{CatalogStore, PgCatalogStore};
pub use types::{pricing_label, PricingType, ToolFilters, ToolPage};
