use serde_json::{json, Value};

use crate::catalog::{pricing_label, ToolPage};
use crate::database::models::{Category, ToolWithCategory};

/// Convert a tool-with-category row into the public wire format.
///
/// Adds the display label for the pricing classification alongside the raw
/// value, and a self link keyed by slug.
pub fn tool_to_api_value(tool: &ToolWithCategory) -> Value {
    json!({
        "id": tool.tool.id,
        "slug": tool.tool.slug,
        "name": tool.tool.name,
        "description": tool.tool.description,
        "website_url": tool.tool.website_url,
        "pricing_type": tool.tool.pricing_type,
        "pricing_label": pricing_label(&tool.tool.pricing_type),
        "monthly_price": tool.tool.monthly_price,
        "yearly_price": tool.tool.yearly_price,
        "pricing_note": tool.tool.pricing_note,
        "features": tool.tool.features,
        "is_popular": tool.tool.is_popular,
        "last_verified_at": tool.tool.last_verified_at,
        "category": category_to_api_value(&tool.category),
        "links": {
            "self": format!("/api/tools/{}", tool.tool.slug)
        }
    })
}

pub fn tools_to_api_values(tools: &[ToolWithCategory]) -> Vec<Value> {
    tools.iter().map(tool_to_api_value).collect()
}

pub fn category_to_api_value(category: &Category) -> Value {
    json!({
        "id": category.id,
        "slug": category.slug,
        "name": category.name,
        "icon": category.icon,
        "description": category.description,
    })
}

/// Pagination block for list responses
pub fn page_meta(page: &ToolPage) -> Value {
    json!({
        "total": page.total,
        "page": page.page,
        "per_page": page.per_page,
        "total_pages": page.total_pages(),
    })
}
