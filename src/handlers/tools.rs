use axum::extract::{Path, RawQuery, State};
use serde_json::Value;

use crate::api::format::{page_meta, tool_to_api_value, tools_to_api_values};
use crate::browse::BrowseState;
use crate::catalog::ToolFilters;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

use super::AppState;

/// Normalize the raw listing query string into server-side filters.
///
/// Parsed through the browse-state codec, so repeatable keys
/// (`category=a&category=b`) are accepted; the listing endpoint is
/// single-valued and the first selection wins. Filters are advisory:
/// unrecognized values narrow the result set to nothing rather than erroring,
/// an unparseable `page` falls back to 1, and over-long search terms are
/// truncated.
fn normalize_query(raw: &str) -> ToolFilters {
    let catalog = &crate::config::config().catalog;
    let mut filters = BrowseState::decode(raw).to_filters(catalog.page_size);
    if filters.query.chars().count() > catalog.max_query_length {
        filters.query = filters.query.chars().take(catalog.max_query_length).collect();
    }
    filters
}

/// GET /api/tools - paginated, filtered catalog listing
pub async fn list(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> ApiResult<Vec<Value>> {
    let filters = normalize_query(query.as_deref().unwrap_or(""));
    let page = state.store.fetch_page(&filters).await?;
    Ok(ApiResponse::paginated(
        tools_to_api_values(&page.tools),
        page_meta(&page),
    ))
}

/// GET /api/tools/:slug - single tool by slug
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Value> {
    match state.store.find_by_slug(&slug).await? {
        Some(tool) => Ok(ApiResponse::success(tool_to_api_value(&tool))),
        None => Err(ApiError::not_found("Tool not found")),
    }
}
