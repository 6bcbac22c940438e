use axum::extract::State;
use serde_json::Value;

use crate::api::format::category_to_api_value;
use crate::middleware::{ApiResponse, ApiResult};

use super::AppState;

/// GET /api/categories - all categories, sorted by name
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Value>> {
    let categories = state.store.list_categories().await?;
    Ok(ApiResponse::success(
        categories.iter().map(category_to_api_value).collect(),
    ))
}
