pub mod categories;
pub mod dashboard;
pub mod tools;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::catalog::CatalogStore;

/// Shared per-request state: the catalog store behind its trait seam
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }
}

/// API routes. The catalog surface is public; only the dashboard area is
/// gated behind bearer-token auth.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/tools", get(tools::list))
        .route("/api/tools/:slug", get(tools::show))
        .route("/api/categories", get(categories::list))
        .merge(dashboard_routes())
        .with_state(state)
}

fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/api/dashboard/whoami", get(dashboard::whoami))
        .route_layer(axum::middleware::from_fn(crate::middleware::require_auth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryCatalogStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    fn test_app() -> Router {
        let store = MemoryCatalogStore::with_default_fixtures();
        router(AppState::new(Arc::new(store)))
    }

    #[tokio::test]
    async fn listing_returns_envelope_with_pagination_meta() {
        let response = test_app()
            .oneshot(Request::get("/api/tools?q=chat").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let payload = body_json(response).await;
        assert_eq!(payload["success"], true);
        let data = payload["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["name"], "ChatGPT");
        assert_eq!(payload["meta"]["total"], 1);
        assert_eq!(payload["meta"]["page"], 1);
    }

    #[tokio::test]
    async fn unknown_pricing_filter_matches_nothing() {
        let response = test_app()
            .oneshot(
                Request::get("/api/tools?pricing=LIFETIME")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let payload = body_json(response).await;
        assert_eq!(payload["data"].as_array().unwrap().len(), 0);
        assert_eq!(payload["meta"]["total"], 0);
    }

    #[tokio::test]
    async fn repeated_filter_keys_are_accepted_first_wins() {
        let response = test_app()
            .oneshot(
                Request::get("/api/tools?category=llms&category=coding")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let payload = body_json(response).await;
        let data = payload["data"].as_array().unwrap();
        assert_eq!(data.len(), 4);
        assert!(data
            .iter()
            .all(|tool| tool["category"]["slug"] == "llms"));
    }

    #[tokio::test]
    async fn missing_slug_is_a_404_not_an_error() {
        let response = test_app()
            .oneshot(
                Request::get("/api/tools/nonexistent-tool")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let payload = body_json(response).await;
        assert_eq!(payload["success"], false);
        assert_eq!(payload["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn categories_listing_is_public() {
        let response = test_app()
            .oneshot(Request::get("/api/categories").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let payload = body_json(response).await;
        assert!(!payload["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn dashboard_requires_bearer_token() {
        let response = test_app()
            .oneshot(
                Request::get("/api/dashboard/whoami")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn dashboard_accepts_valid_token() {
        let secret = crate::config::config().security.jwt_secret.clone();
        if secret.is_empty() {
            // No secret configured in this environment; the gate stays closed
            return;
        }
        let token = crate::auth::test_token(&secret);

        let response = test_app()
            .oneshot(
                Request::get("/api/dashboard/whoami")
                    .header("authorization", format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let payload = body_json(response).await;
        assert_eq!(payload["data"]["email"], "user@example.com");
    }
}
