use std::sync::Arc;

use axum::{routing::get, Router};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use unizero_api::catalog::PgCatalogStore;
use unizero_api::database::manager::DatabaseManager;
use unizero_api::handlers::{self, AppState};

#[derive(Parser)]
#[command(name = "unizero-api", version, about = "UNIZERO AI tool directory API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve {
        /// Port to listen on; falls back to UNIZERO_PORT, PORT, then 3000
        #[arg(long)]
        port: Option<u16>,
    },
    /// Create the schema and load the built-in catalog corpus
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = unizero_api::config::config();
    tracing::info!("Starting UNIZERO API in {:?} mode", config.environment);

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => serve(port).await,
        Command::Seed => seed().await,
    }
}

async fn serve(port: Option<u16>) -> anyhow::Result<()> {
    let pool = DatabaseManager::pool().await?;
    let state = AppState::new(Arc::new(PgCatalogStore::new(pool)));
    let app = app(state);

    // Allow tests or deployments to override port via env
    let port = port
        .or_else(|| std::env::var("UNIZERO_PORT").ok().and_then(|s| s.parse().ok()))
        .or_else(|| std::env::var("PORT").ok().and_then(|s| s.parse().ok()))
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("UNIZERO API listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn seed() -> anyhow::Result<()> {
    let pool = DatabaseManager::pool().await?;
    let report = unizero_api::catalog::seed::run(&pool).await?;
    println!(
        "Seeded {} categories and {} tools",
        report.categories, report.tools
    );
    Ok(())
}

fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Catalog API plus the gated dashboard area
        .merge(handlers::router(state))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "UNIZERO API",
            "version": version,
            "description": "Directory API for AI tools built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "tools": "/api/tools?q=&category=&pricing=&page= (public)",
                "tool": "/api/tools/:slug (public)",
                "categories": "/api/categories (public)",
                "dashboard": "/api/dashboard/* (protected)",
            },
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
