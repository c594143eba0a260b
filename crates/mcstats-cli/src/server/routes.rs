use axum::Json;
use axum::extract::State;
use axum::routing::{Router, get};
use mcstats_ledger::LedgerStats;
use mcstats_logs::LogStats;
use mcstats_runtime::StatsService;
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::ApiError;

/// API routes, with every other path served from the public directory.
pub fn create_router(service: Arc<StatsService>) -> Router {
    let static_files = ServeDir::new(&service.config().public_dir);
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/stats", get(ledger_stats))
        .route("/api/log-stats", get(log_stats))
        .route("/health", get(health_check))
        .with_state(service)
        .fallback_service(static_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn ledger_stats(
    State(service): State<Arc<StatsService>>,
) -> Result<Json<LedgerStats>, ApiError> {
    let stats = tokio::task::spawn_blocking(move || service.ledger_stats()).await??;
    Ok(Json(LedgerStats::clone(&stats)))
}

async fn log_stats(State(service): State<Arc<StatsService>>) -> Result<Json<LogStats>, ApiError> {
    let stats = tokio::task::spawn_blocking(move || service.log_stats()).await??;
    Ok(Json(LogStats::clone(&stats)))
}
