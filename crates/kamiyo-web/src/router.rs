//! Web router using Axum
//!
//! Serves the same-origin JSON API from an [`AccountDirectory`] and,
//! when a Trunk `dist/` directory is given, the compiled frontend.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use kamiyo_core::api::DEFAULT_LOSS_WINDOW_DAYS;
use kamiyo_core::models::{
    ApiKeysResponse, HealthSummary, LossStats, ProtocolStats, SubscriptionStatus, UsageSnapshot,
};
use kamiyo_core::{AccountDirectory, CoreError, Endpoint, ErrorClass};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{debug, warn};

type AppState = Arc<AccountDirectory>;

/// Create the API router
pub fn create_router(directory: Arc<AccountDirectory>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(Endpoint::PROTOCOL_STATS, get(protocol_stats_handler))
        .route(Endpoint::SUBSCRIPTION_STATUS, get(subscription_handler))
        .route(Endpoint::API_KEYS, get(api_keys_handler))
        .route(Endpoint::USAGE, get(usage_handler))
        .route(Endpoint::HEALTH, get(health_handler))
        .route(Endpoint::LOSS_STATS, get(loss_stats_handler))
        .layer(cors)
        .with_state(directory)
}

/// API router plus the compiled frontend, or a build hint when `dist` is absent
pub fn create_app(directory: Arc<AccountDirectory>, dist: Option<PathBuf>) -> Router {
    let api = create_router(directory);
    match dist {
        Some(dist) => {
            // Unknown paths fall back to index.html so client-side routes resolve
            let index = dist.join("index.html");
            api.fallback_service(ServeDir::new(dist).fallback(ServeFile::new(index)))
        }
        None => api.fallback(get(build_hint_handler)),
    }
}

async fn build_hint_handler() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>KAMIYO - Build Required</title>
</head>
<body>
    <h1>KAMIYO frontend not built</h1>
    <p>Build it with <code>cd crates/kamiyo-web && trunk build --release</code>,
    then restart with <code>kamiyo serve --dist crates/kamiyo-web/dist</code>.</p>
    <p>The JSON API is available under <a href="/api/health">/api/*</a>.</p>
</body>
</html>"#,
    )
}

/// Handler error rendered as `{"error": ...}`
#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn missing(param: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: format!("Missing required query parameter: {}", param),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let status = match err.class() {
            ErrorClass::Input => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(status = %self.status, "API request rejected: {}", self.message);
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

#[derive(Debug, Deserialize)]
struct EmailQuery {
    email: Option<String>,
}

impl EmailQuery {
    fn require(self) -> Result<String, ApiError> {
        self.email
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| ApiError::missing("email"))
    }
}

#[derive(Debug, Deserialize)]
struct DaysQuery {
    days: Option<u32>,
}

async fn protocol_stats_handler(State(directory): State<AppState>) -> Json<ProtocolStats> {
    Json(directory.protocol_stats())
}

/// `null` body for accounts without a billing record
async fn subscription_handler(
    State(directory): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Option<SubscriptionStatus>>, ApiError> {
    let email = query.require()?;
    let status = directory.subscription(&email)?;
    debug!(email = %email, found = status.is_some(), "Subscription lookup");
    Ok(Json(status))
}

async fn api_keys_handler(
    State(directory): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<ApiKeysResponse>, ApiError> {
    let email = query.require()?;
    let api_keys = directory.api_keys(&email)?;
    Ok(Json(ApiKeysResponse { api_keys }))
}

async fn usage_handler(
    State(directory): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<UsageSnapshot>, ApiError> {
    let email = query.require()?;
    Ok(Json(directory.usage(&email)?))
}

async fn health_handler(State(directory): State<AppState>) -> Json<HealthSummary> {
    Json(directory.health())
}

async fn loss_stats_handler(
    State(directory): State<AppState>,
    Query(query): Query<DaysQuery>,
) -> Json<LossStats> {
    let days = query.days.unwrap_or(DEFAULT_LOSS_WINDOW_DAYS);
    Json(directory.loss_stats(days))
}
