//! Integration tests for the JSON API routes

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use kamiyo_core::{AccountDirectory, DirectorySeed};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn seeded_router() -> Router {
    let recent = Utc::now() - Duration::days(2);
    let old = Utc::now() - Duration::days(20);
    let seed: DirectorySeed = serde_json::from_value(json!({
        "accounts": [
            {
                "email": "Team@Kamiyo.ai",
                "subscription": {"tier": "team", "isSubscribed": true},
                "apiKeys": [
                    {"id": "k1", "label": "production"},
                    {"id": "k2", "label": "staging"}
                ],
                "usage": {
                    "totalRequests": 48210,
                    "totalPayments": 1200,
                    "totalUSDC": 3412.5,
                    "dailyAverage": 1607.0,
                    "recentActivity": []
                }
            }
        ],
        "protocol": {
            "totalAssessments": 100,
            "completed": 90,
            "avgQuality": 74.2,
            "totalRefunded": 512.25,
            "distribution": [5, 10, 15, 30, 40]
        },
        "health": {
            "database_exploits": 412,
            "tracked_chains": 18,
            "active_sources": 14,
            "total_sources": 20
        },
        "losses": [
            {"timestamp": recent, "amount_usd": 1500.0},
            {"timestamp": old, "amount_usd": 8000.0}
        ]
    }))
    .unwrap();

    kamiyo_web::create_router(Arc::new(AccountDirectory::from_seed(seed)))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_subscription_status_for_known_account() {
    let (status, body) = get(
        seeded_router(),
        "/api/subscription/status?email=team%40kamiyo.ai",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"tier": "team", "isSubscribed": true}));
}

#[tokio::test]
async fn test_subscription_status_is_null_for_unknown_account() {
    let (status, body) = get(
        seeded_router(),
        "/api/subscription/status?email=nobody%40kamiyo.ai",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());
}

#[tokio::test]
async fn test_missing_email_is_bad_request() {
    let (status, body) = get(seeded_router(), "/api/usage").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn test_malformed_email_is_bad_request() {
    let (status, body) = get(seeded_router(), "/api/user/api-keys?email=not-an-email").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_api_keys_use_current_field_name() {
    let (status, body) = get(seeded_router(), "/api/user/api-keys?email=team%40kamiyo.ai").await;

    assert_eq!(status, StatusCode::OK);
    let keys = body["apiKeys"].as_array().unwrap();
    assert_eq!(keys.len(), 2);
    assert_eq!(keys[0]["label"], "production");
}

#[tokio::test]
async fn test_usage_wire_names() {
    let (status, body) = get(seeded_router(), "/api/usage?email=team%40kamiyo.ai").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalRequests"], 48210);
    assert_eq!(body["totalUSDC"], 3412.5);
    assert!(body["recentActivity"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_usage_for_unknown_account_is_zeroed() {
    let (status, body) = get(seeded_router(), "/api/usage?email=new%40kamiyo.ai").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalRequests"], 0);
}

#[tokio::test]
async fn test_protocol_stats() {
    let (status, body) = get(seeded_router(), "/api/protocol-stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalAssessments"], 100);
    assert_eq!(body["distribution"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(seeded_router(), "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database_exploits"], 412);
    assert_eq!(body["total_sources"], 20);
}

#[tokio::test]
async fn test_loss_stats_window() {
    let (_, default_window) = get(seeded_router(), "/api/stats").await;
    assert_eq!(default_window["total_loss_usd"], 1500.0);

    let (_, month) = get(seeded_router(), "/api/stats?days=30").await;
    assert_eq!(month["total_loss_usd"], 9500.0);
}

#[tokio::test]
async fn test_loss_stats_with_maximal_window() {
    let (status, body) = get(seeded_router(), "/api/stats?days=4294967295").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_loss_usd"], 9500.0);
}

#[tokio::test]
async fn test_unknown_route_without_dist_shows_build_hint() {
    let app = kamiyo_web::create_app(Arc::new(AccountDirectory::new()), None);
    let request = Request::builder()
        .uri("/dashboard")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&bytes).contains("trunk build"));
}
