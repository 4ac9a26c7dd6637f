//! The native client against a live server on an ephemeral port

use kamiyo_core::models::{AuthStatus, SubscriptionStatus, UsageSnapshot};
use kamiyo_core::{
    load_landing_stats, run_dashboard, AccountDirectory, AccountRecord, DashboardOptions,
    DashboardView, HttpClient, Navigator, Tier,
};
use std::sync::Arc;
use tokio::net::TcpListener;

struct NoRedirect;

impl Navigator for NoRedirect {
    fn redirect(&self, location: &str) {
        panic!("unexpected redirect to {location}");
    }
}

async fn spawn_server(directory: AccountDirectory) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = kamiyo_web::create_router(Arc::new(directory));
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_dashboard_over_http() {
    let directory = AccountDirectory::new();
    directory
        .upsert(AccountRecord {
            email: "team@kamiyo.ai".to_string(),
            subscription: SubscriptionStatus {
                tier: Tier::Team,
                is_subscribed: true,
            },
            api_keys: Vec::new(),
            usage: UsageSnapshot {
                total_requests: 120,
                ..UsageSnapshot::default()
            },
        })
        .unwrap();
    let client = HttpClient::new(spawn_server(directory).await);

    let status = AuthStatus::Authenticated {
        email: "team@kamiyo.ai".to_string(),
    };
    let view = run_dashboard(&status, &client, &NoRedirect, &DashboardOptions::default()).await;

    let data = view.data().expect("dashboard should be ready");
    assert_eq!(data.tier_label(), "Team");
    assert_eq!(data.key_count_label(), "0 Active");
    assert_eq!(data.usage.as_ref().unwrap().total_requests, 120);
}

#[tokio::test]
async fn test_unknown_account_is_unavailable_over_http() {
    let client = HttpClient::new(spawn_server(AccountDirectory::new()).await);

    let status = AuthStatus::Authenticated {
        email: "ghost@kamiyo.ai".to_string(),
    };
    let view = run_dashboard(&status, &client, &NoRedirect, &DashboardOptions::default()).await;

    assert_eq!(view, DashboardView::Unavailable);
}

#[tokio::test]
async fn test_landing_stats_over_http() {
    let client = HttpClient::new(spawn_server(AccountDirectory::new()).await);

    let stats = load_landing_stats(&client, 7).await.unwrap();
    assert_eq!(stats.window_days, 7);
    assert_eq!(stats.losses.total_loss_usd, 0.0);
}
