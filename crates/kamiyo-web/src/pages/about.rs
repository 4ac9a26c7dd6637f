//! About page - how quality scoring works, with live protocol statistics

use crate::api::BrowserClient;
use crate::components::{Placeholder, PlaceholderKind, QualityChart, Seo, StatsCard};
use kamiyo_core::content::ABOUT_META;
use kamiyo_core::format::{format_number, format_percent, format_usdc};
use kamiyo_core::models::ProtocolStats;
use kamiyo_core::ProtocolApi;
use leptos::logging;
use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    let stats_resource = LocalResource::new(move || async move {
        let result = BrowserClient::same_origin().protocol_stats().await;
        if let Err(e) = &result {
            logging::warn!("Failed to load protocol stats: {}", e);
        }
        result
    });

    let distribution = Signal::derive(move || {
        stats_resource.with(|value| {
            value
                .as_ref()
                .and_then(|result| result.as_ref().ok().map(|stats| stats.distribution))
        })
    });

    view! {
        <Seo meta=ABOUT_META />
        <div class="page about-page">
            <div class="page-header">
                <h1 class="page-title">"About KAMIYO"</h1>
            </div>

            <section class="prose">
                <p>
                    "APIs that charge per request through x402 ask buyers to trust that the response will be worth it. "
                    "KAMIYO removes that trust: payments are held in escrow, a panel of independent oracles scores the delivered response, "
                    "and the escrow releases to the provider or refunds the buyer according to the score."
                </p>
                <p>
                    "Scores run from 0 to 100. The chart below shows how recent assessments are spread across quality buckets."
                </p>
            </section>

            <Suspense fallback=|| view! { <Placeholder kind=PlaceholderKind::Loading message="Loading protocol stats..." /> }>
                {move || {
                    stats_resource.with(|value| {
                        value.as_ref().map(|result| match result.as_ref() {
                            Ok(stats) => view! { <ProtocolFigures stats=stats.clone() /> }.into_any(),
                            Err(_) => view! {
                                <Placeholder kind=PlaceholderKind::Error message="Protocol statistics are unavailable right now" />
                            }
                            .into_any(),
                        })
                    })
                }}
            </Suspense>

            <QualityChart distribution=distribution />
        </div>
    }
}

#[component]
fn ProtocolFigures(stats: ProtocolStats) -> impl IntoView {
    view! {
        <div class="stats-grid">
            <StatsCard label="Assessments" value=format_number(stats.total_assessments) />
            <StatsCard label="Completed" value=format_percent(stats.completion_rate()) />
            <StatsCard label="Average Quality" value=format!("{:.1}", stats.avg_quality) />
            <StatsCard label="Refunded" value=format_usdc(stats.total_refunded) />
        </div>
    }
}
