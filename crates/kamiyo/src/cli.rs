//! Terminal rendering for the `dashboard`, `stats` and `tiers` commands

use comfy_table::{Cell, Color, ContentArrangement, Table};
use kamiyo_core::content::plan_for;
use kamiyo_core::format::{format_number, format_percent, format_usd, format_usdc};
use kamiyo_core::models::{ProtocolStats, UsageSnapshot, BUCKET_LABELS};
use kamiyo_core::{meets_minimum, DashboardData, LandingStats, Tier};
use serde_json::json;

// ============================================================================
// Dashboard
// ============================================================================

pub fn format_dashboard(
    email: &str,
    data: &DashboardData,
    usage_min_tier: Tier,
    json: bool,
) -> String {
    if json {
        // Same capped activity list the table shows
        let usage = data.usage.as_ref().map(|u| UsageSnapshot {
            recent_activity: data.recent_activity().to_vec(),
            ..u.clone()
        });
        let value = json!({
            "email": email,
            "subscription": data.subscription,
            "apiKeys": data.api_keys,
            "usage": usage,
        });
        return serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string());
    }

    let mut out = String::new();
    out.push_str(&format!("KAMIYO dashboard for {}\n\n", email));

    let mut summary = Table::new();
    summary.set_content_arrangement(ContentArrangement::Dynamic);
    summary.set_header(vec!["Field", "Value"]);
    summary.add_row(vec![
        Cell::new("Tier"),
        Cell::new(data.tier_label()).fg(Color::Cyan),
    ]);
    summary.add_row(vec!["Subscription".to_string(), data.subscription_summary()]);
    summary.add_row(vec!["API Keys".to_string(), data.key_count_label()]);

    match &data.usage {
        Some(usage) => {
            summary.add_row(vec![
                "Total Requests".to_string(),
                format_number(usage.total_requests),
            ]);
            summary.add_row(vec![
                "Total Payments".to_string(),
                format_number(usage.total_payments),
            ]);
            summary.add_row(vec!["USDC Volume".to_string(), format_usdc(usage.total_usdc)]);
            summary.add_row(vec![
                "Daily Average".to_string(),
                format!("{:.0}", usage.daily_average),
            ]);
        }
        None if meets_minimum(data.tier(), usage_min_tier) => {
            summary.add_row(vec![
                Cell::new("Usage Analytics"),
                Cell::new("Unavailable").fg(Color::Red),
            ]);
        }
        None => {
            summary.add_row(vec![
                Cell::new("Usage Analytics"),
                Cell::new(format!(
                    "Upgrade to {} for usage analytics",
                    usage_min_tier.display_name()
                ))
                .fg(Color::Yellow),
            ]);
        }
    }
    out.push_str(&summary.to_string());

    if !data.api_keys.is_empty() {
        let mut keys = Table::new();
        keys.set_content_arrangement(ContentArrangement::Dynamic);
        keys.set_header(vec!["Key", "Label", "Created"]);
        for key in &data.api_keys {
            keys.add_row(vec![
                key.id.clone(),
                key.label.clone(),
                key.created_at
                    .map(|t| t.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ]);
        }
        out.push_str("\n\n");
        out.push_str(&keys.to_string());
    }

    let recent = data.recent_activity();
    if !recent.is_empty() {
        let mut activity = Table::new();
        activity.set_content_arrangement(ContentArrangement::Dynamic);
        activity.set_header(vec!["Endpoint", "Time"]);
        for entry in recent {
            activity.add_row(vec![
                entry.endpoint.clone(),
                entry.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            ]);
        }
        out.push_str("\n\nRecent activity\n");
        out.push_str(&activity.to_string());
    }

    out
}

// ============================================================================
// Stats
// ============================================================================

pub fn format_stats(protocol: &ProtocolStats, landing: &LandingStats, json: bool) -> String {
    if json {
        let value = json!({
            "protocol": protocol,
            "health": landing.health,
            "losses": landing.losses,
            "windowDays": landing.window_days,
        });
        return serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![
        "Assessments".to_string(),
        format_number(protocol.total_assessments),
    ]);
    table.add_row(vec![
        "Completed".to_string(),
        format_percent(protocol.completion_rate()),
    ]);
    table.add_row(vec![
        "Average Quality".to_string(),
        format!("{:.1}", protocol.avg_quality),
    ]);
    table.add_row(vec![
        "Refunded".to_string(),
        format_usdc(protocol.total_refunded),
    ]);
    table.add_row(vec![
        "Exploits Tracked".to_string(),
        format_number(landing.health.database_exploits),
    ]);
    table.add_row(vec![
        "Chains Monitored".to_string(),
        landing.health.tracked_chains.to_string(),
    ]);
    table.add_row(vec![
        "Active Sources".to_string(),
        format!(
            "{}/{}",
            landing.health.active_sources, landing.health.total_sources
        ),
    ]);
    table.add_row(vec![
        format!("Losses ({}d)", landing.window_days),
        format_usd(landing.losses.total_loss_usd),
    ]);

    let mut quality = Table::new();
    quality.set_content_arrangement(ContentArrangement::Dynamic);
    quality.set_header(vec!["Quality", "Share"]);
    let percentages = protocol.distribution.percentages();
    for (label, pct) in BUCKET_LABELS.iter().zip(percentages) {
        quality.add_row(vec![label.to_string(), format_percent(pct)]);
    }

    format!("{}\n\n{}", table, quality)
}

// ============================================================================
// Tiers
// ============================================================================

pub fn format_tiers() -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Tier", "Price", "Requests", "History", "Support"]);

    for tier in Tier::ALL {
        match plan_for(tier) {
            Some(plan) => table.add_row(vec![
                tier.display_name().to_string(),
                plan.price_label(),
                plan.requests_label(),
                format!("{} days", plan.historical_days),
                plan.support.label().to_string(),
            ]),
            None => table.add_row(vec![
                Cell::new(tier.display_name()),
                Cell::new("legacy").fg(Color::DarkGrey),
                Cell::new("-"),
                Cell::new("-"),
                Cell::new("-"),
            ]),
        };
    }

    table.to_string()
}
