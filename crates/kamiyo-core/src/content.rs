//! Static marketing content: pricing plans, FAQ, refund schedule, page metadata

use crate::tier::Tier;

/// Request allowance that the pricing page renders as "Unlimited"
pub const UNLIMITED_REQUESTS: u64 = 999_999;

/// Support level attached to a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportLevel {
    Community,
    Standard,
    Priority,
    Dedicated,
}

impl SupportLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SupportLevel::Community => "Community",
            SupportLevel::Standard => "Standard (24h)",
            SupportLevel::Priority => "Priority (12h)",
            SupportLevel::Dedicated => "Dedicated",
        }
    }
}

/// A plan as sold on the pricing page
#[derive(Debug, Clone, PartialEq)]
pub struct PricingPlan {
    pub tier: Tier,
    pub price_monthly_usd: u32,
    pub requests_per_day: u64,
    pub requests_per_minute: u32,
    pub historical_days: u32,
    pub webhook_endpoints: u32,
    pub real_time_alerts: bool,
    pub support: SupportLevel,
    pub sla_guarantee: bool,
    pub highlighted: bool,
}

impl PricingPlan {
    pub fn price_label(&self) -> String {
        if self.price_monthly_usd == 0 {
            "Free".to_string()
        } else {
            format!("${}/mo", self.price_monthly_usd)
        }
    }

    pub fn requests_label(&self) -> String {
        if self.requests_per_day >= UNLIMITED_REQUESTS {
            "Unlimited requests".to_string()
        } else {
            format!(
                "{} requests/day",
                crate::format::format_number(self.requests_per_day)
            )
        }
    }

    /// Feature bullets in display order
    pub fn features(&self) -> Vec<String> {
        let mut features = vec![
            self.requests_label(),
            format!("{} days of history", self.historical_days),
        ];
        if self.real_time_alerts {
            features.push("Real-time alerts".to_string());
        } else {
            features.push("Email alerts (24h delay)".to_string());
        }
        if self.webhook_endpoints > 0 {
            features.push(format!("{} webhook endpoints", self.webhook_endpoints));
        }
        features.push(format!("{} support", self.support.label()));
        if self.sla_guarantee {
            features.push("SLA guarantee".to_string());
        }
        features
    }
}

/// Plans on sale, cheapest first. `Starter` is honoured but no longer sold.
pub fn pricing_plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            tier: Tier::Free,
            price_monthly_usd: 0,
            requests_per_day: 1_000,
            requests_per_minute: 10,
            historical_days: 7,
            webhook_endpoints: 0,
            real_time_alerts: false,
            support: SupportLevel::Community,
            sla_guarantee: false,
            highlighted: false,
        },
        PricingPlan {
            tier: Tier::Pro,
            price_monthly_usd: 89,
            requests_per_day: 50_000,
            requests_per_minute: 35,
            historical_days: 90,
            webhook_endpoints: 2,
            real_time_alerts: true,
            support: SupportLevel::Standard,
            sla_guarantee: false,
            highlighted: false,
        },
        PricingPlan {
            tier: Tier::Team,
            price_monthly_usd: 199,
            requests_per_day: 100_000,
            requests_per_minute: 70,
            historical_days: 365,
            webhook_endpoints: 5,
            real_time_alerts: true,
            support: SupportLevel::Priority,
            sla_guarantee: false,
            highlighted: true,
        },
        PricingPlan {
            tier: Tier::Enterprise,
            price_monthly_usd: 499,
            requests_per_day: UNLIMITED_REQUESTS,
            requests_per_minute: 1_000,
            historical_days: 730,
            webhook_endpoints: 50,
            real_time_alerts: true,
            support: SupportLevel::Dedicated,
            sla_guarantee: true,
            highlighted: false,
        },
    ]
}

pub fn plan_for(tier: Tier) -> Option<PricingPlan> {
    pricing_plans().into_iter().find(|p| p.tier == tier)
}

/// Refund owed for an assessed quality score (0-100)
pub fn refund_percentage(quality_score: u8) -> u8 {
    match quality_score {
        0..=49 => 100,
        50..=64 => 75,
        65..=79 => 35,
        _ => 0,
    }
}

/// Rows of the refund table on the docs page: (score range, refund %)
pub const REFUND_SCHEDULE: [(&str, u8); 4] = [
    ("0-49", 100),
    ("50-64", 75),
    ("65-79", 35),
    ("80-100", 0),
];

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "What is x402?",
        answer: "x402 uses the HTTP 402 Payment Required status so APIs can request payment inline. KAMIYO verifies those payments and protects them with escrow.",
    },
    FaqEntry {
        question: "How are refunds decided?",
        answer: "Independent oracles score the delivered response from 0 to 100. Scores below 80 trigger a partial or full refund according to the published schedule.",
    },
    FaqEntry {
        question: "Which chains are supported?",
        answer: "Payments in USDC on Solana and Base are verified today. Additional chains are added as oracle coverage grows.",
    },
    FaqEntry {
        question: "Can I change plans later?",
        answer: "Yes. Upgrades apply immediately; downgrades take effect at the end of the billing period.",
    },
    FaqEntry {
        question: "Do I need a paid plan to use the API?",
        answer: "No. The Free plan includes API access with 1,000 requests per day.",
    },
];

/// Title and description for a page's SEO tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub path: &'static str,
}

impl PageMeta {
    pub fn full_title(&self) -> String {
        format!("{} | KAMIYO", self.title)
    }
}

pub const HOME_META: PageMeta = PageMeta {
    title: "Payment verification for x402 APIs",
    description: "KAMIYO verifies crypto payments for x402 APIs and refunds buyers automatically when quality falls short.",
    path: "/",
};

pub const ABOUT_META: PageMeta = PageMeta {
    title: "About",
    description: "How KAMIYO scores API quality with independent oracles and settles refunds through escrow.",
    path: "/about",
};

pub const PRICING_META: PageMeta = PageMeta {
    title: "Pricing",
    description: "Free, Pro, Team and Enterprise plans for KAMIYO payment verification.",
    path: "/pricing",
};

pub const DOCS_META: PageMeta = PageMeta {
    title: "Documentation",
    description: "Integrate KAMIYO escrow and quality-based refunds into your x402 API.",
    path: "/docs",
};

pub const PRIVACY_META: PageMeta = PageMeta {
    title: "Privacy Policy",
    description: "What data KAMIYO collects, why, and how long it is kept.",
    path: "/privacy",
};

pub const DASHBOARD_META: PageMeta = PageMeta {
    title: "Dashboard",
    description: "Your KAMIYO subscription, API keys and usage.",
    path: "/dashboard",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refund_schedule_boundaries() {
        assert_eq!(refund_percentage(0), 100);
        assert_eq!(refund_percentage(49), 100);
        assert_eq!(refund_percentage(50), 75);
        assert_eq!(refund_percentage(64), 75);
        assert_eq!(refund_percentage(65), 35);
        assert_eq!(refund_percentage(79), 35);
        assert_eq!(refund_percentage(80), 0);
        assert_eq!(refund_percentage(100), 0);
        assert_eq!(refund_percentage(255), 0);
    }

    #[test]
    fn test_refund_table_matches_function() {
        for (range, pct) in REFUND_SCHEDULE {
            let low: u8 = range.split('-').next().unwrap().parse().unwrap();
            assert_eq!(refund_percentage(low), pct, "range {range}");
        }
    }

    #[test]
    fn test_plans_sorted_by_tier_and_price() {
        let plans = pricing_plans();
        assert!(plans.windows(2).all(|w| w[0].tier < w[1].tier));
        assert!(plans
            .windows(2)
            .all(|w| w[0].price_monthly_usd < w[1].price_monthly_usd));
        assert!(plan_for(Tier::Starter).is_none());
    }

    #[test]
    fn test_plan_labels() {
        let free = plan_for(Tier::Free).unwrap();
        assert_eq!(free.price_label(), "Free");
        assert_eq!(free.requests_label(), "1.0K requests/day");

        let enterprise = plan_for(Tier::Enterprise).unwrap();
        assert_eq!(enterprise.price_label(), "$499/mo");
        assert!(enterprise
            .features()
            .contains(&"Unlimited requests".to_string()));
        assert!(enterprise.features().contains(&"SLA guarantee".to_string()));
    }
}
