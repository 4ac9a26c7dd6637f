//! Stats card component

use leptos::prelude::*;

/// Card color variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardColor {
    Default,
    Accent,
    Green,
    Red,
}

impl CardColor {
    fn to_class(&self) -> &'static str {
        match self {
            CardColor::Default => "",
            CardColor::Accent => "card-accent",
            CardColor::Green => "card-green",
            CardColor::Red => "card-red",
        }
    }
}

/// StatsCard component - displays a single metric with label and optional hint
#[component]
pub fn StatsCard(
    /// Card label (e.g., "API Keys")
    #[prop(into)]
    label: String,
    /// Card value (formatted, e.g., "3 Active")
    #[prop(into)]
    value: String,
    /// Secondary line under the value
    #[prop(optional, into)]
    hint: Option<String>,
    /// Color variant for status indication
    #[prop(default = CardColor::Default)]
    color: CardColor,
) -> impl IntoView {
    let color_class = color.to_class();

    view! {
        <div class=format!("card stats-card {}", color_class)>
            <div class="stats-card-content">
                <div class="stats-card-label">{label}</div>
                <div class="stats-card-value">{value}</div>
                {hint.map(|hint| view! { <div class="stats-card-hint">{hint}</div> })}
            </div>
        </div>
    }
}
