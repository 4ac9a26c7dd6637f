//! Leptos UI components

mod faq;
mod footer;
mod header;
mod placeholder;
mod pricing_table;
mod quality_chart;
mod seo;
mod stats_card;

pub use faq::Faq;
pub use footer::Footer;
pub use header::Header;
pub use placeholder::{Placeholder, PlaceholderKind};
pub use pricing_table::PricingTable;
pub use quality_chart::QualityChart;
pub use seo::Seo;
pub use stats_card::{CardColor, StatsCard};
