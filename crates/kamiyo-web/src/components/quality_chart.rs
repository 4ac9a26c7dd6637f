//! Quality-score distribution line chart

use crate::chart::{use_chart_library, ChartJsBackend};
use kamiyo_core::models::QualityDistribution;
use kamiyo_core::ChartSlot;
use leptos::prelude::*;

/// Canvas-backed chart; draws nothing until both data and Chart.js are ready
#[component]
pub fn QualityChart(
    #[prop(into)] distribution: Signal<Option<QualityDistribution>>,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let library_ready = use_chart_library();
    let slot = StoredValue::new_local(ChartSlot::new(ChartJsBackend));

    // Any input change tears down the old chart and builds a new one
    Effect::new(move |_| {
        let data = distribution.get();
        let ready = library_ready.get();
        let canvas = canvas_ref.get();
        slot.update_value(|slot| {
            slot.render(canvas.as_ref(), data.as_ref(), ready);
        });
    });

    on_cleanup(move || slot.update_value(|slot| slot.clear()));

    view! {
        <div class="card chart-card">
            <div class="card-header">
                <h3 class="card-title">"Quality score distribution"</h3>
            </div>
            <div class="card-body chart-container">
                <canvas node_ref=canvas_ref aria-label="Quality score distribution"></canvas>
            </div>
        </div>
    }
}
