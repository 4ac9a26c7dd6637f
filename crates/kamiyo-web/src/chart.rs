//! Chart.js bridge for the quality-score chart
//!
//! Chart.js is loaded at runtime from a CDN. Instances are created through
//! `new window.Chart(canvas, config)` and released with `chart.destroy()`.

use kamiyo_core::models::{QualityDistribution, BUCKET_LABELS};
use kamiyo_core::ChartBackend;
use leptos::logging;
use leptos::prelude::*;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

pub const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";
const SCRIPT_ID: &str = "chartjs-script";

#[derive(Debug, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    kind: &'static str,
    data: ChartData,
    options: ChartOptions,
}

#[derive(Debug, Serialize)]
struct ChartData {
    labels: Vec<&'static str>,
    datasets: Vec<Dataset>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Dataset {
    label: &'static str,
    data: Vec<f64>,
    border_color: &'static str,
    background_color: &'static str,
    tension: f64,
    fill: bool,
}

#[derive(Debug, Serialize)]
struct ChartOptions {
    responsive: bool,
    animation: bool,
    plugins: Plugins,
}

#[derive(Debug, Serialize)]
struct Plugins {
    legend: Legend,
}

#[derive(Debug, Serialize)]
struct Legend {
    display: bool,
}

/// Line chart of the share of assessments per quality bucket
pub fn line_chart_config(distribution: &QualityDistribution) -> ChartConfig {
    ChartConfig {
        kind: "line",
        data: ChartData {
            labels: BUCKET_LABELS.to_vec(),
            datasets: vec![Dataset {
                label: "Assessments (%)",
                data: distribution.percentages().to_vec(),
                border_color: "#4fe9ea",
                background_color: "rgba(79, 233, 234, 0.15)",
                tension: 0.35,
                fill: true,
            }],
        },
        options: ChartOptions {
            responsive: true,
            animation: false,
            plugins: Plugins {
                legend: Legend { display: false },
            },
        },
    }
}

/// `window.Chart`, once the script has loaded
pub fn chart_constructor() -> Option<js_sys::Function> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str("Chart"))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

pub struct ChartJsBackend;

impl ChartBackend for ChartJsBackend {
    type Surface = HtmlCanvasElement;
    type Instance = JsValue;
    type Error = String;

    fn create(
        &self,
        canvas: &HtmlCanvasElement,
        data: &QualityDistribution,
    ) -> Result<JsValue, String> {
        let ctor = chart_constructor().ok_or_else(|| "Chart.js not loaded".to_string())?;
        let config = serde_wasm_bindgen::to_value(&line_chart_config(data))
            .map_err(|e| e.to_string())?;
        let args = js_sys::Array::of2(canvas.as_ref(), &config);
        js_sys::Reflect::construct(&ctor, &args).map_err(|e| format!("{:?}", e))
    }

    fn dispose(&self, instance: JsValue) {
        let destroy = js_sys::Reflect::get(&instance, &JsValue::from_str("destroy"))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
        if let Some(destroy) = destroy {
            if let Err(e) = destroy.call0(&instance) {
                logging::warn!("Chart destroy failed: {:?}", e);
            }
        }
    }
}

/// Readiness signal for Chart.js, injecting the script tag on first use
pub fn use_chart_library() -> ReadSignal<bool> {
    let (ready, set_ready) = signal(chart_constructor().is_some());

    Effect::new(move |_| {
        if ready.get_untracked() {
            return;
        }
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let on_load = Closure::wrap(Box::new(move |_: web_sys::Event| {
            set_ready.set(chart_constructor().is_some());
        }) as Box<dyn FnMut(_)>);

        // Another mount may already have injected the tag
        if let Some(existing) = document.get_element_by_id(SCRIPT_ID) {
            if let Err(e) = existing
                .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
            {
                logging::warn!("Failed to watch Chart.js script: {:?}", e);
            }
            on_load.forget();
            return;
        }

        let script = match document
            .create_element("script")
            .map(|el| el.unchecked_into::<web_sys::HtmlScriptElement>())
        {
            Ok(script) => script,
            Err(e) => {
                logging::warn!("Failed to create Chart.js script tag: {:?}", e);
                return;
            }
        };
        script.set_id(SCRIPT_ID);
        script.set_src(CHART_JS_URL);
        script.set_async(true);
        script.set_onload(Some(on_load.as_ref().unchecked_ref()));
        on_load.forget();

        if let Some(head) = document.head() {
            if let Err(e) = head.append_child(&script) {
                logging::warn!("Failed to attach Chart.js script: {:?}", e);
            }
        }
    });

    ready
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_uses_percentages() {
        let config = line_chart_config(&QualityDistribution([1.0, 1.0, 2.0, 0.0, 0.0]));
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["type"], "line");
        assert_eq!(json["data"]["labels"][4], "80-100");
        assert_eq!(
            json["data"]["datasets"][0]["data"],
            serde_json::json!([25.0, 25.0, 50.0, 0.0, 0.0])
        );
        assert_eq!(json["data"]["datasets"][0]["borderColor"], "#4fe9ea");
        assert_eq!(json["options"]["plugins"]["legend"]["display"], false);
    }
}
