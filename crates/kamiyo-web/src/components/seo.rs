//! Page title and meta tags

use kamiyo_core::content::PageMeta;
use leptos::logging;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::Document;

/// Sets `<title>`, description and Open Graph tags for the current page
#[component]
pub fn Seo(meta: PageMeta) -> impl IntoView {
    Effect::new(move |_| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            apply_meta(&document, &meta);
        }
    });
}

fn apply_meta(document: &Document, meta: &PageMeta) {
    let title = meta.full_title();
    document.set_title(&title);

    let tags = [
        ("name", "description", meta.description),
        ("property", "og:title", title.as_str()),
        ("property", "og:description", meta.description),
        ("property", "og:url", meta.path),
    ];
    for (attr, key, content) in tags {
        if let Err(e) = set_meta_tag(document, attr, key, content) {
            logging::warn!("Failed to set meta {}: {:?}", key, e);
        }
    }
}

fn meta_selector(attr: &str, key: &str) -> String {
    format!("meta[{}=\"{}\"]", attr, key)
}

fn set_meta_tag(
    document: &Document,
    attr: &str,
    key: &str,
    content: &str,
) -> Result<(), JsValue> {
    let element = match document.query_selector(&meta_selector(attr, key))? {
        Some(element) => element,
        None => {
            let element = document.create_element("meta")?;
            element.set_attribute(attr, key)?;
            if let Some(head) = document.head() {
                head.append_child(&element)?;
            }
            element
        }
    };
    element.set_attribute("content", content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_selector() {
        assert_eq!(
            meta_selector("property", "og:title"),
            "meta[property=\"og:title\"]"
        );
    }
}
