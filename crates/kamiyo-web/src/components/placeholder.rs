//! Loading, error and empty placeholders shared by every page

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    Loading,
    Error,
    Empty,
}

impl PlaceholderKind {
    fn class(&self) -> &'static str {
        match self {
            PlaceholderKind::Loading => "placeholder placeholder-loading",
            PlaceholderKind::Error => "placeholder placeholder-error",
            PlaceholderKind::Empty => "placeholder placeholder-empty",
        }
    }
}

/// Placeholder block rendered in place of a section's content
///
/// # Example
/// ```ignore
/// view! {
///     <Placeholder kind=PlaceholderKind::Error message="Unable to load subscription data" />
/// }
/// ```
#[component]
pub fn Placeholder(
    kind: PlaceholderKind,
    #[prop(into)] message: String,
) -> impl IntoView {
    view! {
        <div class=kind.class() role=if kind == PlaceholderKind::Error { "alert" } else { "status" }>
            {(kind == PlaceholderKind::Loading).then(|| view! { <span class="spinner"></span> })}
            <p class="placeholder-message">{message}</p>
        </div>
    }
}
