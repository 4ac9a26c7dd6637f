//! Collapsible FAQ list

use kamiyo_core::content::FAQ;
use leptos::prelude::*;

#[component]
pub fn Faq() -> impl IntoView {
    let (open, set_open) = signal(None::<usize>);

    view! {
        <section class="faq">
            <h2 class="section-title">"Frequently asked questions"</h2>
            {FAQ
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    let is_open = move || open.get() == Some(index);
                    view! {
                        <div class="faq-item" class:faq-item--open=is_open>
                            <button
                                class="faq-question"
                                aria-expanded=move || is_open().to_string()
                                on:click=move |_| {
                                    set_open.update(|o| {
                                        *o = if *o == Some(index) { None } else { Some(index) };
                                    })
                                }
                            >
                                {entry.question}
                            </button>
                            <Show when=is_open>
                                <p class="faq-answer">{entry.answer}</p>
                            </Show>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </section>
    }
}
