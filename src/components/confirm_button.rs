//! Confirm Button Component
//!
//! Inline two-step button for destructive actions such as clearing a list.

use leptos::prelude::*;

/// Shows `label` first; clicking it asks "Sure?" with confirm/cancel buttons.
#[component]
pub fn ConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                type="button"
                class=button_class.clone()
                on:click=move |_| set_confirming.set(true)
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="confirm-inline">
                <span class="confirm-text">"Sure?"</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |_| {
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button type="button" class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                    "No"
                </button>
            </span>
        </Show>
    }
}
