//! BMI Panel Component

use leptos::prelude::*;

use crate::bmi::{self, BmiResult};

#[component]
pub fn BmiPanel() -> impl IntoView {
    let (height, set_height) = signal(String::new());
    let (weight, set_weight) = signal(String::new());
    let (outcome, set_outcome) = signal(None::<Result<BmiResult, String>>);

    let calculate = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let result = bmi::evaluate(&height.get(), &weight.get()).map_err(|e| e.to_string());
        set_outcome.set(Some(result));
    };

    view! {
        <form class="bmi-form" on:submit=calculate>
            <label>
                "Height (cm)"
                <input
                    type="number"
                    min="0"
                    step="any"
                    prop:value=move || height.get()
                    on:input=move |ev| set_height.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Weight (kg)"
                <input
                    type="number"
                    min="0"
                    step="any"
                    prop:value=move || weight.get()
                    on:input=move |ev| set_weight.set(event_target_value(&ev))
                />
            </label>
            <button type="submit">"Calculate BMI"</button>
        </form>

        {move || match outcome.get() {
            None => ().into_any(),
            Some(Err(message)) => view! { <p class="error-text">{message}</p> }.into_any(),
            Some(Ok(result)) => view! {
                <div class=format!("bmi-result {}", result.category.css_class())>
                    <h3>"Your BMI: " {result.display()}</h3>
                    <p>"Category: " {result.category.label()}</p>
                    <p class="bmi-advice">{result.category.advice()}</p>
                </div>
            }.into_any(),
        }}
    }
}
