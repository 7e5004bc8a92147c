//! Symptom Panel Component
//!
//! Comma-separated symptom input with specialist recommendation cards.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, Recommendation, SymptomView, URGENT_NOTICE};
use crate::context::HealthContext;
use crate::debounce::LatestQuery;

#[component]
pub fn SymptomPanel() -> impl IntoView {
    let ctx = use_context::<HealthContext>().expect("HealthContext should be provided");

    let (input, set_input) = signal(String::new());
    let (panel, set_panel) = signal(SymptomView::Idle);
    let latest = StoredValue::new_local(LatestQuery::default());

    let check = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(ticket) = latest.try_update_value(|latest| latest.begin()) else {
            return;
        };
        let symptoms = match api::parse_symptoms(&input.get()) {
            Ok(symptoms) => symptoms,
            Err(e) => {
                set_panel.set(SymptomView::Invalid(e.to_string()));
                return;
            }
        };

        set_panel.set(SymptomView::Searching);
        let config = ctx.config();
        spawn_local(async move {
            let result = api::check_symptoms(&config, &symptoms).await;
            if let Some(view) = latest.with_value(|latest| api::settle_symptom_check(latest, ticket, result)) {
                set_panel.set(view);
            }
        });
    };

    view! {
        <form class="symptom-form" on:submit=check>
            <input
                type="text"
                placeholder="e.g. headache, fever, chest pain"
                prop:value=move || input.get()
                on:input=move |ev| set_input.set(event_target_value(&ev))
            />
            <button type="submit">"Find Specialist"</button>
        </form>

        <div class="symptom-result">
            {move || match panel.get() {
                SymptomView::Results(recommendations) => recommendations
                    .into_iter()
                    .map(|rec| view! { <RecommendationCard rec=rec /> })
                    .collect_view()
                    .into_any(),
                state => {
                    let class = if state.is_error() { "error-text" } else { "status-text" };
                    state
                        .message()
                        .map(|message| view! { <p class=class>{message.to_string()}</p> })
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn RecommendationCard(rec: Recommendation) -> impl IntoView {
    let urgent = rec.is_urgent();

    view! {
        <div class=if urgent { "recommendation-card urgency-high" } else { "recommendation-card" }>
            <h3>{format!("{} → {}", rec.symptom, rec.specialist)}</h3>
            <p><strong>"Specialist: "</strong>{rec.specialist.clone()}</p>
            <p>{rec.description.clone()}</p>
            {urgent.then(|| view! { <p class="urgent-notice">{URGENT_NOTICE}</p> })}
        </div>
    }
}
