//! First Aid Panel Component
//!
//! Search-as-you-type over first-aid topics. Input is debounced; a response
//! for a query that has since been superseded is dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, FirstAidResult, FirstAidView, SearchStart};
use crate::context::HealthContext;
use crate::debounce::{Debouncer, LatestQuery, TimeoutScheduler};

#[component]
pub fn FirstAidPanel() -> impl IntoView {
    let ctx = use_context::<HealthContext>().expect("HealthContext should be provided");

    let (query, set_query) = signal(String::new());
    let (panel, set_panel) = signal(FirstAidView::Empty);
    let debouncer = StoredValue::new_local(Debouncer::new(TimeoutScheduler, ctx.config().debounce_ms));
    let latest = StoredValue::new_local(LatestQuery::default());

    let run_search = move |raw: String| {
        let Some(start) = latest.try_update_value(|latest| api::begin_first_aid_search(latest, &raw)) else {
            return;
        };
        let (ticket, query) = match start {
            SearchStart::Clear => {
                set_panel.set(FirstAidView::Empty);
                return;
            }
            SearchStart::Fetch { ticket, query } => (ticket, query),
        };

        let config = ctx.config();
        spawn_local(async move {
            let result = api::search_first_aid(&config, &query).await;
            if let Some(view) = latest.with_value(|latest| api::settle_first_aid_search(latest, ticket, result)) {
                set_panel.set(view);
            }
        });
    };

    let on_input = move |ev: web_sys::Event| {
        let raw = event_target_value(&ev);
        set_query.set(raw.clone());
        debouncer.update_value(|debouncer| debouncer.call(move || run_search(raw)));
    };

    on_cleanup(move || debouncer.update_value(|debouncer| debouncer.cancel()));

    view! {
        <input
            type="search"
            class="firstaid-search"
            placeholder="Search first aid (e.g. burn, choking)"
            prop:value=move || query.get()
            on:input=on_input
        />

        <div class="firstaid-result">
            {move || match panel.get() {
                FirstAidView::Results(results) => results
                    .into_iter()
                    .map(|result| view! { <FirstAidCard result=result /> })
                    .collect_view()
                    .into_any(),
                FirstAidView::Failed => view! { <p class="error-text">{api::CONNECTIVITY_MESSAGE}</p> }.into_any(),
                other => other.message().map(|message| view! { <p class="status-text">{message}</p> }).into_any(),
            }}
        </div>
    }
}

#[component]
fn FirstAidCard(result: FirstAidResult) -> impl IntoView {
    let warning = result.warning_text().map(str::to_string);

    view! {
        <div class="firstaid-card">
            <h3>{result.topic}</h3>
            <ol class="firstaid-steps">
                {result.steps.into_iter().map(|step| view! { <li>{step}</li> }).collect_view()}
            </ol>
            {warning.map(|warning| view! { <div class="firstaid-warning">{format!("⚠️ {}", warning)}</div> })}
        </div>
    }
}
