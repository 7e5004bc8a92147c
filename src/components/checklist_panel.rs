//! Checklist Panel Component
//!
//! Daily health habits with completion checkboxes.

use leptos::prelude::*;

use crate::checklist;
use crate::components::ConfirmButton;
use crate::context::HealthContext;
use crate::models::ChecklistItem;
use crate::store::{use_health_store, HealthStateStoreFields};

#[component]
pub fn ChecklistPanel() -> impl IntoView {
    let ctx = use_context::<HealthContext>().expect("HealthContext should be provided");
    let state = use_health_store();

    let (new_text, set_new_text) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Blank input is silently ignored
        if ctx.checklist().add(&new_text.get()).is_ok() {
            set_new_text.set(String::new());
            ctx.refresh_checklist();
        }
    };

    view! {
        <form class="checklist-form" on:submit=add_item>
            <input
                type="text"
                placeholder="Add a health habit..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>

        {move || {
            let items = state.checklist().get();
            if items.is_empty() {
                return view! {
                    <p class="placeholder">"No checklist items yet. Add your first health habit!"</p>
                }.into_any();
            }
            let (done, total) = checklist::progress(&items);
            view! {
                <ul class="checklist-items">
                    {items.into_iter().enumerate().map(|(index, item)| view! {
                        <ChecklistRow index=index item=item />
                    }).collect_view()}
                </ul>
                <div class="checklist-footer">
                    <span class="item-count">{format!("{} of {} done", done, total)}</span>
                    <button type="button" class="secondary-btn" on:click=move |_| {
                        let reset = ctx.checklist().reset_completed();
                        log::info!("[CHECKLIST] Reset {} completed items", reset);
                        ctx.refresh_checklist();
                    }>"New Day"</button>
                    <ConfirmButton
                        label="Clear All"
                        button_class="secondary-btn"
                        on_confirm=Callback::new(move |_: ()| {
                            ctx.checklist().clear();
                            ctx.refresh_checklist();
                        })
                    />
                </div>
            }.into_any()
        }}
    }
}

#[component]
fn ChecklistRow(index: usize, item: ChecklistItem) -> impl IntoView {
    let ctx = use_context::<HealthContext>().expect("HealthContext should be provided");

    let toggle = move || {
        ctx.checklist().toggle(index);
        ctx.refresh_checklist();
    };

    view! {
        <li class=if item.completed { "checklist-item completed" } else { "checklist-item" }>
            <input type="checkbox" prop:checked=item.completed on:change=move |_| toggle() />
            <label on:click=move |_| toggle()>{item.text}</label>
            <button class="delete-btn" on:click=move |_| {
                ctx.checklist().delete(index);
                ctx.refresh_checklist();
            }>"Delete"</button>
        </li>
    }
}
