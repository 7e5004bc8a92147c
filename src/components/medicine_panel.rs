//! Medicine Panel Component
//!
//! Reminder form and the list of scheduled reminders. Alerts themselves are
//! raised by the poller started in `App`.

use leptos::prelude::*;

use crate::components::ConfirmButton;
use crate::context::HealthContext;
use crate::store::{use_health_store, HealthStateStoreFields};

#[component]
pub fn MedicinePanel() -> impl IntoView {
    let ctx = use_context::<HealthContext>().expect("HealthContext should be provided");
    let state = use_health_store();

    let (name, set_name) = signal(String::new());
    let (time, set_time) = signal(String::new());

    let add_reminder = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match ctx.reminders().add(&name.get(), &time.get()) {
            Ok(reminder) => {
                set_name.set(String::new());
                set_time.set(String::new());
                ctx.refresh_reminders();
                ctx.alert(&format!("Reminder set for {} at {}", reminder.name, reminder.time));
            }
            Err(e) => ctx.alert(&e.to_string()),
        }
    };

    view! {
        <form class="medicine-form" on:submit=add_reminder>
            <input
                type="text"
                placeholder="Medicine name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="time"
                prop:value=move || time.get()
                on:input=move |ev| set_time.set(event_target_value(&ev))
            />
            <button type="submit">"Set Reminder"</button>
        </form>

        {move || {
            let reminders = state.reminders().get();
            if reminders.is_empty() {
                return view! {
                    <p class="placeholder">"No medicine reminders set. Add your first reminder!"</p>
                }.into_any();
            }
            view! {
                <div class="medicine-list">
                    {reminders.into_iter().enumerate().map(|(index, reminder)| view! {
                        <div class="medicine-item">
                            <div class="medicine-item-info">
                                <div class="medicine-item-name">{reminder.name}</div>
                                <div class="medicine-item-time">{format!("⏰ {}", reminder.time)}</div>
                            </div>
                            <button class="delete-medicine-btn" on:click=move |_| {
                                ctx.reminders().delete(index);
                                ctx.refresh_reminders();
                            }>"Delete"</button>
                        </div>
                    }).collect_view()}
                </div>
                <div class="medicine-footer">
                    <ConfirmButton
                        label="Clear All"
                        button_class="secondary-btn"
                        on_confirm=Callback::new(move |_: ()| {
                            ctx.reminders().clear();
                            ctx.refresh_reminders();
                        })
                    />
                </div>
            }.into_any()
        }}
    }
}
