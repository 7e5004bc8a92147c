//! Tab Bar Component
//!
//! Switches between the utility panels.

use leptos::prelude::*;

use crate::store::{use_health_store, HealthStateStoreFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Bmi,
    Symptoms,
    Checklist,
    Medicine,
    FirstAid,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Bmi, Tab::Symptoms, Tab::Checklist, Tab::Medicine, Tab::FirstAid];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Bmi => "BMI Calculator",
            Tab::Symptoms => "Symptom Guide",
            Tab::Checklist => "Daily Checklist",
            Tab::Medicine => "Medicine Reminders",
            Tab::FirstAid => "First Aid",
        }
    }
}

/// Class for a panel section, visible only when its tab is active
pub fn panel_class(tab: Tab, active: Tab) -> &'static str {
    if tab == active { "tab-content active" } else { "tab-content" }
}

#[component]
pub fn TabBar() -> impl IntoView {
    let state = use_health_store();

    view! {
        <nav class="tabs">
            {Tab::ALL.iter().map(|&tab| {
                let is_active = move || state.active_tab().get() == tab;
                view! {
                    <button
                        class=move || if is_active() { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| state.active_tab().set(tab)
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
