//! Health Utility App
//!
//! Main application component: tab bar plus one section per panel. All
//! panels stay mounted so switching tabs keeps their input.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    panel_class, BmiPanel, ChecklistPanel, FirstAidPanel, MedicinePanel, RecentLog, SymptomPanel, Tab,
    TabBar,
};
use crate::config::AppConfig;
use crate::context::HealthContext;
use crate::store::{HealthState, HealthStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let state = Store::new(HealthState::default());
    provide_context(state);

    let ctx = HealthContext::new(state, config);
    provide_context(ctx);

    // Load saved lists, then start checking reminders
    ctx.refresh_checklist();
    ctx.refresh_reminders();
    ctx.start_poller();
    on_cleanup(move || ctx.stop_poller());

    let section_class = move |tab: Tab| move || panel_class(tab, state.active_tab().get());

    view! {
        <div class="container">
            <header>
                <h1>"Health Utility"</h1>
                <p class="subtitle">"Everyday health tools in your browser"</p>
            </header>

            <TabBar />
            <RecentLog />

            <section class=section_class(Tab::Bmi)>
                <h2>"BMI Calculator"</h2>
                <BmiPanel />
            </section>
            <section class=section_class(Tab::Symptoms)>
                <h2>"Symptom-to-Specialist Guide"</h2>
                <SymptomPanel />
            </section>
            <section class=section_class(Tab::Checklist)>
                <h2>"Daily Health Checklist"</h2>
                <ChecklistPanel />
            </section>
            <section class=section_class(Tab::Medicine)>
                <h2>"Medicine Reminders"</h2>
                <MedicinePanel />
            </section>
            <section class=section_class(Tab::FirstAid)>
                <h2>"First Aid Quick Search"</h2>
                <FirstAidPanel />
            </section>
        </div>
    }
}
