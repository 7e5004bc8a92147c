//! Health Utility Frontend Entry Point

mod api;
mod app;
mod bmi;
mod checklist;
mod components;
mod config;
mod context;
mod debounce;
mod error;
mod models;
mod poller;
mod reminders;
mod storage;
mod store;
mod timer;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use storage::LocalStore;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::load(&LocalStore) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    if let Err(e) = console_logger::init(config.level_filter()) {
        web_sys::console::warn_1(&format!("[APP] Logger already installed: {}", e).into());
    }
    if let Some(e) = config_error {
        log::warn!("[APP] Using default configuration: {}", e);
    }
    log::info!("[APP] Starting (api base '{}')", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
