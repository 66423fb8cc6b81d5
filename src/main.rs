//! Recipe Book Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod models;
mod route;
mod search;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("Logger already installed: {}", e).into());
    }
    log::debug!("{:?}", config);

    mount_to_body(move || view! { <App config=config /> });
}
