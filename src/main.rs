#![allow(warnings)]
//! Plog Frontend Entry Point

mod models;
mod error;
mod config;
mod session;
mod context;
mod store;
mod feed;
mod api;
mod mention;
mod text;
mod components;
mod app;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;
use session::Session;

fn main() {
    console_error_panic_hook::set_once();

    let config = ClientConfig::load();
    if let Some(level) = config.log_level() {
        if let Err(e) = console_log::init_with_level(level) {
            web_sys::console::warn_1(&format!("Logger already installed: {}", e).into());
        }
    }
    log::info!(
        "[APP] Starting (api={}, pageSize={})",
        config.api_base_url,
        config.page_size
    );

    let session = Session::load();
    mount_to_body(move || view! { <App config=config session=session /> });
}
