//! Basics Demo Frontend Entry Point

mod app;
mod classify;
mod components;
mod config;
mod countdown;
mod error;
mod input;
mod items;
mod logging;
mod notification;
mod palette;
mod pricing;
mod scheduler;
mod store;
mod tables;
mod text;
mod theme;

use app::App;
use config::DemoConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);

    let config = DemoConfig::load();
    log::set_max_level(config.log_level());
    log::info!("[APP] mounting demo page");

    mount_to_body(move || view! { <App config=config /> });
}
