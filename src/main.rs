//! Memo Pad Frontend Entry Point

mod app;
mod components;
mod config;
mod download;
mod logger;
mod markdown;
mod preview;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = config::load_config();
    logger::init(config.log_level_filter());
    mount_to_body(move || view! { <App config=config /> });
}
