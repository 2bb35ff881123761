//! ShopPy Frontend Entry Point

mod models;
mod error;
mod config;
mod commands;
mod context;
mod store;
mod modal;
mod loader;
mod orders;
mod cart;
mod chart;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

/// Print the panic, preceded by the log history the console did not show
fn panic_hook(info: &std::panic::PanicHookInfo<'_>) {
    console_logger::dump_recent("[app] log history before panic");
    console_error_panic_hook::hook(info);
}

fn main() {
    std::panic::set_hook(Box::new(panic_hook));

    let config = match config::load_page_config() {
        Ok(config) => config,
        Err(err) => {
            let _ = console_logger::init(LevelFilter::Info);
            log::error!("[app] nothing mounted: {}", err);
            return;
        }
    };

    let level = if config.debug { LevelFilter::Debug } else { LevelFilter::Info };
    if console_logger::init(level).is_err() {
        web_sys::console::warn_1(&"[app] logger already initialized".into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
