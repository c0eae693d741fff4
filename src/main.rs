//! Todo List Frontend Entry Point

mod models;
mod config;
mod store;
mod list_model;
mod render;
mod controller;
mod context;
mod components;
mod app;


use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = console_logger::init(level) {
        web_sys::console::warn_1(&format!("Logger already installed: {}", e).into());
    }
    mount_to_body(App);
}
