//! Car Catalog Frontend Entry Point

mod app;
mod bindings;
mod components;
mod context;
mod logger;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = logger::init(log::LevelFilter::Debug) {
        web_sys::console::error_1(&format!("[Main] logger already installed: {}", e).into());
    }
    mount_to_body(App);
}
