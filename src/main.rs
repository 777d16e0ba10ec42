//! List Manager Frontend Entry Point

mod app;
mod components;
mod context;
mod feedback;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    mount_to_body(App);
}
