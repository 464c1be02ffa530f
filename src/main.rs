#![allow(warnings)]
//! Assignment Board Frontend Entry Point

mod board;
mod config;
mod dates;
mod error;
mod models;
mod store;
mod view;
mod components;
mod app;

use app::App;
use config::BoardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    let config = BoardConfig::default();
    mount_to_body(move || view! { <App config=config.clone() /> });
}
