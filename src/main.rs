#![allow(warnings)]
//! BookTinder Frontend Entry Point

mod models;
mod error;
mod config;
mod routes;
mod browser;
mod firebase;
mod api;
mod swipe;
mod preferences;
mod profile;
mod catalog;
mod openlibrary;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
