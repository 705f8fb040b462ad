//! GigDesk Frontend Entry Point

mod app;
mod board;
mod calendar_grid;
mod commands;
mod components;
mod context;
mod models;
mod money;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
