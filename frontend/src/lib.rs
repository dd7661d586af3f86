use log::info;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::spawn_local;

pub mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) fails harmlessly.
    let _ = console_log::init_with_level(log::Level::Debug);
    info!("Starting HRMS Lite frontend");

    // Resolve the API base URL in the background; requests await it.
    spawn_local(async {
        config::init().await;
    });

    router::mount_app();
}
