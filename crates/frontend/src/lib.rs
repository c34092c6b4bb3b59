pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::shared::api::{ApiClient, ApiConfig};
use crate::system::pages::config_error::ConfigErrorPage;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    match ApiConfig::from_build_env() {
        Ok(config) => {
            log::info!("API root: {}", config.api_root());
            let api = ApiClient::new(config);
            leptos::mount::mount_to_body(move || view! { <app::App api=api /> });
        }
        Err(err) => {
            log::error!("Configuration error: {}", err);
            leptos::mount::mount_to_body(move || view! { <ConfigErrorPage error=err.clone() /> });
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
