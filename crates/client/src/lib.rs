use console_error_panic_hook::set_once as set_panic_hook;
use leptos::{mount_to_body, view};
use shared::{seed::SeedConfig, utils::tracing::configure_tracing_once};
use tracing::{error, info};
use wasm_bindgen::prelude::wasm_bindgen;

mod components;
use components::{App, SeedErrorView};

pub mod store;
pub mod utils;

#[wasm_bindgen(start)]
pub fn start_client() {
    set_panic_hook();
    configure_tracing_once();

    match SeedConfig::bundled() {
        Ok(seed) => {
            info!(
                exercises = seed.exercises.len(),
                students = seed.students.len(),
                "Starting App Academia"
            );
            mount_to_body(move || view! { <App seed/> });
        }
        Err(err) => {
            error!("Bundled seed is invalid: {err}");
            let message = err.to_string();
            mount_to_body(move || view! { <SeedErrorView message/> });
        }
    }
}
