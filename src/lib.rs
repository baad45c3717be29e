pub mod common;
pub mod config;
pub mod frontend;
pub mod head;
pub mod models;

/// WASM entry point; runs as soon as the module is instantiated.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(frontend::App);
}
