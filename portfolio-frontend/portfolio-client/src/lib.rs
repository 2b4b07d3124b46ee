use wasm_bindgen::prelude::wasm_bindgen;

use leptos::prelude::*;
use portfolio_app::App;

#[wasm_bindgen]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("mounting portfolio app");

    leptos::mount::mount_to_body(move || {
        view! { <App /> }
    });
}
