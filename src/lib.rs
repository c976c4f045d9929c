use leptos::prelude::*;

mod api;
mod components;
pub mod form;
pub mod types;

use components::portal::ComplaintPortal;

#[component]
pub fn App() -> impl IntoView {
    view! { <ComplaintPortal /> }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(App);
}
