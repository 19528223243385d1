pub mod app;
pub mod catalog;
pub mod components;
pub mod pages;
pub mod selection;

pub use crate::app::App;
pub use crate::catalog::{Catalog, Game};
pub use crate::selection::{OverlayTarget, Phase, SelectionState};

#[cfg(feature = "web")]
mod web {
    use leptos::mount::mount_to_body;
    use leptos::view;
    use wasm_bindgen::prelude::*;

    use crate::App;

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("logger already set: {e}").into());
        }
        log::info!("mounting landing page");
        mount_to_body(|| view! { <App/> });
    }
}
