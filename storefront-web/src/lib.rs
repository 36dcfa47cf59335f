#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod clock;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod features;
pub mod logger;
pub mod test_bridge;

pub use controller::PageController;
pub use error::WireError;

/// Boot the page controller against the current document.
///
/// # Errors
/// Returns an error when there is no document to wire.
pub fn boot_page() -> Result<PageController, WireError> {
    let document = dom::require_document()?;
    let config = config::load_page_config();
    log::set_max_level(config.log_level_or(log::max_level()));
    let controller = PageController::new(document, config);
    controller.boot();
    test_bridge::install_if_requested(&controller.state())?;
    Ok(controller)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let Some(document) = dom::document() else {
        dom::console_error("storefront: no document to wire");
        return;
    };
    if document.ready_state() != "loading" {
        run();
        return;
    }
    let wired = dom::listen(&document, "DOMContentLoaded", move |_| run());
    if let Err(err) = wired {
        dom::console_error(&format!("storefront: {err}"));
    }
}

#[cfg(target_arch = "wasm32")]
fn run() {
    if let Err(err) = boot_page() {
        log::error!("storefront boot failed: {err}");
    }
}
