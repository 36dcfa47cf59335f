use super::PageContext;
use crate::dom;
use crate::error::WireError;
use storefront_core::search::search_url_with_path;
use storefront_core::{Feature, FeatureStatus};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, KeyboardEvent};

pub fn install(ctx: &PageContext) -> Result<FeatureStatus, WireError> {
    let cfg = ctx.config();
    let selector = cfg.selectors.search_input.as_str();
    let Some(input) = dom::query(&ctx.document, selector)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return Ok(FeatureStatus::missing(Feature::Search, [selector]));
    };

    let focused = input.clone();
    dom::listen(&input, "focus", move |_| focused.set_placeholder(""))?;

    let blurred = input.clone();
    let placeholder = cfg.labels.search_placeholder.clone();
    dom::listen(&input, "blur", move |_| blurred.set_placeholder(&placeholder))?;

    let field = input.clone();
    let search_path = cfg.search_path;
    dom::listen(&input, "keypress", move |event| {
        let is_enter = event
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|key| key.key() == "Enter");
        if !is_enter {
            return;
        }
        let query = field.value();
        let Some(url) = search_url_with_path(&search_path, &query) else {
            return;
        };
        log::info!("searching for: {query}");
        if let Some(win) = dom::window() {
            if let Err(err) = win.location().set_href(&url) {
                log::error!("search navigation failed: {}", dom::js_error_message(&err));
            }
        }
    })?;

    Ok(FeatureStatus::available(Feature::Search))
}
