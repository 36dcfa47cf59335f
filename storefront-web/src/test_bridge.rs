//! `window.__storefrontTest`: read-only state hooks for browser automation.
use crate::dom;
use crate::error::WireError;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use storefront_core::PageState;
use storefront_core::constants::{TEST_BRIDGE_GLOBAL, TEST_QUERY_FLAG};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|err| {
        log::error!("test bridge serialization failed: {err}");
        JsValue::NULL
    })
}

/// Expose the bridge when the page was opened with the test flag.
///
/// # Errors
/// Returns an error if the bridge object cannot be attached to `window`.
pub fn install_if_requested(state: &Rc<RefCell<PageState>>) -> Result<bool, WireError> {
    if !dom::test_mode_enabled(TEST_QUERY_FLAG) {
        return Ok(false);
    }
    install(state)?;
    Ok(true)
}

/// Attach `state()` and `features()` to `window.__storefrontTest`.
///
/// # Errors
/// Returns an error if the window is missing or refuses the property.
pub fn install(state: &Rc<RefCell<PageState>>) -> Result<(), WireError> {
    let window = dom::require_window()?;
    let bridge = js_sys::Object::new();

    let snapshot_state = Rc::clone(state);
    let snapshot = Closure::<dyn FnMut() -> JsValue>::new(move || {
        to_js(&snapshot_state.borrow().snapshot())
    });
    let report_state = Rc::clone(state);
    let features = Closure::<dyn FnMut() -> JsValue>::new(move || {
        to_js(&report_state.borrow().features)
    });

    js_sys::Reflect::set(
        &bridge,
        &JsValue::from_str("state"),
        snapshot.as_ref().unchecked_ref(),
    )?;
    js_sys::Reflect::set(
        &bridge,
        &JsValue::from_str("features"),
        features.as_ref().unchecked_ref(),
    )?;
    js_sys::Reflect::set(&window, &JsValue::from_str(TEST_BRIDGE_GLOBAL), &bridge)?;

    snapshot.forget();
    features.forget();
    log::info!("test bridge attached as window.{TEST_BRIDGE_GLOBAL}");
    Ok(())
}
