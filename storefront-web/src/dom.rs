use crate::error::WireError;
use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlImageElement, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Window or a [`WireError`] suitable for `?`.
///
/// # Errors
/// Returns [`WireError::NoWindow`] outside a browser context.
pub fn require_window() -> Result<Window, WireError> {
    window().ok_or(WireError::NoWindow)
}

/// Document or a [`WireError`] suitable for `?`.
///
/// # Errors
/// Returns [`WireError::NoDocument`] when the window has no document.
pub fn require_document() -> Result<Document, WireError> {
    document().ok_or(WireError::NoDocument)
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// First element matching `selector`; invalid selectors count as no match.
#[must_use]
pub fn query(doc: &Document, selector: &str) -> Option<Element> {
    doc.query_selector(selector).ok().flatten()
}

/// Every element matching `selector` under `root`, in document order.
///
/// # Errors
/// Returns an error if the selector is not valid CSS.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, WireError> {
    Ok(collect_elements(&root.query_selector_all(selector)?))
}

/// Every element matching `selector` in the document, in document order.
///
/// # Errors
/// Returns an error if the selector is not valid CSS.
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, WireError> {
    Ok(collect_elements(&doc.query_selector_all(selector)?))
}

fn collect_elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Add or remove a class marker.
pub fn set_class(el: &Element, class: &str, on: bool) {
    if let Err(err) = el.class_list().toggle_with_force(class, on) {
        log::warn!("class `{class}` update failed: {}", js_error_message(&err));
    }
}

/// Set one inline style property.
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        if let Err(err) = html.style().set_property(property, value) {
            log::warn!("style `{property}` update failed: {}", js_error_message(&err));
        }
    }
}

/// Current image source of an `<img>`, or its `src` attribute otherwise.
#[must_use]
pub fn image_src(el: &Element) -> Option<String> {
    el.dyn_ref::<HtmlImageElement>()
        .map(HtmlImageElement::src)
        .or_else(|| el.get_attribute("src"))
}

/// Point an image (or any element with a `src` attribute) at `src`.
///
/// # Errors
/// Returns an error if the attribute cannot be written.
pub fn set_image_src(el: &Element, src: &str) -> Result<(), WireError> {
    if let Some(img) = el.dyn_ref::<HtmlImageElement>() {
        img.set_src(src);
    } else {
        el.set_attribute("src", src)?;
    }
    Ok(())
}

/// Attach a page-lifetime listener; the closure is intentionally leaked.
///
/// # Errors
/// Returns an error if the browser refuses the listener.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), WireError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn clamp_ms(ms: u64) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

/// Run `callback` once after `delay_ms`.
///
/// # Errors
/// Returns an error if no window is available or the timer cannot be scheduled.
pub fn set_timeout<F>(delay_ms: u64, callback: F) -> Result<i32, WireError>
where
    F: FnOnce() + 'static,
{
    let win = require_window()?;
    let closure = Closure::once(callback);
    let handle = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        clamp_ms(delay_ms),
    )?;
    closure.forget();
    Ok(handle)
}

/// Run `callback` every `period_ms` for the lifetime of the page.
///
/// # Errors
/// Returns an error if no window is available or the interval cannot be scheduled.
pub fn set_interval<F>(period_ms: u64, callback: F) -> Result<i32, WireError>
where
    F: FnMut() + 'static,
{
    let win = require_window()?;
    let closure = Closure::<dyn FnMut()>::new(callback);
    let handle = win.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        clamp_ms(period_ms),
    )?;
    closure.forget();
    Ok(handle)
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: u64) -> Result<(), JsValue> {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    set_timeout(duration_ms, move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    })?;

    JsFuture::from(promise).await?;
    Ok(())
}

/// Whether the page URL carries the test flag that exposes the bridge.
#[must_use]
pub fn test_mode_enabled(flag: &str) -> bool {
    window()
        .and_then(|win| win.location().search().ok())
        .is_some_and(|search| search.contains(flag))
}
