use crate::dom;
use storefront_core::StorefrontError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures raised while wiring a feature to the document.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("`window` is unavailable")]
    NoWindow,
    #[error("`document` is unavailable")]
    NoDocument,
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error(transparent)]
    State(#[from] StorefrontError),
}

impl From<JsValue> for WireError {
    fn from(value: JsValue) -> Self {
        Self::Js(dom::js_error_message(&value))
    }
}

impl From<WireError> for JsValue {
    fn from(err: WireError) -> Self {
        Self::from_str(&err.to_string())
    }
}
