use super::PageContext;
use crate::error::WireError;
use storefront_core::constants::{CART_BADGE_CSS, STYLE_ELEMENT_ID};
use storefront_core::{Feature, FeatureStatus};

/// Inject the badge stylesheet into `<head>` once per document.
pub fn install(ctx: &PageContext) -> Result<FeatureStatus, WireError> {
    if ctx.document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(FeatureStatus::available(Feature::Styles));
    }
    let Some(head) = ctx.document.head() else {
        return Ok(FeatureStatus::missing(Feature::Styles, ["head"]));
    };
    let style = ctx.document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(CART_BADGE_CSS));
    head.append_child(&style)?;
    Ok(FeatureStatus::available(Feature::Styles))
}
