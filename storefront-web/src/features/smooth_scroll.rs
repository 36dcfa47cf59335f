use super::PageContext;
use crate::dom;
use crate::error::WireError;
use storefront_core::{Feature, FeatureStatus, fragment_selector};
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scroll in-page anchors to their target element.
pub fn install(ctx: &PageContext) -> Result<FeatureStatus, WireError> {
    let cfg = ctx.config();
    let selector = cfg.selectors.local_anchor.as_str();
    let anchors = dom::query_all(&ctx.document, selector)?;
    if anchors.is_empty() {
        return Ok(FeatureStatus::missing(Feature::SmoothScroll, [selector]));
    }

    for anchor in anchors {
        let doc = ctx.document.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            match resolve_target(&doc, &href) {
                Some(target) => {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
                None => log::debug!("no scroll target for {href}"),
            }
        })?;
    }

    Ok(FeatureStatus::available(Feature::SmoothScroll))
}

/// Element named by `href`, if any.
///
/// Names that are not plain CSS identifiers are looked up by id instead.
fn resolve_target(doc: &Document, href: &str) -> Option<Element> {
    match fragment_selector(href) {
        Ok(selector) => dom::query(doc, selector),
        Err(err) => {
            let name = href.strip_prefix('#').unwrap_or_default();
            if name.is_empty() {
                return None;
            }
            log::debug!("{err}; looking up #{name} by id");
            doc.get_element_by_id(name)
        }
    }
}
