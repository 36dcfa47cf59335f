use super::PageContext;
use crate::dom;
use crate::error::WireError;
use js_sys::Array;
use std::rc::Rc;
use storefront_core::constants::{DEFERRED_SRC_ATTR, LOADED_CLASS};
use storefront_core::{Feature, FeatureStatus};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

/// Swap deferred `data-src` images in once they scroll into view.
pub fn install(ctx: &PageContext) -> Result<FeatureStatus, WireError> {
    let cfg = ctx.config();
    let selector = cfg.selectors.lazy_image.as_str();
    let images = dom::query_all(&ctx.document, selector)?;
    if images.is_empty() {
        return Ok(FeatureStatus::missing(Feature::LazyImages, [selector]));
    }

    {
        let mut page = ctx.state.borrow_mut();
        for img in &images {
            let deferred = img.get_attribute(DEFERRED_SRC_ATTR).unwrap_or_default();
            page.lazy.register(deferred);
        }
    }

    let images = Rc::new(images);
    let tracked = Rc::clone(&images);
    let state = ctx.state.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(id) = tracked.iter().position(|img| *img == target) else {
                    continue;
                };
                let registered = state.borrow_mut().lazy.reveal(id).map(str::to_owned);
                if let Some(registered) = registered {
                    // The attribute may have been rewritten since install.
                    let src = target.get_attribute(DEFERRED_SRC_ATTR).unwrap_or(registered);
                    load(&target, &src);
                }
                observer.unobserve(&target);
            }
        },
    );
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    callback.forget();

    for img in images.iter() {
        observer.observe(img);
    }
    Ok(FeatureStatus::available(Feature::LazyImages))
}

fn load(img: &Element, src: &str) {
    if let Err(err) = dom::set_image_src(img, src) {
        log::warn!("deferred image load failed: {err}");
        return;
    }
    dom::set_class(img, LOADED_CLASS, true);
}
