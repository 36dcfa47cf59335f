use super::PageContext;
use crate::dom;
use crate::error::WireError;
use std::rc::Rc;
use storefront_core::constants::ACTIVE_CLASS;
use storefront_core::{Feature, FeatureStatus, Gallery, hi_res_src};
use web_sys::Element;

/// Thumbnail strip plus the main display image it drives.
struct GalleryView {
    thumbnails: Vec<Element>,
    main_image: Option<Element>,
    thumb_token: String,
    full_token: String,
}

impl GalleryView {
    /// Mark the active thumbnail and swap the main image to its hi-res source.
    fn render(&self, gallery: &Gallery) {
        for (index, thumb) in self.thumbnails.iter().enumerate() {
            dom::set_class(thumb, ACTIVE_CLASS, gallery.is_active(index));
        }
        let (Some(main), Some(thumb)) = (&self.main_image, self.thumbnails.get(gallery.index()))
        else {
            return;
        };
        let Some(src) = dom::image_src(thumb) else {
            return;
        };
        let full = hi_res_src(&src, &self.thumb_token, &self.full_token);
        if let Err(err) = dom::set_image_src(main, &full) {
            log::warn!("main image swap failed: {err}");
        }
    }
}

/// Thumbnail clicks and, when both arrows exist, prev/next navigation.
///
/// Returns the statuses for [`Feature::Gallery`] and [`Feature::GalleryArrows`].
pub fn install(ctx: &PageContext) -> Result<[FeatureStatus; 2], WireError> {
    let cfg = ctx.config();
    let sel = &cfg.selectors;
    let thumbnails = dom::query_all(&ctx.document, &sel.thumbnail)?;
    let main_image = dom::query(&ctx.document, &sel.main_image);

    ctx.state.borrow_mut().gallery = Gallery::new(thumbnails.len());
    let gallery_status = FeatureStatus::probe(
        Feature::Gallery,
        &[
            (sel.thumbnail.as_str(), !thumbnails.is_empty()),
            (sel.main_image.as_str(), main_image.is_some()),
        ],
    );

    let view = Rc::new(GalleryView {
        thumbnails,
        main_image,
        thumb_token: cfg.thumb_token.clone(),
        full_token: cfg.full_token.clone(),
    });

    for (index, thumb) in view.thumbnails.iter().enumerate() {
        let state = ctx.state.clone();
        let view = Rc::clone(&view);
        dom::listen(thumb, "click", move |_| {
            let gallery = {
                let mut page = state.borrow_mut();
                if let Err(err) = page.gallery.select(index) {
                    log::warn!("thumbnail click ignored: {err}");
                    return;
                }
                page.gallery
            };
            view.render(&gallery);
        })?;
    }

    let prev = dom::query(&ctx.document, &sel.prev_arrow);
    let next = dom::query(&ctx.document, &sel.next_arrow);
    let arrow_probes = [
        (sel.prev_arrow.as_str(), prev.is_some()),
        (sel.next_arrow.as_str(), next.is_some()),
    ];
    let (Some(prev), Some(next)) = (prev, next) else {
        return Ok([
            gallery_status,
            FeatureStatus::probe(Feature::GalleryArrows, &arrow_probes),
        ]);
    };

    for (arrow, forward) in [(prev, false), (next, true)] {
        let state = ctx.state.clone();
        let view = Rc::clone(&view);
        dom::listen(&arrow, "click", move |_| {
            let gallery = {
                let mut page = state.borrow_mut();
                let moved = if forward {
                    page.gallery.next()
                } else {
                    page.gallery.prev()
                };
                if moved.is_none() {
                    return;
                }
                page.gallery
            };
            view.render(&gallery);
        })?;
    }

    Ok([gallery_status, FeatureStatus::available(Feature::GalleryArrows)])
}
