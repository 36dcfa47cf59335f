use super::PageContext;
use crate::dom;
use crate::error::WireError;
use storefront_core::{Feature, FeatureStatus, HeroSlider};
use web_sys::Element;

/// Auto-advance the hero slides on a fixed interval.
///
/// A single slide (or none) leaves the slider inert; there is nothing to cycle.
pub fn install(ctx: &PageContext) -> Result<FeatureStatus, WireError> {
    let cfg = ctx.config();
    let sel = &cfg.selectors;
    let Some(container) = dom::query(&ctx.document, &sel.hero_slider) else {
        return Ok(FeatureStatus::missing(
            Feature::HeroSlider,
            [sel.hero_slider.as_str()],
        ));
    };
    let slides = dom::query_all_in(&container, &sel.slide)?;
    let Some(slider) = HeroSlider::new(slides.len()) else {
        log::debug!("hero slider has {} slide(s); not cycling", slides.len());
        return Ok(FeatureStatus::missing(Feature::HeroSlider, [sel.slide.as_str()]));
    };
    ctx.state.borrow_mut().slider = Some(slider);

    let state = ctx.state.clone();
    dom::set_interval(cfg.delays.slide_interval_ms, move || {
        let Some(slider) = state.borrow_mut().slider.as_mut().map(|s| {
            s.advance();
            *s
        }) else {
            return;
        };
        render(&slides, &slider);
    })?;

    Ok(FeatureStatus::available(Feature::HeroSlider))
}

/// Offset every slide so the current one sits in view.
pub fn render(slides: &[Element], slider: &HeroSlider) {
    for (ordinal, slide) in slides.iter().enumerate() {
        dom::set_style(slide, "transform", &slider.transform(ordinal));
    }
}
