use super::PageContext;
use crate::dom;
use crate::error::WireError;
use storefront_core::constants::ACTIVE_CLASS;
use storefront_core::{Feature, FeatureStatus};

pub fn install(ctx: &PageContext) -> Result<FeatureStatus, WireError> {
    let cfg = ctx.config();
    let sel = &cfg.selectors;
    let toggle = dom::query(&ctx.document, &sel.mobile_menu_toggle);
    let nav = dom::query(&ctx.document, &sel.main_nav);
    let probes = [
        (sel.mobile_menu_toggle.as_str(), toggle.is_some()),
        (sel.main_nav.as_str(), nav.is_some()),
    ];
    let (Some(toggle), Some(nav)) = (toggle, nav) else {
        return Ok(FeatureStatus::probe(Feature::MobileMenu, &probes));
    };

    let state = ctx.state.clone();
    let button = toggle.clone();
    dom::listen(&toggle, "click", move |_| {
        let active = state.borrow_mut().menu.toggle();
        dom::set_class(&nav, ACTIVE_CLASS, active);
        dom::set_class(&button, ACTIVE_CLASS, active);
    })?;

    Ok(FeatureStatus::available(Feature::MobileMenu))
}
