use super::PageContext;
use crate::dom;
use crate::error::WireError;
use storefront_core::{Feature, FeatureStatus};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

pub fn install(ctx: &PageContext) -> Result<FeatureStatus, WireError> {
    let cfg = ctx.config();
    let sel = &cfg.selectors;
    let trigger = dom::query(&ctx.document, &sel.team_trigger);
    let panel = dom::query(&ctx.document, &sel.team_dropdown);
    let probes = [
        (sel.team_trigger.as_str(), trigger.is_some()),
        (sel.team_dropdown.as_str(), panel.is_some()),
    ];
    let (Some(trigger), Some(panel)) = (trigger, panel) else {
        return Ok(FeatureStatus::probe(Feature::TeamDropdown, &probes));
    };

    let state = ctx.state.clone();
    let shown = panel.clone();
    dom::listen(&trigger, "mouseenter", move |_| {
        let display = {
            let mut page = state.borrow_mut();
            page.dropdown.open();
            page.dropdown.display()
        };
        dom::set_style(&shown, "display", display);
    })?;

    let state = ctx.state.clone();
    let trigger_sel = sel.team_trigger.clone();
    let panel_sel = sel.team_dropdown_panel.clone();
    dom::listen(&ctx.document, "click", move |event| {
        if is_inside(&event, &trigger_sel, &panel_sel) {
            return;
        }
        let display = {
            let mut page = state.borrow_mut();
            page.dropdown.click(false);
            page.dropdown.display()
        };
        dom::set_style(&panel, "display", display);
    })?;

    Ok(FeatureStatus::available(Feature::TeamDropdown))
}

fn is_inside(event: &Event, trigger_sel: &str, panel_sel: &str) -> bool {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return false;
    };
    [trigger_sel, panel_sel]
        .iter()
        .any(|sel| target.closest(sel).ok().flatten().is_some())
}
