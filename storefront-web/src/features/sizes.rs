use super::PageContext;
use crate::dom;
use crate::error::WireError;
use std::rc::Rc;
use storefront_core::constants::SELECTED_CLASS;
use storefront_core::{Feature, FeatureStatus, SizeSelection};
use web_sys::Element;

pub fn install(ctx: &PageContext) -> Result<FeatureStatus, WireError> {
    let cfg = ctx.config();
    let buttons = dom::query_all(&ctx.document, &cfg.selectors.size_button)?;
    if buttons.is_empty() {
        return Ok(FeatureStatus::missing(
            Feature::SizeSelector,
            [cfg.selectors.size_button],
        ));
    }

    let mut selection = SizeSelection::new(buttons.len());
    if let Some(preselected) = buttons
        .iter()
        .position(|button| button.class_list().contains(SELECTED_CLASS))
    {
        selection.select(preselected);
    }
    ctx.state.borrow_mut().sizes = selection;
    render(&buttons, &selection);
    let buttons = Rc::new(buttons);

    for (index, button) in buttons.iter().enumerate() {
        let state = ctx.state.clone();
        let group = Rc::clone(&buttons);
        dom::listen(button, "click", move |_| {
            let selection = {
                let mut page = state.borrow_mut();
                page.sizes.select(index);
                page.sizes
            };
            render(&group, &selection);
        })?;
    }

    Ok(FeatureStatus::available(Feature::SizeSelector))
}

/// Mirror the selection onto the button group's `selected` markers.
pub fn render(buttons: &[Element], selection: &SizeSelection) {
    for (index, button) in buttons.iter().enumerate() {
        dom::set_class(button, SELECTED_CLASS, selection.is_selected(index));
    }
}
