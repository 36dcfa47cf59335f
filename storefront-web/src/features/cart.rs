use super::PageContext;
use crate::dom;
use crate::error::WireError;
use std::cell::RefCell;
use std::rc::Rc;
use storefront_core::constants::{ACTIVE_CLASS, CART_BADGE_CLASS, CART_COUNT_ATTR};
use storefront_core::{
    CartCounter, CartEffect, CartPhase, Clock, Feature, FeatureStatus, Labels, NoticeStyle,
    PageState,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement};

/// Elements and labels the cart effects are rendered into.
struct CartView {
    document: Document,
    button: Element,
    cart_button: Option<Element>,
    notice: Option<Element>,
    badge_selector: String,
    labels: Labels,
    notice_style: NoticeStyle,
}

/// Everything a scheduled transition needs to run later.
#[derive(Clone)]
struct CartWiring {
    state: Rc<RefCell<PageState>>,
    clock: Rc<dyn Clock>,
    view: Rc<CartView>,
}

impl CartWiring {
    fn click(&self) {
        let effects = {
            let mut page = self.state.borrow_mut();
            page.click_add_to_cart(self.clock.now_ms())
        };
        self.apply(effects);
    }

    fn apply(&self, effects: Vec<CartEffect>) {
        for effect in effects {
            match effect {
                CartEffect::Notice => self.view.notify(),
                CartEffect::Render(phase) => self.view.render(phase),
                CartEffect::Increment => self.increment(),
                CartEffect::Schedule { delay_ms } => self.schedule(delay_ms),
            }
        }
    }

    fn schedule(&self, delay_ms: u64) {
        let wiring = self.clone();
        let scheduled = dom::set_timeout(delay_ms, move || {
            let effects = {
                let mut page = wiring.state.borrow_mut();
                let now = wiring.clock.now_ms();
                let due = page.cart.tick(now);
                // Timers may fire early; wait out the remainder.
                match page.cart.remaining(now) {
                    Some(left) if due.is_empty() => vec![CartEffect::Schedule {
                        delay_ms: left.max(1),
                    }],
                    _ => due,
                }
            };
            wiring.apply(effects);
        });
        if let Err(err) = scheduled {
            log::error!("cart transition could not be scheduled: {err}");
        }
    }

    fn increment(&self) {
        let Some(cart_button) = &self.view.cart_button else {
            self.state.borrow_mut().counter.increment();
            return;
        };
        let mut counter =
            CartCounter::from_attr(cart_button.get_attribute(CART_COUNT_ATTR).as_deref());
        counter.increment();
        self.state.borrow_mut().counter = counter;
        if let Err(err) = self.view.show_count(cart_button, counter) {
            log::warn!("cart badge update failed: {err}");
        }
    }
}

impl CartView {
    fn render(&self, phase: CartPhase) {
        self.button
            .set_text_content(Some(phase.label(&self.labels)));
        if let Some(button) = self.button.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(phase.is_disabled());
        } else if let Err(err) = self
            .button
            .toggle_attribute_with_force("disabled", phase.is_disabled())
        {
            log::warn!("disabled flag update failed: {}", dom::js_error_message(&err));
        }
    }

    fn notify(&self) {
        let message = self.labels.select_size_notice.as_str();
        if self.notice_style == NoticeStyle::Inline {
            if let Some(notice) = &self.notice {
                notice.set_text_content(Some(message));
                dom::set_class(notice, ACTIVE_CLASS, true);
                return;
            }
        }
        let shown = dom::window().map(|win| win.alert_with_message(message));
        if let Some(Err(err)) = shown {
            log::warn!("size notice failed: {}", dom::js_error_message(&err));
        }
    }

    fn show_count(&self, cart_button: &Element, counter: CartCounter) -> Result<(), WireError> {
        let count = counter.to_attr();
        cart_button.set_attribute(CART_COUNT_ATTR, &count)?;
        let badge = match cart_button.query_selector(&self.badge_selector)? {
            Some(badge) => badge,
            None => {
                let badge = self.document.create_element("span")?;
                badge.set_class_name(CART_BADGE_CLASS);
                cart_button.append_child(&badge)?;
                badge
            }
        };
        badge.set_text_content(Some(&count));
        Ok(())
    }
}

/// Add-to-cart button timeline plus the header badge it feeds.
///
/// Returns the statuses for [`Feature::AddToCart`] and [`Feature::CartBadge`].
pub fn install(ctx: &PageContext) -> Result<[FeatureStatus; 2], WireError> {
    let cfg = ctx.config();
    let sel = &cfg.selectors;
    let cart_button = dom::query(&ctx.document, &sel.cart_button);
    let badge_status = FeatureStatus::probe(
        Feature::CartBadge,
        &[(sel.cart_button.as_str(), cart_button.is_some())],
    );

    let Some(button) = dom::query(&ctx.document, &sel.add_to_cart) else {
        return Ok([
            FeatureStatus::missing(Feature::AddToCart, [sel.add_to_cart.as_str()]),
            badge_status,
        ]);
    };

    if let Some(cart_button) = &cart_button {
        let counter = CartCounter::from_attr(cart_button.get_attribute(CART_COUNT_ATTR).as_deref());
        ctx.state.borrow_mut().counter = counter;
    }

    let wiring = CartWiring {
        state: ctx.state.clone(),
        clock: ctx.clock.clone(),
        view: Rc::new(CartView {
            document: ctx.document.clone(),
            button: button.clone(),
            cart_button,
            notice: dom::query(&ctx.document, &sel.size_notice),
            badge_selector: sel.cart_badge.clone(),
            labels: cfg.labels.clone(),
            notice_style: cfg.notice_style,
        }),
    };
    dom::listen(&button, "click", move |_| wiring.click())?;

    Ok([FeatureStatus::available(Feature::AddToCart), badge_status])
}
