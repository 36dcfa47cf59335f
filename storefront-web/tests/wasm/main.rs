#![cfg(target_arch = "wasm32")]

use storefront_core::{CartPhase, Feature, PageConfig};
use storefront_web::{PageController, dom};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlButtonElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r##"
<header>
  <div class="search-bar"><input placeholder="What can we help you find?"></div>
  <a class="nav-link" href="#teams">Teams</a>
  <div id="teamDropdown" class="team-dropdown" style="display:none">Ferrari</div>
  <button class="mobile-menu-toggle">Menu</button>
  <nav class="main-nav"></nav>
  <button class="cart-btn" data-count="2">Cart</button>
</header>
<div class="main-image"><img src="https://cdn.example/car-600x600.jpg"></div>
<div class="thumbs">
  <img class="thumbnail active" src="https://cdn.example/a-80x80.jpg">
  <img class="thumbnail" src="https://cdn.example/b-80x80.jpg">
  <img class="thumbnail" src="https://cdn.example/c-80x80.jpg">
</div>
<button class="nav-arrow prev">&lt;</button>
<button class="nav-arrow next">&gt;</button>
<button class="size-btn">S</button>
<button class="size-btn">M</button>
<button class="size-btn">L</button>
<button class="add-to-cart">Add to Cart</button>
<a href="#specs">Specs</a>
<section id="specs">Specs</section>
"##;

fn mount(markup: &str) -> web_sys::Document {
    let doc = dom::document().expect("document");
    doc.body().expect("body").set_inner_html(markup);
    doc
}

fn fast_config() -> PageConfig {
    let mut cfg = PageConfig::default();
    cfg.delays.adding_ms = 30;
    cfg.delays.confirm_ms = 60;
    cfg
}

fn boot(markup: &str) -> (web_sys::Document, PageController) {
    let doc = mount(markup);
    let controller = PageController::new(doc.clone(), fast_config());
    controller.boot();
    (doc, controller)
}

fn click(doc: &web_sys::Document, selector: &str, nth: usize) {
    let el = dom::query_all(doc, selector).expect("valid selector")[nth].clone();
    el.dyn_into::<HtmlElement>().expect("html element").click();
}

fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

#[wasm_bindgen_test]
fn full_markup_wires_every_feature_but_slider_and_lazy() {
    let (_doc, controller) = boot(FIXTURE);
    let report = controller.state().borrow().features.clone();
    for feature in [
        Feature::Search,
        Feature::TeamDropdown,
        Feature::SizeSelector,
        Feature::Gallery,
        Feature::GalleryArrows,
        Feature::AddToCart,
        Feature::CartBadge,
        Feature::MobileMenu,
        Feature::SmoothScroll,
        Feature::Styles,
    ] {
        assert!(report.is_available(feature), "{feature} should be wired");
    }
    assert!(!report.is_available(Feature::HeroSlider));
    assert!(!report.is_available(Feature::LazyImages));
}

#[wasm_bindgen_test]
fn style_block_is_injected_once() {
    let (doc, _first) = boot(FIXTURE);
    let _second = boot(FIXTURE);
    let styles = dom::query_all(&doc, "#storefront-styles").expect("selector");
    assert_eq!(styles.len(), 1);
}

#[wasm_bindgen_test]
fn size_click_selects_only_that_button() {
    let (doc, controller) = boot(FIXTURE);
    click(&doc, ".size-btn", 0);
    click(&doc, ".size-btn", 2);
    let buttons = dom::query_all(&doc, ".size-btn").expect("selector");
    let selected: Vec<bool> = buttons.iter().map(|b| has_class(b, "selected")).collect();
    assert_eq!(selected, vec![false, false, true]);
    assert_eq!(controller.state().borrow().sizes.selected(), Some(2));
}

#[wasm_bindgen_test]
fn thumbnail_click_swaps_in_high_res_image() {
    let (doc, _controller) = boot(FIXTURE);
    click(&doc, ".thumbnail", 1);
    let thumbs = dom::query_all(&doc, ".thumbnail").expect("selector");
    assert!(!has_class(&thumbs[0], "active"));
    assert!(has_class(&thumbs[1], "active"));
    let main = dom::query(&doc, ".main-image img").expect("main image");
    assert_eq!(
        dom::image_src(&main).as_deref(),
        Some("https://cdn.example/b-600x600.jpg")
    );
}

#[wasm_bindgen_test]
fn prev_arrow_wraps_to_last_thumbnail() {
    let (doc, controller) = boot(FIXTURE);
    click(&doc, ".nav-arrow.prev", 0);
    assert_eq!(controller.state().borrow().gallery.index(), 2);
    click(&doc, ".nav-arrow.next", 0);
    assert_eq!(controller.state().borrow().gallery.index(), 0);
}

#[wasm_bindgen_test]
fn menu_toggle_flips_both_elements() {
    let (doc, _controller) = boot(FIXTURE);
    click(&doc, ".mobile-menu-toggle", 0);
    let nav = dom::query(&doc, ".main-nav").expect("nav");
    let toggle = dom::query(&doc, ".mobile-menu-toggle").expect("toggle");
    assert!(has_class(&nav, "active") && has_class(&toggle, "active"));
    click(&doc, ".mobile-menu-toggle", 0);
    assert!(!has_class(&nav, "active") && !has_class(&toggle, "active"));
}

#[wasm_bindgen_test]
async fn add_to_cart_cycles_labels_and_bumps_badge() {
    let (doc, controller) = boot(FIXTURE);
    let button: HtmlButtonElement = dom::query(&doc, ".add-to-cart")
        .expect("button")
        .dyn_into()
        .expect("button element");

    click(&doc, ".size-btn", 1);
    button.click();
    assert_eq!(button.text_content().as_deref(), Some("Adding..."));
    assert!(button.disabled());
    button.click();

    dom::sleep_ms(45).await.expect("sleep");
    assert_eq!(button.text_content().as_deref(), Some("Added to Cart \u{2713}"));
    assert!(button.disabled());

    let cart = dom::query(&doc, ".cart-btn").expect("cart button");
    assert_eq!(cart.get_attribute("data-count").as_deref(), Some("3"));
    let badge = dom::query(&doc, ".cart-btn .cart-badge").expect("badge created");
    assert_eq!(badge.text_content().as_deref(), Some("3"));

    dom::sleep_ms(90).await.expect("sleep");
    assert_eq!(button.text_content().as_deref(), Some("Add to Cart"));
    assert!(!button.disabled());
    let state = controller.state();
    assert_eq!(state.borrow().cart.phase(), CartPhase::Idle);
    assert_eq!(state.borrow().counter.count(), 3);
}

#[wasm_bindgen_test]
fn dropdown_opens_on_hover_and_closes_on_outside_click() {
    let (doc, _controller) = boot(FIXTURE);
    let trigger = dom::query(&doc, ".nav-link").expect("trigger");
    let enter = web_sys::Event::new("mouseenter").expect("event");
    trigger.dispatch_event(&enter).expect("dispatch");
    let panel = dom::query(&doc, "#teamDropdown")
        .expect("panel")
        .dyn_into::<HtmlElement>()
        .expect("html");
    assert_eq!(panel.style().get_property_value("display").as_deref(), Ok("block"));

    click(&doc, ".size-btn", 0);
    assert_eq!(panel.style().get_property_value("display").as_deref(), Ok("none"));
}

#[wasm_bindgen_test]
fn sparse_markup_boots_with_inert_features() {
    let (_doc, controller) = boot("<main><p>Nothing interactive here</p></main>");
    let report = controller.state().borrow().features.clone();
    assert!(report.is_available(Feature::Styles));
    assert!(!report.is_available(Feature::AddToCart));
    assert!(!report.is_available(Feature::Gallery));
}

#[wasm_bindgen_test]
fn single_slide_does_not_start_the_slider() {
    let (_doc, controller) =
        boot(r#"<div class="hero-slider"><div class="slide">Only</div></div>"#);
    assert!(controller.state().borrow().slider.is_none());
}

#[wasm_bindgen_test]
async fn two_slides_advance_on_interval() {
    let doc = mount(
        r#"<div class="hero-slider"><div class="slide">A</div><div class="slide">B</div></div>"#,
    );
    let mut cfg = fast_config();
    cfg.delays.slide_interval_ms = 40;
    let controller = PageController::new(doc.clone(), cfg);
    controller.boot();
    dom::sleep_ms(60).await.expect("sleep");
    let slides = dom::query_all(&doc, ".slide").expect("selector");
    let first = slides[0].clone().dyn_into::<HtmlElement>().expect("html");
    assert_eq!(
        first.style().get_property_value("transform").as_deref(),
        Ok("translateX(-100%)")
    );
}

#[wasm_bindgen_test]
fn bridge_reports_snapshot_and_features() {
    let (doc, controller) = boot(FIXTURE);
    storefront_web::test_bridge::install(&controller.state()).expect("bridge");
    click(&doc, ".size-btn", 1);

    let window = dom::window().expect("window");
    let bridge = js_sys::Reflect::get(&window, &"__storefrontTest".into()).expect("bridge");
    let call = |name: &str| {
        let func: js_sys::Function = js_sys::Reflect::get(&bridge, &name.into())
            .expect("member")
            .dyn_into()
            .expect("function");
        func.call0(&bridge).expect("call")
    };

    let snapshot: storefront_core::PageSnapshot =
        serde_wasm_bindgen::from_value(call("state")).expect("snapshot");
    assert_eq!(snapshot.selected_size, Some(1));
    assert_eq!(snapshot.cart_count, 2);

    let report: storefront_core::FeatureReport =
        serde_wasm_bindgen::from_value(call("features")).expect("report");
    assert!(report.is_available(Feature::Gallery));
}

const LAZY_FIXTURE: &str = r#"
<img class="deferred" data-src="https://cdn.example/hero-1200x600.jpg"
     style="display:block;width:20px;height:20px">
"#;

#[wasm_bindgen_test]
async fn visible_deferred_image_loads_once() {
    let (doc, controller) = boot(LAZY_FIXTURE);
    assert!(
        controller
            .state()
            .borrow()
            .features
            .is_available(Feature::LazyImages)
    );
    dom::sleep_ms(100).await.expect("sleep");

    let img = dom::query(&doc, "img.deferred").expect("image");
    assert_eq!(
        dom::image_src(&img).as_deref(),
        Some("https://cdn.example/hero-1200x600.jpg")
    );
    assert!(has_class(&img, "loaded"));
    let snapshot = controller.state().borrow().snapshot();
    assert_eq!(snapshot.lazy_loaded, 1);
    assert_eq!(snapshot.lazy_pending, 0);
}

#[wasm_bindgen_test]
async fn deferred_source_is_read_when_the_image_appears() {
    let (doc, _controller) = boot(LAZY_FIXTURE);
    let img = dom::query(&doc, "img.deferred").expect("image");
    img.set_attribute("data-src", "https://cdn.example/swapped.jpg")
        .expect("attribute");
    dom::sleep_ms(100).await.expect("sleep");
    assert_eq!(
        dom::image_src(&img).as_deref(),
        Some("https://cdn.example/swapped.jpg")
    );
}

#[wasm_bindgen_test]
fn anchor_without_target_is_swallowed() {
    let (doc, controller) = boot(r##"<a href="#nowhere">Nowhere</a>"##);
    assert!(
        controller
            .state()
            .borrow()
            .features
            .is_available(Feature::SmoothScroll)
    );
    let location = dom::window().expect("window").location();
    let before = location.hash().expect("hash");
    click(&doc, "a", 0);
    assert_eq!(location.hash().expect("hash"), before);
}

#[wasm_bindgen_test]
fn preselected_size_in_markup_is_honored() {
    let (doc, controller) = boot(
        r#"<button class="size-btn">S</button>
<button class="size-btn selected">M</button>
<button class="add-to-cart">Add to Cart</button>"#,
    );
    assert_eq!(controller.state().borrow().sizes.selected(), Some(1));

    click(&doc, ".add-to-cart", 0);
    let button = dom::query(&doc, ".add-to-cart").expect("button");
    assert_eq!(button.text_content().as_deref(), Some("Adding..."));
}
