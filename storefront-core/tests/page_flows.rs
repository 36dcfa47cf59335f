use storefront_core::{
    CartEffect, CartPhase, Clock, Gallery, HeroSlider, LazyImages, ManualClock, PageConfig,
    PageState, SizeSelection, search_url,
};

fn page_with_sizes(count: usize) -> PageState {
    let mut page = PageState::new(PageConfig::default());
    page.sizes = SizeSelection::new(count);
    page
}

#[test]
fn size_group_always_has_exactly_the_last_click_selected() {
    let mut page = page_with_sizes(6);
    let clicks = [3, 3, 0, 5, 2, 1, 4, 0];
    for click in clicks {
        page.sizes.select(click);
        let marked: Vec<usize> = (0..6).filter(|&i| page.sizes.is_selected(i)).collect();
        assert_eq!(marked, vec![click]);
    }
}

#[test]
fn gallery_index_stays_in_range_and_cycles() {
    for n in 1..=8 {
        let mut gallery = Gallery::new(n);
        let mut steps = 0_usize;
        for round in 0..(n * 4) {
            let idx = if round % 3 == 0 {
                gallery.prev()
            } else {
                gallery.next()
            }
            .expect("non-empty gallery");
            assert!(idx < n);
            steps += 1;
        }
        assert!(steps > 0);

        let start = gallery.index();
        for _ in 0..n {
            gallery.next();
        }
        assert_eq!(gallery.index(), start);
    }
}

#[test]
fn add_to_cart_without_size_leaves_control_untouched() {
    let clock = ManualClock::new(0);
    let mut page = page_with_sizes(4);
    let before = page.snapshot();

    let effects = page.click_add_to_cart(clock.now_ms());
    assert_eq!(effects, vec![CartEffect::Notice]);

    let after = page.snapshot();
    assert_eq!(before, after);
    assert_eq!(after.cart_label, "Add to Cart");
    assert!(!page.cart.is_disabled());
}

#[test]
fn add_to_cart_label_sequence_and_single_increment() {
    let clock = ManualClock::new(50);
    let mut page = page_with_sizes(4);
    page.sizes.select(2);

    let mut labels = vec![page.cart_label().to_string()];
    let mut disabled = vec![page.cart.is_disabled()];

    page.click_add_to_cart(clock.now_ms());
    labels.push(page.cart_label().to_string());
    disabled.push(page.cart.is_disabled());

    clock.advance(400);
    let ignored = page.click_add_to_cart(clock.now_ms());
    assert!(ignored.is_empty(), "second click while disabled has no effect");

    clock.advance(600);
    page.tick_cart(clock.now_ms());
    labels.push(page.cart_label().to_string());
    disabled.push(page.cart.is_disabled());

    clock.advance(2_000);
    page.tick_cart(clock.now_ms());
    labels.push(page.cart_label().to_string());
    disabled.push(page.cart.is_disabled());

    assert_eq!(
        labels,
        vec!["Add to Cart", "Adding...", "Added to Cart \u{2713}", "Add to Cart"]
    );
    assert_eq!(disabled, vec![false, true, true, false]);
    assert_eq!(page.counter.count(), 1);
    assert_eq!(page.cart.phase(), CartPhase::Idle);
}

#[test]
fn lazy_image_loads_once_regardless_of_repeat_intersections() {
    let mut images = LazyImages::new();
    let id = images.register("/img/jersey-600x600.jpg");
    let mut loads = Vec::new();
    for _ in 0..5 {
        if let Some(src) = images.reveal(id) {
            loads.push(src.to_string());
        }
    }
    assert_eq!(loads, vec!["/img/jersey-600x600.jpg".to_string()]);
}

#[test]
fn single_slide_never_rotates_and_offsets_match_advances() {
    assert!(HeroSlider::new(1).is_none());

    let total = 4;
    let mut slider = HeroSlider::new(total).expect("rotating");
    for k in 1..=10_usize {
        slider.advance();
        for i in 0..total {
            let expected = (i64::try_from(i).unwrap() - i64::try_from(k % total).unwrap()) * 100;
            assert_eq!(slider.offset_percent(i), expected);
        }
    }
}

#[test]
fn search_navigation_targets() {
    assert_eq!(search_url("  "), None);
    assert_eq!(search_url("shoes").as_deref(), Some("/search?q=shoes"));
}
