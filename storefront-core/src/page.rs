//! Aggregate view state owned by the page controller.
use crate::cart::{CartButton, CartCounter, CartEffect, CartPhase};
use crate::config::PageConfig;
use crate::features::FeatureReport;
use crate::gallery::Gallery;
use crate::lazy::LazyImages;
use crate::nav::{Dropdown, MenuToggle};
use crate::selection::SizeSelection;
use crate::slider::HeroSlider;
use serde::{Deserialize, Serialize};

/// Every widget's state for one page lifetime.
#[derive(Debug, Clone)]
pub struct PageState {
    pub config: PageConfig,
    pub sizes: SizeSelection,
    pub gallery: Gallery,
    pub cart: CartButton,
    pub counter: CartCounter,
    pub slider: Option<HeroSlider>,
    pub lazy: LazyImages,
    pub dropdown: Dropdown,
    pub menu: MenuToggle,
    pub features: FeatureReport,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(PageConfig::default())
    }
}

impl PageState {
    #[must_use]
    pub fn new(config: PageConfig) -> Self {
        let cart = CartButton::new(&config.delays);
        Self {
            config,
            sizes: SizeSelection::default(),
            gallery: Gallery::default(),
            cart,
            counter: CartCounter::default(),
            slider: None,
            lazy: LazyImages::new(),
            dropdown: Dropdown::default(),
            menu: MenuToggle::default(),
            features: FeatureReport::default(),
        }
    }

    /// Add-to-cart click, guarded by the size selection.
    pub fn click_add_to_cart(&mut self, now: u64) -> Vec<CartEffect> {
        let selected = self.sizes.has_selection();
        self.cart.click(selected, now)
    }

    /// Advance the cart timeline, applying counter increments in place.
    pub fn tick_cart(&mut self, now: u64) -> Vec<CartEffect> {
        let effects = self.cart.tick(now);
        for effect in &effects {
            if matches!(effect, CartEffect::Increment) {
                self.counter.increment();
            }
        }
        effects
    }

    /// Label the add-to-cart control should currently show.
    #[must_use]
    pub fn cart_label(&self) -> &str {
        self.cart.phase().label(&self.config.labels)
    }

    #[must_use]
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            selected_size: self.sizes.selected(),
            gallery_index: (!self.gallery.is_empty()).then(|| self.gallery.index()),
            cart_count: self.counter.count(),
            cart_phase: self.cart.phase(),
            cart_label: self.cart_label().to_string(),
            slide_index: self.slider.map(|s| s.current()),
            menu_open: self.menu.is_active(),
            dropdown_open: self.dropdown.is_open(),
            lazy_pending: self.lazy.pending(),
            lazy_loaded: self.lazy.loaded(),
        }
    }
}

/// Serializable view of [`PageState`] for the test bridge and reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub selected_size: Option<usize>,
    pub gallery_index: Option<usize>,
    pub cart_count: u32,
    pub cart_phase: CartPhase,
    pub cart_label: String,
    pub slide_index: Option<usize>,
    pub menu_open: bool,
    pub dropdown_open: bool,
    pub lazy_pending: usize,
    pub lazy_loaded: usize,
}
