//! Storefront Core
//!
//! Platform-agnostic view state for the storefront product page.
//! Every widget's state machine and computation lives here so it can be
//! exercised without a live document tree; the web crate only mirrors this
//! state into the DOM.

pub mod anchor;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod features;
pub mod gallery;
pub mod lazy;
pub mod nav;
pub mod page;
pub mod search;
pub mod selection;
pub mod slider;

// Re-export commonly used types
pub use anchor::fragment_selector;
pub use cart::{CartButton, CartCounter, CartEffect, CartPhase, Clock, ManualClock};
pub use catalog::{CatalogItem, PriceLines, merge_items, resolve_url};
pub use config::{Delays, Labels, NoticeStyle, PageConfig, Selectors};
pub use error::StorefrontError;
pub use features::{Feature, FeatureReport, FeatureStatus};
pub use gallery::{Gallery, hi_res_src};
pub use lazy::{LazyImages, LoadState};
pub use nav::{Dropdown, MenuToggle};
pub use page::{PageSnapshot, PageState};
pub use search::{encode_query_component, search_url};
pub use selection::SizeSelection;
pub use slider::HeroSlider;
