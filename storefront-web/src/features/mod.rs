//! DOM wiring for each product-page widget.
//!
//! Every installer probes its markup first and returns a [`FeatureStatus`];
//! missing markup leaves the widget inert rather than failing startup.
use std::cell::RefCell;
use std::rc::Rc;
use storefront_core::{Clock, PageConfig, PageState};
use web_sys::Document;

pub mod cart;
pub mod dropdown;
pub mod gallery;
pub mod lazy_load;
pub mod menu;
pub mod search;
pub mod sizes;
pub mod slider;
pub mod smooth_scroll;
pub mod styles;

/// Handles shared by every installer.
#[derive(Clone)]
pub struct PageContext {
    pub document: Document,
    pub state: Rc<RefCell<PageState>>,
    pub clock: Rc<dyn Clock>,
}

impl PageContext {
    #[must_use]
    pub fn new(document: Document, state: Rc<RefCell<PageState>>, clock: Rc<dyn Clock>) -> Self {
        Self {
            document,
            state,
            clock,
        }
    }

    /// Snapshot of the configuration; installers capture what they need.
    #[must_use]
    pub fn config(&self) -> PageConfig {
        self.state.borrow().config.clone()
    }
}
