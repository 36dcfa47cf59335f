//! Page bootstrap: owns the shared state and wires every feature once.
use crate::clock::PerformanceClock;
use crate::error::WireError;
use crate::features::{self, PageContext};
use std::cell::RefCell;
use std::rc::Rc;
use storefront_core::{Clock, Feature, FeatureReport, FeatureStatus, PageConfig, PageState};
use web_sys::Document;

/// Owner of the page's [`PageState`] for its whole lifetime.
#[derive(Clone)]
pub struct PageController {
    ctx: PageContext,
}

impl PageController {
    #[must_use]
    pub fn new(document: Document, config: PageConfig) -> Self {
        Self::with_clock(document, config, Rc::new(PerformanceClock))
    }

    #[must_use]
    pub fn with_clock(document: Document, config: PageConfig, clock: Rc<dyn Clock>) -> Self {
        let state = Rc::new(RefCell::new(PageState::new(config)));
        Self {
            ctx: PageContext::new(document, state, clock),
        }
    }

    /// Wire every feature, recording and logging what the markup supports.
    ///
    /// A feature whose wiring fails is reported unavailable and the rest still boot.
    pub fn boot(&self) -> FeatureReport {
        use features::{
            cart, dropdown, gallery, lazy_load, menu, search, sizes, slider, smooth_scroll, styles,
        };

        let ctx = &self.ctx;
        let mut report = FeatureReport::default();
        record(&mut report, &[Feature::Styles], styles::install(ctx).map(one));
        record(&mut report, &[Feature::Search], search::install(ctx).map(one));
        record(&mut report, &[Feature::TeamDropdown], dropdown::install(ctx).map(one));
        record(&mut report, &[Feature::SizeSelector], sizes::install(ctx).map(one));
        record(
            &mut report,
            &[Feature::Gallery, Feature::GalleryArrows],
            gallery::install(ctx).map(Vec::from),
        );
        record(
            &mut report,
            &[Feature::AddToCart, Feature::CartBadge],
            cart::install(ctx).map(Vec::from),
        );
        record(&mut report, &[Feature::MobileMenu], menu::install(ctx).map(one));
        record(&mut report, &[Feature::HeroSlider], slider::install(ctx).map(one));
        record(&mut report, &[Feature::LazyImages], lazy_load::install(ctx).map(one));
        record(
            &mut report,
            &[Feature::SmoothScroll],
            smooth_scroll::install(ctx).map(one),
        );

        log::info!(
            "storefront ready: {}/{} features active",
            report.available_count(),
            Feature::ALL.len()
        );
        ctx.state.borrow_mut().features = report.clone();
        report
    }

    /// Shared state handle, for the test bridge and tests.
    #[must_use]
    pub fn state(&self) -> Rc<RefCell<PageState>> {
        Rc::clone(&self.ctx.state)
    }
}

fn one(status: FeatureStatus) -> Vec<FeatureStatus> {
    vec![status]
}

fn record(
    report: &mut FeatureReport,
    covered: &[Feature],
    outcome: Result<Vec<FeatureStatus>, WireError>,
) {
    match outcome {
        Ok(statuses) => {
            for status in statuses {
                log_status(&status);
                report.record(status);
            }
        }
        Err(err) => {
            for &feature in covered {
                log::error!("{feature} wiring failed: {err}");
                report.record(FeatureStatus::missing(feature, Vec::<String>::new()));
            }
        }
    }
}

fn log_status(status: &FeatureStatus) {
    if status.available {
        log::debug!("{} wired", status.feature);
    } else {
        log::warn!(
            "{} inert; missing {}",
            status.feature,
            status.missing.join(", ")
        );
    }
}
