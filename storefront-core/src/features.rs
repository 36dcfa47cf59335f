//! Feature availability report built while wiring the page.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    Search,
    TeamDropdown,
    SizeSelector,
    Gallery,
    GalleryArrows,
    AddToCart,
    CartBadge,
    MobileMenu,
    HeroSlider,
    LazyImages,
    SmoothScroll,
    Styles,
}

impl Feature {
    pub const ALL: [Self; 12] = [
        Self::Search,
        Self::TeamDropdown,
        Self::SizeSelector,
        Self::Gallery,
        Self::GalleryArrows,
        Self::AddToCart,
        Self::CartBadge,
        Self::MobileMenu,
        Self::HeroSlider,
        Self::LazyImages,
        Self::SmoothScroll,
        Self::Styles,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::TeamDropdown => "team-dropdown",
            Self::SizeSelector => "size-selector",
            Self::Gallery => "gallery",
            Self::GalleryArrows => "gallery-arrows",
            Self::AddToCart => "add-to-cart",
            Self::CartBadge => "cart-badge",
            Self::MobileMenu => "mobile-menu",
            Self::HeroSlider => "hero-slider",
            Self::LazyImages => "lazy-images",
            Self::SmoothScroll => "smooth-scroll",
            Self::Styles => "styles",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of probing one feature's markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureStatus {
    pub feature: Feature,
    pub available: bool,
    /// Selectors that matched nothing (or too little) on this page.
    pub missing: Vec<String>,
}

impl FeatureStatus {
    #[must_use]
    pub const fn available(feature: Feature) -> Self {
        Self {
            feature,
            available: true,
            missing: Vec::new(),
        }
    }

    #[must_use]
    pub fn missing<I, S>(feature: Feature, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            feature,
            available: false,
            missing: selectors.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a status from `(selector, present)` probes.
    #[must_use]
    pub fn probe(feature: Feature, probes: &[(&str, bool)]) -> Self {
        let missing: Vec<String> = probes
            .iter()
            .filter(|(_, present)| !present)
            .map(|(selector, _)| (*selector).to_string())
            .collect();
        if missing.is_empty() {
            Self::available(feature)
        } else {
            Self::missing(feature, missing)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureReport {
    pub statuses: Vec<FeatureStatus>,
}

impl FeatureReport {
    /// Record a status, replacing an earlier one for the same feature.
    pub fn record(&mut self, status: FeatureStatus) {
        if let Some(existing) = self
            .statuses
            .iter_mut()
            .find(|s| s.feature == status.feature)
        {
            *existing = status;
        } else {
            self.statuses.push(status);
        }
    }

    #[must_use]
    pub fn get(&self, feature: Feature) -> Option<&FeatureStatus> {
        self.statuses.iter().find(|s| s.feature == feature)
    }

    #[must_use]
    pub fn is_available(&self, feature: Feature) -> bool {
        self.get(feature).is_some_and(|s| s.available)
    }

    pub fn inert(&self) -> impl Iterator<Item = &FeatureStatus> {
        self.statuses.iter().filter(|s| !s.available)
    }

    #[must_use]
    pub fn available_count(&self) -> usize {
        self.statuses.iter().filter(|s| s.available).count()
    }
}
