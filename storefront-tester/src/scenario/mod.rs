use anyhow::Result;
use thirtyfour::prelude::*;

use crate::browser::TestBridge;

pub mod add_to_cart;
pub mod gallery;
pub mod search;
pub mod size_selection;
pub mod slider;
pub mod smoke;

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub bridge: TestBridge<'a>,
    pub verbose: bool,
}

// Logic test scenario
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub check: fn() -> Result<()>,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, check: fn() -> Result<()>) -> Self {
        Self {
            name: name.into(),
            check,
        }
    }
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

// Combined scenario that can run both logic and browser tests
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario>;
}

pub const ALL_SCENARIOS: &[&str] = &[
    "smoke",
    "size-selection",
    "gallery",
    "add-to-cart",
    "search",
    "slider",
];

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "size-selection" | "sizes" => Some(Box::new(size_selection::SizeSelectionScenario)),
        "gallery" => Some(Box::new(gallery::GalleryScenario)),
        "add-to-cart" | "cart" => Some(Box::new(add_to_cart::AddToCartScenario)),
        "search" => Some(Box::new(search::SearchScenario)),
        "slider" | "hero-slider" => Some(Box::new(slider::SliderScenario)),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    vec![
        ("smoke", "Page boots and exposes its feature report"),
        ("size-selection", "Exactly one size button stays selected"),
        ("gallery", "Thumbnails and arrows drive the main image"),
        ("add-to-cart", "Size guard, label timeline and cart badge"),
        ("search", "Enter navigates to the encoded search URL"),
        ("slider", "Hero slides advance on their interval"),
    ]
}

/// Whether an element's class list carries `class`.
pub async fn has_class(elem: &WebElement, class: &str) -> Result<bool> {
    let classes = elem.class_name().await?.unwrap_or_default();
    Ok(classes.split_whitespace().any(|c| c == class))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_scenario_resolves() {
        for (key, _) in list_scenarios() {
            assert!(get_scenario(key).is_some(), "{key} should resolve");
        }
        assert_eq!(list_scenarios().len(), ALL_SCENARIOS.len());
    }

    #[test]
    fn aliases_resolve_case_insensitively() {
        assert!(get_scenario("CART").is_some());
        assert!(get_scenario("hero-slider").is_some());
        assert!(get_scenario("checkout").is_none());
    }

    #[test]
    fn every_logic_check_passes() {
        for key in ALL_SCENARIOS {
            let scenario = get_scenario(key).and_then(|s| s.as_logic_scenario());
            let scenario = scenario.unwrap_or_else(|| panic!("{key} has a logic check"));
            (scenario.check)().unwrap_or_else(|err| panic!("{key}: {err:#}"));
        }
    }
}
