use anyhow::{Context, Result};
use storefront_core::{CartPhase, Feature, PageConfig, PageState};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};

pub struct SmokeScenario;

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.base_url).await?;
        ctx.bridge.ensure_available().await?;

        let report = ctx.bridge.features().await?;
        if ctx.verbose {
            println!(
                "  🌐 Page booted with {}/{} features",
                report.available_count(),
                Feature::ALL.len()
            );
            for status in report.inert() {
                println!("     ↳ {} inert: {}", status.feature, status.missing.join(", "));
            }
        }
        anyhow::ensure!(
            report.is_available(Feature::Styles),
            "badge stylesheet should always be injected"
        );

        let state = ctx.bridge.state().await?;
        anyhow::ensure!(
            state.cart_phase == CartPhase::Idle,
            "cart should start idle, got {:?}",
            state.cart_phase
        );
        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Smoke Test", smoke_check))
    }
}

fn smoke_check() -> Result<()> {
    let config = PageConfig::from_json("{}").context("empty config should parse")?;
    anyhow::ensure!(config == PageConfig::default(), "empty config should equal defaults");

    let snapshot = PageState::new(config).snapshot();
    anyhow::ensure!(snapshot.cart_phase == CartPhase::Idle, "cart should start idle");
    anyhow::ensure!(snapshot.cart_label == "Add to Cart", "unexpected idle label");
    anyhow::ensure!(snapshot.cart_count == 0, "counter should start at zero");
    anyhow::ensure!(snapshot.selected_size.is_none(), "no size should be preselected");
    Ok(())
}
