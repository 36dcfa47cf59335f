use anyhow::{Context, Result};
use std::time::Duration;
use storefront_core::constants::SLIDE_INTERVAL_MS;
use storefront_core::{Feature, HeroSlider};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};

pub struct SliderScenario;

#[async_trait::async_trait]
impl BrowserScenario for SliderScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.base_url).await?;
        ctx.bridge.ensure_available().await?;

        if !ctx.bridge.features().await?.is_available(Feature::HeroSlider) {
            let state = ctx.bridge.state().await?;
            anyhow::ensure!(state.slide_index.is_none(), "inert slider must not cycle");
            if ctx.verbose {
                println!("  🎞️  Hero slider inert on this page");
            }
            return Ok(());
        }

        let start = ctx.bridge.state().await?.slide_index;
        anyhow::ensure!(start == Some(0), "slider should start at 0, got {start:?}");
        tokio::time::sleep(Duration::from_millis(SLIDE_INTERVAL_MS + 500)).await;
        let after = ctx.bridge.state().await?.slide_index;
        anyhow::ensure!(after == Some(1), "slider should have advanced once, got {after:?}");

        let first = driver.find(By::Css(".hero-slider .slide")).await?;
        let transform = first.css_value("transform").await?;
        if ctx.verbose {
            println!("  🎞️  First slide transform: {transform}");
        }
        Ok(())
    }
}

impl CombinedScenario for SliderScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Hero Slider", slider_check))
    }
}

fn slider_check() -> Result<()> {
    anyhow::ensure!(HeroSlider::new(1).is_none(), "a single slide must not cycle");
    let mut slider = HeroSlider::new(3).context("three slides cycle")?;
    for k in 1..=7_i64 {
        slider.advance();
        for i in 0..3_usize {
            let expected = (i64::try_from(i)? - k % 3) * 100;
            anyhow::ensure!(
                slider.offset_percent(i) == expected,
                "after {k} advances slide {i} offset {} != {expected}",
                slider.offset_percent(i)
            );
        }
    }
    anyhow::ensure!(slider.transform(0) == "translateX(-100%)");
    Ok(())
}
