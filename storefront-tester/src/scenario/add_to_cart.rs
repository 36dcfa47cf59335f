use anyhow::{Context, Result};
use std::time::Duration;
use storefront_core::constants::{
    ADDING_DELAY_MS, CART_COUNT_ATTR, CONFIRM_DELAY_MS, LABEL_ADDING, LABEL_CONFIRMED, LABEL_IDLE,
};
use storefront_core::{CartEffect, CartPhase, Clock, ManualClock, PageState, SizeSelection};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};

/// Slack added to each stage wait in the browser.
const STAGE_SLACK_MS: u64 = 300;

pub struct AddToCartScenario;

async fn cart_count(driver: &WebDriver) -> Result<u32> {
    let cart = driver.find(By::Css(".cart-btn")).await?;
    let raw = cart.attr(CART_COUNT_ATTR).await?.unwrap_or_default();
    Ok(raw.trim().parse().unwrap_or(0))
}

#[async_trait::async_trait]
impl BrowserScenario for AddToCartScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.base_url).await?;
        ctx.bridge.ensure_available().await?;

        let button = driver.find(By::Css(".add-to-cart")).await?;
        button.click().await?;
        // Default notice style is a blocking alert.
        if let Ok(text) = driver.get_alert_text().await {
            driver.accept_alert().await?;
            if ctx.verbose {
                println!("  ⚠️  Size guard notice: {text}");
            }
        }
        anyhow::ensure!(button.text().await? == LABEL_IDLE, "guarded click changed the label");

        let before = cart_count(driver).await?;
        driver
            .find(By::Css(".size-btn"))
            .await
            .context("add-to-cart needs a size button")?
            .click()
            .await?;
        button.click().await?;
        anyhow::ensure!(button.text().await? == LABEL_ADDING, "expected {LABEL_ADDING}");
        anyhow::ensure!(!button.is_enabled().await?, "button should be disabled while adding");

        tokio::time::sleep(Duration::from_millis(ADDING_DELAY_MS + STAGE_SLACK_MS)).await;
        anyhow::ensure!(button.text().await? == LABEL_CONFIRMED, "expected {LABEL_CONFIRMED}");
        let after = cart_count(driver).await?;
        anyhow::ensure!(after == before + 1, "cart count went {before} -> {after}");

        tokio::time::sleep(Duration::from_millis(CONFIRM_DELAY_MS)).await;
        anyhow::ensure!(button.text().await? == LABEL_IDLE, "label should revert");
        anyhow::ensure!(button.is_enabled().await?, "button should be re-enabled");

        let state = ctx.bridge.state().await?;
        anyhow::ensure!(state.cart_phase == CartPhase::Idle, "bridge phase {:?}", state.cart_phase);
        Ok(())
    }
}

impl CombinedScenario for AddToCartScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Add To Cart", add_to_cart_check))
    }
}

fn add_to_cart_check() -> Result<()> {
    let clock = ManualClock::new(0);
    let mut page = PageState::default();
    page.sizes = SizeSelection::new(3);

    let effects = page.click_add_to_cart(clock.now_ms());
    anyhow::ensure!(effects == vec![CartEffect::Notice], "guard should only notify");
    anyhow::ensure!(page.cart_label() == LABEL_IDLE, "guard must not touch the label");

    page.sizes.select(1);
    page.click_add_to_cart(clock.now_ms());
    anyhow::ensure!(page.cart_label() == LABEL_ADDING && page.cart.is_disabled());
    anyhow::ensure!(
        page.click_add_to_cart(clock.now_ms()).is_empty(),
        "second click while disabled must be ignored"
    );

    clock.advance(ADDING_DELAY_MS);
    page.tick_cart(clock.now_ms());
    anyhow::ensure!(page.cart_label() == LABEL_CONFIRMED && page.cart.is_disabled());
    anyhow::ensure!(page.counter.count() == 1, "counter should bump once");

    clock.advance(CONFIRM_DELAY_MS);
    page.tick_cart(clock.now_ms());
    anyhow::ensure!(page.cart_label() == LABEL_IDLE && !page.cart.is_disabled());
    anyhow::ensure!(page.counter.count() == 1, "revert must not bump the counter");
    Ok(())
}
