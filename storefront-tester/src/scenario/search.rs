use anyhow::{Context, Result};
use std::time::Duration;
use storefront_core::search_url;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};

/// WebDriver key code for Enter.
const ENTER: &str = "\u{e007}";
const QUERY: &str = "red & blue";

pub struct SearchScenario;

#[async_trait::async_trait]
impl BrowserScenario for SearchScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.base_url).await?;
        ctx.bridge.ensure_available().await?;

        let input = driver.find(By::Css(".search-bar input")).await?;
        input.click().await?;
        let placeholder = input.attr("placeholder").await?.unwrap_or_default();
        anyhow::ensure!(placeholder.is_empty(), "focus should clear the placeholder");

        input.send_keys(format!("{QUERY}{ENTER}")).await?;
        tokio::time::sleep(Duration::from_millis(500)).await;

        let expected = search_url(QUERY).context("query is not blank")?;
        let url = driver.current_url().await?;
        if ctx.verbose {
            println!("  🔎 Navigated to {url}");
        }
        anyhow::ensure!(
            url.as_str().ends_with(&expected),
            "expected navigation to {expected}, landed on {url}"
        );
        Ok(())
    }
}

impl CombinedScenario for SearchScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Search Navigation", search_check))
    }
}

fn search_check() -> Result<()> {
    anyhow::ensure!(search_url("   ").is_none(), "blank query must not navigate");
    anyhow::ensure!(search_url("shoes").as_deref() == Some("/search?q=shoes"));
    anyhow::ensure!(
        search_url(QUERY).as_deref() == Some("/search?q=red%20%26%20blue"),
        "reserved characters must be percent-encoded"
    );
    Ok(())
}
