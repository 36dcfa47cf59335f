use anyhow::{Context, Result, bail};
use storefront_core::{FeatureReport, PageSnapshot};
use thirtyfour::prelude::*;

#[derive(Debug, Clone)]
pub struct TestBridge<'a> {
    driver: &'a WebDriver,
}

impl<'a> TestBridge<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    pub async fn ensure_available(&self) -> Result<()> {
        let result = self
            .driver
            .execute("return !!window.__storefrontTest", vec![])
            .await?;
        let ok = result.json().as_bool().unwrap_or(false);
        if !ok {
            bail!(
                "__storefrontTest is not available. Did you pass ?test=1 and load the wasm bundle?"
            );
        }
        Ok(())
    }

    pub async fn state(&self) -> Result<PageSnapshot> {
        let result = self
            .driver
            .execute("return window.__storefrontTest.state()", vec![])
            .await?;
        serde_json::from_value(result.json().clone()).context("parsing PageSnapshot")
    }

    pub async fn features(&self) -> Result<FeatureReport> {
        let result = self
            .driver
            .execute("return window.__storefrontTest.features()", vec![])
            .await?;
        serde_json::from_value(result.json().clone()).context("parsing FeatureReport")
    }
}
