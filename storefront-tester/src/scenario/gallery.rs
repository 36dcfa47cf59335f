use anyhow::{Context, Result};
use storefront_core::constants::{ACTIVE_CLASS, FULL_SIZE_TOKEN, THUMB_SIZE_TOKEN};
use storefront_core::{Feature, Gallery, hi_res_src};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario, has_class};

pub struct GalleryScenario;

#[async_trait::async_trait]
impl BrowserScenario for GalleryScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.base_url).await?;
        ctx.bridge.ensure_available().await?;

        let thumbs = driver.find_all(By::Css(".thumbnail")).await?;
        anyhow::ensure!(!thumbs.is_empty(), "page has no .thumbnail elements");
        let main = driver.find(By::Css(".main-image img")).await?;

        let last = thumbs.len() - 1;
        thumbs[last].click().await?;
        anyhow::ensure!(has_class(&thumbs[last], ACTIVE_CLASS).await?, "clicked thumbnail not active");
        let thumb_src = thumbs[last].prop("src").await?.unwrap_or_default();
        let main_src = main.prop("src").await?.unwrap_or_default();
        anyhow::ensure!(
            main_src == hi_res_src(&thumb_src, THUMB_SIZE_TOKEN, FULL_SIZE_TOKEN),
            "main image {main_src} does not match thumbnail {thumb_src}"
        );

        if !ctx.bridge.features().await?.is_available(Feature::GalleryArrows) {
            if ctx.verbose {
                println!("  🖼️  No gallery arrows; skipping wrap check");
            }
            return Ok(());
        }
        let next = driver.find(By::Css(".nav-arrow.next")).await?;
        for _ in 0..thumbs.len() {
            next.click().await?;
        }
        let state = ctx.bridge.state().await?;
        anyhow::ensure!(
            state.gallery_index == Some(last),
            "{} next clicks should return to {last}, got {:?}",
            thumbs.len(),
            state.gallery_index
        );
        Ok(())
    }
}

impl CombinedScenario for GalleryScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Gallery Navigation", gallery_check))
    }
}

fn gallery_check() -> Result<()> {
    for len in 1..=5 {
        let mut gallery = Gallery::new(len);
        for _ in 0..len {
            gallery.next().context("non-empty gallery moves")?;
        }
        anyhow::ensure!(gallery.index() == 0, "{len} nexts should wrap to 0");
        gallery.prev().context("non-empty gallery moves")?;
        anyhow::ensure!(gallery.index() == len - 1, "prev from 0 should wrap to {}", len - 1);
    }
    anyhow::ensure!(Gallery::new(0).next().is_none(), "empty gallery must not move");
    anyhow::ensure!(
        hi_res_src("/img/cap-80x80.jpg", THUMB_SIZE_TOKEN, FULL_SIZE_TOKEN) == "/img/cap-600x600.jpg",
        "hi-res swap failed"
    );
    Ok(())
}
