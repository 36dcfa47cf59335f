use anyhow::Result;
use storefront_core::SizeSelection;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario, has_class};
use storefront_core::constants::SELECTED_CLASS;

pub struct SizeSelectionScenario;

#[async_trait::async_trait]
impl BrowserScenario for SizeSelectionScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.base_url).await?;
        ctx.bridge.ensure_available().await?;

        let buttons = driver.find_all(By::Css(".size-btn")).await?;
        anyhow::ensure!(!buttons.is_empty(), "page has no .size-btn elements");

        for (clicked, button) in buttons.iter().enumerate() {
            button.click().await?;
            for (index, other) in buttons.iter().enumerate() {
                let selected = has_class(other, SELECTED_CLASS).await?;
                anyhow::ensure!(
                    selected == (index == clicked),
                    "after clicking size {clicked}, size {index} selected={selected}"
                );
            }
            let state = ctx.bridge.state().await?;
            anyhow::ensure!(
                state.selected_size == Some(clicked),
                "bridge reports {:?}, expected {clicked}",
                state.selected_size
            );
        }
        if ctx.verbose {
            println!("  👕 Cycled {} size buttons", buttons.len());
        }
        Ok(())
    }
}

impl CombinedScenario for SizeSelectionScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Size Selection", size_selection_check))
    }
}

fn size_selection_check() -> Result<()> {
    let mut sizes = SizeSelection::new(4);
    for &click in &[2, 0, 3, 3, 1] {
        sizes.select(click);
        let selected: Vec<usize> = (0..sizes.len()).filter(|&i| sizes.is_selected(i)).collect();
        anyhow::ensure!(
            selected == vec![click],
            "after clicking {click}, selected set was {selected:?}"
        );
    }
    sizes.select(9);
    anyhow::ensure!(sizes.selected() == Some(1), "out-of-range click must be ignored");
    Ok(())
}
