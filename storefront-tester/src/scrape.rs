//! Catalog scraper: walks a paginated product listing in a WebDriver browser
//! and collects [`CatalogItem`]s, enriched with sizes from each detail page.
use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use storefront_core::{CatalogItem, PriceLines, merge_items, resolve_url};
use thirtyfour::prelude::*;

use crate::browser::{BrowserConfig, BrowserKind, new_session};

const CARD: &str = "div.ds-card";
const CARD_FALLBACK: &str = "[class*='product-card'], article[class*='card']";
const CARD_TITLE: &str = "[class*='title'], [class*='name'], h2, h3, h4";
const CARD_PRICE: &str = "[class*='price']";
const NEXT_PAGE: &str = "a[data-trk-id='next-page']";
const SIZE_LABEL: &str = "label.size-selector-button.available";
const SIZE_INPUT: &str = "input[name='size-selector']";
const SIZE_TEXT: &str = ".size-text, span";

const SCROLL_PAUSE: Duration = Duration::from_millis(350);
const SETTLE_PAUSE: Duration = Duration::from_millis(500);
/// Upper bound on scroll rounds for endlessly growing pages.
const MAX_SCROLL_ROUNDS: usize = 50;

#[derive(Debug, Clone, clap::Args)]
pub struct ScrapeArgs {
    /// First listing page to scrape
    #[arg(long, default_value = "https://f1store.formula1.com")]
    pub start_url: String,

    /// Where to write the collected items as JSON
    #[arg(long, default_value = "storefront_items.json")]
    pub output: PathBuf,

    /// Stop after this many listing pages
    #[arg(long, default_value_t = 50)]
    pub max_pages: usize,

    /// Browser to drive (chrome, edge, firefox, safari)
    #[arg(long, default_value = "chrome")]
    pub browser: String,

    /// Skip visiting detail pages for sizes
    #[arg(long)]
    pub skip_details: bool,
}

pub async fn run(args: &ScrapeArgs, cfg: &BrowserConfig) -> Result<Vec<CatalogItem>> {
    let kind = BrowserKind::parse(&args.browser)
        .with_context(|| format!("unknown browser `{}`", args.browser))?;
    let driver = new_session(kind, cfg)
        .await
        .with_context(|| format!("could not start {}", kind.label()))?;

    let outcome = scrape(&driver, args).await;
    let _ = driver.quit().await;
    let items = outcome?;

    let written = write_items(&args.output, &items)?;
    let (total, with_sizes) = summarize(&items);
    println!(
        "\n{} Saved {total} items to {}",
        "✓".green(),
        written.display()
    );
    println!("Summary:");
    println!("  - Total items: {total}");
    println!("  - Items with available sizes: {with_sizes}");
    Ok(items)
}

async fn scrape(driver: &WebDriver, args: &ScrapeArgs) -> Result<Vec<CatalogItem>> {
    driver
        .goto(&args.start_url)
        .await
        .with_context(|| format!("opening {}", args.start_url))?;

    let mut items = Vec::new();
    for page in 1..=args.max_pages {
        println!("\n─── Scraping list page {page} ───");
        let found = extract_cards(driver, &args.start_url).await?;
        let added = merge_items(&mut items, found);
        println!("   Found {added} new items ({} total)", items.len());
        if !click_next(driver).await? {
            break;
        }
    }
    println!("\nCollected {} items from list pages.", items.len());

    if !args.skip_details {
        enrich_with_sizes(driver, &mut items).await;
    }
    Ok(items)
}

async fn scroll_to_bottom(driver: &WebDriver) -> Result<()> {
    let mut last = page_height(driver).await?;
    for _ in 0..MAX_SCROLL_ROUNDS {
        driver
            .execute("window.scrollTo(0, document.body.scrollHeight)", vec![])
            .await?;
        tokio::time::sleep(SCROLL_PAUSE).await;
        let height = page_height(driver).await?;
        if height == last {
            break;
        }
        last = height;
    }
    Ok(())
}

async fn page_height(driver: &WebDriver) -> Result<i64> {
    let ret = driver
        .execute("return document.body.scrollHeight", vec![])
        .await?;
    Ok(ret.json().as_i64().unwrap_or_default())
}

async fn extract_cards(driver: &WebDriver, start_url: &str) -> Result<Vec<CatalogItem>> {
    scroll_to_bottom(driver).await?;

    let mut cards = driver.find_all(By::Css(CARD)).await?;
    if cards.is_empty() {
        cards = driver.find_all(By::Css(CARD_FALLBACK)).await?;
    }

    let mut items = Vec::new();
    for card in cards {
        let (Ok(link), Ok(title)) = (
            card.find(By::Css("a")).await,
            card.find(By::Css(CARD_TITLE)).await,
        ) else {
            continue;
        };
        let href = link.attr("href").await?.unwrap_or_default();
        let title = title.text().await?;
        let price_block = match card.find(By::Css(CARD_PRICE)).await {
            Ok(price) => price.text().await.unwrap_or_default(),
            Err(_) => String::new(),
        };
        if let Some(item) = card_item(&title, &href, &price_block, start_url) {
            items.push(item);
        }
    }
    Ok(items)
}

/// Build an item from the text pulled off one listing card.
fn card_item(title: &str, href: &str, price_block: &str, start_url: &str) -> Option<CatalogItem> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    Some(CatalogItem::new(
        title,
        resolve_url(start_url, href),
        PriceLines::parse(price_block),
    ))
}

fn is_disabled(aria_disabled: Option<&str>) -> bool {
    matches!(aria_disabled, Some(value) if value.eq_ignore_ascii_case("true"))
}

async fn click_next(driver: &WebDriver) -> Result<bool> {
    let Ok(next) = driver.find(By::Css(NEXT_PAGE)).await else {
        return Ok(false);
    };
    if is_disabled(next.attr("aria-disabled").await?.as_deref()) {
        return Ok(false);
    }
    next.scroll_into_view().await?;
    tokio::time::sleep(SETTLE_PAUSE).await;
    next.click().await?;
    tokio::time::sleep(SETTLE_PAUSE).await;
    Ok(true)
}

async fn enrich_with_sizes(driver: &WebDriver, items: &mut [CatalogItem]) {
    println!("Now visiting product pages for sizes…\n");
    let total = items.len();
    for (idx, item) in items.iter_mut().enumerate() {
        let short: String = item.title.chars().take(50).collect();
        println!("  [{}/{total}] Getting sizes → {short}...", idx + 1);
        match detail_sizes(driver, &item.url).await {
            Ok(sizes) => {
                for size in &sizes {
                    item.push_size(size);
                }
                if item.has_sizes() {
                    println!("    ✓ Found sizes: {}", item.available_sizes.join(", "));
                }
            }
            Err(err) => {
                log::warn!("size lookup failed for {}: {err:#}", item.url);
                println!("    {} Error: {err}", "⚠".yellow());
            }
        }
    }
}

async fn detail_sizes(driver: &WebDriver, url: &str) -> Result<Vec<String>> {
    driver.goto(url).await?;
    tokio::time::sleep(SETTLE_PAUSE).await;

    let mut sizes = Vec::new();
    for label in driver.find_all(By::Css(SIZE_LABEL)).await? {
        let value = match label.find(By::Css(SIZE_INPUT)).await {
            Ok(input) => input.attr("value").await?,
            Err(_) => match label.find(By::Css(SIZE_TEXT)).await {
                Ok(text) => Some(text.text().await?),
                Err(_) => None,
            },
        };
        if let Some(value) = value {
            sizes.push(value);
        }
    }
    Ok(sizes)
}

/// Write `items` as pretty JSON, falling back to a timestamped backup file.
fn write_items(path: &Path, items: &[CatalogItem]) -> Result<PathBuf> {
    let payload = serde_json::to_string_pretty(items).context("serializing items")?;
    match fs::write(path, &payload) {
        Ok(()) => Ok(path.to_path_buf()),
        Err(err) => {
            log::error!("could not write {}: {err}", path.display());
            let backup = PathBuf::from(format!(
                "storefront_items_backup_{}.json",
                Utc::now().timestamp()
            ));
            fs::write(&backup, &payload)
                .with_context(|| format!("writing backup {}", backup.display()))?;
            Ok(backup)
        }
    }
}

fn summarize(items: &[CatalogItem]) -> (usize, usize) {
    (items.len(), items.iter().filter(|i| i.has_sizes()).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "https://shop.example.com/en/listing";

    #[test]
    fn card_item_resolves_relative_links_and_splits_prices() {
        let item = card_item(" Team Cap ", "/en/cap-123", "$35.00\n$50.00", START).unwrap();
        assert_eq!(item.title, "Team Cap");
        assert_eq!(item.url, "https://shop.example.com/en/cap-123");
        assert_eq!(item.price, "$35.00");
        assert_eq!(item.original_price, "$50.00");
        assert!(item.is_discounted());
    }

    #[test]
    fn card_without_title_is_skipped() {
        assert!(card_item("   ", "/x", "$1", START).is_none());
    }

    #[test]
    fn aria_disabled_stops_pagination() {
        assert!(is_disabled(Some("true")));
        assert!(is_disabled(Some("TRUE")));
        assert!(!is_disabled(Some("false")));
        assert!(!is_disabled(None));
    }

    #[test]
    fn write_items_emits_pretty_json() {
        let path = std::env::temp_dir().join(format!(
            "storefront-items-{}.json",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        let mut item = card_item("Polo", "https://x.test/polo", "$80", START).unwrap();
        item.push_size("M");
        let written = write_items(&path, &[item]).unwrap();
        assert_eq!(written, path);
        let back: Vec<CatalogItem> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back[0].available_sizes, vec!["M"]);
        assert_eq!(summarize(&back), (1, 1));
    }
}
