//! Product catalog records collected from listing pages.
//!
//! The tester's scraper fills these from product cards and detail pages; the
//! helpers here are the pure parts of that pipeline.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use url::Url;

static PRICE_AMOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,3}(?:,\d{3})+|\d+)(?:\.(\d{1,2}))?").expect("price regex compiles")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub title: String,
    /// Current (possibly sale) price as displayed.
    pub price: String,
    /// Pre-sale price as displayed; empty when the item is not discounted.
    pub original_price: String,
    pub url: String,
    #[serde(default)]
    pub available_sizes: Vec<String>,
}

impl CatalogItem {
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>, prices: PriceLines) -> Self {
        Self {
            title: title.into(),
            price: prices.current,
            original_price: prices.original,
            url: url.into(),
            available_sizes: Vec::new(),
        }
    }

    /// Record a size label, keeping first-seen order and skipping blanks and repeats.
    pub fn push_size(&mut self, size: &str) -> bool {
        let size = size.trim();
        if size.is_empty() || self.available_sizes.iter().any(|s| s == size) {
            return false;
        }
        self.available_sizes.push(size.to_string());
        true
    }

    #[must_use]
    pub fn has_sizes(&self) -> bool {
        !self.available_sizes.is_empty()
    }

    #[must_use]
    pub fn is_discounted(&self) -> bool {
        match (parse_price_cents(&self.price), parse_price_cents(&self.original_price)) {
            (Some(now), Some(was)) => now < was,
            _ => false,
        }
    }
}

/// Current and original price split out of a card's price block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceLines {
    pub current: String,
    pub original: String,
}

impl PriceLines {
    /// First non-blank line is the current price, the second the original one.
    #[must_use]
    pub fn parse(block: &str) -> Self {
        let mut lines = block.lines().map(str::trim).filter(|l| !l.is_empty());
        Self {
            current: lines.next().unwrap_or_default().to_string(),
            original: lines.next().unwrap_or_default().to_string(),
        }
    }
}

/// Parse a displayed price such as `"$1,299.99"` or `"£35"` into cents.
#[must_use]
pub fn parse_price_cents(text: &str) -> Option<i64> {
    let caps = PRICE_AMOUNT.captures(text)?;
    let whole: i64 = caps.get(1)?.as_str().replace(',', "").parse().ok()?;
    let cents = caps.get(2).map_or(Some(0), |m| {
        let digits = m.as_str();
        let value: i64 = digits.parse().ok()?;
        Some(if digits.len() == 1 { value * 10 } else { value })
    })?;
    whole.checked_mul(100)?.checked_add(cents)
}

/// Resolve a card link against the listing's start URL.
///
/// Follows RFC 3986 reference resolution. Empty links and links that cannot
/// be joined against an unparseable start URL pass through unchanged.
#[must_use]
pub fn resolve_url(start_url: &str, href: &str) -> String {
    let href = href.trim();
    if href.is_empty() {
        return String::new();
    }
    Url::parse(start_url.trim())
        .and_then(|base| base.join(href))
        .or_else(|_| Url::parse(href))
        .map_or_else(|_| href.to_string(), String::from)
}

/// Append items whose URL is not yet present; returns how many were added.
pub fn merge_items(all: &mut Vec<CatalogItem>, incoming: Vec<CatalogItem>) -> usize {
    let mut seen: HashSet<String> = all.iter().map(|item| item.url.clone()).collect();
    let before = all.len();
    for item in incoming {
        if seen.insert(item.url.clone()) {
            all.push(item);
        }
    }
    all.len() - before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(url: &str) -> CatalogItem {
        CatalogItem::new("Team Cap", url, PriceLines::default())
    }

    #[test]
    fn price_block_splits_current_and_original() {
        let prices = PriceLines::parse("$29.99\n $45.00 \n");
        assert_eq!(prices.current, "$29.99");
        assert_eq!(prices.original, "$45.00");

        let prices = PriceLines::parse("\n$60.00");
        assert_eq!(prices.current, "$60.00");
        assert_eq!(prices.original, "");
    }

    #[test]
    fn price_cents_handles_grouping_and_short_fractions() {
        assert_eq!(parse_price_cents("$1,299.99"), Some(129_999));
        assert_eq!(parse_price_cents("£35"), Some(3_500));
        assert_eq!(parse_price_cents("€4.5"), Some(450));
        assert_eq!(parse_price_cents("Sold out"), None);
    }

    #[test]
    fn discount_requires_lower_current_price() {
        let mut cap = CatalogItem::new(
            "Cap",
            "/cap",
            PriceLines::parse("$29.99\n$45.00"),
        );
        assert!(cap.is_discounted());
        cap.original_price.clear();
        assert!(!cap.is_discounted());
    }

    #[test]
    fn relative_links_resolve_against_start_origin() {
        let start = "https://store.example.com/en/teams?page=2";
        assert_eq!(
            resolve_url(start, "/en/cap-123"),
            "https://store.example.com/en/cap-123"
        );
        assert_eq!(
            resolve_url(start, "https://cdn.example.com/x"),
            "https://cdn.example.com/x"
        );
        assert_eq!(
            resolve_url(start, "//cdn.example.com/y"),
            "https://cdn.example.com/y"
        );
        assert_eq!(
            resolve_url("https://store.example.com/en/teams", "cap-9"),
            "https://store.example.com/en/cap-9"
        );
        assert_eq!(resolve_url(start, ""), "");
        assert_eq!(resolve_url("not a url", "cap-9"), "cap-9");
    }

    #[test]
    fn relative_links_follow_reference_resolution() {
        assert_eq!(
            resolve_url("https://s.com/en/teams?page=1", "?page=2"),
            "https://s.com/en/teams?page=2"
        );
        assert_eq!(
            resolve_url("https://s.com/en/teams/ferrari", "../cap"),
            "https://s.com/en/cap"
        );
        assert_eq!(
            resolve_url("https://s.com/list?next=/a/b", "cap"),
            "https://s.com/cap"
        );
    }

    #[test]
    fn sizes_are_deduplicated_in_order() {
        let mut cap = item("/cap");
        assert!(cap.push_size(" M "));
        assert!(cap.push_size("S"));
        assert!(!cap.push_size("M"));
        assert!(!cap.push_size("  "));
        assert_eq!(cap.available_sizes, vec!["M", "S"]);
        assert!(cap.has_sizes());
    }

    #[test]
    fn merge_keeps_first_item_per_url() {
        let mut all = vec![item("/a"), item("/b")];
        let mut dup = item("/a");
        dup.title = "Replacement".into();
        let added = merge_items(&mut all, vec![dup, item("/c"), item("/c")]);
        assert_eq!(added, 1);
        let urls: Vec<&str> = all.iter().map(|i| i.url.as_str()).collect();
        assert_eq!(urls, vec!["/a", "/b", "/c"]);
        assert_eq!(all[0].title, "Team Cap");
    }

    #[test]
    fn items_round_trip_with_missing_sizes() {
        let json = r#"{"title":"Cap","price":"$1","original_price":"","url":"/cap"}"#;
        let cap: CatalogItem = serde_json::from_str(json).expect("parse");
        assert!(cap.available_sizes.is_empty());
    }
}
