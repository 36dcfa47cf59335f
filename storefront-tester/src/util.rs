use crate::browser::TestBridge;
use anyhow::{Context, Result};
use chrono::Utc;
use std::fmt::Write as _;
use std::{fs, path::Path};
use storefront_core::{FeatureReport, PageSnapshot};
use thirtyfour::prelude::*;

pub fn artifacts_dir(base: &str, browser: &str, scenario: &str) -> String {
    let ts = Utc::now().format("%Y%m%dT%H%M%S");
    format!("{base}/{browser}/{scenario}/{ts}")
}

/// Everything a failed browser scenario leaves behind for inspection.
///
/// The page snapshot and feature report come from the in-page test bridge;
/// either may be absent when the bundle never booted.
#[derive(Debug, Default)]
pub struct FailureArtifacts {
    pub screenshot: Option<Vec<u8>>,
    pub page_source: Option<String>,
    pub snapshot: Option<PageSnapshot>,
    pub features: Option<FeatureReport>,
    pub error_chain: String,
}

impl FailureArtifacts {
    pub async fn collect(driver: &WebDriver, err: &anyhow::Error) -> Self {
        let bridge = TestBridge::new(driver);
        let bridged = bridge.ensure_available().await.is_ok();
        let (snapshot, features) = if bridged {
            (bridge.state().await.ok(), bridge.features().await.ok())
        } else {
            (None, None)
        };
        Self {
            screenshot: driver.screenshot_as_png().await.ok(),
            page_source: driver.source().await.ok(),
            snapshot,
            features,
            error_chain: format!("{err:#}"),
        }
    }

    /// Human-readable digest of the page at the moment of failure.
    pub fn summary(&self) -> String {
        let mut out = format!("error: {}\n", self.error_chain);
        match &self.snapshot {
            Some(snap) => {
                let _ = writeln!(
                    out,
                    "cart: {:?} \"{}\" (count {})",
                    snap.cart_phase, snap.cart_label, snap.cart_count
                );
                let _ = writeln!(out, "selected size: {}", describe_index(snap.selected_size));
                let _ = writeln!(out, "gallery index: {}", describe_index(snap.gallery_index));
                let _ = writeln!(out, "slide index: {}", describe_index(snap.slide_index));
                let _ = writeln!(
                    out,
                    "menu open: {}, dropdown open: {}",
                    snap.menu_open, snap.dropdown_open
                );
                let _ = writeln!(
                    out,
                    "lazy images: {} loaded, {} pending",
                    snap.lazy_loaded, snap.lazy_pending
                );
            }
            None => out.push_str("page snapshot: unavailable\n"),
        }
        match &self.features {
            Some(report) => {
                let _ = writeln!(
                    out,
                    "features: {}/{} active",
                    report.available_count(),
                    report.statuses.len()
                );
                for status in report.inert() {
                    let _ = writeln!(out, "  inert {}: {}", status.feature, status.missing.join(", "));
                }
            }
            None => out.push_str("feature report: unavailable\n"),
        }
        out
    }

    pub fn write_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).context("creating artifacts dir")?;

        if let Some(png) = &self.screenshot {
            fs::write(dir.join("screenshot.png"), png).context("writing screenshot")?;
        }
        if let Some(src) = &self.page_source {
            fs::write(dir.join("dom.html"), src).context("writing page source")?;
        }
        if let Some(snapshot) = &self.snapshot {
            let payload = serde_json::to_vec_pretty(snapshot).context("encoding snapshot")?;
            fs::write(dir.join("snapshot.json"), payload).context("writing snapshot")?;
        }
        if let Some(features) = &self.features {
            let payload = serde_json::to_vec_pretty(features).context("encoding features")?;
            fs::write(dir.join("features.json"), payload).context("writing features")?;
        }
        fs::write(dir.join("summary.txt"), self.summary()).context("writing summary")?;
        Ok(())
    }
}

fn describe_index(index: Option<usize>) -> String {
    index.map_or_else(|| "none".to_string(), |i| i.to_string())
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{Feature, FeatureStatus, PageState};

    fn failing_page() -> FailureArtifacts {
        let mut page = PageState::default();
        page.counter.increment();
        let mut report = FeatureReport::default();
        report.record(FeatureStatus::available(Feature::AddToCart));
        report.record(FeatureStatus::missing(Feature::Gallery, [".thumbnail"]));
        FailureArtifacts {
            screenshot: Some(vec![1, 2, 3]),
            page_source: Some("<html />".to_string()),
            snapshot: Some(page.snapshot()),
            features: Some(report),
            error_chain: "badge never updated".to_string(),
        }
    }

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" smoke, ,gallery,  add-to-cart ");
        assert_eq!(parts, vec!["smoke", "gallery", "add-to-cart"]);
    }

    #[test]
    fn artifacts_dir_includes_key_segments() {
        let dir = artifacts_dir("target/out", "chrome", "gallery");
        assert!(dir.starts_with("target/out/chrome/gallery/"));
    }

    #[test]
    fn summary_names_cart_state_and_inert_features() {
        let summary = failing_page().summary();
        assert!(summary.starts_with("error: badge never updated"));
        assert!(summary.contains("(count 1)"));
        assert!(summary.contains("selected size: none"));
        assert!(summary.contains("features: 1/2 active"));
        assert!(summary.contains("inert gallery: .thumbnail"));
    }

    #[test]
    fn summary_without_bridge_says_so() {
        let artifacts = FailureArtifacts {
            error_chain: "bundle missing".to_string(),
            ..FailureArtifacts::default()
        };
        let summary = artifacts.summary();
        assert!(summary.contains("page snapshot: unavailable"));
        assert!(summary.contains("feature report: unavailable"));
    }

    #[test]
    fn write_to_round_trips_typed_state() {
        let base = std::env::temp_dir().join(format!(
            "storefront-artifacts-{}-{}",
            std::process::id(),
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let artifacts = failing_page();
        artifacts.write_to(&base).expect("write artifacts");

        assert!(base.join("screenshot.png").exists());
        assert!(base.join("dom.html").exists());
        assert!(base.join("summary.txt").exists());
        let snapshot: PageSnapshot =
            serde_json::from_slice(&fs::read(base.join("snapshot.json")).expect("read"))
                .expect("snapshot json");
        assert_eq!(snapshot.cart_count, 1);
        let report: FeatureReport =
            serde_json::from_slice(&fs::read(base.join("features.json")).expect("read"))
                .expect("features json");
        assert!(!report.is_available(Feature::Gallery));
        let _ = fs::remove_dir_all(base);
    }
}
