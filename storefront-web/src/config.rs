//! Page configuration embedded in the markup.
use crate::dom;
use storefront_core::PageConfig;
use storefront_core::constants::CONFIG_SCRIPT_ID;

/// Read `<script type="application/json" id="storefront-config">`, falling back
/// to defaults when it is absent or malformed.
#[must_use]
pub fn load_page_config() -> PageConfig {
    let Some(raw) = dom::document()
        .and_then(|doc| doc.get_element_by_id(CONFIG_SCRIPT_ID))
        .and_then(|el| el.text_content())
    else {
        log::debug!("no #{CONFIG_SCRIPT_ID} element; using default page configuration");
        return PageConfig::default();
    };
    parse_or_default(&raw)
}

fn parse_or_default(raw: &str) -> PageConfig {
    if raw.trim().is_empty() {
        return PageConfig::default();
    }
    PageConfig::from_json(raw).unwrap_or_else(|err| {
        log::error!("ignoring #{CONFIG_SCRIPT_ID}: {err}");
        PageConfig::default()
    })
}
