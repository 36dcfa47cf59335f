//! Page configuration.
//!
//! Every field defaults to the constants in [`crate::constants`], so an
//! absent or partial JSON document still yields a complete configuration.
use crate::constants;
use crate::error::StorefrontError;
use serde::{Deserialize, Serialize};

/// How the "select a size" guard surfaces its notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeStyle {
    /// Blocking `window.alert`, as the page has always behaved.
    #[default]
    Alert,
    /// Text written into the `[data-size-notice]` element when present.
    Inline,
}

/// CSS selectors describing the inbound DOM contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub search_input: String,
    pub team_dropdown: String,
    pub team_dropdown_panel: String,
    pub team_trigger: String,
    pub size_button: String,
    pub thumbnail: String,
    pub main_image: String,
    pub add_to_cart: String,
    pub cart_button: String,
    pub cart_badge: String,
    pub mobile_menu_toggle: String,
    pub main_nav: String,
    pub prev_arrow: String,
    pub next_arrow: String,
    pub hero_slider: String,
    pub slide: String,
    pub lazy_image: String,
    pub local_anchor: String,
    pub size_notice: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            search_input: constants::SEARCH_INPUT.to_string(),
            team_dropdown: constants::TEAM_DROPDOWN.to_string(),
            team_dropdown_panel: constants::TEAM_DROPDOWN_PANEL.to_string(),
            team_trigger: constants::TEAM_TRIGGER.to_string(),
            size_button: constants::SIZE_BUTTON.to_string(),
            thumbnail: constants::THUMBNAIL.to_string(),
            main_image: constants::MAIN_IMAGE.to_string(),
            add_to_cart: constants::ADD_TO_CART.to_string(),
            cart_button: constants::CART_BUTTON.to_string(),
            cart_badge: constants::CART_BADGE.to_string(),
            mobile_menu_toggle: constants::MOBILE_MENU_TOGGLE.to_string(),
            main_nav: constants::MAIN_NAV.to_string(),
            prev_arrow: constants::PREV_ARROW.to_string(),
            next_arrow: constants::NEXT_ARROW.to_string(),
            hero_slider: constants::HERO_SLIDER.to_string(),
            slide: constants::SLIDE.to_string(),
            lazy_image: constants::LAZY_IMAGE.to_string(),
            local_anchor: constants::LOCAL_ANCHOR.to_string(),
            size_notice: constants::SIZE_NOTICE.to_string(),
        }
    }
}

/// Timer lengths in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delays {
    #[serde(default = "Delays::default_adding_ms")]
    pub adding_ms: u64,
    #[serde(default = "Delays::default_confirm_ms")]
    pub confirm_ms: u64,
    #[serde(default = "Delays::default_slide_interval_ms")]
    pub slide_interval_ms: u64,
}

impl Delays {
    const fn default_adding_ms() -> u64 {
        constants::ADDING_DELAY_MS
    }

    const fn default_confirm_ms() -> u64 {
        constants::CONFIRM_DELAY_MS
    }

    const fn default_slide_interval_ms() -> u64 {
        constants::SLIDE_INTERVAL_MS
    }
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            adding_ms: Self::default_adding_ms(),
            confirm_ms: Self::default_confirm_ms(),
            slide_interval_ms: Self::default_slide_interval_ms(),
        }
    }
}

/// User-facing strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub add_idle: String,
    pub add_adding: String,
    pub add_confirmed: String,
    pub select_size_notice: String,
    pub search_placeholder: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            add_idle: constants::LABEL_IDLE.to_string(),
            add_adding: constants::LABEL_ADDING.to_string(),
            add_confirmed: constants::LABEL_CONFIRMED.to_string(),
            select_size_notice: constants::NOTICE_SELECT_SIZE.to_string(),
            search_placeholder: constants::SEARCH_PLACEHOLDER.to_string(),
        }
    }
}

/// Complete page configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub delays: Delays,
    pub labels: Labels,
    pub search_path: String,
    pub thumb_token: String,
    pub full_token: String,
    pub notice_style: NoticeStyle,
    /// `log` level name (`error`..`trace`); `None` keeps the crate default.
    pub log_level: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            delays: Delays::default(),
            labels: Labels::default(),
            search_path: constants::SEARCH_PATH.to_string(),
            thumb_token: constants::THUMB_SIZE_TOKEN.to_string(),
            full_token: constants::FULL_SIZE_TOKEN.to_string(),
            notice_style: NoticeStyle::default(),
            log_level: None,
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, StorefrontError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve the configured log level, falling back to `default` for unknown names.
    #[must_use]
    pub fn log_level_or(&self, default: log::LevelFilter) -> log::LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|name| name.trim().parse().ok())
            .unwrap_or(default)
    }
}
