//! Centralized selectors, markers, labels, and timing constants.
//!
//! These values describe the inbound DOM contract of the product page and
//! the literal delays the widgets animate with. `PageConfig` defaults to
//! them; markup that follows a different convention overrides them there.

// Selectors ---------------------------------------------------------------
pub const SEARCH_INPUT: &str = ".search-bar input";
pub const TEAM_DROPDOWN: &str = "#teamDropdown";
pub const TEAM_DROPDOWN_PANEL: &str = ".team-dropdown";
pub const TEAM_TRIGGER: &str = ".nav-link";
pub const SIZE_BUTTON: &str = ".size-btn";
pub const THUMBNAIL: &str = ".thumbnail";
pub const MAIN_IMAGE: &str = ".main-image img";
pub const ADD_TO_CART: &str = ".add-to-cart";
pub const CART_BUTTON: &str = ".cart-btn";
pub const CART_BADGE: &str = ".cart-badge";
pub const MOBILE_MENU_TOGGLE: &str = ".mobile-menu-toggle";
pub const MAIN_NAV: &str = ".main-nav";
pub const PREV_ARROW: &str = ".nav-arrow.prev";
pub const NEXT_ARROW: &str = ".nav-arrow.next";
pub const HERO_SLIDER: &str = ".hero-slider";
pub const SLIDE: &str = ".slide";
pub const LAZY_IMAGE: &str = "img[data-src]";
pub const LOCAL_ANCHOR: &str = "a[href^=\"#\"]";
pub const SIZE_NOTICE: &str = "[data-size-notice]";
pub const CONFIG_SCRIPT_ID: &str = "storefront-config";

// Markers -----------------------------------------------------------------
pub const SELECTED_CLASS: &str = "selected";
pub const ACTIVE_CLASS: &str = "active";
pub const LOADED_CLASS: &str = "loaded";
pub const CART_BADGE_CLASS: &str = "cart-badge";
pub const CART_COUNT_ATTR: &str = "data-count";
pub const DEFERRED_SRC_ATTR: &str = "data-src";

// Gallery -----------------------------------------------------------------
pub const THUMB_SIZE_TOKEN: &str = "80x80";
pub const FULL_SIZE_TOKEN: &str = "600x600";

// Search ------------------------------------------------------------------
pub const SEARCH_PATH: &str = "/search";
pub const SEARCH_PARAM: &str = "q";
pub const SEARCH_PLACEHOLDER: &str = "What can we help you find?";

// Add to cart -------------------------------------------------------------
pub const LABEL_IDLE: &str = "Add to Cart";
pub const LABEL_ADDING: &str = "Adding...";
pub const LABEL_CONFIRMED: &str = "Added to Cart \u{2713}";
pub const NOTICE_SELECT_SIZE: &str = "Please select a size";

// Timing (milliseconds) ---------------------------------------------------
pub const ADDING_DELAY_MS: u64 = 1_000;
pub const CONFIRM_DELAY_MS: u64 = 2_000;
pub const SLIDE_INTERVAL_MS: u64 = 5_000;

// Injected stylesheet -----------------------------------------------------
pub const STYLE_ELEMENT_ID: &str = "storefront-styles";
pub const CART_BADGE_CSS: &str = "
    .cart-badge {
        position: absolute;
        top: -5px;
        right: -5px;
        background: #e10600;
        color: white;
        border-radius: 50%;
        width: 20px;
        height: 20px;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 12px;
        font-weight: bold;
    }

    .cart-btn {
        position: relative;
    }
";

// Test bridge -------------------------------------------------------------
pub const TEST_QUERY_FLAG: &str = "test=1";
pub const TEST_BRIDGE_GLOBAL: &str = "__storefrontTest";
