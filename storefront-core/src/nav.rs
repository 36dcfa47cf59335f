//! Navigation open/closed state for the team dropdown and mobile menu.
use serde::{Deserialize, Serialize};

/// Hover-to-open, click-outside-to-close dropdown panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dropdown {
    open: bool,
}

impl Dropdown {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Show the panel. Returns whether the visible state changed.
    pub const fn open(&mut self) -> bool {
        let changed = !self.open;
        self.open = true;
        changed
    }

    /// Hide the panel. Returns whether the visible state changed.
    pub const fn close(&mut self) -> bool {
        let changed = self.open;
        self.open = false;
        changed
    }

    /// Document click; clicks inside the trigger or panel leave it alone.
    pub const fn click(&mut self, inside: bool) -> bool {
        if inside { false } else { self.close() }
    }

    /// Inline `display` value mirroring the state.
    #[must_use]
    pub const fn display(&self) -> &'static str {
        if self.open { "block" } else { "none" }
    }
}

/// Mobile navigation toggle; the nav container and the toggle share one flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuToggle {
    active: bool,
}

impl MenuToggle {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Flip the menu; returns the new state.
    pub const fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }
}
