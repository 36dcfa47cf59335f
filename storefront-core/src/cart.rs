//! Add-to-cart button state machine and the cart counter.
//!
//! The button runs `Idle -> Adding -> Confirmed -> Idle`. Transitions out of
//! `Adding` and `Confirmed` are deadline driven: callers feed the current time
//! from a [`Clock`] into [`CartButton::tick`], so tests can step time by hand
//! while the browser feeds `performance.now()`.
use crate::config::{Delays, Labels};
use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// Source of monotonic milliseconds.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Hand-driven clock for deterministic tests and simulations.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    #[must_use]
    pub const fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CartPhase {
    #[default]
    Idle,
    Adding,
    Confirmed,
}

impl CartPhase {
    #[must_use]
    pub const fn is_disabled(self) -> bool {
        !matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn label(self, labels: &Labels) -> &str {
        match self {
            Self::Idle => &labels.add_idle,
            Self::Adding => &labels.add_adding,
            Self::Confirmed => &labels.add_confirmed,
        }
    }
}

/// Side effects the rendering layer must apply after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEffect {
    /// Surface the "select a size" notice; the button stays idle.
    Notice,
    /// Mirror the phase into the button label and disabled state.
    Render(CartPhase),
    /// Increment the cart counter and refresh the badge.
    Increment,
    /// Call [`CartButton::tick`] again after this many milliseconds.
    Schedule { delay_ms: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartButton {
    phase: CartPhase,
    deadline: Option<u64>,
    adding_ms: u64,
    confirm_ms: u64,
}

impl Default for CartButton {
    fn default() -> Self {
        Self::new(&Delays::default())
    }
}

impl CartButton {
    #[must_use]
    pub const fn new(delays: &Delays) -> Self {
        Self {
            phase: CartPhase::Idle,
            deadline: None,
            adding_ms: delays.adding_ms,
            confirm_ms: delays.confirm_ms,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> CartPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.phase.is_disabled()
    }

    /// Time at which the pending transition fires, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Milliseconds left until the pending transition, if one is scheduled.
    #[must_use]
    pub fn remaining(&self, now: u64) -> Option<u64> {
        self.deadline.map(|at| at.saturating_sub(now))
    }

    /// Handle a click at time `now`.
    ///
    /// Clicks outside `Idle` are ignored (the control is disabled). Without a
    /// selected size the only effect is a notice.
    pub fn click(&mut self, size_selected: bool, now: u64) -> Vec<CartEffect> {
        if self.phase != CartPhase::Idle {
            return Vec::new();
        }
        if !size_selected {
            return vec![CartEffect::Notice];
        }
        self.phase = CartPhase::Adding;
        self.deadline = Some(now.saturating_add(self.adding_ms));
        vec![
            CartEffect::Render(CartPhase::Adding),
            CartEffect::Schedule {
                delay_ms: self.adding_ms,
            },
        ]
    }

    /// Fire every transition whose deadline is at or before `now`.
    pub fn tick(&mut self, now: u64) -> Vec<CartEffect> {
        let mut effects = Vec::new();
        while let Some(at) = self.deadline.filter(|&at| at <= now) {
            match self.phase {
                CartPhase::Adding => {
                    self.phase = CartPhase::Confirmed;
                    self.deadline = Some(at.saturating_add(self.confirm_ms));
                    effects.push(CartEffect::Render(CartPhase::Confirmed));
                    effects.push(CartEffect::Increment);
                    let delay_ms = self.remaining(now).unwrap_or_default();
                    if delay_ms > 0 {
                        effects.push(CartEffect::Schedule { delay_ms });
                    }
                }
                CartPhase::Confirmed => {
                    self.phase = CartPhase::Idle;
                    self.deadline = None;
                    effects.push(CartEffect::Render(CartPhase::Idle));
                }
                CartPhase::Idle => {
                    self.deadline = None;
                }
            }
        }
        effects
    }
}

/// Numeric badge counter mirrored into the cart button's `data-count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CartCounter {
    count: u32,
}

impl CartCounter {
    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self { count }
    }

    /// Read the attribute with `parseInt` leniency: leading whitespace is
    /// skipped, leading digits are taken, anything else counts as zero.
    #[must_use]
    pub fn from_attr(raw: Option<&str>) -> Self {
        let count = raw
            .map(str::trim_start)
            .map(|s| {
                let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
                &s[..end]
            })
            .and_then(|digits| digits.parse().ok())
            .unwrap_or(0);
        Self { count }
    }

    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Add one item; returns the new count.
    pub const fn increment(&mut self) -> u32 {
        self.count = self.count.saturating_add(1);
        self.count
    }

    #[must_use]
    pub fn to_attr(&self) -> String {
        self.count.to_string()
    }
}
