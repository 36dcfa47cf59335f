//! Single-selection size picker.
use serde::{Deserialize, Serialize};

/// Radio-button style selection over a fixed group of size buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SizeSelection {
    len: usize,
    selected: Option<usize>,
}

impl SizeSelection {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            selected: None,
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub const fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Select `index`, clearing any previous choice.
    ///
    /// Returns the previously selected index. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return self.selected;
        }
        self.selected.replace(index)
    }

    /// Whether the button at `index` should carry the selected marker.
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_selected_before_first_click() {
        let sel = SizeSelection::new(4);
        assert!(!sel.has_selection());
        assert!((0..4).all(|i| !sel.is_selected(i)));
    }

    #[test]
    fn last_click_wins_and_only_one_is_marked() {
        let mut sel = SizeSelection::new(5);
        for click in [2, 0, 4, 4, 1, 3] {
            sel.select(click);
            let marked: Vec<usize> = (0..5).filter(|&i| sel.is_selected(i)).collect();
            assert_eq!(marked, vec![click]);
        }
    }

    #[test]
    fn select_returns_previous_choice() {
        let mut sel = SizeSelection::new(3);
        assert_eq!(sel.select(1), None);
        assert_eq!(sel.select(2), Some(1));
    }

    #[test]
    fn out_of_range_click_is_ignored() {
        let mut sel = SizeSelection::new(2);
        sel.select(1);
        assert_eq!(sel.select(7), Some(1));
        assert_eq!(sel.selected(), Some(1));
    }
}
