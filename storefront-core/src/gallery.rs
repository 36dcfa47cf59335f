//! Product gallery cursor and hi-res source derivation.
use crate::error::StorefrontError;
use serde::{Deserialize, Serialize};

/// Wrap-around cursor over the thumbnail strip.
///
/// The index is always in `[0, len)` whenever `len > 0`; an empty gallery
/// keeps index 0 and every navigation call is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Gallery {
    len: usize,
    index: usize,
}

impl Gallery {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len, index: 0 }
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
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Move to the thumbnail that was clicked.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not a thumbnail position.
    pub fn select(&mut self, index: usize) -> Result<usize, StorefrontError> {
        self.index = StorefrontError::check_index(index, self.len)?;
        Ok(self.index)
    }

    /// Advance one thumbnail, wrapping past the end. `None` when empty.
    pub fn next(&mut self) -> Option<usize> {
        self.step(1)
    }

    /// Step back one thumbnail, wrapping before the start. `None` when empty.
    pub fn prev(&mut self) -> Option<usize> {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let len = self.len.cast_signed();
        let current = self.index.cast_signed();
        self.index = (current + delta + len).rem_euclid(len).cast_unsigned();
        Some(self.index)
    }

    /// Whether the thumbnail at `index` should carry the active marker.
    #[must_use]
    pub const fn is_active(&self, index: usize) -> bool {
        self.len > 0 && self.index == index
    }
}

/// Derive the main-display source from a thumbnail source.
///
/// Only the first occurrence of `thumb_token` is swapped; sources without the
/// token are returned unchanged.
#[must_use]
pub fn hi_res_src(thumb_src: &str, thumb_token: &str, full_token: &str) -> String {
    thumb_src.replacen(thumb_token, full_token, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FULL_SIZE_TOKEN, THUMB_SIZE_TOKEN};

    #[test]
    fn next_wraps_to_start() {
        let mut gallery = Gallery::new(3);
        assert_eq!(gallery.next(), Some(1));
        assert_eq!(gallery.next(), Some(2));
        assert_eq!(gallery.next(), Some(0));
    }

    #[test]
    fn prev_wraps_to_end() {
        let mut gallery = Gallery::new(4);
        assert_eq!(gallery.prev(), Some(3));
        assert_eq!(gallery.prev(), Some(2));
    }

    #[test]
    fn empty_gallery_navigation_is_a_no_op() {
        let mut gallery = Gallery::new(0);
        assert_eq!(gallery.next(), None);
        assert_eq!(gallery.prev(), None);
        assert_eq!(gallery.index(), 0);
        assert!(!gallery.is_active(0));
    }

    #[test]
    fn n_nexts_return_to_origin_for_every_size() {
        for n in 1..=12 {
            let mut gallery = Gallery::new(n);
            for _ in 0..n {
                let idx = gallery.next().expect("non-empty");
                assert!(idx < n);
            }
            assert_eq!(gallery.index(), 0, "size {n}");
        }
    }

    #[test]
    fn mixed_navigation_stays_in_range() {
        let mut gallery = Gallery::new(5);
        let pattern = [1, -1, -1, -1, 1, 1, 1, 1, 1, 1, -1];
        for step in pattern {
            let idx = if step > 0 {
                gallery.next()
            } else {
                gallery.prev()
            }
            .expect("non-empty");
            assert!(idx < 5);
        }
    }

    #[test]
    fn select_moves_cursor_used_by_arrows() {
        let mut gallery = Gallery::new(4);
        gallery.select(2).expect("in range");
        assert_eq!(gallery.next(), Some(3));
        assert!(gallery.select(4).is_err());
        assert_eq!(gallery.index(), 3);
    }

    #[test]
    fn hi_res_swaps_size_token() {
        assert_eq!(
            hi_res_src(
                "https://cdn.example/p/80x80/cap.jpg",
                THUMB_SIZE_TOKEN,
                FULL_SIZE_TOKEN
            ),
            "https://cdn.example/p/600x600/cap.jpg"
        );
        assert_eq!(
            hi_res_src("/img/cap.jpg", THUMB_SIZE_TOKEN, FULL_SIZE_TOKEN),
            "/img/cap.jpg"
        );
        assert_eq!(
            hi_res_src("/80x80/80x80.jpg", THUMB_SIZE_TOKEN, FULL_SIZE_TOKEN),
            "/600x600/80x80.jpg"
        );
    }
}
