//! Auto-advancing hero slider.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSlider {
    len: usize,
    current: usize,
}

impl HeroSlider {
    /// A slider over `len` slides, or `None` when there is nothing to rotate.
    #[must_use]
    pub const fn new(len: usize) -> Option<Self> {
        if len < 2 {
            None
        } else {
            Some(Self { len, current: 0 })
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
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Move to the next slide, wrapping after the last.
    pub const fn advance(&mut self) -> usize {
        self.current = (self.current + 1) % self.len;
        self.current
    }

    /// Horizontal offset of slide `ordinal` in percent of its width.
    #[must_use]
    pub fn offset_percent(&self, ordinal: usize) -> i64 {
        let ordinal = i64::try_from(ordinal).unwrap_or(i64::MAX / 100);
        let current = i64::try_from(self.current).unwrap_or_default();
        (ordinal - current) * 100
    }

    /// CSS `transform` value for slide `ordinal`.
    #[must_use]
    pub fn transform(&self, ordinal: usize) -> String {
        format!("translateX({}%)", self.offset_percent(ordinal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fewer_than_two_slides_is_inert() {
        assert!(HeroSlider::new(0).is_none());
        assert!(HeroSlider::new(1).is_none());
        assert!(HeroSlider::new(2).is_some());
    }

    #[test]
    fn offsets_follow_advances() {
        for total in 2..=6 {
            let mut slider = HeroSlider::new(total).expect("rotating slider");
            for k in 1..=(total * 3) {
                slider.advance();
                let current = i64::try_from(k % total).unwrap();
                for i in 0..total {
                    let expected = (i64::try_from(i).unwrap() - current) * 100;
                    assert_eq!(slider.offset_percent(i), expected);
                }
            }
        }
    }

    #[test]
    fn transform_formats_percent() {
        let mut slider = HeroSlider::new(3).expect("rotating slider");
        slider.advance();
        assert_eq!(slider.transform(0), "translateX(-100%)");
        assert_eq!(slider.transform(1), "translateX(0%)");
        assert_eq!(slider.transform(2), "translateX(100%)");
    }
}
