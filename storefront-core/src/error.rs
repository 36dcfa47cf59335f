//! Error types shared by the core view-state modules.
use thiserror::Error;

/// Errors raised when page state or configuration invariants are violated.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("page configuration is invalid: {0}")]
    Config(#[from] serde_json::Error),
    #[error("index {index} is out of range for {len} elements")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("{0} has no elements")]
    EmptyCollection(&'static str),
    #[error("anchor href {0:?} does not name a fragment")]
    InvalidFragment(String),
}

impl StorefrontError {
    /// Build an [`StorefrontError::IndexOutOfRange`] when `index` falls outside `len`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index >= len`.
    pub const fn check_index(index: usize, len: usize) -> Result<usize, Self> {
        if index < len {
            Ok(index)
        } else {
            Err(Self::IndexOutOfRange { index, len })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_index_accepts_in_range_values() {
        assert_eq!(StorefrontError::check_index(2, 3).unwrap(), 2);
    }

    #[test]
    fn check_index_reports_bounds() {
        let err = StorefrontError::check_index(3, 3).expect_err("out of range");
        assert_eq!(err.to_string(), "index 3 is out of range for 3 elements");
    }
}
