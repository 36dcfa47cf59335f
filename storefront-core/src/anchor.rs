//! In-page anchor targets for smooth scrolling.
use crate::error::StorefrontError;

/// Selector to query for an anchor's `href`.
///
/// Only same-page fragments with a name are accepted: `"#specs"` yields
/// `"#specs"`, while `"#"`, `"#bad id"` or `"/page#x"` are rejected since
/// they cannot name a target element.
///
/// # Errors
///
/// Returns [`StorefrontError::InvalidFragment`] when `href` is not a usable fragment.
pub fn fragment_selector(href: &str) -> Result<&str, StorefrontError> {
    let Some(name) = href.strip_prefix('#') else {
        return Err(StorefrontError::InvalidFragment(href.to_string()));
    };
    let usable = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
    if usable {
        Ok(href)
    } else {
        Err(StorefrontError::InvalidFragment(href.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_fragment_is_its_own_selector() {
        assert_eq!(fragment_selector("#specs").unwrap(), "#specs");
        assert_eq!(fragment_selector("#size_guide-2").unwrap(), "#size_guide-2");
    }

    #[test]
    fn bare_hash_has_no_target() {
        assert!(matches!(
            fragment_selector("#"),
            Err(StorefrontError::InvalidFragment(_))
        ));
    }

    #[test]
    fn selectors_the_browser_would_reject_are_refused() {
        assert!(fragment_selector("#bad id").is_err());
        assert!(fragment_selector("#1st").is_err());
        assert!(fragment_selector("/page#x").is_err());
    }
}
