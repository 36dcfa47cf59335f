//! Search box submission.
use crate::constants::{SEARCH_PARAM, SEARCH_PATH};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters `encodeURIComponent` leaves untouched besides ASCII alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a query value the way `encodeURIComponent` does.
#[must_use]
pub fn encode_query_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Navigation target for a submitted query on the default search path.
///
/// Returns `None` for empty or whitespace-only input. The raw value, not the
/// trimmed one, is what gets encoded.
#[must_use]
pub fn search_url(query: &str) -> Option<String> {
    search_url_with_path(SEARCH_PATH, query)
}

/// Same as [`search_url`] against a configured search path.
#[must_use]
pub fn search_url_with_path(path: &str, query: &str) -> Option<String> {
    if query.trim().is_empty() {
        return None;
    }
    Some(format!(
        "{path}?{SEARCH_PARAM}={}",
        encode_query_component(query)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_query_does_not_navigate() {
        assert_eq!(search_url(""), None);
        assert_eq!(search_url("  "), None);
        assert_eq!(search_url("\t\n"), None);
    }

    #[test]
    fn plain_query_navigates_to_search_endpoint() {
        assert_eq!(search_url("shoes").as_deref(), Some("/search?q=shoes"));
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(
            search_url("red & blue").as_deref(),
            Some("/search?q=red%20%26%20blue")
        );
        assert_eq!(encode_query_component("a/b?c=d#e"), "a%2Fb%3Fc%3Dd%23e");
    }

    #[test]
    fn unreserved_marks_pass_through() {
        assert_eq!(encode_query_component("-_.!~*'()"), "-_.!~*'()");
    }

    #[test]
    fn raw_value_keeps_surrounding_whitespace() {
        assert_eq!(search_url(" cap ").as_deref(), Some("/search?q=%20cap%20"));
    }

    #[test]
    fn non_ascii_is_utf8_encoded() {
        assert_eq!(encode_query_component("café"), "caf%C3%A9");
    }

    #[test]
    fn configured_path_is_used() {
        assert_eq!(
            search_url_with_path("/shop/find", "hat").as_deref(),
            Some("/shop/find?q=hat")
        );
    }
}
