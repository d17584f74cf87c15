//! # Resource Path Builder
//!
//! Turns the tokens between the action and the `By` marker into lowercase path segments.

use crate::inference::models::Action;

/// Marker token separating the resource from its path parameters.
pub const BY_MARKER: &str = "By";

/// Resource segments plus the tokens following a `By` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSplit<'a> {
    /// Lowercase (and possibly pluralized) segments.
    pub segments: Vec<String>,
    /// Tokens after `By`; `None` when no marker was present.
    pub by_tokens: Option<&'a [String]>,
}

/// Builds resource segments from `tokens` (the tokens after the action).
///
/// `List` and `Create` pluralize every segment not already ending in `s`.
pub fn build_resource(tokens: &[String], action: Option<Action>) -> ResourceSplit<'_> {
    let pluralize = action.is_some_and(Action::pluralizes);
    let mut segments = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        if token == BY_MARKER {
            return ResourceSplit {
                segments,
                by_tokens: Some(&tokens[i + 1..]),
            };
        }
        if token.is_empty() {
            continue;
        }
        let mut segment = token.to_lowercase();
        if pluralize && !segment.ends_with('s') {
            segment.push('s');
        }
        segments.push(segment);
    }

    ResourceSplit {
        segments,
        by_tokens: None,
    }
}

/// Joins an optional prefix and path parts into a URL path with a leading `/`.
pub fn join_url(prefix: Option<&str>, parts: &[String]) -> String {
    let prefix = prefix.map(|p| p.trim().trim_matches('/')).unwrap_or_default();
    let mut url = String::new();
    if !prefix.is_empty() {
        url.push('/');
        url.push_str(prefix);
    }
    for part in parts {
        url.push('/');
        url.push_str(part);
    }
    if url.is_empty() {
        url.push('/');
    }
    url
}
