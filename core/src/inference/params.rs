//! # Path Parameter Resolver
//!
//! Binds the tokens after `By` to declared parameter names, with an `...id` fallback
//! for actions addressing a single resource.

use crate::inference::models::Action;
use crate::inference::tokenizer::param_key;

/// One component of the inferred URL tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPart {
    /// A fixed lowercase segment.
    Literal(String),
    /// A `{name}` placeholder.
    Param(String),
}

impl PathPart {
    /// Renders the part as it appears in a URL path.
    pub fn render(&self) -> String {
        match self {
            PathPart::Literal(s) => s.clone(),
            PathPart::Param(p) => format!("{{{}}}", p),
        }
    }
}

/// Result of binding `By` tokens to parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamResolution {
    /// Parts to append after the resource segments.
    pub parts: Vec<PathPart>,
    /// Tokens that matched nothing and were kept as literal segments.
    pub unresolved: Vec<String>,
}

impl ParamResolution {
    /// Placeholder names in order.
    pub fn params(&self) -> Vec<String> {
        self.parts
            .iter()
            .filter_map(|p| match p {
                PathPart::Param(name) => Some(name.clone()),
                PathPart::Literal(_) => None,
            })
            .collect()
    }
}

/// Resolves path parameters.
///
/// Each `By` token is lowercased and appended to a buffer; after every append the
/// buffer's suffixes are tried longest first against the declared parameter keys.
/// A match becomes a placeholder and clears the buffer. When nothing matched and the
/// action addresses a single resource, every declared parameter named `id` or `...id`
/// is bound instead. Remaining buffered tokens become literal segments.
pub fn resolve_path_params(
    by_tokens: Option<&[String]>,
    declared: &[String],
    action: Option<Action>,
) -> ParamResolution {
    let keys: Vec<String> = declared.iter().map(|n| param_key(n)).collect();
    let mut resolution = ParamResolution::default();
    let mut bound: Vec<String> = Vec::new();
    let mut buffer: Vec<String> = Vec::new();

    for token in by_tokens.unwrap_or_default() {
        buffer.push(token.to_lowercase());
        let matched = (0..buffer.len())
            .map(|start| buffer[start..].concat())
            .find(|candidate| keys.contains(candidate) && !bound.contains(candidate));
        if let Some(name) = matched {
            resolution.parts.push(PathPart::Param(name.clone()));
            bound.push(name);
            buffer.clear();
        }
    }

    if bound.is_empty() && action.is_some_and(Action::targets_single) {
        for key in &keys {
            if key.ends_with("id") && !bound.contains(key) {
                resolution.parts.push(PathPart::Param(key.clone()));
                bound.push(key.clone());
            }
        }
        if !bound.is_empty() {
            return resolution;
        }
    }

    for token in buffer {
        resolution.parts.push(PathPart::Literal(token.clone()));
        resolution.unresolved.push(token);
    }

    resolution
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_greedy_combination_match() {
        let tokens = strings(&["User", "ID", "And", "Order", "ID"]);
        let resolution = resolve_path_params(
            Some(&tokens),
            &strings(&["userID", "orderID"]),
            Some(Action::Get),
        );
        assert_eq!(resolution.params(), vec!["userid", "orderid"]);
        assert!(resolution.unresolved.is_empty());
    }

    #[test]
    fn test_id_suffix_fallback_without_marker() {
        let resolution = resolve_path_params(None, &strings(&["id"]), Some(Action::Update));
        assert_eq!(resolution.parts, vec![PathPart::Param("id".into())]);

        let snake = resolve_path_params(
            None,
            &strings(&["user_id", "name"]),
            Some(Action::Delete),
        );
        assert_eq!(snake.params(), vec!["userid"]);
    }

    #[test]
    fn test_no_fallback_for_collection_actions() {
        let resolution = resolve_path_params(None, &strings(&["id"]), Some(Action::Create));
        assert!(resolution.parts.is_empty());
        let none = resolve_path_params(None, &strings(&["id"]), None);
        assert!(none.parts.is_empty());
    }

    #[test]
    fn test_fallback_replaces_unmatched_tokens() {
        let tokens = strings(&["Key"]);
        let resolution =
            resolve_path_params(Some(&tokens), &strings(&["accountID"]), Some(Action::Get));
        assert_eq!(resolution.params(), vec!["accountid"]);
        assert!(resolution.unresolved.is_empty());
    }

    #[test]
    fn test_unresolved_tokens_become_literals() {
        let tokens = strings(&["Name"]);
        let resolution = resolve_path_params(Some(&tokens), &[], Some(Action::Get));
        assert_eq!(resolution.parts, vec![PathPart::Literal("name".into())]);
        assert_eq!(resolution.unresolved, vec!["name"]);

        let trailing = strings(&["ID", "And", "Name"]);
        let resolution =
            resolve_path_params(Some(&trailing), &strings(&["id"]), Some(Action::Get));
        let rendered: Vec<String> = resolution.parts.iter().map(PathPart::render).collect();
        assert_eq!(rendered, vec!["{id}", "and", "name"]);
    }

    #[test]
    fn test_placeholder_bound_once() {
        let tokens = strings(&["ID", "And", "ID"]);
        let resolution = resolve_path_params(Some(&tokens), &strings(&["id"]), Some(Action::Get));
        assert_eq!(resolution.params(), vec!["id"]);
        assert_eq!(resolution.unresolved, vec!["and", "id"]);
    }
}
