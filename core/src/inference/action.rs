//! # Action Classifier
//!
//! Reads the CRUD action from the first name token and the HTTP verb from the raw name.

use crate::inference::models::{Action, HttpMethod};

/// Name prefixes and the verb they imply. Matched longest-first.
const VERB_PREFIXES: [(&str, HttpMethod); 9] = [
    ("Get", HttpMethod::Get),
    ("List", HttpMethod::Get),
    ("Create", HttpMethod::Post),
    ("New", HttpMethod::Post),
    ("Post", HttpMethod::Post),
    ("Update", HttpMethod::Put),
    ("Put", HttpMethod::Put),
    ("Delete", HttpMethod::Delete),
    ("Remove", HttpMethod::Delete),
];

/// Consumes the leading action token, if any.
///
/// Returns the action and the tokens after it. Without a recognized action the
/// cursor does not advance.
pub fn classify_action(tokens: &[String]) -> (Option<Action>, &[String]) {
    match tokens.split_first() {
        Some((first, rest)) => match Action::from_token(first) {
            Some(action) => (Some(action), rest),
            None => (None, tokens),
        },
        None => (None, tokens),
    }
}

/// Derives the HTTP verb from the unsplit method name by longest-prefix match.
pub fn infer_http_method(name: &str, fallback: HttpMethod) -> HttpMethod {
    VERB_PREFIXES
        .iter()
        .filter(|(prefix, _)| name.starts_with(prefix))
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|(_, verb)| *verb)
        .unwrap_or(fallback)
}
