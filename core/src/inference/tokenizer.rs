//! # Identifier Tokenizer
//!
//! Splits identifiers into words at camel-case and acronym boundaries.

use heck::ToUpperCamelCase;
use std::borrow::Cow;

/// Splits an identifier into its words, preserving case.
///
/// A word starts where a lowercase letter (or digit) is followed by an uppercase letter,
/// and before the last letter of an uppercase run that is followed by a lowercase letter.
/// `"GetUserByID"` gives `["Get", "User", "By", "ID"]`; `""` gives `[""]`.
pub fn tokenize(ident: &str) -> Vec<String> {
    let chars: Vec<char> = ident.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && starts_word(&chars, i) {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    words.push(current);

    words
}

fn starts_word(chars: &[char], i: usize) -> bool {
    let (prev, cur) = (chars[i - 1], chars[i]);
    if !cur.is_uppercase() {
        return false;
    }
    if prev.is_lowercase() || prev.is_ascii_digit() {
        return true;
    }
    prev.is_uppercase() && chars.get(i + 1).is_some_and(|next| next.is_lowercase())
}

/// Brings `snake_case` identifiers into the PascalCase form the classifier expects.
///
/// Names without underscores are returned untouched so acronyms keep their case.
pub fn normalize_identifier(name: &str) -> Cow<'_, str> {
    if name.contains('_') {
        Cow::Owned(name.to_upper_camel_case())
    } else {
        Cow::Borrowed(name)
    }
}

/// Key used to compare parameter names with name tokens: lowercase, underscores removed.
pub fn param_key(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_words() {
        assert_eq!(tokenize("GetUserByID"), vec!["Get", "User", "By", "ID"]);
        assert_eq!(
            tokenize("GetOrderByUserIDAndOrderID"),
            vec!["Get", "Order", "By", "User", "ID", "And", "Order", "ID"]
        );
        assert_eq!(tokenize("DoSomethingRandom"), vec!["Do", "Something", "Random"]);
    }

    #[test]
    fn test_acronym_runs() {
        assert_eq!(tokenize("HTTPServer"), vec!["HTTP", "Server"]);
        assert_eq!(tokenize("ListAPIKeys"), vec!["List", "API", "Keys"]);
        assert_eq!(tokenize("ID"), vec!["ID"]);
    }

    #[test]
    fn test_last_capital_of_run_starts_next_word() {
        // The capital before a lowercase letter always opens a new word
        assert_eq!(tokenize("IDentifier"), vec!["I", "Dentifier"]);
        assert_eq!(tokenize("XMLHttpRequest"), vec!["XML", "Http", "Request"]);
    }

    #[test]
    fn test_edge_inputs() {
        assert_eq!(tokenize(""), vec![""]);
        assert_eq!(tokenize("lower"), vec!["lower"]);
        assert_eq!(tokenize("getV2User"), vec!["get", "V2", "User"]);
    }

    #[test]
    fn test_normalize_identifier() {
        assert_eq!(normalize_identifier("get_user_by_id"), "GetUserById");
        assert_eq!(
            normalize_identifier("GetOrderByUserIDAndOrderID"),
            "GetOrderByUserIDAndOrderID"
        );
    }

    #[test]
    fn test_param_key() {
        assert_eq!(param_key("userID"), "userid");
        assert_eq!(param_key("order_id"), "orderid");
    }
}
