//! # Template Helpers
//!
//! The named text transforms and return-shape predicates templates may call.
//! Helpers are selected through an explicit [`TemplateHelpers`] value rather than a
//! shared registry, so every render sees exactly the set it was given.

use crate::render::context::ReturnView;
use heck::{ToSnakeCase, ToUpperCamelCase};
use minijinja::value::ViaDeserialize;
use minijinja::Environment;
use std::collections::BTreeSet;

/// Every helper a template can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Helper {
    /// Filter `snake_case`: `GetUserByID` -> `get_user_by_id`.
    SnakeCase,
    /// Filter `pascal_case`: `user_service` -> `UserService`.
    PascalCase,
    /// Filter `lower`.
    Lower,
    /// Filter `or_else(fallback)`: the fallback when the value is empty.
    OrElse,
    /// Function `has_error(returns)`: at least one error-like return.
    HasError,
    /// Function `has_only_error(returns)`: exactly one return and it is error-like.
    HasOnlyError,
    /// Function `has_multiple(returns)`: more than one non-error return.
    HasMultiple,
}

impl Helper {
    /// All helpers.
    pub const ALL: [Helper; 7] = [
        Helper::SnakeCase,
        Helper::PascalCase,
        Helper::Lower,
        Helper::OrElse,
        Helper::HasError,
        Helper::HasOnlyError,
        Helper::HasMultiple,
    ];

    /// Name under which the helper is visible to templates.
    pub fn name(self) -> &'static str {
        match self {
            Helper::SnakeCase => "snake_case",
            Helper::PascalCase => "pascal_case",
            Helper::Lower => "lower",
            Helper::OrElse => "or_else",
            Helper::HasError => "has_error",
            Helper::HasOnlyError => "has_only_error",
            Helper::HasMultiple => "has_multiple",
        }
    }

    fn register(self, env: &mut Environment<'_>) {
        let name = self.name();
        match self {
            Helper::SnakeCase => env.add_filter(name, snake_case),
            Helper::PascalCase => env.add_filter(name, pascal_case),
            Helper::Lower => env.add_filter(name, lower),
            Helper::OrElse => env.add_filter(name, or_else),
            Helper::HasError => env.add_function(
                name,
                |returns: ViaDeserialize<Vec<ReturnView>>| has_error(&returns.0),
            ),
            Helper::HasOnlyError => env.add_function(
                name,
                |returns: ViaDeserialize<Vec<ReturnView>>| has_only_error(&returns.0),
            ),
            Helper::HasMultiple => env.add_function(
                name,
                |returns: ViaDeserialize<Vec<ReturnView>>| has_multiple(&returns.0),
            ),
        }
    }
}

/// The helper set handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateHelpers {
    enabled: BTreeSet<Helper>,
}

impl Default for TemplateHelpers {
    fn default() -> Self {
        Self {
            enabled: Helper::ALL.into_iter().collect(),
        }
    }
}

impl TemplateHelpers {
    /// An empty set; only the engine's built-ins remain available.
    pub fn none() -> Self {
        Self {
            enabled: BTreeSet::new(),
        }
    }

    /// Adds a helper.
    pub fn with(mut self, helper: Helper) -> Self {
        self.enabled.insert(helper);
        self
    }

    /// Removes a helper.
    pub fn without(mut self, helper: Helper) -> Self {
        self.enabled.remove(&helper);
        self
    }

    /// Whether `helper` is enabled.
    pub fn contains(&self, helper: Helper) -> bool {
        self.enabled.contains(&helper)
    }

    /// Enabled helpers in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Helper> + '_ {
        self.enabled.iter().copied()
    }

    pub(crate) fn install(&self, env: &mut Environment<'_>) {
        for helper in self.iter() {
            helper.register(env);
        }
    }
}

/// Converts to snake_case.
pub fn snake_case(value: &str) -> String {
    value.to_snake_case()
}

/// Converts to PascalCase.
pub fn pascal_case(value: &str) -> String {
    value.to_upper_camel_case()
}

/// Lowercases.
pub fn lower(value: &str) -> String {
    value.to_lowercase()
}

/// Returns `fallback` when `value` is empty.
pub fn or_else(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// At least one return is error-like.
pub fn has_error(returns: &[ReturnView]) -> bool {
    returns.iter().any(|r| r.is_error)
}

/// Exactly one return, and it is error-like.
pub fn has_only_error(returns: &[ReturnView]) -> bool {
    matches!(returns, [only] if only.is_error)
}

/// More than one non-error return.
pub fn has_multiple(returns: &[ReturnView]) -> bool {
    returns.iter().filter(|r| !r.is_error).count() > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn returns(shape: &[(&str, bool)]) -> Vec<ReturnView> {
        shape
            .iter()
            .map(|(ty, is_error)| ReturnView {
                type_expr: ty.to_string(),
                is_error: *is_error,
            })
            .collect()
    }

    #[test]
    fn test_case_helpers() {
        assert_eq!(snake_case("CamelCaseString"), "camel_case_string");
        assert_eq!(snake_case("Word"), "word");
        assert_eq!(snake_case(""), "");
        assert_eq!(pascal_case("user_service"), "UserService");
        assert_eq!(lower("GET"), "get");
    }

    #[test]
    fn test_or_else() {
        assert_eq!(or_else("hello", "world"), "hello");
        assert_eq!(or_else("", "world"), "world");
    }

    #[test]
    fn test_return_predicates() {
        let value_and_error = returns(&[("i64", false), ("Error", true)]);
        let only_error = returns(&[("Error", true)]);
        let two_values = returns(&[("String", false), ("i64", false)]);

        assert!(has_error(&value_and_error));
        assert!(has_error(&only_error));
        assert!(!has_error(&two_values));

        assert!(has_only_error(&only_error));
        assert!(!has_only_error(&value_and_error));
        assert!(!has_only_error(&two_values));
        assert!(!has_only_error(&[]));

        assert!(has_multiple(&two_values));
        assert!(!has_multiple(&returns(&[("String", false)])));
        assert!(!has_multiple(&only_error));
    }

    #[test]
    fn test_helper_set_is_explicit() {
        let helpers = TemplateHelpers::none().with(Helper::Lower);
        assert!(helpers.contains(Helper::Lower));
        assert!(!helpers.contains(Helper::SnakeCase));
        assert_eq!(TemplateHelpers::default().iter().count(), Helper::ALL.len());
        assert!(!TemplateHelpers::default()
            .without(Helper::OrElse)
            .contains(Helper::OrElse));
    }
}
