//! # Signature Models
//!
//! Input contract produced by signature providers: interfaces and their method signatures.
//! Field names follow the camelCase wire format so manifests from any extractor can be read.

use serde::{Deserialize, Serialize};

/// A declared method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Declared parameter name.
    pub name: String,
    /// Type expression in Rust type syntax (e.g. `&Context`, `Vec<User>`).
    pub type_expr: String,
}

impl Parameter {
    /// Creates a parameter from a name and type expression.
    pub fn new(name: impl Into<String>, type_expr: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_expr: type_expr.into(),
        }
    }
}

/// A single declared return value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnValue {
    /// Type expression in Rust type syntax.
    pub type_expr: String,
}

impl ReturnValue {
    /// Creates a return value from a type expression.
    pub fn new(type_expr: impl Into<String>) -> Self {
        Self {
            type_expr: type_expr.into(),
        }
    }
}

/// The declared signature of one interface method. Never mutated after extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodSignature {
    /// Method identifier, e.g. `GetOrderByUserIDAndOrderID` or `get_user_by_id`.
    pub name: String,
    /// Parameters in declaration order (receiver excluded).
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Return values in declaration order.
    #[serde(default)]
    pub returns: Vec<ReturnValue>,
    /// Set by extractors that saw an unnamed context argument.
    #[serde(default)]
    pub has_context_parameter: bool,
}

impl MethodSignature {
    /// Creates a signature with no context flag.
    pub fn new(
        name: impl Into<String>,
        parameters: Vec<Parameter>,
        returns: Vec<ReturnValue>,
    ) -> Self {
        Self {
            name: name.into(),
            parameters,
            returns,
            has_context_parameter: false,
        }
    }
}

/// One interface (trait) and the methods it declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceSignatures {
    /// Package/module name the interface lives in.
    #[serde(default)]
    pub package_name: String,
    /// Interface name.
    pub interface_name: String,
    /// Import path of the defining module (e.g. `crate::services::users`).
    #[serde(default)]
    pub import_identity: String,
    /// Methods in declaration order.
    #[serde(default)]
    pub methods: Vec<MethodSignature>,
    /// Labels of members that were not method signatures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_members: Vec<String>,
}
