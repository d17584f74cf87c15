//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Per-method failures (`MalformedMember`, `UnsupportedTypeExpression`) are collected by the
//! generator and never abort a batch. `TemplateRender` and provider failures are fatal.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Wrapper for JSON manifest errors.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// Wrapper for YAML manifest errors.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// An interface member that is not a method signature (e.g. an associated type).
    #[from(ignore)]
    #[display("Skipped member '{member}' of '{interface}': not a method signature")]
    MalformedMember {
        /// Interface owning the member.
        interface: String,
        /// Short label of the offending member.
        member: String,
    },

    /// A parameter or return type the resolver cannot canonicalize.
    #[from(ignore)]
    #[display("Unsupported type `{expr}` in {interface}::{method}: {reason}")]
    UnsupportedTypeExpression {
        /// Interface owning the method.
        interface: String,
        /// Method whose signature carries the type.
        method: String,
        /// The raw type expression.
        expr: String,
        /// Why it could not be canonicalized.
        reason: String,
    },

    /// Template parsing or rendering failed.
    #[from(ignore)]
    #[display("Template Error in '{template}': {message}")]
    TemplateRender {
        /// Name of the template being rendered.
        template: String,
        /// Engine message.
        message: String,
    },

    /// The signature provider could not produce interfaces.
    #[from(ignore)]
    #[display("Provider Error: {_0}")]
    Provider(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

impl AppError {
    /// Whether this error only concerns a single method and may be skipped.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::MalformedMember { .. } | AppError::UnsupportedTypeExpression { .. }
        )
    }
}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
