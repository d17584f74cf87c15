//! # Type Resolver
//!
//! Canonicalizes parameter and return types, separates context-like parameters and
//! error-like returns, and derives the request and response payload types.

use crate::signature::MethodSignature;
use crate::types::expr::{TypeExpr, UnsupportedType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Type names (final path segment) with special meaning to the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeConventions {
    /// Types carrying request context; excluded from payloads.
    pub context_types: BTreeSet<String>,
    /// Types denoting failure; excluded from responses.
    pub error_types: BTreeSet<String>,
}

impl Default for TypeConventions {
    fn default() -> Self {
        Self {
            context_types: BTreeSet::from(["Context".to_string()]),
            error_types: BTreeSet::from(["Error".to_string()]),
        }
    }
}

impl TypeConventions {
    /// Whether `ty` is context-like, looking through references and smart pointers.
    pub fn is_context(&self, ty: &TypeExpr) -> bool {
        ty.peeled()
            .path()
            .is_some_and(|p| self.context_types.contains(p.name()))
    }

    /// Whether `ty` is error-like, looking through references and smart pointers.
    pub fn is_error(&self, ty: &TypeExpr) -> bool {
        ty.peeled()
            .path()
            .is_some_and(|p| self.error_types.contains(p.name()))
    }
}

/// A retained (non-context) parameter with its canonical type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParam {
    /// Declared name.
    pub name: String,
    /// Canonical type.
    pub type_expr: String,
}

/// A return value with its canonical type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReturn {
    /// Canonical type.
    pub type_expr: String,
    /// Whether the type is error-like.
    pub is_error: bool,
}

/// Output of type resolution for one method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTypes {
    /// Parameters kept for the payload, in declaration order.
    pub params: Vec<ResolvedParam>,
    /// All return values, in declaration order.
    pub returns: Vec<ResolvedReturn>,
    /// Whether any parameter was context-like (or the provider flagged one).
    pub has_context: bool,
    /// Request payload type; empty when there are no retained parameters.
    pub request_type: String,
    /// Response payload type; empty when every return is error-like.
    pub response_type: String,
}

/// Resolves every type of `method`.
///
/// `type_name` is the PascalCase method name used for synthesized request types.
pub fn resolve_types(
    method: &MethodSignature,
    type_name: &str,
    conventions: &TypeConventions,
) -> Result<ResolvedTypes, UnsupportedType> {
    let mut params = Vec::new();
    let mut has_context = method.has_context_parameter;

    for param in &method.parameters {
        let ty = TypeExpr::parse(&param.type_expr)?;
        if conventions.is_context(&ty) {
            has_context = true;
        } else {
            params.push(ResolvedParam {
                name: param.name.clone(),
                type_expr: ty.to_string(),
            });
        }
    }

    let returns = method
        .returns
        .iter()
        .map(|ret| {
            let ty = TypeExpr::parse(&ret.type_expr)?;
            Ok(ResolvedReturn {
                is_error: conventions.is_error(&ty),
                type_expr: ty.to_string(),
            })
        })
        .collect::<Result<Vec<_>, UnsupportedType>>()?;

    let request_type = match params.as_slice() {
        [] => String::new(),
        [single] => single.type_expr.clone(),
        _ => format!("{}Request", type_name),
    };

    let response_type = returns
        .iter()
        .find(|r| !r.is_error)
        .map(|r| r.type_expr.clone())
        .unwrap_or_default();

    Ok(ResolvedTypes {
        params,
        returns,
        has_context,
        request_type,
        response_type,
    })
}
