//! # Template Context
//!
//! The aggregate record bound into a template. Field names are PascalCase because that is
//! the surface templates address (`Methods`, `HttpMethod`, `UrlPath`, ...).

use crate::inference::{param_key, EndpointDescriptor, Inference};
use crate::signature::MethodSignature;
use heck::ToSnakeCase;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Everything a template sees for one interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateContext {
    /// Package (module) the interface was declared in.
    pub package_name: String,
    /// Interface (trait) name.
    pub interface_name: String,
    /// Methods in declaration order.
    pub methods: Vec<MethodView>,
    /// Path the generated code imports the interface from.
    pub import_name: String,
    /// Name of the directory the output is written to.
    pub output_dir_name: String,
}

/// One method: its endpoint descriptor joined with its signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MethodView {
    /// Declared method name.
    pub name: String,
    /// The inferred endpoint; its fields appear directly on the method.
    #[serde(flatten)]
    pub endpoint: EndpointDescriptor,
    /// Non-context parameters in declaration order.
    pub params: Vec<ParamView>,
    /// Return values in declaration order.
    pub returns: Vec<ReturnView>,
    /// Whether the method takes a context argument.
    pub has_context: bool,
}

/// A parameter as templates see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParamView {
    /// Declared name.
    pub name: String,
    /// Canonical type.
    #[serde(rename = "Type")]
    pub type_expr: String,
    /// snake_case variable name, unique within the handler.
    pub var: String,
    /// Matching key, comparable with `PathParams` entries.
    pub key: String,
}

/// A return value as templates see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReturnView {
    /// Canonical type.
    #[serde(rename = "Type")]
    pub type_expr: String,
    /// Whether the type is error-like.
    pub is_error: bool,
}

impl MethodView {
    /// Joins a signature with its inference result.
    ///
    /// Variable names are made unique against `reserved` and against each other.
    pub fn new(
        method: &MethodSignature,
        inference: Inference,
        reserved: &BTreeSet<String>,
    ) -> Self {
        let mut taken = reserved.clone();
        let params = inference
            .types
            .params
            .into_iter()
            .map(|p| {
                let var = unique_name(&p.name.to_snake_case(), &taken);
                taken.insert(var.clone());
                ParamView {
                    key: param_key(&p.name),
                    name: p.name,
                    type_expr: p.type_expr,
                    var,
                }
            })
            .collect();

        let returns = inference
            .types
            .returns
            .into_iter()
            .map(|r| ReturnView {
                type_expr: r.type_expr,
                is_error: r.is_error,
            })
            .collect();

        Self {
            name: method.name.clone(),
            endpoint: inference.descriptor,
            params,
            returns,
            has_context: inference.types.has_context,
        }
    }
}

/// Returns `base`, or `base1`, `base2`, ... for the first candidate not in `taken`.
pub fn unique_name(base: &str, taken: &BTreeSet<String>) -> String {
    let base = if base.is_empty() { "arg" } else { base };
    if !taken.contains(base) {
        return base.to_string();
    }
    (1..)
        .map(|n| format!("{}{}", base, n))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| base.to_string())
}
