#![deny(missing_docs)]

//! # Inference Module
//!
//! Derives an [`EndpointDescriptor`] from a [`MethodSignature`]:
//! tokenize the name, classify the action and verb, build resource segments,
//! bind path parameters and resolve payload types.
//!
//! Every stage is a pure function; signatures may be processed in any order or in parallel.

pub mod action;
pub mod models;
pub mod params;
pub mod resource;
pub mod tokenizer;

pub use action::{classify_action, infer_http_method};
pub use models::{placeholders, Action, EndpointDescriptor, HttpMethod};
pub use params::{resolve_path_params, ParamResolution, PathPart};
pub use resource::{build_resource, join_url, ResourceSplit};
pub use tokenizer::{normalize_identifier, param_key, tokenize};

use crate::signature::MethodSignature;
use crate::types::{resolve_types, ResolvedTypes, TypeConventions, UnsupportedType};
use heck::ToSnakeCase;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Identifiers the default handler skeleton already uses.
pub const DEFAULT_RESERVED_NAMES: [&str; 5] = ["service", "path", "query", "body", "req"];

/// Knobs of the inference engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Prepended to every URL path (e.g. `/api/v1`).
    pub route_prefix: Option<String>,
    /// Verb for names matching no known prefix.
    pub fallback_verb: HttpMethod,
    /// Context and error type names.
    pub type_conventions: TypeConventions,
    /// Names generated variables must not collide with.
    pub reserved_names: BTreeSet<String>,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            route_prefix: None,
            fallback_verb: HttpMethod::Get,
            type_conventions: TypeConventions::default(),
            reserved_names: DEFAULT_RESERVED_NAMES.map(String::from).into(),
        }
    }
}

/// Everything inferred for one method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inference {
    /// The endpoint shape.
    pub descriptor: EndpointDescriptor,
    /// Canonical types and payload decisions.
    pub types: ResolvedTypes,
    /// `By` tokens that were kept as literal path segments.
    pub unresolved: Vec<String>,
}

/// Runs the full inference pipeline on one method signature.
pub fn infer_endpoint(
    method: &MethodSignature,
    config: &InferenceConfig,
) -> Result<Inference, UnsupportedType> {
    let name = normalize_identifier(&method.name);
    let tokens = tokenize(&name);

    let (action, rest) = classify_action(&tokens);
    let http_method = infer_http_method(&name, config.fallback_verb);

    let split = build_resource(rest, action);
    let declared: Vec<String> = method.parameters.iter().map(|p| p.name.clone()).collect();
    let resolution = resolve_path_params(split.by_tokens, &declared, action);

    let types = resolve_types(method, &name, &config.type_conventions)?;

    let parts: Vec<String> = split
        .segments
        .into_iter()
        .chain(resolution.parts.iter().map(PathPart::render))
        .collect();
    let url_path = join_url(config.route_prefix.as_deref(), &parts);
    // Placeholders written into the route prefix come first
    let path_params = placeholders(&url_path);

    let query_params = if http_method.is_bodiless() {
        types
            .params
            .iter()
            .filter(|p| !path_params.contains(&param_key(&p.name)))
            .map(|p| p.name.clone())
            .collect()
    } else {
        Vec::new()
    };

    let descriptor = EndpointDescriptor {
        http_method,
        url_path,
        path_params,
        query_params,
        request_type: types.request_type.clone(),
        response_type: types.response_type.clone(),
        handler_name: name.to_snake_case(),
    };

    Ok(Inference {
        descriptor,
        types,
        unresolved: resolution.unresolved,
    })
}
