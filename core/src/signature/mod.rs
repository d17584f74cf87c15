#![deny(missing_docs)]

//! # Signature Module
//!
//! The input side of the pipeline: structured method signatures and the providers
//! that discover them (Rust trait extraction, JSON/YAML manifests).

pub mod extractors;
pub mod manifest;
pub mod models;
pub mod traits;

pub use extractors::{extract_traits, RustTraitProvider};
pub use manifest::{parse_json_manifest, parse_yaml_manifest, ManifestProvider};
pub use models::{InterfaceSignatures, MethodSignature, Parameter, ReturnValue};
pub use traits::SignatureProvider;
