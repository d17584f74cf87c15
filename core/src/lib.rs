#![deny(missing_docs)]

//! # Interfacery Core
//!
//! Infers REST endpoints (verb, URL path, path and query parameters, payload types) from
//! interface method signatures and renders them into handler skeletons.

/// Shared error types.
pub mod error;

/// Signature models and the providers that discover them.
pub mod signature;

/// Type expression parsing and payload resolution.
pub mod types;

/// Naming-convention inference of endpoint descriptors.
pub mod inference;

/// Template rendering of handler skeletons.
pub mod render;

/// Interface-level generation driver.
pub mod generator;

pub use error::{AppError, AppResult};
pub use generator::{GeneratedInterface, Generator, InferredInterface};
pub use inference::{infer_endpoint, EndpointDescriptor, HttpMethod, InferenceConfig};
pub use render::{Helper, TemplateHelpers, TemplateSource};
pub use signature::{
    InterfaceSignatures, ManifestProvider, MethodSignature, RustTraitProvider, SignatureProvider,
};
pub use types::TypeConventions;
