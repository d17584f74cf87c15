#![deny(missing_docs)]

//! # Render Module
//!
//! Binds inferred endpoints into a handler skeleton template.

pub mod context;
pub mod engine;
pub mod helpers;

pub use context::{unique_name, MethodView, ParamView, ReturnView, TemplateContext};
pub use engine::{render, TemplateSource, DEFAULT_TEMPLATE, DEFAULT_TEMPLATE_NAME};
pub use helpers::{Helper, TemplateHelpers};
