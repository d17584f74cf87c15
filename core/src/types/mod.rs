#![deny(missing_docs)]

//! # Types Module
//!
//! Parsing of type expressions into a closed [`TypeExpr`] and the payload rules built on it.

pub mod expr;
pub mod resolver;

pub use expr::{TraitObjectKind, TypeExpr, TypePath, UnsupportedType};
pub use resolver::{resolve_types, ResolvedParam, ResolvedReturn, ResolvedTypes, TypeConventions};
