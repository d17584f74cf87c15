//! # Type Expressions
//!
//! Parses Rust type syntax into a closed set of shapes. Every shape the resolver understands
//! is a variant of [`TypeExpr`]; anything else is rejected with [`UnsupportedType`].

use ra_ap_edition::Edition;
use ra_ap_syntax::ast::{self, HasGenericArgs, HasModuleItem};
use ra_ap_syntax::{AstNode, SourceFile};
use std::fmt::{self, Display};

/// Container names canonicalized as maps.
const MAP_CONTAINERS: [&str; 3] = ["HashMap", "BTreeMap", "IndexMap"];

/// Item text the parsed type is embedded in.
const WRAPPER_PREFIX: &str = "type _Wrapper = ";

/// Owning wrappers looked through when classifying a type.
pub(crate) const TRANSPARENT_WRAPPERS: [&str; 3] = ["Box", "Arc", "Rc"];

/// A `::`-separated type path without generic arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypePath {
    /// Path segments, outermost first (`["std", "io", "Error"]`).
    pub segments: Vec<String>,
}

impl TypePath {
    /// The final segment, i.e. the type's own name.
    pub fn name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }
}

impl Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("::"))
    }
}

/// `dyn Trait` or `impl Trait`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraitObjectKind {
    /// `dyn Trait`
    Dyn,
    /// `impl Trait`
    Impl,
}

/// The closed set of supported type shapes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    /// `&T` / `&mut T`.
    Reference {
        /// Whether the borrow is mutable.
        mutable: bool,
        /// Borrowed type.
        inner: Box<TypeExpr>,
    },
    /// `[T; N]`.
    Array {
        /// Element type.
        elem: Box<TypeExpr>,
        /// Length expression as written.
        len: String,
    },
    /// `[T]`.
    Slice(Box<TypeExpr>),
    /// `HashMap<K, V>` and friends.
    Map {
        /// Map type path (e.g. `std::collections::HashMap`).
        container: TypePath,
        /// Key type.
        key: Box<TypeExpr>,
        /// Value type.
        value: Box<TypeExpr>,
    },
    /// A plain path such as `User` or `uuid::Uuid`.
    Named(TypePath),
    /// A path with type arguments, e.g. `Vec<User>`.
    Generic {
        /// Generic type path.
        base: TypePath,
        /// Type arguments in order.
        args: Vec<TypeExpr>,
    },
    /// `(A, B)`; `()` is the empty tuple.
    Tuple(Vec<TypeExpr>),
    /// `dyn Trait` / `impl Trait`, keeping the first bound only.
    TraitObject {
        /// Which keyword introduced the bound.
        kind: TraitObjectKind,
        /// First trait bound.
        bound: TypePath,
    },
}

/// A type expression outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedType {
    /// The raw expression.
    pub expr: String,
    /// Why it was rejected.
    pub reason: String,
}

impl UnsupportedType {
    fn new(expr: &str, reason: impl Into<String>) -> Self {
        Self {
            expr: expr.to_string(),
            reason: reason.into(),
        }
    }
}

impl TypeExpr {
    /// Parses a Rust type expression.
    pub fn parse(raw: &str) -> Result<Self, UnsupportedType> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UnsupportedType::new(raw, "empty type expression"));
        }

        // Wrap in a type alias so the parser sees a complete item
        let code = format!("{}{};", WRAPPER_PREFIX, trimmed);
        let parse = SourceFile::parse(&code, Edition::Edition2021);
        if let Some(err) = parse.errors().first() {
            return Err(UnsupportedType::new(raw, format!("syntax error: {}", err)));
        }

        let mut items = parse.tree().items();
        let (Some(ast::Item::TypeAlias(type_alias)), None) = (items.next(), items.next()) else {
            return Err(UnsupportedType::new(raw, "not a single type expression"));
        };
        let root = type_alias
            .ty()
            .ok_or_else(|| UnsupportedType::new(raw, "not a type"))?;

        // The type must span the whole input, nothing may trail it
        let range = root.syntax().text_range();
        let expected = WRAPPER_PREFIX.len()..WRAPPER_PREFIX.len() + trimmed.len();
        if (usize::from(range.start())..usize::from(range.end())) != expected {
            return Err(UnsupportedType::new(raw, "not a single type expression"));
        }

        from_ast(&root, raw)
    }

    /// The type's own name when it is a path, dyn/impl bound or generic base.
    pub fn path(&self) -> Option<&TypePath> {
        match self {
            TypeExpr::Named(p) => Some(p),
            TypeExpr::Generic { base, .. } => Some(base),
            TypeExpr::Map { container, .. } => Some(container),
            TypeExpr::TraitObject { bound, .. } => Some(bound),
            _ => None,
        }
    }

    /// Strips references and owning wrappers (`Box`, `Arc`, `Rc`).
    pub fn peeled(&self) -> &TypeExpr {
        match self {
            TypeExpr::Reference { inner, .. } => inner.peeled(),
            TypeExpr::Generic { base, args }
                if args.len() == 1 && TRANSPARENT_WRAPPERS.contains(&base.name()) =>
            {
                args[0].peeled()
            }
            other => other,
        }
    }

    /// Whether this is the unit type `()`.
    pub fn is_unit(&self) -> bool {
        matches!(self, TypeExpr::Tuple(items) if items.is_empty())
    }
}

impl Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Reference { mutable, inner } => {
                write!(f, "&{}{}", if *mutable { "mut " } else { "" }, inner)
            }
            TypeExpr::Array { elem, len } => write!(f, "[{}; {}]", elem, len),
            TypeExpr::Slice(elem) => write!(f, "[{}]", elem),
            TypeExpr::Map {
                container,
                key,
                value,
            } => write!(f, "{}<{}, {}>", container, key, value),
            TypeExpr::Named(path) => write!(f, "{}", path),
            TypeExpr::Generic { base, args } => write!(f, "{}<{}>", base, join(args)),
            TypeExpr::Tuple(items) if items.len() == 1 => write!(f, "({},)", items[0]),
            TypeExpr::Tuple(items) => write!(f, "({})", join(items)),
            TypeExpr::TraitObject { kind, bound } => match kind {
                TraitObjectKind::Dyn => write!(f, "dyn {}", bound),
                TraitObjectKind::Impl => write!(f, "impl {}", bound),
            },
        }
    }
}

fn join(items: &[TypeExpr]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn from_ast(ty: &ast::Type, raw: &str) -> Result<TypeExpr, UnsupportedType> {
    match ty {
        ast::Type::PathType(path_type) => {
            let path = path_type
                .path()
                .ok_or_else(|| UnsupportedType::new(raw, "empty path"))?;
            from_path(&path, raw)
        }
        ast::Type::RefType(ref_type) => {
            let inner = ref_type
                .ty()
                .ok_or_else(|| UnsupportedType::new(raw, "invalid reference"))?;
            Ok(TypeExpr::Reference {
                mutable: ref_type.mut_token().is_some(),
                inner: Box::new(from_ast(&inner, raw)?),
            })
        }
        ast::Type::ArrayType(array) => {
            let elem = array
                .ty()
                .ok_or_else(|| UnsupportedType::new(raw, "array without element type"))?;
            let len = array
                .const_arg()
                .map(|c| c.syntax().text().to_string())
                .ok_or_else(|| UnsupportedType::new(raw, "array without length"))?;
            Ok(TypeExpr::Array {
                elem: Box::new(from_ast(&elem, raw)?),
                len: len.trim().to_string(),
            })
        }
        ast::Type::SliceType(slice) => {
            let elem = slice
                .ty()
                .ok_or_else(|| UnsupportedType::new(raw, "slice without element type"))?;
            Ok(TypeExpr::Slice(Box::new(from_ast(&elem, raw)?)))
        }
        ast::Type::TupleType(tuple) => Ok(TypeExpr::Tuple(
            tuple
                .fields()
                .map(|field| from_ast(&field, raw))
                .collect::<Result<_, _>>()?,
        )),
        ast::Type::ParenType(paren) => {
            let inner = paren
                .ty()
                .ok_or_else(|| UnsupportedType::new(raw, "empty parentheses"))?;
            from_ast(&inner, raw)
        }
        ast::Type::DynTraitType(dyn_type) => Ok(TypeExpr::TraitObject {
            kind: TraitObjectKind::Dyn,
            bound: first_bound(dyn_type.type_bound_list(), raw)?,
        }),
        ast::Type::ImplTraitType(impl_type) => Ok(TypeExpr::TraitObject {
            kind: TraitObjectKind::Impl,
            bound: first_bound(impl_type.type_bound_list(), raw)?,
        }),
        ast::Type::FnPtrType(_) => Err(UnsupportedType::new(
            raw,
            "function pointers are not supported",
        )),
        ast::Type::PtrType(_) => Err(UnsupportedType::new(
            raw,
            "raw pointers are not supported",
        )),
        ast::Type::NeverType(_) => Err(UnsupportedType::new(raw, "`!` is not a payload type")),
        ast::Type::InferType(_) => Err(UnsupportedType::new(raw, "`_` cannot be resolved")),
        ast::Type::MacroType(_) => Err(UnsupportedType::new(
            raw,
            "macro types cannot be expanded",
        )),
        // Higher-ranked `for<'a>` types and any syntax added later
        #[allow(unreachable_patterns)]
        _ => Err(UnsupportedType::new(raw, "unsupported type syntax")),
    }
}

fn from_path(path: &ast::Path, raw: &str) -> Result<TypeExpr, UnsupportedType> {
    let mut segments = Vec::new();
    collect_segments(path, &mut segments, raw)?;
    let base = TypePath { segments };

    let last = path
        .segment()
        .ok_or_else(|| UnsupportedType::new(raw, "empty segment"))?;
    let Some(arg_list) = last.generic_arg_list() else {
        return Ok(TypeExpr::Named(base));
    };

    let mut args = Vec::new();
    for arg in arg_list.generic_args() {
        match arg {
            ast::GenericArg::TypeArg(type_arg) => {
                let inner = type_arg
                    .ty()
                    .ok_or_else(|| UnsupportedType::new(raw, "invalid generic type"))?;
                args.push(from_ast(&inner, raw)?);
            }
            // Lifetimes carry no payload information
            ast::GenericArg::LifetimeArg(_) => {}
            _ => {
                return Err(UnsupportedType::new(
                    raw,
                    "only type and lifetime generic arguments are supported",
                ))
            }
        }
    }

    if args.is_empty() {
        return Ok(TypeExpr::Named(base));
    }
    if !MAP_CONTAINERS.contains(&base.name()) {
        return Ok(TypeExpr::Generic { base, args });
    }
    match <[TypeExpr; 2]>::try_from(args) {
        Ok([key, value]) => Ok(TypeExpr::Map {
            container: base,
            key: Box::new(key),
            value: Box::new(value),
        }),
        Err(args) => Ok(TypeExpr::Generic { base, args }),
    }
}

fn collect_segments(
    path: &ast::Path,
    out: &mut Vec<String>,
    raw: &str,
) -> Result<(), UnsupportedType> {
    if let Some(qualifier) = path.qualifier() {
        collect_segments(&qualifier, out, raw)?;
    }
    let segment = path
        .segment()
        .ok_or_else(|| UnsupportedType::new(raw, "empty segment"))?;
    match segment.name_ref() {
        Some(name) => out.push(name.text().to_string()),
        None => {
            return Err(UnsupportedType::new(
                raw,
                "qualified `<T as Trait>` paths are not supported",
            ))
        }
    }
    Ok(())
}

fn first_bound(
    bounds: Option<ast::TypeBoundList>,
    raw: &str,
) -> Result<TypePath, UnsupportedType> {
    let bound_ty = bounds
        .and_then(|list| list.bounds().find_map(|b| b.ty()))
        .ok_or_else(|| UnsupportedType::new(raw, "trait object without a trait bound"))?;
    // Associated type bindings (`Iterator<Item = u8>`) are dropped with the arguments
    let ast::Type::PathType(path_type) = bound_ty else {
        return Err(UnsupportedType::new(raw, "unsupported trait bound"));
    };
    let path = path_type
        .path()
        .ok_or_else(|| UnsupportedType::new(raw, "empty path"))?;
    let mut segments = Vec::new();
    collect_segments(&path, &mut segments, raw)?;
    Ok(TypePath { segments })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(raw: &str) -> String {
        TypeExpr::parse(raw).expect(raw).to_string()
    }

    #[test]
    fn test_canonical_forms() {
        let cases = vec![
            ("User", "User"),
            ("  uuid :: Uuid ", "uuid::Uuid"),
            ("Vec< User >", "Vec<User>"),
            ("&'a str", "&str"),
            ("&mut Vec<u8>", "&mut Vec<u8>"),
            ("[u8; 32]", "[u8; 32]"),
            ("&[User]", "&[User]"),
            ("HashMap<String,i64>", "HashMap<String, i64>"),
            ("(u64, String)", "(u64, String)"),
            ("(u64,)", "(u64,)"),
            ("()", "()"),
            ("Box<dyn std::error::Error + Send>", "Box<dyn std::error::Error>"),
            ("impl Iterator<Item = u8>", "impl Iterator"),
            ("(User)", "User"),
        ];
        for (input, expected) in cases {
            assert_eq!(canonical(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn test_shapes() {
        assert!(matches!(
            TypeExpr::parse("BTreeMap<String, Vec<u8>>").unwrap(),
            TypeExpr::Map { .. }
        ));
        assert!(matches!(
            TypeExpr::parse("[u8]").unwrap(),
            TypeExpr::Slice(_)
        ));
        assert!(TypeExpr::parse("()").unwrap().is_unit());
        assert!(matches!(
            TypeExpr::parse("Result<User, Error>").unwrap(),
            TypeExpr::Generic { args, .. } if args.len() == 2
        ));
        assert!(matches!(
            TypeExpr::parse("HashMap<String>").unwrap(),
            TypeExpr::Generic { .. }
        ));
    }

    #[test]
    fn test_peeled_looks_through_wrappers() {
        let ty = TypeExpr::parse("&Arc<Context>").unwrap();
        assert_eq!(ty.peeled().path().map(TypePath::name), Some("Context"));
    }

    #[test]
    fn test_unsupported_kinds_are_errors() {
        for raw in [
            "fn(u8) -> u8",
            "*const u8",
            "!",
            "_",
            "",
            "Vec<",
            "m!()",
            "u8; struct X",
            "Vec<User>; type Y = Z",
        ] {
            let err = TypeExpr::parse(raw).unwrap_err();
            assert_eq!(err.expr, raw);
            assert!(!err.reason.is_empty());
        }
    }
}
