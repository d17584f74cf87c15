//! # Trait Extraction
//!
//! Discovers Rust `trait` definitions with the rust-analyzer syntax library and turns
//! each of them into an `InterfaceSignatures` record.

use crate::error::{AppError, AppResult};
use crate::signature::models::{InterfaceSignatures, MethodSignature, Parameter, ReturnValue};
use crate::signature::traits::SignatureProvider;
use ra_ap_edition::Edition;
use ra_ap_syntax::ast::{self, HasGenericArgs, HasName};
use ra_ap_syntax::{AstNode, SourceFile};
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directories never descended into.
const SKIPPED_DIRS: [&str; 2] = ["target", "vendor"];

/// Walks a source tree and extracts traits from every `.rs` file.
#[derive(Debug, Clone)]
pub struct RustTraitProvider {
    root: PathBuf,
    interface: Option<String>,
    ignore: Vec<PathBuf>,
}

impl RustTraitProvider {
    /// Creates a provider rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            interface: None,
            ignore: Vec::new(),
        }
    }

    /// Only yield the trait with this exact name.
    pub fn with_interface(mut self, name: impl Into<String>) -> Self {
        self.interface = Some(name.into());
        self
    }

    /// Skip a directory (absolute or relative to the root).
    pub fn ignoring(mut self, path: impl Into<PathBuf>) -> Self {
        self.ignore.push(path.into());
        self
    }

    fn is_skipped(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        if entry.file_type().is_dir()
            && (name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref()))
        {
            return true;
        }
        let relative = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
        self.ignore.iter().any(|ignored| {
            let trimmed = ignored.strip_prefix("./").unwrap_or(ignored);
            entry.path().starts_with(ignored) || relative.starts_with(trimmed)
        })
    }
}

impl SignatureProvider for RustTraitProvider {
    fn interfaces(&self) -> AppResult<Vec<InterfaceSignatures>> {
        let mut result = Vec::new();
        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.is_skipped(e));

        for entry in walker {
            let entry = entry.map_err(|e| AppError::Provider(e.to_string()))?;
            if !entry.file_type().is_file()
                || entry.path().extension().is_none_or(|ext| ext != "rs")
            {
                continue;
            }

            let code = fs::read_to_string(entry.path())?;
            let (package_name, import_identity) = module_identity(&self.root, entry.path());
            for mut interface in extract_traits(&code, self.interface.as_deref()) {
                tracing::debug!(
                    file = %entry.path().display(),
                    interface = %interface.interface_name,
                    methods = interface.methods.len(),
                    "found trait"
                );
                interface.package_name = package_name.clone();
                interface.import_identity = import_identity.clone();
                result.push(interface);
            }
        }

        Ok(result)
    }
}

/// Extracts all traits (or the one named `filter`) from Rust source code.
///
/// `package_name` and `import_identity` are left empty; the caller knows the file location.
pub fn extract_traits(code: &str, filter: Option<&str>) -> Vec<InterfaceSignatures> {
    let parse = SourceFile::parse(code, Edition::Edition2021);
    let file = parse.tree();
    let mut interfaces = Vec::new();

    for trait_def in file.syntax().descendants().filter_map(ast::Trait::cast) {
        let Some(name) = trait_def.name().map(|n| n.text().to_string()) else {
            continue;
        };
        if filter.is_some_and(|wanted| wanted != name) {
            continue;
        }

        let mut methods = Vec::new();
        let mut skipped_members = Vec::new();
        if let Some(items) = trait_def.assoc_item_list() {
            for item in items.assoc_items() {
                match item {
                    ast::AssocItem::Fn(func) => match method_signature(&func) {
                        Some(method) => methods.push(method),
                        None => skipped_members.push("fn <unnamed>".to_string()),
                    },
                    other => skipped_members.push(member_label(&other)),
                }
            }
        }

        interfaces.push(InterfaceSignatures {
            package_name: String::new(),
            interface_name: name,
            import_identity: String::new(),
            methods,
            skipped_members,
        });
    }

    interfaces
}

fn member_label(item: &ast::AssocItem) -> String {
    let named = |kind: &str, name: Option<ast::Name>| match name {
        Some(n) => format!("{} {}", kind, n.text()),
        None => kind.to_string(),
    };
    match item {
        ast::AssocItem::Const(c) => named("const", c.name()),
        ast::AssocItem::TypeAlias(t) => named("type", t.name()),
        ast::AssocItem::Fn(f) => named("fn", f.name()),
        ast::AssocItem::MacroCall(m) => match m.path() {
            Some(path) => format!("{}!", path.syntax().text()),
            None => "macro call".to_string(),
        },
    }
}

fn method_signature(func: &ast::Fn) -> Option<MethodSignature> {
    let name = func.name()?.text().to_string();

    let mut parameters = Vec::new();
    if let Some(list) = func.param_list() {
        for (i, param) in list.params().enumerate() {
            let Some(ty) = param.ty() else {
                continue;
            };
            let param_name = match param.pat() {
                Some(ast::Pat::IdentPat(ident)) => ident.name().map(|n| n.text().to_string()),
                _ => None,
            }
            .unwrap_or_else(|| format!("arg{}", i));
            parameters.push(Parameter::new(param_name, type_text(&ty)));
        }
    }

    let returns = func
        .ret_type()
        .and_then(|ret| ret.ty())
        .map(|ty| flatten_returns(&ty))
        .unwrap_or_default();

    Some(MethodSignature::new(name, parameters, returns))
}

/// `Result<T, E>` -> `[T, E]`, `Result<T>` -> `[T, Error]`, tuples -> their elements.
fn flatten_returns(ty: &ast::Type) -> Vec<ReturnValue> {
    if let ast::Type::PathType(path_type) = ty {
        let segment = path_type.path().and_then(|p| p.segment());
        let is_result = segment
            .as_ref()
            .and_then(|s| s.name_ref())
            .is_some_and(|n| n.text() == "Result");
        if let (true, Some(segment)) = (is_result, segment) {
            let args: Vec<ast::Type> = segment
                .generic_arg_list()
                .map(|list| {
                    list.generic_args()
                        .filter_map(|arg| match arg {
                            ast::GenericArg::TypeArg(t) => t.ty(),
                            _ => None,
                        })
                        .collect()
                })
                .unwrap_or_default();

            match args.as_slice() {
                [ok] => {
                    let mut values = expand_tuple(ok);
                    values.push(ReturnValue::new("Error"));
                    return values;
                }
                [ok, err, ..] => {
                    let mut values = expand_tuple(ok);
                    values.push(ReturnValue::new(type_text(err)));
                    return values;
                }
                [] => {}
            }
        }
    }
    expand_tuple(ty)
}

fn expand_tuple(ty: &ast::Type) -> Vec<ReturnValue> {
    match ty {
        ast::Type::TupleType(tuple) => tuple
            .fields()
            .map(|field| ReturnValue::new(type_text(&field)))
            .collect(),
        other => vec![ReturnValue::new(type_text(other))],
    }
}

fn type_text(ty: &ast::Type) -> String {
    ty.syntax().text().to_string()
}

/// Derives `(package_name, import_identity)` from a file location.
///
/// `core/src/services/users.rs` -> `("users", "crate::services::users")`,
/// `core/src/lib.rs` -> `("core", "crate")`.
pub(crate) fn module_identity(root: &Path, file: &Path) -> (String, String) {
    let relative = file.strip_prefix(root).unwrap_or(file);
    let mut parts: Vec<String> = relative
        .with_extension("")
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let crate_name = match parts.iter().rposition(|p| p == "src") {
        Some(idx) => {
            let name = if idx > 0 {
                parts[idx - 1].clone()
            } else {
                root.canonicalize()
                    .ok()
                    .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
                    .unwrap_or_else(|| "crate".to_string())
            };
            parts.drain(..=idx);
            name
        }
        None => root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "crate".to_string()),
    };

    if parts
        .last()
        .is_some_and(|last| matches!(last.as_str(), "lib" | "main" | "mod"))
    {
        parts.pop();
    }

    let package_name = parts
        .last()
        .cloned()
        .unwrap_or_else(|| crate_name.replace('-', "_"));
    let import_identity = std::iter::once("crate".to_string())
        .chain(parts)
        .collect::<Vec<_>>()
        .join("::");

    (package_name, import_identity)
}
