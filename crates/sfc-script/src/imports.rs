//! Static import extraction.
//!
//! Walks only the top level of a parsed module: import declarations cannot
//! appear in nested scopes, so a single-level scan is complete.

use smol_str::SmolStr;
use swc_ecma_ast::{ImportDecl, ImportSpecifier, ModuleDecl, ModuleItem, Str};

use crate::source::ScriptSource;

/// How an import binds its local name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// `import Name from '...'`
    Default,
    /// `import { name } from '...'`
    Named,
}

/// One statically-detected import binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// Default or named.
    pub kind: ImportKind,
    /// Whether the binding is erased at compile time (`import type` on the
    /// statement, or `type` on the individual specifier).
    pub is_type_only: bool,
    /// The identifier bound in the importing scope, after any rename.
    pub local_name: SmolStr,
    /// The module specifier, verbatim and unresolved.
    pub module: SmolStr,
}

/// Extracts all default and named import bindings from a parsed script.
///
/// Bare side-effect imports (`import './x'`) bind no local name and are
/// skipped, as are namespace imports (`import * as ns from '...'`) — neither
/// produces a trackable component binding. Records preserve declaration
/// order; a declaration with both a default and named bindings emits the
/// default record first.
pub fn extract_imports(source: &ScriptSource) -> Vec<Import> {
    let mut result = Vec::new();

    for item in &source.module().body {
        let ModuleItem::ModuleDecl(ModuleDecl::Import(import_decl)) = item else {
            continue;
        };
        if import_decl.specifiers.is_empty() {
            continue;
        }
        extract_from_declaration(import_decl, &mut result);
    }

    result
}

fn extract_from_declaration(decl: &ImportDecl, result: &mut Vec<Import>) {
    let module = str_text(&decl.src);

    for specifier in &decl.specifiers {
        match specifier {
            ImportSpecifier::Default(default) => result.push(Import {
                kind: ImportKind::Default,
                is_type_only: decl.type_only,
                local_name: SmolStr::new(default.local.sym.as_str()),
                module: module.clone(),
            }),
            ImportSpecifier::Named(named) => result.push(Import {
                kind: ImportKind::Named,
                // Either level can mark the binding type-only.
                is_type_only: decl.type_only || named.is_type_only,
                local_name: SmolStr::new(named.local.sym.as_str()),
                module: module.clone(),
            }),
            ImportSpecifier::Namespace(_) => {}
        }
    }
}

fn str_text(value: &Str) -> SmolStr {
    match value.value.as_str() {
        Some(text) => SmolStr::new(text),
        None => SmolStr::new(value.value.to_string_lossy()),
    }
}

/// Whether a default import of `name` from `module` exists (type-only or not).
pub fn has_default_import_from_module(source: &ScriptSource, name: &str, module: &str) -> bool {
    extract_imports(source)
        .iter()
        .any(|i| i.kind == ImportKind::Default && i.local_name == name && i.module == module)
}

/// Whether a type-only default import of `name` from `module` exists.
pub fn has_default_type_import_from_module(
    source: &ScriptSource,
    name: &str,
    module: &str,
) -> bool {
    extract_imports(source).iter().any(|i| {
        i.kind == ImportKind::Default
            && i.is_type_only
            && i.local_name == name
            && i.module == module
    })
}

/// Whether a named value (non-type-only) import of `name` from `module` exists.
pub fn has_named_import_from_module(source: &ScriptSource, name: &str, module: &str) -> bool {
    extract_imports(source).iter().any(|i| {
        i.kind == ImportKind::Named
            && !i.is_type_only
            && i.local_name == name
            && i.module == module
    })
}

/// Whether a type-only named import of `name` from `module` exists.
pub fn has_named_type_import_from_module(source: &ScriptSource, name: &str, module: &str) -> bool {
    extract_imports(source).iter().any(|i| {
        i.kind == ImportKind::Named && i.is_type_only && i.local_name == name && i.module == module
    })
}
