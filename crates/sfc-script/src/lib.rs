//! Script handling for sfc-rewrite.
//!
//! Wraps the swc TypeScript parser behind a [`ScriptSource`] handle that keeps
//! the originating filename and source text alongside the parsed module, and
//! provides static import extraction over that module.
//!
//! # Example
//!
//! ```
//! use sfc_script::{extract_imports, ImportKind, ScriptSource};
//!
//! let source = ScriptSource::parse("App.vue", "import Child from './Child.vue'").unwrap();
//! let imports = extract_imports(&source);
//! assert_eq!(imports.len(), 1);
//! assert_eq!(imports[0].kind, ImportKind::Default);
//! assert_eq!(imports[0].local_name, "Child");
//! ```

mod imports;
mod source;

pub use imports::{
    extract_imports, has_default_import_from_module, has_default_type_import_from_module,
    has_named_import_from_module, has_named_type_import_from_module, Import, ImportKind,
};
pub use source::{ScriptError, ScriptSource};
