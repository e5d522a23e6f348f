//! Component import resolution for sfc-rewrite.
//!
//! Given a `scriptSetup` section, this crate builds the component dependency
//! map: each locally-bound component import resolved to its on-disk path.
//! Resolution tries, in order:
//!
//! 1. tsconfig `paths` aliases, keeping the first candidate that exists on
//!    disk (expressed relative to the project root);
//! 2. relative specifiers, joined against the importing file's directory;
//! 3. everything else passes through verbatim — a bare specifier that no
//!    alias covers is not an error.

mod components;
mod paths;
mod resolve;
mod tsconfig;

pub use components::{collect_component_dependencies, ResolveError};
pub use paths::PathsMatcher;
pub use resolve::{make_relative, resolve_module};
pub use tsconfig::{CompilerOptions, TsConfig};
