//! Section-level rewriting of single-file components.
//!
//! A component file is decomposed into an ordered sequence of [`Section`]s,
//! handed to a caller-supplied transform function, and serialized back to
//! text:
//!
//! ```
//! use camino::Utf8Path;
//! use sfc_transform::{rewrite_source, RewriteOutcome};
//!
//! let source = "<template><p>hi</p></template>\n";
//! let root = Utf8Path::new("/project");
//! let outcome = rewrite_source(source, "src/App.vue", root, |_, sections, _| {
//!     // Identity transform: sections go back out unchanged.
//!     sections
//! });
//! assert!(matches!(outcome, RewriteOutcome::Transformed(_)));
//! ```
//!
//! The transform function may reorder, insert, drop, or rewrite sections
//! freely; the pipeline only requires that it return a section sequence.
//! Files that fail to parse are never partially transformed — the caller is
//! told to pass the original text through untouched.

mod collect;
mod pipeline;
mod section;
mod serialize;

pub use collect::collect_sections;
pub use pipeline::{
    rewrite_source, PassthroughReason, RewriteFilter, RewriteOutcome, SECTION_SEPARATOR,
};
pub use section::{
    append_to_script_section, create_script_setup_section, find_section_of_type,
    find_sections_of_type, Section, SectionError,
};
pub use serialize::{attributes_to_string, serialize_section};

// Re-exported so callers can construct and inspect sections without naming
// the leaf crates directly.
pub use sfc_parser::{AttributeValue, Attributes, MarkupTree};
pub use sfc_script::ScriptSource;
