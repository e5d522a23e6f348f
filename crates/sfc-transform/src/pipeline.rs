//! The rewrite pipeline.
//!
//! Per-file state machine: unparsed -> parsed -> transformed -> serialized,
//! or unparsed -> passthrough when the parse reports errors. A file is never
//! partially transformed.

use camino::Utf8Path;
use globset::{Glob, GlobSet, GlobSetBuilder};

use sfc_parser::ParseError;
use sfc_script::ScriptError;

use crate::collect::collect_sections;
use crate::section::Section;
use crate::serialize::serialize_section;

/// The separator between serialized sections.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Why a file was passed through unchanged.
#[derive(Debug)]
pub enum PassthroughReason {
    /// The document parser reported errors.
    DocumentErrors(Vec<ParseError>),
    /// A script block's content did not parse.
    ScriptError(ScriptError),
}

/// The result of rewriting one file.
#[derive(Debug)]
pub enum RewriteOutcome {
    /// The file was parsed, transformed, and reserialized.
    Transformed(String),
    /// The original text should be used unchanged.
    Passthrough(PassthroughReason),
}

impl RewriteOutcome {
    /// The output text, given the original source for the passthrough case.
    pub fn into_text(self, original: &str) -> String {
        match self {
            RewriteOutcome::Transformed(text) => text,
            RewriteOutcome::Passthrough(_) => original.to_string(),
        }
    }
}

/// Rewrites one file's source text.
///
/// `filename` is the project-relative path of the file; it is used to tag
/// parsed scripts and is handed to the transform function along with the
/// project root. The transform function receives the full ordered section
/// sequence and returns the sequence to serialize — reordered, extended, or
/// filtered as it sees fit.
///
/// Sections that serialize to the empty string are dropped before the rest
/// are joined with a blank line; a transform that returns no sections yields
/// empty output.
pub fn rewrite_source<F>(
    source: &str,
    filename: &str,
    root: &Utf8Path,
    transformer: F,
) -> RewriteOutcome
where
    F: FnOnce(&str, Vec<Section>, &Utf8Path) -> Vec<Section>,
{
    let parsed = sfc_parser::parse(source, filename);
    if !parsed.errors.is_empty() {
        return RewriteOutcome::Passthrough(PassthroughReason::DocumentErrors(parsed.errors));
    }

    let sections = match collect_sections(&parsed.descriptor) {
        Ok(sections) => sections,
        Err(err) => return RewriteOutcome::Passthrough(PassthroughReason::ScriptError(err)),
    };

    let transformed = transformer(filename, sections, root);

    let rendered: Vec<String> = transformed
        .iter()
        .map(serialize_section)
        .filter(|text| !text.is_empty())
        .collect();

    RewriteOutcome::Transformed(rendered.join(SECTION_SEPARATOR))
}

/// An include/exclude glob filter over project-relative paths.
///
/// A path is in scope when it matches at least one include pattern and no
/// exclude pattern.
#[derive(Debug)]
pub struct RewriteFilter {
    includes: GlobSet,
    excludes: GlobSet,
}

impl RewriteFilter {
    /// Builds a filter from glob pattern lists.
    pub fn new(includes: &[String], excludes: &[String]) -> Result<Self, globset::Error> {
        Ok(Self {
            includes: build_set(includes)?,
            excludes: build_set(excludes)?,
        })
    }

    /// The default filter: `src/**/*.vue`, excluding `node_modules`.
    pub fn default_patterns() -> Self {
        // The defaults are valid patterns; building them cannot fail.
        Self::new(
            &["src/**/*.vue".to_string()],
            &["node_modules/**/*".to_string()],
        )
        .expect("default glob patterns are valid")
    }

    /// Whether the given project-relative path is in scope.
    pub fn is_match(&self, path: &str) -> bool {
        self.includes.is_match(path) && !self.excludes.is_match(path)
    }
}

fn build_set(patterns: &[String]) -> Result<GlobSet, globset::Error> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    builder.build()
}
