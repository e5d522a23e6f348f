//! File discovery and per-file driving of the rewrite pipeline.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use thiserror::Error;
use walkdir::WalkDir;

use sfc_resolver::{collect_component_dependencies, PathsMatcher, TsConfig};
use sfc_transform::{collect_sections, rewrite_source, RewriteFilter, Section};

use crate::cli::{Args, Command};

/// Runner errors.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Invalid glob pattern.
    #[error("invalid glob pattern: {0}")]
    InvalidGlob(#[from] globset::Error),

    /// Filesystem failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to render the dependency report.
    #[error("failed to render report: {0}")]
    Report(#[from] serde_json::Error),
}

/// Runs the selected command over all matching files.
pub fn run(args: Args) -> Result<(), RunnerError> {
    let filter = RewriteFilter::new(&args.includes, &args.excludes)?;
    let files = discover(&args.root, &filter);

    match args.command {
        Command::Normalize { write, debug_path } => {
            normalize(&args.root, &files, write, debug_path.as_deref())
        }
        Command::Deps => deps(&args.root, &files),
    }
}

/// Walks the project root and returns the root-relative paths in scope.
fn discover(root: &Utf8Path, filter: &RewriteFilter) -> Vec<Utf8PathBuf> {
    let mut files: Vec<Utf8PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| Utf8PathBuf::try_from(e.into_path()).ok())
        .filter_map(|p| p.strip_prefix(root).map(Utf8Path::to_owned).ok())
        .filter(|rel| filter.is_match(rel.as_str()))
        .collect();
    files.sort();
    files
}

fn normalize(
    root: &Utf8Path,
    files: &[Utf8PathBuf],
    write: bool,
    debug_path: Option<&Utf8Path>,
) -> Result<(), RunnerError> {
    for rel in files {
        let path = root.join(rel);
        let source = fs::read_to_string(&path)?;

        let outcome = rewrite_source(&source, rel.as_str(), root, |_, sections, _| sections);
        let output = outcome.into_text(&source);

        if let Some(debug_path) = debug_path {
            dump_debug(root, debug_path, rel, &output)?;
        }

        if write {
            fs::write(&path, &output)?;
        } else {
            println!("==> {} <==", rel);
            println!("{}", output);
        }
    }
    Ok(())
}

/// Writes one rewritten file into the debug mirror tree.
fn dump_debug(
    root: &Utf8Path,
    debug_path: &Utf8Path,
    rel: &Utf8Path,
    content: &str,
) -> Result<(), RunnerError> {
    let target = root.join(debug_path).join(rel);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, content)?;
    Ok(())
}

fn deps(root: &Utf8Path, files: &[Utf8PathBuf]) -> Result<(), RunnerError> {
    let ts_config = TsConfig::find(root);
    let matcher = ts_config
        .as_ref()
        .and_then(|(path, config)| PathsMatcher::from_config(path, config));

    let mut report: IndexMap<String, IndexMap<String, String>> = IndexMap::new();

    for rel in files {
        let source = fs::read_to_string(root.join(rel))?;
        let parsed = sfc_parser::parse(&source, rel.as_str());
        if !parsed.errors.is_empty() {
            eprintln!("Warning: skipping {} ({} parse errors)", rel, parsed.errors.len());
            continue;
        }
        let sections = match collect_sections(&parsed.descriptor) {
            Ok(sections) => sections,
            Err(e) => {
                eprintln!("Warning: skipping {} ({})", rel, e);
                continue;
            }
        };
        let Some(setup) = sections
            .iter()
            .find(|section| matches!(section, Section::ScriptSetup { .. }))
        else {
            continue;
        };

        // The section kind is checked above, so this cannot be a usage error.
        let dependencies =
            collect_component_dependencies(setup, matcher.as_ref(), root, rel)
                .expect("scriptSetup section was selected");

        report.insert(
            rel.to_string(),
            dependencies
                .into_iter()
                .map(|(name, path)| (name.to_string(), path))
                .collect(),
        );
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
