//! tsconfig `paths` alias matching.

use camino::{Utf8Path, Utf8PathBuf};

use crate::resolve::normalize;
use crate::tsconfig::TsConfig;

/// A matcher over the `paths` mappings of a tsconfig.
///
/// Candidates come back most-specific-first: exact patterns beat wildcard
/// patterns, and wildcard patterns with longer literal prefixes beat shorter
/// ones. Within one pattern, targets keep their configured order. The matcher
/// performs no filesystem checks; candidate existence is the caller's
/// concern.
#[derive(Debug, Clone)]
pub struct PathsMatcher {
    base: Utf8PathBuf,
    entries: Vec<PathsEntry>,
}

#[derive(Debug, Clone)]
struct PathsEntry {
    pattern: String,
    targets: Vec<String>,
}

impl PathsMatcher {
    /// Builds a matcher from a loaded tsconfig and the path it was loaded
    /// from. Returns `None` when the config maps no paths.
    pub fn from_config(config_path: &Utf8Path, config: &TsConfig) -> Option<PathsMatcher> {
        let paths = &config.compiler_options.paths;
        if paths.is_empty() {
            return None;
        }

        let config_dir = config_path.parent().unwrap_or(Utf8Path::new("."));
        let base = match &config.compiler_options.base_url {
            Some(base_url) => normalize(&config_dir.join(base_url)),
            None => config_dir.to_owned(),
        };

        let entries = paths
            .iter()
            .map(|(pattern, targets)| PathsEntry {
                pattern: pattern.clone(),
                targets: targets.clone(),
            })
            .collect();

        Some(PathsMatcher { base, entries })
    }

    /// Returns the candidate paths for a specifier, best match first.
    /// Empty when no pattern matches.
    pub fn match_specifier(&self, specifier: &str) -> Vec<Utf8PathBuf> {
        let mut matches: Vec<(usize, &PathsEntry, Option<&str>)> = Vec::new();

        for entry in &self.entries {
            match pattern_match(&entry.pattern, specifier) {
                Some(PatternMatch::Exact) => matches.push((usize::MAX, entry, None)),
                Some(PatternMatch::Star { text, prefix_len }) => {
                    matches.push((prefix_len, entry, Some(text)));
                }
                None => {}
            }
        }

        // Stable sort keeps configuration order among equally-specific
        // patterns.
        matches.sort_by(|a, b| b.0.cmp(&a.0));

        matches
            .iter()
            .flat_map(|(_, entry, star)| {
                entry.targets.iter().map(move |target| {
                    let substituted = match star {
                        Some(text) => target.replacen('*', text, 1),
                        None => target.clone(),
                    };
                    normalize(&self.base.join(substituted))
                })
            })
            .collect()
    }
}

enum PatternMatch<'a> {
    Exact,
    Star { text: &'a str, prefix_len: usize },
}

/// Matches a specifier against one pattern with at most one `*`.
fn pattern_match<'a>(pattern: &str, specifier: &'a str) -> Option<PatternMatch<'a>> {
    match pattern.split_once('*') {
        None => (pattern == specifier).then_some(PatternMatch::Exact),
        Some((prefix, suffix)) => {
            if specifier.len() >= prefix.len() + suffix.len()
                && specifier.starts_with(prefix)
                && specifier.ends_with(suffix)
            {
                Some(PatternMatch::Star {
                    text: &specifier[prefix.len()..specifier.len() - suffix.len()],
                    prefix_len: prefix.len(),
                })
            } else {
                None
            }
        }
    }
}
