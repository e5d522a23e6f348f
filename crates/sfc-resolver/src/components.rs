//! The component dependency map.

use camino::Utf8Path;
use indexmap::IndexMap;
use smol_str::SmolStr;
use thiserror::Error;

use sfc_script::extract_imports;
use sfc_transform::Section;

use crate::paths::PathsMatcher;
use crate::resolve::{make_relative, resolve_module};

/// A resolution usage error.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Dependency collection was called on the wrong section kind.
    #[error("component dependencies can only be collected from a scriptSetup section, got {found}")]
    NotScriptSetup {
        /// The name of the section that was passed.
        found: String,
    },
}

/// Builds the component dependency map for a `scriptSetup` section.
///
/// Keeps value (non-type-only) imports whose specifier names a `.vue` file
/// (extension compared case-insensitively) and resolves each one:
/// alias candidates that exist on disk win, then relative joins, then the
/// specifier verbatim. The map is keyed by the locally-bound name; a later
/// import of the same name overwrites an earlier one.
///
/// `imported_from` is the project-root-relative path of the importing file.
/// Passing any section other than `ScriptSetup` is a usage error — dependency
/// discovery is only meaningful for setup scripts.
pub fn collect_component_dependencies(
    section: &Section,
    matcher: Option<&PathsMatcher>,
    project_root: &Utf8Path,
    imported_from: &Utf8Path,
) -> Result<IndexMap<SmolStr, String>, ResolveError> {
    let Section::ScriptSetup { source, .. } = section else {
        return Err(ResolveError::NotScriptSetup {
            found: section.name().to_string(),
        });
    };

    let mut dependencies = IndexMap::new();
    for import in extract_imports(source) {
        if import.is_type_only || !is_component_specifier(&import.module) {
            continue;
        }
        let resolved = resolve_import(&import.module, matcher, project_root, imported_from);
        dependencies.insert(import.local_name, resolved);
    }

    Ok(dependencies)
}

/// Whether a specifier targets a component file (`.vue`, any case).
fn is_component_specifier(specifier: &str) -> bool {
    Utf8Path::new(specifier)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("vue"))
}

fn resolve_import(
    specifier: &str,
    matcher: Option<&PathsMatcher>,
    project_root: &Utf8Path,
    imported_from: &Utf8Path,
) -> String {
    // Aliases first: more authoritative than a relative guess, and checked
    // against the disk so an over-broad pattern cannot claim a specifier it
    // cannot actually serve.
    if let Some(matcher) = matcher {
        for candidate in matcher.match_specifier(specifier) {
            if candidate.exists() {
                return make_relative(&candidate, project_root).into_string();
            }
        }
    }

    if specifier.starts_with('.') {
        let dir = imported_from.parent().unwrap_or(Utf8Path::new(""));
        let dir = dir.strip_prefix(project_root).unwrap_or(dir);
        return resolve_module(project_root, dir, specifier).into_string();
    }

    specifier.to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use std::fs;

    use sfc_transform::create_script_setup_section;

    use super::*;
    use crate::tsconfig::TsConfig;

    fn setup_section(code: &str) -> Section {
        create_script_setup_section("src/App.vue", code).unwrap()
    }

    #[test]
    fn relative_imports_resolve_against_the_importing_file() {
        let section = setup_section(
            "import Child from './Child.vue'\nimport Deep from '../shared/Deep.vue'\n",
        );
        let deps = collect_component_dependencies(
            &section,
            None,
            Utf8Path::new("proj"),
            Utf8Path::new("src/App.vue"),
        )
        .unwrap();

        assert_eq!(deps.get("Child").map(String::as_str), Some("proj/src/Child.vue"));
        assert_eq!(
            deps.get("Deep").map(String::as_str),
            Some("proj/shared/Deep.vue")
        );
    }

    #[test]
    fn type_only_imports_are_excluded() {
        let section = setup_section(
            "import type Hidden from './Hidden.vue'\nimport Shown from './Shown.vue'\n",
        );
        let deps = collect_component_dependencies(
            &section,
            None,
            Utf8Path::new("proj"),
            Utf8Path::new("src/App.vue"),
        )
        .unwrap();

        assert!(!deps.contains_key("Hidden"));
        assert!(deps.contains_key("Shown"));
    }

    #[test]
    fn non_component_imports_are_excluded() {
        let section = setup_section(
            "import { ref } from 'vue'\nimport util from './util.ts'\nimport App from './App.VUE'\n",
        );
        let deps = collect_component_dependencies(
            &section,
            None,
            Utf8Path::new("proj"),
            Utf8Path::new("src/Main.vue"),
        )
        .unwrap();

        // Extension matching is case-insensitive; only the .VUE file counts.
        let keys: Vec<&str> = deps.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["App"]);
    }

    #[test]
    fn bare_specifiers_pass_through_verbatim() {
        let section = setup_section("import Widget from 'widget-lib/Widget.vue'\n");
        let deps = collect_component_dependencies(
            &section,
            None,
            Utf8Path::new("proj"),
            Utf8Path::new("src/App.vue"),
        )
        .unwrap();

        assert_eq!(
            deps.get("Widget").map(String::as_str),
            Some("widget-lib/Widget.vue")
        );
    }

    #[test]
    fn alias_candidate_must_exist_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        fs::create_dir_all(root.join("src/components")).unwrap();
        fs::write(root.join("src/components/Real.vue"), "<template/>").unwrap();

        let config: TsConfig =
            serde_json::from_str(r#"{ "compilerOptions": { "paths": { "@/*": ["./src/*"] } } }"#)
                .unwrap();
        let matcher = PathsMatcher::from_config(&root.join("tsconfig.json"), &config).unwrap();

        let section = setup_section(
            "import Real from '@/components/Real.vue'\nimport Ghost from '@/components/Ghost.vue'\n",
        );
        let deps =
            collect_component_dependencies(&section, Some(&matcher), root, Utf8Path::new("src/App.vue"))
                .unwrap();

        // The existing candidate resolves relative to the project root.
        assert_eq!(
            deps.get("Real").map(String::as_str),
            Some("src/components/Real.vue")
        );
        // The missing candidate falls through; `@/...` is not relative, so the
        // specifier comes back unchanged.
        assert_eq!(
            deps.get("Ghost").map(String::as_str),
            Some("@/components/Ghost.vue")
        );
    }

    #[test]
    fn wrong_section_kind_is_a_usage_error() {
        let parsed = sfc_parser::parse("<script>export default {}</script>", "src/App.vue");
        let sections = sfc_transform::collect_sections(&parsed.descriptor).unwrap();

        let err = collect_component_dependencies(
            &sections[0],
            None,
            Utf8Path::new("proj"),
            Utf8Path::new("src/App.vue"),
        )
        .unwrap_err();

        assert!(matches!(err, ResolveError::NotScriptSetup { .. }));
        assert!(err.to_string().contains("script"));
    }

    #[test]
    fn default_and_named_component_imports_are_collected() {
        let section = setup_section(
            "import Thing from './a/Thing.vue'\nimport Thing2, { x } from './b/Other.vue'\n",
        );
        let deps = collect_component_dependencies(
            &section,
            None,
            Utf8Path::new("proj"),
            Utf8Path::new("src/App.vue"),
        )
        .unwrap();

        assert_eq!(deps.len(), 3);
        assert!(deps.contains_key("Thing"));
        assert!(deps.contains_key("Thing2"));
        assert!(deps.contains_key("x"));
    }
}
