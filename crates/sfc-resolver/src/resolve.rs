//! Pure path arithmetic: joining and relativizing without touching the
//! filesystem.

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

/// Resolves a relative module specifier against a project root and the
/// importing file's root-relative directory.
///
/// The three parts are joined and `.`/`..` segments collapsed; nothing is
/// checked against the filesystem.
pub fn resolve_module(root: &Utf8Path, imported_from: &Utf8Path, specifier: &str) -> Utf8PathBuf {
    normalize(&root.join(imported_from).join(specifier))
}

/// Collapses `.` and `..` components lexically.
pub(crate) fn normalize(path: &Utf8Path) -> Utf8PathBuf {
    let mut parts: Vec<Utf8Component> = Vec::new();

    for component in path.components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => match parts.last() {
                Some(Utf8Component::Normal(_)) => {
                    parts.pop();
                }
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    parts.iter().map(|c| c.as_str()).collect()
}

/// Expresses `target` relative to `base` (both are normalized first).
pub fn make_relative(target: &Utf8Path, base: &Utf8Path) -> Utf8PathBuf {
    let target = normalize(target);
    let base = normalize(base);

    let mut target_parts = target.components().peekable();
    let mut base_parts = base.components().peekable();

    while let (Some(t), Some(b)) = (target_parts.peek(), base_parts.peek()) {
        if t == b {
            target_parts.next();
            base_parts.next();
        } else {
            break;
        }
    }

    let mut result = Utf8PathBuf::new();
    for _ in base_parts {
        result.push("..");
    }
    for component in target_parts {
        result.push(component.as_str());
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn resolves_relative_module_path() {
        let resolved = resolve_module(
            Utf8Path::new("./projects/example"),
            Utf8Path::new("./src"),
            "./App.vue",
        );
        assert_eq!(resolved, Utf8PathBuf::from("projects/example/src/App.vue"));
    }

    #[test]
    fn collapses_parent_segments() {
        let resolved = resolve_module(
            Utf8Path::new("proj"),
            Utf8Path::new("src/pages"),
            "../components/Button.vue",
        );
        assert_eq!(
            resolved,
            Utf8PathBuf::from("proj/src/components/Button.vue")
        );
    }

    #[test]
    fn normalize_keeps_leading_parent_dirs() {
        assert_eq!(
            normalize(Utf8Path::new("../a/./b/../c")),
            Utf8PathBuf::from("../a/c")
        );
    }

    #[test]
    fn make_relative_strips_the_base() {
        assert_eq!(
            make_relative(Utf8Path::new("/proj/src/App.vue"), Utf8Path::new("/proj")),
            Utf8PathBuf::from("src/App.vue")
        );
    }

    #[test]
    fn make_relative_walks_up_when_needed() {
        assert_eq!(
            make_relative(Utf8Path::new("/other/App.vue"), Utf8Path::new("/proj/src")),
            Utf8PathBuf::from("../../other/App.vue")
        );
    }
}
