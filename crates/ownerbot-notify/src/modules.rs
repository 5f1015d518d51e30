use std::collections::BTreeSet;

/// Derive the set of touched modules from a list of changed file paths.
///
/// A path contributes a module when its first `/`-separated segment equals
/// `module_root`; the second segment is the module name. Paths outside the
/// module root are ignored. The result is deduplicated and sorted, so the
/// emitted comment lines are reproducible across runs.
///
/// Paths come from the GitHub API and always use `/` separators, so no
/// platform-specific path handling is needed.
///
/// # Examples
///
/// ```
/// use ownerbot_notify::modules::touched_modules;
///
/// let touched = touched_modules(
///     "modules",
///     ["modules/foo/bar.txt", "docs/readme.md", "modules/foo/baz.txt"],
/// );
/// assert_eq!(touched.into_iter().collect::<Vec<_>>(), ["foo"]);
/// ```
pub fn touched_modules<I, S>(module_root: &str, changed_paths: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut touched = BTreeSet::new();
    for path in changed_paths {
        let mut segments = path.as_ref().split('/');
        if segments.next() != Some(module_root) {
            continue;
        }
        match segments.next() {
            Some(module) if !module.is_empty() => {
                touched.insert(module.to_string());
            }
            _ => {}
        }
    }
    touched
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_segment_under_module_root_is_a_module() {
        let touched = touched_modules("modules", ["modules/foo/bar.txt"]);
        assert_eq!(touched.into_iter().collect::<Vec<_>>(), ["foo"]);
    }

    #[test]
    fn paths_outside_module_root_are_ignored() {
        let touched = touched_modules("modules", ["docs/readme.md", "src/main.rs", "README.md"]);
        assert!(touched.is_empty());
    }

    #[test]
    fn prefix_match_must_be_a_whole_segment() {
        // "modules-extra" is not the module root even though it starts with it.
        let touched = touched_modules("modules", ["modules-extra/foo/a.txt"]);
        assert!(touched.is_empty());
    }

    #[test]
    fn duplicates_collapse_and_result_is_sorted() {
        let touched = touched_modules(
            "modules",
            [
                "modules/zeta/a.rs",
                "modules/alpha/b.rs",
                "modules/zeta/c.rs",
            ],
        );
        assert_eq!(touched.into_iter().collect::<Vec<_>>(), ["alpha", "zeta"]);
    }

    #[test]
    fn file_directly_under_module_root_counts() {
        // Mirrors the split-on-slash behavior: "modules/foo" yields "foo".
        let touched = touched_modules("modules", ["modules/foo"]);
        assert_eq!(touched.into_iter().collect::<Vec<_>>(), ["foo"]);
    }

    #[test]
    fn empty_input_yields_empty_set() {
        let touched = touched_modules("modules", std::iter::empty::<&str>());
        assert!(touched.is_empty());
    }

    #[test]
    fn custom_module_root_is_respected() {
        let touched = touched_modules("packages", ["packages/ui/button.tsx", "modules/foo/a.rs"]);
        assert_eq!(touched.into_iter().collect::<Vec<_>>(), ["ui"]);
    }
}
