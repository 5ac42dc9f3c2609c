//! Candidate path construction for a language's translation files.

/// Build the list of candidate file paths for `language`.
///
/// Each base directory is normalized to end with exactly one `/`, then
/// `<language>.json` is appended. Output order follows `base_dirs`; duplicate
/// directories are kept as-is (re-ingesting identical content is a no-op for
/// the merge result). No I/O, no existence checks.
#[must_use]
pub fn resolve(language: &str, base_dirs: &[String]) -> Vec<String> {
    base_dirs
        .iter()
        .map(|dir| {
            let trimmed = dir.trim_end_matches(['/', '\\']);
            format!("{trimmed}/{language}.json")
        })
        .collect()
}
