//! Discovery of candidate translation directories in a source tree.

use std::path::Path;

use globset::{
    Glob,
    GlobSetBuilder,
};
use ignore::WalkBuilder;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    /// A configured directory pattern is not a valid glob.
    #[error("Invalid directory pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
    /// Other generic error
    #[error("An error occurred: {0}")]
    Error(String),
}

/// Walk `scan_root` and collect directories whose path relative to it matches
/// one of `patterns` (e.g. `lang`, `core/*/lang`, `addon/**/lang`,
/// `assets/*`).
///
/// The result is sorted lexicographically: filesystem iteration order is not
/// stable across platforms, and the merge's last-wins collision policy makes
/// directory order part of the output contract.
pub fn discover_lang_dirs(scan_root: &Path, patterns: &[String]) -> Result<Vec<String>, ScanError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| ScanError::InvalidPattern {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;
        builder.add(glob);
    }
    let glob_set = builder
        .build()
        .map_err(|e| ScanError::Error(format!("Failed to build directory patterns: {e}")))?;

    let mut found = Vec::new();
    for result in WalkBuilder::new(scan_root)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
            continue;
        }

        let path = entry.path();
        let Ok(relative_path) = path.strip_prefix(scan_root) else {
            continue;
        };
        if !glob_set.is_match(relative_path) {
            continue;
        }

        found.push(path.to_string_lossy().replace('\\', "/"));
    }

    found.sort();
    tracing::debug!(scan_root = %scan_root.display(), dirs = found.len(), "discovered translation directories");
    Ok(found)
}
