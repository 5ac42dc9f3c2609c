//! Per-language merge pipeline and the cross-language run loop.

use std::io::ErrorKind;
use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

use crate::config::MergeSettings;
use crate::merger::Merger;
use crate::resolver;
use crate::scanner::{
    self,
    ScanError,
};

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("Failed to serialize merged table: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of merging one language.
#[derive(Debug, Clone)]
pub struct LanguageReport {
    pub language: String,
    /// Number of merged keys. Zero means nothing was written.
    pub keys: usize,
    /// Destination file, if one was written.
    pub written: Option<PathBuf>,
    /// Fragments excluded because they failed to parse.
    pub parse_errors: usize,
}

/// Runs the merge for every configured language against one project root.
#[derive(Debug, Clone)]
pub struct Runner {
    project_root: PathBuf,
    settings: MergeSettings,
}

impl Runner {
    #[must_use]
    pub fn new(project_root: impl Into<PathBuf>, settings: MergeSettings) -> Self {
        Self { project_root: project_root.into(), settings }
    }

    /// Merge all configured languages.
    ///
    /// Translation directories are discovered once; each language is then
    /// merged concurrently (no state is shared between languages). Fragment
    /// parse failures are logged and skipped; only destination I/O failures
    /// abort a run.
    pub async fn run(&self) -> Result<Vec<LanguageReport>, RunnerError> {
        let scan_root = self.scan_root();
        let base_dirs =
            scanner::discover_lang_dirs(&scan_root, &self.settings.lang_dir_patterns)?;
        tracing::info!(
            root = %self.project_root.display(),
            dirs = base_dirs.len(),
            languages = self.settings.languages.len(),
            "starting language merge"
        );

        let futures: Vec<_> = self
            .settings
            .languages
            .iter()
            .map(|language| self.merge_language(language, &base_dirs))
            .collect();

        futures::future::join_all(futures).await.into_iter().collect()
    }

    /// Merge a single language and write `<dest>/<language>.json`.
    ///
    /// All candidate files are read concurrently, but ingestion happens in
    /// candidate-path order: the order decides which fragment wins a key
    /// collision, so completion order must not leak into the result. Writing
    /// is skipped when no fragment contributed a key, to avoid emitting a
    /// stale empty artifact.
    async fn merge_language(
        &self,
        language: &str,
        base_dirs: &[String],
    ) -> Result<LanguageReport, RunnerError> {
        let candidates = resolver::resolve(language, base_dirs);
        let contents =
            futures::future::join_all(candidates.iter().map(|path| read_optional(path))).await;

        let mut merger = Merger::new(&self.settings.source_root);
        let mut parse_errors = 0;
        for (path, content) in candidates.iter().zip(&contents) {
            let relative = self.relative_to_root(path);
            if let Err(err) = merger.ingest(&relative, content.as_deref()) {
                parse_errors += 1;
                tracing::warn!(%err, "skipping translation fragment");
            }
        }

        if merger.is_empty() {
            tracing::info!(language, "no translation fragments found, skipping write");
            return Ok(LanguageReport {
                language: language.to_string(),
                keys: 0,
                written: None,
                parse_errors,
            });
        }

        let keys = merger.len();
        let bytes = merger.finalize()?;

        let dest_dir = self.project_root.join(&self.settings.dest_dir);
        tokio::fs::create_dir_all(&dest_dir).await.map_err(|source| RunnerError::Write {
            path: dest_dir.to_string_lossy().to_string(),
            source,
        })?;
        let dest_path = dest_dir.join(format!("{language}.json"));
        tokio::fs::write(&dest_path, bytes).await.map_err(|source| RunnerError::Write {
            path: dest_path.to_string_lossy().to_string(),
            source,
        })?;

        tracing::info!(language, keys, path = %dest_path.display(), "wrote merged language file");
        Ok(LanguageReport {
            language: language.to_string(),
            keys,
            written: Some(dest_path),
            parse_errors,
        })
    }

    /// Directory the discovery walk starts from: `<root>/<sourceRoot>` when it
    /// exists, otherwise the project root itself.
    fn scan_root(&self) -> PathBuf {
        let candidate = self.project_root.join(&self.settings.source_root);
        if candidate.is_dir() { candidate } else { self.project_root.clone() }
    }

    /// Strip the project root from a candidate path so namespace derivation
    /// and diagnostics see tree-relative paths like `src/lang/en.json`.
    fn relative_to_root(&self, path: &str) -> String {
        let root = self.project_root.to_string_lossy().replace('\\', "/");
        let normalized = path.replace('\\', "/");
        normalized
            .strip_prefix(&root)
            .map_or(normalized.clone(), |rest| rest.trim_start_matches('/').to_string())
    }
}

/// Read one candidate file, treating a missing file as an expected absence.
async fn read_optional(path: &str) -> Option<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Some(content),
        Err(err) if err.kind() == ErrorKind::NotFound => None,
        Err(err) => {
            tracing::warn!(path, %err, "failed to read translation file");
            None
        }
    }
}

/// Build a runner from an explicit root, loading `.lang-merge.json` when
/// present and falling back to defaults otherwise.
pub fn from_project_root(project_root: &Path) -> Result<Runner, crate::config::ConfigError> {
    let settings = crate::config::load_from_root(project_root)?.unwrap_or_default();
    Ok(Runner::new(project_root, settings))
}
