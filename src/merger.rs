//! Incremental merge of translation fragments into one table per language.
//!
//! The merge is a fold: fragments are ingested one by one in candidate-path
//! order (order decides who wins a key collision), then `finalize` emits the
//! table once all fragments are known. File reads may happen concurrently
//! upstream as long as `ingest` is applied in the original candidate order.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use crate::namespace::{
    component_segments,
    prefix_for,
};

/// Per-fragment ingestion errors. Never fatal: the caller reports them and
/// continues with the remaining fragments.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Fragment content is not valid JSON.
    #[error("failed to parse translation file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// Fragment parsed but its top level is not a JSON object.
    #[error("expected a JSON object at the top level of {path}")]
    NotAnObject { path: String },
}

/// Accumulates prefixed translation keys for a single language.
///
/// Keys live in a `BTreeMap`, so the lexicographic output order required for
/// reproducible artifacts is structural rather than a post-processing step.
#[derive(Debug, Clone)]
pub struct Merger {
    /// Path segment marking the top of the source tree (usually `src`).
    source_root: String,
    table: BTreeMap<String, Value>,
}

impl Merger {
    /// Create an empty merger. `source_root` is the path segment after which
    /// component paths are interpreted (see [`component_segments`]).
    #[must_use]
    pub fn new(source_root: impl Into<String>) -> Self {
        Self { source_root: source_root.into(), table: BTreeMap::new() }
    }

    /// Ingest one candidate file.
    ///
    /// `content` is `None` when the candidate path does not exist, which is
    /// expected (not every component translates every language) and skipped
    /// silently, as is blank content. Fragments whose path maps to no known
    /// namespace are parsed but dropped. Each top-level key `k` of the
    /// fragment is stored as `<prefix>.<k>`, overwriting any earlier value
    /// for that key.
    pub fn ingest(&mut self, path: &str, content: Option<&str>) -> Result<(), IngestError> {
        let Some(text) = content else {
            return Ok(());
        };
        if text.trim().is_empty() {
            return Ok(());
        }

        let value: Value = serde_json::from_str(text)
            .map_err(|source| IngestError::Parse { path: path.to_string(), source })?;
        let Value::Object(entries) = value else {
            return Err(IngestError::NotAnObject { path: path.to_string() });
        };

        let segments = component_segments(path, &self.source_root);
        let Some(prefix) = prefix_for(&segments) else {
            tracing::debug!(path, "no namespace for translation file, dropping");
            return Ok(());
        };

        tracing::debug!(path, %prefix, keys = entries.len(), "merging translation fragment");
        for (key, entry) in entries {
            self.table.insert(format!("{prefix}.{key}"), entry);
        }

        Ok(())
    }

    /// Number of merged keys so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no fragment contributed any key.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Serialize the merged table: 4-space indentation, keys in ascending
    /// lexicographic order, trailing newline. An empty table yields `{}`.
    pub fn finalize(self) -> Result<Vec<u8>, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.table.serialize(&mut serializer)?;
        buf.push(b'\n');
        Ok(buf)
    }
}
