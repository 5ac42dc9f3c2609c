//! マージ設定の型と読み込み

use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Settings for one merge run.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MergeSettings {
    /// Languages to merge (each produces one `<language>.json`).
    pub languages: Vec<String>,

    /// Path segment marking the top of the source tree; component paths are
    /// interpreted relative to it.
    pub source_root: String,

    /// Directory globs (relative to the source root) that contain per-language
    /// translation files.
    pub lang_dir_patterns: Vec<String>,

    /// Where merged `<language>.json` files are written.
    pub dest_dir: String,
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            languages: vec!["en".to_string()],
            source_root: "src".to_string(),
            lang_dir_patterns: ["lang", "core/*/lang", "addon/**/lang", "assets/*"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            dest_dir: "www/lang".to_string(),
        }
    }
}

/// プロジェクトルートから設定を読み込む
///
/// `.lang-merge.json` ファイルを探して読み込む
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
pub fn load_from_root(project_root: &Path) -> Result<Option<MergeSettings>, ConfigError> {
    let config_path = project_root.join(".lang-merge.json");

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: MergeSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}
