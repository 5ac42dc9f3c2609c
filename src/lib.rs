//! lang-merge
//!
//! 各コンポーネントの言語ファイル (JSON) を言語ごとに 1 ファイルへ結合するツール
//!
//! Keys from each source file are namespaced by where the file lives in the
//! tree (`lang/`, `core/<name>/lang/`, `addon/<name...>/lang/`,
//! `assets/<name>/`), then merged and emitted with sorted keys so the output
//! is reproducible run to run.

pub mod config;
pub mod merger;
pub mod namespace;
pub mod resolver;
pub mod runner;
pub mod scanner;

// よく使う型を再エクスポート
pub use merger::Merger;
pub use runner::Runner;
