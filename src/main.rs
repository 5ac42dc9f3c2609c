//! Entry point for the language merge tool.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lang_merge::Runner;
use lang_merge::config;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lang-merge")]
#[command(version)]
#[command(about = "Merges per-component JSON translation files into one file per language", long_about = None)]
struct Args {
    /// Project root containing the source tree
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Languages to merge, overriding the configuration file (comma-separated)
    #[arg(short, long, num_args = 1.., value_delimiter = ',')]
    languages: Option<Vec<String>>,

    /// Destination directory for merged files, overriding the configuration file
    #[arg(short, long)]
    dest: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level.clone())),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut settings = match config::load_from_root(&args.root) {
        Ok(found) => found.unwrap_or_default(),
        Err(err) => {
            tracing::error!(%err, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    if let Some(languages) = args.languages {
        settings.languages = languages;
    }
    if let Some(dest) = args.dest {
        settings.dest_dir = dest;
    }

    let runner = Runner::new(&args.root, settings);
    match runner.run().await {
        Ok(reports) => {
            let written = reports.iter().filter(|report| report.written.is_some()).count();
            let parse_errors: usize = reports.iter().map(|report| report.parse_errors).sum();
            tracing::info!(languages = reports.len(), written, parse_errors, "merge finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "merge failed");
            ExitCode::FAILURE
        }
    }
}
