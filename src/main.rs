//! Command-line interface for es-reindex
//!
//! # Usage Examples
//!
//! ```bash
//! # Reindex every document with the default file locations
//! es-reindex
//!
//! # Reindex the first 1000 lines with a fixed seed
//! es-reindex \
//!   --input ./data/input.json \
//!   --mapping ./data/mapping.yaml \
//!   --output ./data/output.json \
//!   --limit 1000 \
//!   --seed 42
//! ```
//!
//! Set `RUST_LOG=debug` for per-document detail; the default level is `info`.

use clap::Parser;
use es_reindex::RunOptions;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "es-reindex")]
#[command(about = "Reindex exported search documents through a declarative field mapping")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    options: RunOptions,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let summary = es_reindex::run(&cli.options)?;

    tracing::info!(
        "Reindexed {} of {} documents (seed {})",
        summary.documents_written,
        summary.documents_read,
        summary.seed
    );
    Ok(())
}
