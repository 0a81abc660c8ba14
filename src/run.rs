//! End-to-end reindex run: load, transform, write.

use crate::metrics::RunStats;
use crate::plan::MappingPlan;
use crate::transform::Transformer;
use anyhow::Context;
use clap::Parser;
use es_reindex_csv_source::load_by_id;
use es_reindex_jsonl_source::{read_documents, write_documents};
use reindex_core::MappingConfig;
use reindex_generator::{clock_seed, seeded_rng};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Inputs of a single run
#[derive(Parser, Debug, Clone)]
pub struct RunOptions {
    /// Path to the input NDJSON file
    #[arg(long, default_value = "./data/input.json", env = "ES_REINDEX_INPUT")]
    pub input: PathBuf,

    /// Path to the mapping file (JSON, or YAML for .yaml/.yml)
    #[arg(long, default_value = "./data/mapping.json", env = "ES_REINDEX_MAPPING")]
    pub mapping: PathBuf,

    /// Path to the output NDJSON file (created or replaced)
    #[arg(long, default_value = "./data/output.json", env = "ES_REINDEX_OUTPUT")]
    pub output: PathBuf,

    /// Limit of input lines to process (-1 for all)
    #[arg(
        long,
        default_value_t = -1,
        allow_negative_numbers = true,
        env = "ES_REINDEX_LIMIT"
    )]
    pub limit: i64,

    /// Seed for random field generation (default: current time)
    #[arg(long, env = "ES_REINDEX_SEED")]
    pub seed: Option<u64>,
}

/// What a completed run did
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub documents_read: usize,
    pub documents_written: usize,
    pub seed: u64,
    pub elapsed: Duration,
    pub memory_delta_mb: i64,
}

/// Reindex `options.input` into `options.output`.
///
/// Any failure aborts the run before the output file is written.
pub fn run(options: &RunOptions) -> anyhow::Result<RunSummary> {
    let stats = RunStats::start();

    let mapping = MappingConfig::from_file(&options.mapping).with_context(|| {
        format!(
            "Failed to load mapping file: {}",
            options.mapping.display()
        )
    })?;
    let plan = MappingPlan::compile(&mapping).context("Invalid mapping")?;
    info!(
        "Mapping loaded: {} rules ({} renames, {} defaults, {} random fields, side data: {})",
        mapping.rule_count(),
        plan.renames.len(),
        plan.defaults.len(),
        plan.random.len(),
        plan.side_file.is_some()
    );

    // Loaded once and shared read-only by every document.
    let side_data = plan
        .side_file
        .as_ref()
        .map(load_by_id)
        .transpose()
        .context("Failed to load side data")?;

    let seed = options.seed.unwrap_or_else(clock_seed);
    info!("Random generation seed: {seed}");

    let documents = read_documents(&options.input, options.limit).with_context(|| {
        format!(
            "Failed to read input documents: {}",
            options.input.display()
        )
    })?;

    let mut transformer = Transformer::new(&plan, side_data.as_ref(), seeded_rng(seed));
    let reindexed = documents
        .iter()
        .enumerate()
        .map(|(position, doc)| {
            transformer.transform(doc).with_context(|| {
                format!(
                    "Failed to transform document {} (document #{})",
                    doc.id.as_deref().unwrap_or("<no id>"),
                    position + 1
                )
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let documents_written = write_documents(&options.output, &reindexed).with_context(|| {
        format!(
            "Failed to write output documents: {}",
            options.output.display()
        )
    })?;

    let report = stats.finish();
    info!("Time taken: {:?}", report.elapsed);
    info!("Memory used: {} MB", report.memory_delta_mb);

    Ok(RunSummary {
        documents_read: documents.len(),
        documents_written,
        seed,
        elapsed: report.elapsed,
        memory_delta_mb: report.memory_delta_mb,
    })
}
