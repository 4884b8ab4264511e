//! The `convert` command: read, transform, write.

use std::path::{Path, PathBuf};
use std::time::Instant;

use abp_ingest::{read_address_table, read_csv_headers};
use abp_model::{PipelineStage, SchemaError, required_source_columns};
use abp_output::{processed_output_path, write_csv};
use abp_transform::{CategoryCounts, convert_addresses};
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

/// Inputs for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Source CSV file.
    pub input: PathBuf,
    /// Directory for the processed file (default: the input's directory).
    pub output_dir: Option<PathBuf>,
    /// Run the pipeline but skip writing the output file.
    pub dry_run: bool,
}

impl ConvertOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: None,
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Outcome of a conversion run.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// False when the run was a dry run.
    pub written: bool,
    pub input_rows: usize,
    pub excluded_rows: usize,
    pub residual_rows: usize,
    pub output_rows: usize,
    pub categories: CategoryCounts,
    pub output_columns: Vec<String>,
    pub duration_ms: u128,
}

/// Fails early when the header lacks required source columns.
fn check_source_header(input: &Path) -> Result<()> {
    let headers = read_csv_headers(input).context("read input header")?;
    let missing = headers.missing_columns(&required_source_columns());
    if missing.is_empty() {
        return Ok(());
    }
    Err(SchemaError::missing(PipelineStage::SelectRename, missing))
        .with_context(|| format!("input {} does not match the core schema", input.display()))
}

/// Converts one input file and writes `processed_<name>` unless dry-running.
///
/// Nothing is written if any stage fails.
pub fn run_convert(options: &ConvertOptions) -> Result<ConversionReport> {
    let input = &options.input;
    let span = info_span!("convert", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let output = processed_output_path(input, options.output_dir.as_deref())?;
    check_source_header(input)?;

    let source = read_address_table(input).context("load input")?;
    let converted = convert_addresses(&source).context("convert addresses")?;

    if options.dry_run {
        info!(output = %output.display(), "dry run, output not written");
    } else {
        write_csv(&converted.data, &output)?;
    }

    let stats = converted.stats;
    Ok(ConversionReport {
        input: input.clone(),
        output,
        written: !options.dry_run,
        input_rows: stats.input_rows,
        excluded_rows: stats.excluded_rows,
        residual_rows: stats.residual_rows,
        output_rows: stats.output_rows,
        categories: stats.categories,
        output_columns: stats.output_columns,
        duration_ms: start.elapsed().as_millis(),
    })
}
