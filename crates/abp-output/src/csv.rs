//! CSV serialization of converted frames.

use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;
use tempfile::NamedTempFile;
use tracing::info;

use crate::paths::ensure_parent_dir;

/// Writes `df` to `path` as comma-separated text with a header row.
///
/// Nulls are written as empty fields. Parent directories are created as
/// needed. Rows go to a temporary file in the target directory which then
/// replaces `path`, so a failed write leaves any existing file untouched.
pub fn write_csv(df: &DataFrame, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)
        .with_context(|| format!("create temporary file in {}", dir.display()))?;

    {
        let mut writer = BufWriter::new(staged.as_file_mut());
        let mut frame = df.clone();
        CsvWriter::new(&mut writer)
            .include_header(true)
            .with_separator(b',')
            .finish(&mut frame)
            .with_context(|| format!("write csv {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("flush {}", path.display()))?;
    }

    staged
        .persist(path)
        .map_err(|err| err.error)
        .with_context(|| format!("replace {}", path.display()))?;

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote processed addresses"
    );
    Ok(())
}
