//! Output file naming.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

/// Prefix added to the input file name.
pub const OUTPUT_PREFIX: &str = "processed_";

/// `processed_<file name>` for the given input path.
pub fn processed_file_name(input: &Path) -> Result<String> {
    let name = input
        .file_name()
        .ok_or_else(|| anyhow!("input path has no file name: {}", input.display()))?;
    Ok(format!("{OUTPUT_PREFIX}{}", name.to_string_lossy()))
}

/// Output path for `input`, placed in `output_dir` or beside the input.
pub fn processed_output_path(input: &Path, output_dir: Option<&Path>) -> Result<PathBuf> {
    let file_name = processed_file_name(input)?;
    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    Ok(dir.join(file_name))
}

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    Ok(())
}
