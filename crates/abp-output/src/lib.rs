//! Output generation for converted address tables.
//!
//! - [`processed_output_path`] derives `processed_<input name>` in the chosen
//!   directory (the input's own directory by default)
//! - [`write_csv`] writes a DataFrame as comma-separated text with a header,
//!   creating parent directories first

mod csv;
mod paths;

pub use csv::write_csv;
pub use paths::{OUTPUT_PREFIX, ensure_parent_dir, processed_file_name, processed_output_path};
