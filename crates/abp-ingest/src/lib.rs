//! Address data ingestion.
//!
//! Reads an AddressBase Premium style CSV export into a Polars DataFrame.
//! Every column is loaded as text so identifiers such as `UPRN` and
//! coordinates pass through the pipeline exactly as written in the source.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use abp_ingest::read_address_table;
//!
//! let df = read_address_table(Path::new("data/merged_addresses.csv"))?;
//! println!("{} rows", df.height());
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{CsvHeaders, read_address_table, read_csv_headers, validate_encoding};
