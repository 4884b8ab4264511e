//! CSV reading utilities.

mod header;
mod reader;

pub use header::CsvHeaders;
pub use reader::{read_address_table, read_csv_headers, validate_encoding};
