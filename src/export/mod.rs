//! Export module for Cashflow
//!
//! CSV statements of the transaction list, BOM-prefixed for spreadsheet tools.

pub mod csv;

pub use csv::{export_file_name, format_csv, CsvDocument};
