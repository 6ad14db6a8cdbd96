//! JSON tabulation - convert nested JSON into flat delimited-text tables
//!
//! This module turns arbitrary JSON documents (plain arrays, single
//! objects, or API envelopes with an `items` list) into rows and columns.
//! Columns are dot-separated field paths, either discovered from the first
//! record or supplied explicitly; nested values are flattened into
//! human-readable strings for tabular display.

pub mod types;
pub mod discover;
pub mod extract;
pub mod writer;

pub use types::{FieldSelection, TabulateConfig, Table};
pub use discover::discover_fields;
pub use extract::{extract_rows, flatten_value, record_set, resolve_path, tabulate};
pub use writer::TableWriter;
