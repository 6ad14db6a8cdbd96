//! # hh2csv - vacancy fetching and JSON tabulation
//!
//! A unified library for fetching job-vacancy listings from the HH.ru
//! search API and converting arbitrary JSON documents into flat
//! delimited-text tables.
//!
//! ## Modules
//!
//! - **tabulate**: Convert nested JSON into rows and columns addressed by
//!   dot-separated field paths
//! - **fetch**: Query the paginated vacancy search API with typed
//!   parameters
//!
//! ## Quick Start
//!
//! ### Tabulating JSON
//!
//! ```rust
//! use hh2csv::tabulate::{tabulate, FieldSelection, TabulateConfig};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let doc = json!({
//!     "items": [
//!         {"name": "Rust Engineer", "salary": {"from": 100, "to": 200}},
//!         {"name": "Data Engineer", "salary": {"from": 150, "to": 250}}
//!     ],
//!     "found": 2,
//!     "pages": 1
//! });
//!
//! let config = TabulateConfig::new(FieldSelection::AllFields, true, ',')?;
//! let table = tabulate(&doc, &config)?;
//!
//! assert_eq!(table.header, vec!["name", "salary", "salary.from", "salary.to"]);
//! assert_eq!(table.rows[0][1], json!("from: 100; to: 200"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Building a search
//!
//! ```rust
//! use hh2csv::fetch::{Experience, SearchParams, WorkFormat};
//!
//! let mut params = SearchParams::default();
//! params.text = Some("rust".to_string());
//! params.experience = vec![Experience::Between1And3];
//! params.work_format = vec![WorkFormat::Remote];
//!
//! // The query repeats keys for multi-valued fields.
//! let query = params.to_query();
//! assert!(query.contains(&("text", "rust".to_string())));
//! ```

use anyhow::Result;
use serde_json::Value;
use std::io::Write;

pub mod error;
pub mod fetch;
pub mod tabulate;

// Re-export commonly used types for convenience
pub use error::Error;
pub use fetch::{SearchParams, VacancyClient, VacancyPage};
pub use tabulate::{FieldSelection, Table, TableWriter, TabulateConfig};

/// Main entry point: tabulate a parsed JSON document and serialize it as
/// delimited text in one call.
pub fn convert_json<W: Write>(doc: &Value, config: &TabulateConfig, out: W) -> Result<()> {
    let table = tabulate::tabulate(doc, config)?;
    TableWriter::new(config.delimiter).write_to(&table, out)
}
