use crate::error::Error;
use serde_json::Value;

/// Which columns a conversion run extracts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSelection {
    /// Discover every field path from the first record.
    AllFields,
    /// Use the given dot-separated paths verbatim, in the given order.
    Fields(Vec<String>),
}

impl FieldSelection {
    /// Build a selection from the CLI's `--all` / `--fields` flags.
    ///
    /// `--all` wins when both are given. Selecting neither is a usage
    /// error reported before any input is read.
    pub fn from_flags(all_fields: bool, fields: Vec<String>) -> Result<Self, Error> {
        if all_fields {
            Ok(FieldSelection::AllFields)
        } else if !fields.is_empty() {
            Ok(FieldSelection::Fields(fields))
        } else {
            Err(Error::NoFieldSelection)
        }
    }
}

/// Validated configuration for one conversion run.
///
/// Constructed once and passed by value; there is no builder. The
/// delimiter is validated here so a bad value fails before any I/O.
#[derive(Debug, Clone)]
pub struct TabulateConfig {
    pub selection: FieldSelection,

    /// Replace non-scalar cell values with their flattened string form.
    pub flatten: bool,

    /// Output column delimiter.
    pub delimiter: u8,
}

impl TabulateConfig {
    pub fn new(selection: FieldSelection, flatten: bool, delimiter: char) -> Result<Self, Error> {
        if !delimiter.is_ascii() {
            return Err(Error::InvalidDelimiter(delimiter));
        }
        Ok(TabulateConfig {
            selection,
            flatten,
            delimiter: delimiter as u8,
        })
    }
}

/// A flat table ready for serialization: one column per field path, one
/// row per record.
///
/// Invariant: every row has exactly `header.len()` cells, aligned by
/// position with the header.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}
