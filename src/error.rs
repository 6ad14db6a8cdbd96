use thiserror::Error;

/// Errors surfaced to the caller before or instead of producing output.
///
/// Missing field paths are deliberately absent here: a path that does not
/// resolve for a record becomes a null cell, never an error.
#[derive(Debug, Error)]
pub enum Error {
    /// Neither full discovery nor an explicit field list was selected.
    #[error("no fields selected: choose all-field discovery or an explicit field list")]
    NoFieldSelection,

    /// Full discovery was requested but the input contains no records.
    #[error("cannot discover fields: the input contains no records")]
    EmptyRecordSet,

    /// The output delimiter must be a single ASCII character.
    #[error("delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(char),

    /// A single-page fetch failed outright.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
