use thiserror::Error;

/// Convenience result type for loading and aggregation operations.
pub type SalesResult<T> = Result<T, SalesError>;

/// Error type shared by the loader and the aggregation queries.
#[derive(Debug, Error)]
pub enum SalesError {
    /// Underlying I/O error (e.g. source file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Reader-level CSV failure.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A data row could not be converted into a [`crate::types::Sale`]
    /// (unparsable sale id or amount, or wrong field count). Fatal for the
    /// whole load.
    #[error("malformed record at line {line}: {message} (raw='{raw}')")]
    MalformedRecord {
        line: usize,
        raw: String,
        message: String,
    },

    /// A max-style query was asked for on an empty dataset.
    #[error("no sale records to aggregate")]
    NoData,
}
