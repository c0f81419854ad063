use thiserror::Error;

#[derive(Debug, Error)]
pub enum StationError {
    /// A station record that cannot become a `Station`.  Aborts the load.
    #[error("malformed station record at line {line} ({record:?}): {reason}")]
    MalformedRecord {
        line:   u64,
        record: String,
        reason: String,
    },

    /// A request record that cannot become a `FuelRequest`.
    #[error("malformed request at line {line} ({record:?}): {reason}")]
    MalformedRequest {
        line:   u64,
        record: String,
        reason: String,
    },

    #[error("unknown station {0:?}")]
    UnknownStation(String),

    #[error("input error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StationResult<T> = Result<T, StationError>;
