//! Base error type.
//!
//! Sub-crates define their own error enums and fold a `GsError` into them
//! where a core parse failure surfaces.

use thiserror::Error;

/// The top-level error type for `gs-core`.
#[derive(Debug, Error)]
pub enum GsError {
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `gs-core`.
pub type GsResult<T> = Result<T, GsError>;
