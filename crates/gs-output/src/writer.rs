//! The `OutputWriter` trait implemented by backend writers.

use crate::{EventRow, OutputResult, SalesRow};

/// Sink for simulation rows.
///
/// Errors are stored by [`SimOutputObserver`][crate::SimOutputObserver] and
/// retrieved with its `take_error`.
pub trait OutputWriter {
    /// Write the events of one request.
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    /// Write the final sales totals.
    fn write_sales(&mut self, rows: &[SalesRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
