//! `gs-output` — report rendering and data export for the simulator.
//!
//! Two outputs are provided, both driven as `gs_sim::SimObserver`s:
//!
//! | Type                   | Produces                                          |
//! |------------------------|---------------------------------------------------|
//! | [`Reporter`]           | the localized line-by-line text report            |
//! | [`SimOutputObserver`]  | rows for any [`OutputWriter`] (CSV: [`CsvWriter`])|
//!
//! The wording of the text report comes from an injected [`Vocabulary`];
//! Russian and English tables are built in, others load from JSON.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gs_output::{CsvWriter, Reporter, SimOutputObserver, Vocabulary};
//!
//! let mut report = Reporter::new(Vocabulary::russian());
//! let mut csv = SimOutputObserver::new(CsvWriter::new(Path::new("./out"))?);
//! sim.run(requests, &mut (&mut report, &mut csv))?;
//! report.lines().iter().for_each(|l| println!("{l}"));
//! csv.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod vocab;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use report::Reporter;
pub use row::{EventKind, EventRow, SalesRow};
pub use vocab::Vocabulary;
pub use writer::OutputWriter;
