//! Whitespace-record loaders for station and request files.
//!
//! # Formats
//!
//! Stations, one per line:
//!
//! ```text
//! 1 3 АИ-80 АИ-92
//! 2 2 АИ-92 АИ-95 АИ-98
//! ```
//!
//! Requests, one per line, pre-sorted by time:
//!
//! ```text
//! 09:00 40 АИ-92 A123BC
//! 09:04 15 АИ-95 K777OO
//! ```
//!
//! Tokens are separated by any run of spaces or tabs.  Blank lines are
//! ignored.  Both files go through `csv` with quoting disabled, so a stray
//! `"` is an ordinary character.
//!
//! Stations are loaded eagerly (the registry must be complete before the
//! first request).  Requests are streamed: [`RequestStream`] yields one
//! record at a time and never seeks back.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord, StringRecordsIntoIter};

use gs_core::RequestSeq;

use crate::{FuelRequest, StationError, StationRecord, StationRegistry, StationResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a `StationRegistry` from a station file.
pub fn load_stations_path(path: &Path) -> StationResult<StationRegistry> {
    let file = File::open(path)?;
    load_stations_reader(file)
}

/// Like [`load_stations_path`] but accepts any `Read` source.
pub fn load_stations_reader<R: Read>(reader: R) -> StationResult<StationRegistry> {
    let mut records = Vec::new();
    for result in whitespace_reader(reader).into_records() {
        let record = result.map_err(read_error)?;
        let fields = tokens(&record);
        if fields.is_empty() {
            continue;
        }
        records.push(StationRecord { line: line_of(&record), fields });
    }
    StationRegistry::load(records)
}

/// Open a request file as a [`RequestStream`].
pub fn read_requests_path(path: &Path) -> StationResult<RequestStream<File>> {
    let file = File::open(path)?;
    Ok(read_requests_reader(file))
}

/// Stream requests from any `Read` source.
pub fn read_requests_reader<R: Read>(reader: R) -> RequestStream<R> {
    RequestStream {
        records:  whitespace_reader(reader).into_records(),
        next_seq: RequestSeq(1),
    }
}

// ── RequestStream ─────────────────────────────────────────────────────────────

/// Single-pass iterator over request records.
///
/// Each non-blank line yields either a parsed [`FuelRequest`] or the error
/// that line produced; iteration continues after an error, so the caller
/// decides whether one bad line ends the run.
pub struct RequestStream<R: Read> {
    records:  StringRecordsIntoIter<R>,
    next_seq: RequestSeq,
}

impl<R: Read> Iterator for RequestStream<R> {
    type Item = StationResult<FuelRequest>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(r) => r,
                Err(e) => return Some(Err(read_error(e))),
            };
            let fields = tokens(&record);
            if fields.is_empty() {
                continue;
            }
            let seq = self.next_seq;
            self.next_seq = seq.next();
            return Some(FuelRequest::parse(seq, line_of(&record), &fields));
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn whitespace_reader<R: Read>(reader: R) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .flexible(true)
        .quoting(false)
        .from_reader(reader)
}

/// Split every csv field on whitespace and drop the empties left by repeated
/// delimiters.
fn tokens(record: &StringRecord) -> Vec<String> {
    record
        .iter()
        .flat_map(str::split_whitespace)
        .map(str::to_owned)
        .collect()
}

/// A failed read from the source is an I/O error, not a bad record.
fn read_error(e: csv::Error) -> StationError {
    if let csv::ErrorKind::Io(source) = e.kind() {
        let kind = source.kind();
        return StationError::Io(io::Error::new(kind, e));
    }
    e.into()
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}
