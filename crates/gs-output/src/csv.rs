//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `events.csv`: `seq,time,kind,station,fuel,liters,client`
//! - `sales.csv`: `fuel,liters`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult, SalesRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    events:   Writer<File>,
    sales:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["seq", "time", "kind", "station", "fuel", "liters", "client"])?;

        let mut sales = Writer::from_path(dir.join("sales.csv"))?;
        sales.write_record(["fuel", "liters"])?;

        tracing::debug!(dir = %dir.display(), "opened CSV output");
        Ok(Self {
            events,
            sales,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record([
                row.seq.to_string().as_str(),
                row.time.as_str(),
                row.kind.as_str(),
                row.station.as_str(),
                row.fuel.as_str(),
                row.liters.to_string().as_str(),
                row.client.as_str(),
            ])?;
        }
        Ok(())
    }

    fn write_sales(&mut self, rows: &[SalesRow]) -> OutputResult<()> {
        for row in rows {
            self.sales.write_record([row.fuel.as_str(), row.liters.to_string().as_str()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.sales.flush()?;
        Ok(())
    }
}
