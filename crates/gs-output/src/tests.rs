//! Integration tests for gs-output.

use chrono::NaiveDate;

use gs_core::{FixedJitter, RequestSeq, SimConfig};
use gs_sim::{Sim, SimBuilder};
use gs_station::{FuelRequest, StationRecord, StationRegistry, StationResult};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn sim(stations: &[&str]) -> Sim<FixedJitter> {
    let config = SimConfig {
        date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        ..SimConfig::default()
    };
    let registry = StationRegistry::load(
        stations
            .iter()
            .map(|r| StationRecord::new(r.split_whitespace())),
    )
    .unwrap();
    SimBuilder::new(config, registry)
        .jitter(FixedJitter(0))
        .build()
        .unwrap()
}

fn requests(lines: &[&str]) -> Vec<StationResult<FuelRequest>> {
    lines
        .iter()
        .enumerate()
        .map(|(i, l)| {
            let fields: Vec<String> = l.split_whitespace().map(str::to_owned).collect();
            FuelRequest::parse(RequestSeq(i as u32 + 1), i as u64 + 1, &fields)
        })
        .collect()
}

// ── Vocabulary ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod vocab {
    use std::io::Cursor;

    use crate::Vocabulary;

    #[test]
    fn russian_is_default() {
        assert_eq!(Vocabulary::default(), Vocabulary::russian());
        assert_eq!(Vocabulary::for_lang("RU"), Some(Vocabulary::russian()));
        assert_eq!(Vocabulary::for_lang("en"), Some(Vocabulary::english()));
        assert_eq!(Vocabulary::for_lang("de"), None);
    }

    #[test]
    fn json_overrides_subset() {
        let json = r#"{ "min": "minutes", "liters": "litres" }"#;
        let v = Vocabulary::from_json_reader(Cursor::new(json)).unwrap();
        assert_eq!(v.min, "minutes");
        assert_eq!(v.liters, "litres");
        assert_eq!(v.new_client, Vocabulary::russian().new_client);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = Vocabulary::from_json_reader(Cursor::new("{ not json")).unwrap_err();
        assert!(matches!(err, crate::OutputError::Vocabulary(_)));
    }

    #[test]
    fn english_table_survives_json() {
        let json = serde_json::to_string(&Vocabulary::english()).unwrap();
        let v = Vocabulary::from_json_reader(Cursor::new(json)).unwrap();
        assert_eq!(v, Vocabulary::english());
    }
}

// ── Reporter ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod report {
    use crate::{Reporter, Vocabulary};

    use super::*;

    #[test]
    fn empty_stream_prints_four_zero_sales_lines() {
        let mut sim = sim(&["S1 2 АИ-92 АИ-95"]);
        let mut reporter = Reporter::new(Vocabulary::russian());
        sim.run(Vec::new(), &mut reporter).unwrap();
        assert_eq!(
            reporter.lines(),
            ["АИ-80: 0 л.", "АИ-92: 0 л.", "АИ-95: 0 л.", "АИ-98: 0 л."]
        );
    }

    #[test]
    fn single_slot_scenario_lines() {
        let mut sim = sim(&["S1 1 AI-95"]);
        let mut reporter = Reporter::new(Vocabulary::english());
        sim.run(
            requests(&["09:00 50 AI-95 idA", "09:04 30 AI-95 idB", "09:05 30 AI-95 idC", "09:06 30 AI-95 idD"]),
            &mut reporter,
        )
        .unwrap();

        let empty = "Station S1 max line: 1 fuels: АИ-95 -> ";
        assert_eq!(
            reporter.into_lines(),
            [
                "09:00 new client: 09:00 50 AI-95 joined the line at station S1",
                "Station S1 max line: 1 fuels: АИ-95 -> * 09:00 idA 50 AI-95 5 min",
                "09:04 new client: 09:04 30 AI-95 could not refuel and left (all lines full).",
                "Station S1 max line: 1 fuels: АИ-95 -> * 09:00 idA 50 AI-95 5 min",
                "09:05 new client: 09:05 30 AI-95 could not refuel and left (all lines full).",
                // Reported at the trigger's arrival plus its own 3-minute estimate.
                "09:08 client 09:00 idA 50 AI-95 refuelled and left station S1",
                empty,
                "09:06 new client: 09:06 30 AI-95 joined the line at station S1",
                "Station S1 max line: 1 fuels: АИ-95 -> * 09:06 idD 30 AI-95 3 min",
                "АИ-80: 0 l",
                "АИ-92: 0 l",
                "АИ-95: 30 l",
                "АИ-98: 0 l",
            ]
        );
    }

    #[test]
    fn snapshot_lists_every_station_and_client_in_order() {
        let mut sim = sim(&["A 2 АИ-92", "B 1 АИ-92 АИ-98"]);
        let mut reporter = Reporter::new(Vocabulary::russian());
        sim.run(
            requests(&["10:00 20 АИ-92 x", "10:01 5 АИ-92 y", "10:01 30 АИ-92 z"]),
            &mut reporter,
        )
        .unwrap();

        let lines = reporter.lines();
        let last_snapshot = &lines[lines.len() - 6..lines.len() - 4];
        assert_eq!(
            last_snapshot,
            [
                "Автомат № A максимальная очередь: 2 Марки бензина: АИ-92 -> \
                 * 10:00 x 20 АИ-92 2 мин. * 10:01 y 5 АИ-92 1 мин.",
                "Автомат № B максимальная очередь: 1 Марки бензина: АИ-92 АИ-98 -> \
                 * 10:01 z 30 АИ-92 3 мин.",
            ]
        );
    }

    #[test]
    fn unlisted_fuel_kept_out_of_text_summary() {
        let mut sim = sim(&["S1 2 ДТ"]);
        let mut reporter = Reporter::new(Vocabulary::russian());
        sim.run(requests(&["08:00 10 ДТ a", "08:05 10 ДТ b"]), &mut reporter).unwrap();
        assert!(sim.state().ledger().unlisted().contains_key("ДТ"));
        let summary = &reporter.lines()[reporter.lines().len() - 4..];
        assert!(summary.iter().all(|l| l.ends_with(": 0 л.")));
    }

    #[test]
    fn drain_empties_buffer() {
        let mut sim = sim(&["S1 1 АИ-92"]);
        let mut reporter = Reporter::default();
        let reqs = requests(&["09:00 10 АИ-92 a"]);
        sim.process(reqs[0].as_ref().unwrap(), &mut reporter);
        assert_eq!(reporter.drain().len(), 2);
        assert!(reporter.lines().is_empty());
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{EventKind, EventRow, SalesRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read(dir: &TempDir, name: &str) -> (Vec<String>, Vec<csv::StringRecord>) {
        let mut rdr = csv::Reader::from_path(dir.path().join(name)).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        (headers, rows)
    }

    #[test]
    fn csv_files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let (events, rows) = read(&dir, "events.csv");
        assert_eq!(events, ["seq", "time", "kind", "station", "fuel", "liters", "client"]);
        assert!(rows.is_empty());
        let (sales, _) = read(&dir, "sales.csv");
        assert_eq!(sales, ["fuel", "liters"]);
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("out").join("run1");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("events.csv").exists());
    }

    #[test]
    fn event_rows_written_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_events(&[
            EventRow {
                seq:     1,
                time:    "09:00".into(),
                kind:    EventKind::Assigned,
                station: "S1".into(),
                fuel:    "АИ-95".into(),
                liters:  50,
                client:  "09:00 idA 50 AI-95".into(),
            },
            EventRow {
                seq:     2,
                time:    "09:04".into(),
                kind:    EventKind::Rejected,
                station: String::new(),
                fuel:    "АИ-95".into(),
                liters:  30,
                client:  "09:04 idB 30 AI-95".into(),
            },
        ])
        .unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // idempotent

        let (_, rows) = read(&dir, "events.csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][2], "assigned");
        assert_eq!(&rows[0][6], "09:00 idA 50 AI-95");
        assert_eq!(&rows[1][2], "rejected");
        assert_eq!(&rows[1][3], "");
    }

    #[test]
    fn sales_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_sales(&[SalesRow { fuel: "АИ-92".into(), liters: 40 }]).unwrap();
        w.finish().unwrap();

        let (_, rows) = read(&dir, "sales.csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "АИ-92");
        assert_eq!(&rows[0][1], "40");
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use crate::row::{EventKind, EventRow, SalesRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, OutputError, OutputResult, Reporter, SimOutputObserver};

    use super::*;

    /// Keeps rows in memory; optionally fails every event write.
    #[derive(Default)]
    struct MemWriter {
        events:      Vec<Vec<EventRow>>,
        sales:       Vec<SalesRow>,
        finished:    u32,
        fail_events: bool,
    }

    impl OutputWriter for MemWriter {
        fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
            if self.fail_events {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.events.push(rows.to_vec());
            Ok(())
        }
        fn write_sales(&mut self, rows: &[SalesRow]) -> OutputResult<()> {
            self.sales.extend_from_slice(rows);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn one_batch_per_request() {
        let mut sim = sim(&["S1 1 AI-95"]);
        let mut obs = SimOutputObserver::new(MemWriter::default());
        sim.run(
            requests(&["09:00 50 AI-95 idA", "09:04 30 AI-95 idB", "09:05 30 AI-95 idC"]),
            &mut obs,
        )
        .unwrap();
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(w.events.len(), 3);
        let kinds: Vec<EventKind> = w.events[2].iter().map(|r| r.kind).collect();
        assert_eq!(kinds, [EventKind::Rejected, EventKind::Served]);

        let served = &w.events[2][1];
        assert_eq!(served.time, "09:05"); // own window end, not the reported time
        assert_eq!(served.station, "S1");
        assert_eq!(served.liters, 30);
        assert_eq!(w.finished, 1);
    }

    #[test]
    fn sales_list_grades_then_unlisted() {
        let mut sim = sim(&["S1 2 АИ-92 ДТ"]);
        let mut obs = SimOutputObserver::new(MemWriter::default());
        sim.run(
            requests(&["08:00 10 ДТ a", "08:05 20 АИ-92 b", "08:10 10 АИ-92 c"]),
            &mut obs,
        )
        .unwrap();

        let sales = obs.into_writer().sales;
        let labels: Vec<&str> = sales.iter().map(|r| r.fuel.as_str()).collect();
        assert_eq!(labels, ["АИ-80", "АИ-92", "АИ-95", "АИ-98", "ДТ"]);
        let total: u64 = sales.iter().map(|r| r.liters).sum();
        assert_eq!(total, sim.state().ledger().total());
    }

    #[test]
    fn first_write_error_is_kept() {
        let mut sim = sim(&["S1 1 АИ-92"]);
        let writer = MemWriter { fail_events: true, ..MemWriter::default() };
        let mut obs = SimOutputObserver::new(writer);
        sim.run(requests(&["09:00 10 АИ-92 a", "09:01 10 АИ-92 b"]), &mut obs).unwrap();

        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn report_and_csv_side_by_side() {
        let dir = tempfile::tempdir().unwrap();
        let mut sim = sim(&["S1 1 АИ-92"]);
        let mut reporter = Reporter::default();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(
            requests(&["09:00 10 АИ-92 a", "09:02 10 АИ-92 b"]),
            &mut (&mut reporter, &mut obs),
        )
        .unwrap();
        assert!(obs.take_error().is_none());
        drop(obs);

        let mut rdr = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let rows = rdr.records().count();
        // b is refused before a's completion frees the slot.
        assert_eq!(rows, 3);
        assert_eq!(reporter.lines().len(), 3 + 2 + 4);
    }
}
