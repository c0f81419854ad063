//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use gs_core::{ArrivalClock, RequestSeq};
use gs_sim::{Assignment, Completion, Rejection, SimObserver, SimulationState};
use gs_station::StationRegistry;

use crate::row::{EventKind, EventRow, SalesRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes client events and the final sales totals
/// to any [`OutputWriter`] backend.
///
/// Events are buffered per request and written when the request's snapshot
/// arrives.  Errors from the writer are stored internally because
/// `SimObserver` methods have no return value; after `sim.run()` returns,
/// check with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<EventRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending:    Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            tracing::error!(error = %e, "output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_assigned(&mut self, event: &Assignment<'_>) {
        let r = event.request;
        self.pending.push(EventRow {
            seq:     r.seq.0,
            time:    ArrivalClock::hhmm(event.arrival),
            kind:    EventKind::Assigned,
            station: event.station_id.clone(),
            fuel:    r.fuel.to_string(),
            liters:  r.liters,
            client:  r.display_id(),
        });
    }

    fn on_rejected(&mut self, event: &Rejection<'_>) {
        let r = event.request;
        self.pending.push(EventRow {
            seq:     r.seq.0,
            time:    ArrivalClock::hhmm(event.arrival),
            kind:    EventKind::Rejected,
            station: String::new(),
            fuel:    r.fuel.to_string(),
            liters:  r.liters,
            client:  r.display_id(),
        });
    }

    fn on_served(&mut self, event: &Completion) {
        self.pending.push(EventRow {
            seq:     event.seq.0,
            time:    ArrivalClock::hhmm(event.window_end),
            kind:    EventKind::Served,
            station: event.station_id.clone(),
            fuel:    event.fuel.to_string(),
            liters:  event.liters_credited,
            client:  event.display_id.clone(),
        });
    }

    fn on_snapshot(&mut self, _seq: RequestSeq, _registry: &StationRegistry) {
        if self.pending.is_empty() {
            return;
        }
        let rows = std::mem::take(&mut self.pending);
        let result = self.writer.write_events(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, state: &SimulationState) {
        let ledger = state.ledger();
        let rows: Vec<SalesRow> = ledger
            .canonical()
            .map(|(grade, liters)| SalesRow { fuel: grade.to_string(), liters })
            .chain(
                ledger
                    .unlisted()
                    .iter()
                    .map(|(label, &liters)| SalesRow { fuel: label.clone(), liters }),
            )
            .collect();

        let result = self.writer.write_sales(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
