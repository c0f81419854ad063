//! `Reporter` — the localized text report.

use gs_core::{ArrivalClock, RequestSeq};
use gs_sim::{Assignment, Completion, Rejection, SimObserver, SimulationState};
use gs_station::{Station, StationRegistry};

use crate::Vocabulary;

/// A [`SimObserver`] that renders every event as one text line.
///
/// Per request the lines are: the assignment or rejection, the completions
/// detected by that request, then one snapshot line per station in registry
/// order.  The four grade totals follow once the stream ends.
#[derive(Debug, Default)]
pub struct Reporter {
    vocab: Vocabulary,
    lines: Vec<String>,
}

impl Reporter {
    pub fn new(vocab: Vocabulary) -> Self {
        Self { vocab, lines: Vec::new() }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Lines rendered so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Remove and return the lines rendered so far.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    fn snapshot_line(&self, station: &Station) -> String {
        let v = &self.vocab;
        let fuels: Vec<&str> = station.fuels.iter().map(|f| f.as_str()).collect();
        let mut line = format!(
            "{} {} {} {} {} {} -> ",
            v.station_num,
            station.id,
            v.max_line,
            station.capacity,
            v.petrol_type,
            fuels.join(" "),
        );
        for (i, client) in station.line().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(&format!("* {} {} {}", client.display_id, client.service_minutes, v.min));
        }
        line
    }
}

impl SimObserver for Reporter {
    fn on_assigned(&mut self, event: &Assignment<'_>) {
        let at = ArrivalClock::hhmm(event.arrival);
        let r = event.request;
        self.lines.push(format!(
            "{at} {} {at} {} {} {} {}",
            self.vocab.new_client, r.liters_raw, r.fuel_raw, self.vocab.in_line, event.station_id,
        ));
    }

    fn on_rejected(&mut self, event: &Rejection<'_>) {
        let at = ArrivalClock::hhmm(event.arrival);
        let r = event.request;
        self.lines.push(format!(
            "{at} {} {at} {} {} {}",
            self.vocab.client_left, r.liters_raw, r.fuel_raw, self.vocab.full_lines,
        ));
    }

    fn on_served(&mut self, event: &Completion) {
        self.lines.push(format!(
            "{} {} {} {} {}",
            ArrivalClock::hhmm(event.reported_at),
            self.vocab.transport_id,
            event.display_id,
            self.vocab.served_in,
            event.station_id,
        ));
    }

    fn on_snapshot(&mut self, _seq: RequestSeq, registry: &StationRegistry) {
        let rendered: Vec<String> = registry.iter().map(|s| self.snapshot_line(s)).collect();
        self.lines.extend(rendered);
    }

    fn on_sim_end(&mut self, state: &SimulationState) {
        for (grade, liters) in state.ledger().canonical() {
            self.lines.push(format!("{grade}: {liters} {}", self.vocab.liters));
        }
    }
}
