//! A single client request: `HH:MM liters fuel [display_id ...]`.

use chrono::NaiveTime;

use gs_core::{ArrivalClock, Fuel, RequestSeq};

use crate::{StationError, StationResult};

/// One parsed request record.
///
/// The raw liters and fuel tokens are kept next to their parsed values
/// because the client display id echoes them exactly as written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FuelRequest {
    pub seq:  RequestSeq,
    /// Source line number.  0 when built in code.
    pub line: u64,

    pub time:       NaiveTime,
    pub liters:     u32,
    pub liters_raw: String,
    pub fuel:       Fuel,
    pub fuel_raw:   String,

    /// The record's last token, used as the client's display tag.
    pub tag: String,
}

impl FuelRequest {
    /// Parse the whitespace-separated tokens of one record.
    ///
    /// Needs at least `HH:MM liters fuel`.  Liters must be a positive
    /// integer.
    pub fn parse(seq: RequestSeq, line: u64, fields: &[String]) -> StationResult<Self> {
        let malformed = |reason: String| StationError::MalformedRequest {
            line,
            record: fields.join(" "),
            reason,
        };

        let [time, liters, fuel, ..] = fields else {
            return Err(malformed("expected `HH:MM liters fuel [display_id ...]`".into()));
        };
        let parsed_time = ArrivalClock::parse_hhmm(time).map_err(|e| malformed(e.to_string()))?;
        let parsed_liters = match liters.parse::<u32>() {
            Ok(l) if l > 0 => l,
            _ => return Err(malformed(format!("liters {liters:?} is not a positive integer"))),
        };
        // Non-empty: the slice pattern above guarantees at least three tokens.
        let tag = fields.last().cloned().unwrap_or_default();

        Ok(Self {
            seq,
            line,
            time: parsed_time,
            liters: parsed_liters,
            liters_raw: liters.clone(),
            fuel: Fuel::parse(fuel),
            fuel_raw: fuel.clone(),
            tag,
        })
    }

    /// `HH:MM` of the request.
    pub fn hhmm(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    /// Display id of the client this request creates:
    /// `HH:MM <tag> <liters> <fuel>` with liters and fuel as written.
    pub fn display_id(&self) -> String {
        format!("{} {} {} {}", self.hhmm(), self.tag, self.liters_raw, self.fuel_raw)
    }
}
