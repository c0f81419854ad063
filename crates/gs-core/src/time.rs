//! Arrival-time model and run configuration.
//!
//! # Design
//!
//! Request records carry only a wall-clock `HH:MM`.  The [`ArrivalClock`]
//! pins them to one calendar date so that arrival and service windows are
//! full `NaiveDateTime`s and compare exactly:
//!
//!   arrival       = date + HH:MM
//!   window_end    = arrival + service_minutes
//!
//! Runs never cross midnight; a request stream is a single day's log.

use std::fmt;

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::{GsError, GsResult};

// ── ArrivalClock ──────────────────────────────────────────────────────────────

/// Turns `HH:MM` request times into timestamps on a fixed date.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArrivalClock {
    pub date: NaiveDate,
}

impl ArrivalClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Clock pinned to today's local date.
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// Parse a `HH:MM` token.
    pub fn parse_hhmm(token: &str) -> GsResult<NaiveTime> {
        NaiveTime::parse_from_str(token, "%H:%M")
            .map_err(|e| GsError::Parse(format!("invalid time {token:?}: {e}")))
    }

    /// Combine the clock's date with a time of day.
    #[inline]
    pub fn stamp(&self, time: NaiveTime) -> NaiveDateTime {
        self.date.and_time(time)
    }

    /// `at + minutes`.
    #[inline]
    pub fn after(at: NaiveDateTime, minutes: u32) -> NaiveDateTime {
        at + Duration::minutes(i64::from(minutes))
    }

    /// Render the `HH:MM` part of a timestamp.
    pub fn hhmm(at: NaiveDateTime) -> String {
        at.format("%H:%M").to_string()
    }
}

impl fmt::Display for ArrivalClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clock({})", self.date)
    }
}

// ── Policies ──────────────────────────────────────────────────────────────────

/// Which liters value is credited to the ledger when a client is served.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SalesAttribution {
    /// Credit the liters of the request whose arrival triggered the
    /// completion.  Matches the legacy report totals.
    #[default]
    TriggeringRequest,
    /// Credit the served client's own liters.
    ServedClient,
}

/// What to do with a request record that fails to parse.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MalformedPolicy {
    /// Log, count, and continue with the next record.
    #[default]
    Skip,
    /// Stop the run and return the parse error.
    Abort,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Filled from command-line flags by the application, or deserialized with
/// the `serde` feature.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Calendar date every `HH:MM` arrival is pinned to.
    pub date: NaiveDate,

    /// Jitter seed.  `None` draws from OS entropy.
    pub seed: Option<u64>,

    /// Pump rate used by the service-time estimate.  Default: 10.
    pub liters_per_minute: u32,

    pub sales_attribution: SalesAttribution,

    pub on_malformed: MalformedPolicy,
}

impl SimConfig {
    /// Construct the `ArrivalClock` for this run.
    pub fn make_clock(&self) -> ArrivalClock {
        ArrivalClock::new(self.date)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            date:              Local::now().date_naive(),
            seed:              None,
            liters_per_minute: 10,
            sales_attribution: SalesAttribution::default(),
            on_malformed:      MalformedPolicy::default(),
        }
    }
}
