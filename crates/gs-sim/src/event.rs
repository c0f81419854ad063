//! Outcome events handed to [`SimObserver`](crate::SimObserver)s.

use chrono::NaiveDateTime;

use gs_core::{Fuel, RequestSeq, StationIdx};
use gs_station::FuelRequest;

/// A client routed into a station's line.
#[derive(Clone, Debug)]
pub struct Assignment<'a> {
    pub request:         &'a FuelRequest,
    pub arrival:         NaiveDateTime,
    pub station:         StationIdx,
    pub station_id:      String,
    pub service_minutes: u32,
}

/// A client turned away: no station carrying the fuel had a free slot.
#[derive(Clone, Debug)]
pub struct Rejection<'a> {
    pub request: &'a FuelRequest,
    pub arrival: NaiveDateTime,
}

/// What routing did with one request.
#[derive(Clone, Debug)]
pub enum RouteOutcome<'a> {
    Assigned(Assignment<'a>),
    Rejected(Rejection<'a>),
}

/// The request currently being processed, as seen by the advancer.
#[derive(Copy, Clone, Debug)]
pub struct Trigger {
    pub seq:             RequestSeq,
    pub arrival:         NaiveDateTime,
    pub liters:          u32,
    /// The triggering request's own service estimate.
    pub service_minutes: u32,
}

/// A head-of-line client whose service finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    /// The request whose arrival detected the completion.
    pub seq:             RequestSeq,
    pub station:         StationIdx,
    pub station_id:      String,
    pub display_id:      String,
    pub fuel:            Fuel,
    /// Liters added to the ledger for this completion.
    pub liters_credited: u32,
    /// Time printed on the "served" line: the trigger's arrival plus the
    /// trigger's own estimate.
    pub reported_at:     NaiveDateTime,
    /// When the client's own service window actually ended.
    pub window_end:      NaiveDateTime,
}
