//! Simulation observer trait for reporting and data collection.

use chrono::NaiveDateTime;

use gs_core::RequestSeq;
use gs_station::{FuelRequest, StationError, StationRegistry};

use crate::{Assignment, Completion, Rejection, SimulationState};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points of each
/// request.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  For one request the order is:
/// `on_request_start`, then `on_assigned` or `on_rejected`, then zero or more
/// `on_served`, then `on_snapshot`.
pub trait SimObserver {
    /// Called before a request is routed.
    fn on_request_start(&mut self, _request: &FuelRequest, _arrival: NaiveDateTime) {}

    fn on_assigned(&mut self, _event: &Assignment<'_>) {}

    fn on_rejected(&mut self, _event: &Rejection<'_>) {}

    /// Called once per completed service, in registry order.
    fn on_served(&mut self, _event: &Completion) {}

    /// Called after every request with read-only access to all lines.
    fn on_snapshot(&mut self, _seq: RequestSeq, _registry: &StationRegistry) {}

    /// Called for each malformed record skipped under `MalformedPolicy::Skip`.
    fn on_skipped(&mut self, _error: &StationError) {}

    /// Called once after the request stream is exhausted.
    fn on_sim_end(&mut self, _state: &SimulationState) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_request_start(&mut self, request: &FuelRequest, arrival: NaiveDateTime) {
        (**self).on_request_start(request, arrival);
    }
    fn on_assigned(&mut self, event: &Assignment<'_>) {
        (**self).on_assigned(event);
    }
    fn on_rejected(&mut self, event: &Rejection<'_>) {
        (**self).on_rejected(event);
    }
    fn on_served(&mut self, event: &Completion) {
        (**self).on_served(event);
    }
    fn on_snapshot(&mut self, seq: RequestSeq, registry: &StationRegistry) {
        (**self).on_snapshot(seq, registry);
    }
    fn on_skipped(&mut self, error: &StationError) {
        (**self).on_skipped(error);
    }
    fn on_sim_end(&mut self, state: &SimulationState) {
        (**self).on_sim_end(state);
    }
}

/// Fan out every callback to two observers, first `A` then `B`.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_request_start(&mut self, request: &FuelRequest, arrival: NaiveDateTime) {
        self.0.on_request_start(request, arrival);
        self.1.on_request_start(request, arrival);
    }
    fn on_assigned(&mut self, event: &Assignment<'_>) {
        self.0.on_assigned(event);
        self.1.on_assigned(event);
    }
    fn on_rejected(&mut self, event: &Rejection<'_>) {
        self.0.on_rejected(event);
        self.1.on_rejected(event);
    }
    fn on_served(&mut self, event: &Completion) {
        self.0.on_served(event);
        self.1.on_served(event);
    }
    fn on_snapshot(&mut self, seq: RequestSeq, registry: &StationRegistry) {
        self.0.on_snapshot(seq, registry);
        self.1.on_snapshot(seq, registry);
    }
    fn on_skipped(&mut self, error: &StationError) {
        self.0.on_skipped(error);
        self.1.on_skipped(error);
    }
    fn on_sim_end(&mut self, state: &SimulationState) {
        self.0.on_sim_end(state);
        self.1.on_sim_end(state);
    }
}
