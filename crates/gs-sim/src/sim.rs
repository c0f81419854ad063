//! The `Sim` struct and its request loop.

use chrono::NaiveDateTime;

use gs_core::{ArrivalClock, Jitter, MalformedPolicy, SimConfig};
use gs_station::{FuelRequest, StationError, StationRegistry, StationResult};

use crate::event::{RouteOutcome, Trigger};
use crate::{ServiceEstimator, SimObserver, SimResult, SimulationState, advancer, router};

/// The main simulation runner.
///
/// `Sim<J>` owns the station registry and the run's [`SimulationState`] and
/// processes one request at a time:
///
/// 1. **Estimate**: draw the request's service minutes.
/// 2. **Route**: enqueue at the first eligible station, or reject.
/// 3. **Advance**: one completion check per station, in registry order.
/// 4. **Snapshot**: hand the registry to the observer.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<J: Jitter> {
    pub config: SimConfig,

    /// Pins `HH:MM` arrivals to the run's date.
    pub clock: ArrivalClock,

    /// Every station and its line, in routing priority order.
    pub registry: StationRegistry,

    pub estimator: ServiceEstimator<J>,

    pub(crate) state: SimulationState,

    /// Arrival of the last processed request, for the ordering check.
    pub(crate) last_seen: Option<NaiveDateTime>,
}

impl<J: Jitter> Sim<J> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Process every record of `requests` in order, then call
    /// `observer.on_sim_end`.
    ///
    /// Malformed records follow `config.on_malformed`.  I/O failures always
    /// end the run.
    pub fn run<I, O>(&mut self, requests: I, observer: &mut O) -> SimResult<()>
    where
        I: IntoIterator<Item = StationResult<FuelRequest>>,
        O: SimObserver + ?Sized,
    {
        for record in requests {
            match record {
                Ok(request) => self.process(&request, observer),
                Err(e) => self.handle_bad_record(e, observer)?,
            }
        }

        tracing::info!(
            assigned = self.state.assigned,
            rejected = self.state.rejected,
            served = self.state.served,
            skipped = self.state.skipped,
            "simulation finished"
        );
        observer.on_sim_end(&self.state);
        Ok(())
    }

    /// Process a single well-formed request.
    pub fn process<O: SimObserver + ?Sized>(&mut self, request: &FuelRequest, observer: &mut O) {
        let arrival = self.clock.stamp(request.time);
        if self.last_seen.is_some_and(|prev| arrival < prev) {
            tracing::warn!(
                seq = request.seq.0,
                line = request.line,
                "request arrives earlier than its predecessor; input is expected to be sorted"
            );
        }
        self.last_seen = Some(arrival);

        // ── ① Estimate (drawn for every request, routed or not) ──────────
        let service_minutes = self.estimator.estimate(request.liters);

        observer.on_request_start(request, arrival);

        // ── ② Route ───────────────────────────────────────────────────────
        match router::route(
            &mut self.registry,
            &mut self.state,
            request,
            arrival,
            service_minutes,
        ) {
            RouteOutcome::Assigned(a) => observer.on_assigned(&a),
            RouteOutcome::Rejected(r) => observer.on_rejected(&r),
        }

        // ── ③ Advance ─────────────────────────────────────────────────────
        let trigger = Trigger {
            seq: request.seq,
            arrival,
            liters: request.liters,
            service_minutes,
        };
        let completions = advancer::advance(
            &mut self.registry,
            &mut self.state,
            &trigger,
            self.config.sales_attribution,
        );
        for completion in &completions {
            observer.on_served(completion);
        }

        // ── ④ Snapshot ────────────────────────────────────────────────────
        observer.on_snapshot(request.seq, &self.registry);
    }

    /// State accumulated so far.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Consume the sim, keeping only its final state.
    pub fn into_state(self) -> SimulationState {
        self.state
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn handle_bad_record<O: SimObserver + ?Sized>(
        &mut self,
        error:    StationError,
        observer: &mut O,
    ) -> SimResult<()> {
        if matches!(error, StationError::Io(_)) || self.config.on_malformed == MalformedPolicy::Abort {
            return Err(error.into());
        }
        tracing::warn!(%error, "skipping request record");
        self.state.skipped += 1;
        observer.on_skipped(&error);
        Ok(())
    }
}
