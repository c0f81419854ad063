//! Queue advancement: complete head-of-line clients whose window elapsed.
//!
//! Each call makes one pass over the stations and completes at most one
//! client per station.  A station whose line holds several expired clients
//! (sparse arrivals) drains one per incoming request, not all at once.
//!
//! The head is inspected with a peek and only popped once completion is
//! confirmed, so a client still being served is never lost.

use gs_core::{ArrivalClock, SalesAttribution};
use gs_station::StationRegistry;

use crate::SimulationState;
use crate::event::{Completion, Trigger};

pub fn advance(
    registry:    &mut StationRegistry,
    state:       &mut SimulationState,
    trigger:     &Trigger,
    attribution: SalesAttribution,
) -> Vec<Completion> {
    let mut completions = Vec::new();

    for idx in registry.indices() {
        let station = registry.get_mut(idx);
        if !station
            .peek_head()
            .is_some_and(|head| head.is_done_at(trigger.arrival))
        {
            continue;
        }
        let Some(client) = station.dequeue_head() else {
            continue;
        };

        let liters = match attribution {
            SalesAttribution::TriggeringRequest => trigger.liters,
            SalesAttribution::ServedClient => client.liters,
        };
        if state.ledger.credit(&client.fuel, liters) {
            tracing::warn!(
                fuel = %client.fuel,
                "sales of a fuel outside the four canonical grades are tracked separately"
            );
        }
        state.served += 1;

        completions.push(Completion {
            seq:             trigger.seq,
            station:         idx,
            station_id:      station.id.clone(),
            window_end:      client.window_end(),
            display_id:      client.display_id,
            fuel:            client.fuel,
            liters_credited: liters,
            reported_at:     ArrivalClock::after(trigger.arrival, trigger.service_minutes),
        });
    }

    completions
}
