//! Client routing: first eligible station in registry order.
//!
//! There is no load balancing.  Two stations that both carry the fuel and
//! both have room are ranked purely by load order.

use chrono::NaiveDateTime;

use gs_core::{Fuel, StationIdx};
use gs_station::{ClientRecord, FuelRequest, StationRegistry};

use crate::SimulationState;
use crate::event::{Assignment, Rejection, RouteOutcome};

/// The first station that carries `fuel` and is not full.
pub fn select_station(registry: &StationRegistry, fuel: &Fuel) -> Option<StationIdx> {
    registry
        .iter()
        .position(|s| s.accepts(fuel))
        .map(|i| StationIdx(i as u32))
}

/// Route `request` and record the outcome in `state`.
///
/// On success the client joins the back of the chosen station's line.
pub fn route<'a>(
    registry:        &mut StationRegistry,
    state:           &mut SimulationState,
    request:         &'a FuelRequest,
    arrival:         NaiveDateTime,
    service_minutes: u32,
) -> RouteOutcome<'a> {
    let Some(idx) = select_station(registry, &request.fuel) else {
        state.rejected += 1;
        tracing::debug!(seq = request.seq.0, fuel = %request.fuel, "client rejected: lines full");
        return RouteOutcome::Rejected(Rejection { request, arrival });
    };

    let station = registry.get_mut(idx);
    station.enqueue(ClientRecord {
        arrival,
        liters: request.liters,
        fuel: request.fuel.clone(),
        display_id: request.display_id(),
        service_minutes,
    });
    state.assigned += 1;
    tracing::debug!(
        seq = request.seq.0,
        station = %station.id,
        minutes = service_minutes,
        "client assigned"
    );

    RouteOutcome::Assigned(Assignment {
        request,
        arrival,
        station: idx,
        station_id: station.id.clone(),
        service_minutes,
    })
}
