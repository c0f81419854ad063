//! `gs-sim` — per-request simulation loop for the gas-station queue simulator.
//!
//! # Request loop
//!
//! ```text
//! for request in stream (pre-sorted by HH:MM):
//!   ① Estimate — service minutes for the request's liters (± jitter).
//!   ② Route    — first station in registry order that carries the fuel
//!                and has a free slot gets the client; otherwise the client
//!                is rejected.
//!   ③ Advance  — every station, in registry order, completes its head
//!                client if that client's window ended by this arrival
//!                (at most one completion per station per request).
//!   ④ Snapshot — observers see the registry after the request.
//! after the stream: observers get the final `SimulationState`.
//! ```
//!
//! Malformed request records are skipped or abort the run, per
//! [`MalformedPolicy`](gs_core::MalformedPolicy).
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gs_core::SimConfig;
//! use gs_sim::{NoopObserver, SimBuilder};
//! use gs_station::{load_stations_path, read_requests_path};
//!
//! let registry = load_stations_path(Path::new("stations.txt"))?;
//! let mut sim = SimBuilder::new(SimConfig::default(), registry).build()?;
//! sim.run(read_requests_path(Path::new("input.txt"))?, &mut NoopObserver)?;
//! println!("rejected: {}", sim.state().rejected());
//! ```

pub mod advancer;
pub mod builder;
pub mod error;
pub mod estimator;
pub mod event;
pub mod observer;
pub mod router;
pub mod sim;
pub mod state;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use estimator::ServiceEstimator;
pub use event::{Assignment, Completion, Rejection, RouteOutcome, Trigger};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use state::{SalesLedger, SimulationState};
