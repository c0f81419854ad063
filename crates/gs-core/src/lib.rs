//! `gs-core` — foundational types for the gas-station queue simulator.
//!
//! This crate is a dependency of every other `gs-*` crate.  It has no `gs-*`
//! dependencies and only a handful of external ones (`chrono`, `rand`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`ids`]   | `StationIdx`, `RequestSeq`                                 |
//! | [`fuel`]  | `FuelGrade` (the four canonical grades), `Fuel`            |
//! | [`time`]  | `ArrivalClock`, `SimConfig`, policy enums                  |
//! | [`rng`]   | `SimRng`, the `Jitter` trait, `SeededJitter`, `FixedJitter`|
//! | [`error`] | `GsError`, `GsResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, fuels, and config.  |

pub mod error;
pub mod fuel;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GsError, GsResult};
pub use fuel::{Fuel, FuelGrade};
pub use ids::{RequestSeq, StationIdx};
pub use rng::{FixedJitter, Jitter, SeededJitter, SimRng};
pub use time::{ArrivalClock, MalformedPolicy, SalesAttribution, SimConfig};
