//! `gs-station` — stations, their client lines, and text-record loading.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`station`]  | `Station`, `ClientRecord`                                   |
//! | [`registry`] | `StationRegistry`, `StationRecord`                          |
//! | [`request`]  | `FuelRequest`                                               |
//! | [`loader`]   | `load_stations_reader`, `read_requests_reader`, path variants |
//! | [`error`]    | `StationError`, `StationResult<T>`                          |
//!
//! # Queue model (summary)
//!
//! Every station owns a FIFO line bounded by its capacity:
//!
//! ```text
//! free_slots = capacity - line.len()
//! is_full    = line.len() >= capacity
//! ```
//!
//! Registry order is load order, and is the only tie-break the router uses.

pub mod error;
pub mod loader;
pub mod registry;
pub mod request;
pub mod station;


pub use error::{StationError, StationResult};
pub use loader::{
    RequestStream, load_stations_path, load_stations_reader, read_requests_path,
    read_requests_reader,
};
pub use registry::{StationRecord, StationRegistry};
pub use request::FuelRequest;
pub use station::{ClientRecord, Station};
