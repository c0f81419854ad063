//! Fluent builder for constructing a [`Sim`].

use gs_core::{Jitter, SeededJitter, SimConfig};
use gs_station::StationRegistry;

use crate::{ServiceEstimator, Sim, SimError, SimResult, SimulationState};

/// Fluent builder for [`Sim<J>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — date, seed, pump rate, policies
/// - [`StationRegistry`] — from [`gs_station::load_stations_path`] or
///   [`StationRegistry::load`]
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                                        |
/// |----------------|------------------------------------------------|
/// | `.jitter(j)`   | `SeededJitter::from_seed(config.seed)`         |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, registry)
///     .jitter(FixedJitter(0))
///     .build()?;
/// sim.run(requests, &mut NoopObserver)?;
/// ```
pub struct SimBuilder<J: Jitter> {
    config:   SimConfig,
    registry: StationRegistry,
    jitter:   J,
}

impl SimBuilder<SeededJitter> {
    /// Create a builder whose jitter is seeded from `config.seed`.
    pub fn new(config: SimConfig, registry: StationRegistry) -> Self {
        let jitter = SeededJitter::from_seed(config.seed);
        Self { config, registry, jitter }
    }
}

impl<J: Jitter> SimBuilder<J> {
    /// Replace the jitter source (e.g. `FixedJitter` for reproducible tests).
    pub fn jitter<K: Jitter>(self, jitter: K) -> SimBuilder<K> {
        SimBuilder {
            config:   self.config,
            registry: self.registry,
            jitter,
        }
    }

    /// Validate inputs and return a ready-to-run [`Sim`] with fresh state.
    pub fn build(self) -> SimResult<Sim<J>> {
        if self.config.liters_per_minute == 0 {
            return Err(SimError::Config("liters_per_minute must be positive".into()));
        }
        if self.registry.is_empty() {
            tracing::warn!("no stations loaded; every client will be rejected");
        }

        Ok(Sim {
            clock:     self.config.make_clock(),
            estimator: ServiceEstimator::new(self.jitter, self.config.liters_per_minute),
            config:    self.config,
            registry:  self.registry,
            state:     SimulationState::new(),
            last_seen: None,
        })
    }
}
