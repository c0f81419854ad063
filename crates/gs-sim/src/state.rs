//! Per-run mutable state: the sales ledger and outcome counters.

use std::collections::BTreeMap;

use gs_core::{Fuel, FuelGrade};

// ── SalesLedger ───────────────────────────────────────────────────────────────

/// Liters sold per fuel.
///
/// The four canonical grades always have a slot (starting at zero).  Any
/// other label gets an entry in `unlisted` the first time it is credited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SalesLedger {
    grades:   [u64; 4],
    unlisted: BTreeMap<String, u64>,
}

impl SalesLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `liters` to `fuel`'s total.
    ///
    /// Returns `true` when this is the first sale of an unlisted label, so
    /// the caller can surface it once.
    pub fn credit(&mut self, fuel: &Fuel, liters: u32) -> bool {
        match fuel {
            Fuel::Grade(g) => {
                self.grades[g.index()] += u64::from(liters);
                false
            }
            Fuel::Other(label) => match self.unlisted.get_mut(label) {
                Some(total) => {
                    *total += u64::from(liters);
                    false
                }
                None => {
                    self.unlisted.insert(label.clone(), u64::from(liters));
                    true
                }
            },
        }
    }

    #[inline]
    pub fn grade(&self, grade: FuelGrade) -> u64 {
        self.grades[grade.index()]
    }

    /// The four canonical grades in report order.
    pub fn canonical(&self) -> impl Iterator<Item = (FuelGrade, u64)> + '_ {
        FuelGrade::ALL.into_iter().map(|g| (g, self.grade(g)))
    }

    /// Sales of labels outside the canonical four, sorted by label.
    pub fn unlisted(&self) -> &BTreeMap<String, u64> {
        &self.unlisted
    }

    pub fn total(&self) -> u64 {
        self.grades.iter().sum::<u64>() + self.unlisted.values().sum::<u64>()
    }
}

// ── SimulationState ───────────────────────────────────────────────────────────

/// Everything a run accumulates besides the station lines themselves.
///
/// Created fresh by [`SimBuilder::build`](crate::SimBuilder::build); there is
/// no state shared between runs.
#[derive(Clone, Debug, Default)]
pub struct SimulationState {
    pub(crate) ledger:   SalesLedger,
    pub(crate) assigned: u64,
    pub(crate) rejected: u64,
    pub(crate) served:   u64,
    pub(crate) skipped:  u64,
}

impl SimulationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ledger(&self) -> &SalesLedger {
        &self.ledger
    }

    /// Clients routed to a station.
    pub fn assigned(&self) -> u64 {
        self.assigned
    }

    /// Clients turned away because every eligible line was full.
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    /// Completed services.
    pub fn served(&self) -> u64 {
        self.served
    }

    /// Malformed request records skipped.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}
