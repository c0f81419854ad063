//! Simulation RNG and the service-time jitter source.
//!
//! The jitter term is the only nondeterminism in a run.  It is drawn through
//! the [`Jitter`] trait so a run can be made reproducible either by seeding
//! ([`SeededJitter::seeded`]) or by pinning the term ([`FixedJitter`]).

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG.
///
/// Single-threaded by construction; the simulator never shares it.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.  Runs built this way are not reproducible.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

// ── Jitter ────────────────────────────────────────────────────────────────────

/// Source of the ±1 minute adjustment applied to service estimates.
///
/// Implementations must return a value in `-1..=1`.
pub trait Jitter {
    fn draw(&mut self) -> i32;
}

/// Uniform draw from {-1, 0, +1}.
pub struct SeededJitter(SimRng);

impl SeededJitter {
    /// Reproducible jitter from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        SeededJitter(SimRng::new(seed))
    }

    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        SeededJitter(SimRng::from_entropy())
    }

    /// `seeded` when a seed is given, otherwise `from_entropy`.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
    }
}

impl Jitter for SeededJitter {
    #[inline]
    fn draw(&mut self) -> i32 {
        self.0.gen_range(-1..=1)
    }
}

/// Always returns the same term, clamped to `-1..=1`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedJitter(pub i32);

impl Jitter for FixedJitter {
    #[inline]
    fn draw(&mut self) -> i32 {
        self.0.clamp(-1, 1)
    }
}

impl<J: Jitter + ?Sized> Jitter for Box<J> {
    #[inline]
    fn draw(&mut self) -> i32 {
        (**self).draw()
    }
}
