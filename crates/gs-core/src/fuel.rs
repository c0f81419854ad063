//! Fuel grades shared by stations, requests, and the sales ledger.
//!
//! The ledger knows exactly four grades.  Stations and requests may still
//! name anything else (diesel, gas, …); those labels travel as
//! [`Fuel::Other`] and are matched by exact text.

use std::fmt;

/// One of the four canonical petrol grades.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FuelGrade {
    Ai80,
    Ai92,
    Ai95,
    Ai98,
}

impl FuelGrade {
    /// All grades in canonical report order.
    pub const ALL: [FuelGrade; 4] = [
        FuelGrade::Ai80,
        FuelGrade::Ai92,
        FuelGrade::Ai95,
        FuelGrade::Ai98,
    ];

    /// Canonical label as printed in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            FuelGrade::Ai80 => "АИ-80",
            FuelGrade::Ai92 => "АИ-92",
            FuelGrade::Ai95 => "АИ-95",
            FuelGrade::Ai98 => "АИ-98",
        }
    }

    /// Dense index into `[T; 4]` ledgers.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse `АИ-95`, `AI-95`, or `ai-95`.  Returns `None` for anything
    /// outside the four grades.
    pub fn parse(label: &str) -> Option<FuelGrade> {
        let octane = label
            .strip_prefix("АИ-")
            .or_else(|| label.strip_prefix("аи-"))
            .or_else(|| {
                let (prefix, rest) = label.split_at_checked(3)?;
                prefix.eq_ignore_ascii_case("AI-").then_some(rest)
            })?;
        match octane {
            "80" => Some(FuelGrade::Ai80),
            "92" => Some(FuelGrade::Ai92),
            "95" => Some(FuelGrade::Ai95),
            "98" => Some(FuelGrade::Ai98),
            _ => None,
        }
    }
}

impl fmt::Display for FuelGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fuel label as it appears in station and request records.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fuel {
    /// One of the four ledger grades.
    Grade(FuelGrade),
    /// Any other label, kept verbatim.
    Other(String),
}

impl Fuel {
    /// Classify a raw label.  Never fails: unknown labels become `Other`.
    pub fn parse(label: &str) -> Fuel {
        match FuelGrade::parse(label) {
            Some(grade) => Fuel::Grade(grade),
            None => Fuel::Other(label.to_owned()),
        }
    }

    /// The ledger grade, if this is one of the canonical four.
    #[inline]
    pub fn grade(&self) -> Option<FuelGrade> {
        match self {
            Fuel::Grade(g) => Some(*g),
            Fuel::Other(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Fuel::Grade(g) => g.as_str(),
            Fuel::Other(s) => s,
        }
    }
}

impl From<FuelGrade> for Fuel {
    fn from(grade: FuelGrade) -> Fuel {
        Fuel::Grade(grade)
    }
}

impl fmt::Display for Fuel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
