//! `StationRegistry` — every station of a run, in load order.
//!
//! Stations are stored in a `Vec` indexed by [`StationIdx`]; a side map
//! resolves the textual station id from the input file to its index.  Load
//! order is routing priority and report order, so the `Vec` is never
//! reordered and stations are never removed.

use gs_core::{Fuel, StationIdx};

use crate::{ClientRecord, Station, StationError, StationResult};

#[cfg(feature = "fx-hash")]
type IdIndex = rustc_hash::FxHashMap<String, StationIdx>;
#[cfg(not(feature = "fx-hash"))]
type IdIndex = std::collections::HashMap<String, StationIdx>;

// ── StationRecord ─────────────────────────────────────────────────────────────

/// One raw station record: `station_id capacity fuel [fuel ...]` as tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StationRecord {
    /// Source line number, for error messages.  0 when built in code.
    pub line:   u64,
    pub fields: Vec<String>,
}

impl StationRecord {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { line: 0, fields: fields.into_iter().map(Into::into).collect() }
    }

    fn malformed(&self, reason: impl Into<String>) -> StationError {
        StationError::MalformedRecord {
            line:   self.line,
            record: self.fields.join(" "),
            reason: reason.into(),
        }
    }

    /// Validate and convert into a `Station`.
    fn into_station(self) -> StationResult<Station> {
        let [id, capacity, fuels @ ..] = self.fields.as_slice() else {
            return Err(self.malformed("expected `station_id capacity fuel [fuel ...]`"));
        };
        let capacity = match capacity.parse::<u32>() {
            Ok(c) if c > 0 => c,
            _ => {
                return Err(self.malformed(format!(
                    "capacity {capacity:?} is not a positive integer"
                )));
            }
        };
        if fuels.is_empty() {
            return Err(self.malformed("at least one fuel type is required"));
        }
        let fuels = fuels.iter().map(|f| Fuel::parse(f)).collect();
        Ok(Station::new(id.clone(), capacity, fuels))
    }
}

// ── StationRegistry ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct StationRegistry {
    stations: Vec<Station>,
    by_id:    IdIndex,
}

impl StationRegistry {
    /// Build a registry from raw records.
    ///
    /// Fails on the first malformed record or duplicate id; no partial
    /// registry is returned.
    pub fn load<I>(records: I) -> StationResult<Self>
    where
        I: IntoIterator<Item = StationRecord>,
    {
        let mut registry = Self::default();
        for record in records {
            let line = record.line;
            let raw = record.fields.join(" ");
            let station = record.into_station()?;
            if registry.by_id.contains_key(&station.id) {
                return Err(StationError::MalformedRecord {
                    line,
                    record: raw,
                    reason: format!("duplicate station id {:?}", station.id),
                });
            }
            registry.push(station);
        }
        tracing::debug!(stations = registry.len(), "station registry loaded");
        Ok(registry)
    }

    /// Build a registry from already-constructed stations.
    pub fn from_stations(stations: impl IntoIterator<Item = Station>) -> StationResult<Self> {
        let mut registry = Self::default();
        for station in stations {
            if station.capacity == 0 || station.fuels.is_empty() {
                return Err(StationError::MalformedRecord {
                    line:   0,
                    record: station.id.clone(),
                    reason: "station needs a positive capacity and at least one fuel".into(),
                });
            }
            if registry.by_id.contains_key(&station.id) {
                return Err(StationError::MalformedRecord {
                    line:   0,
                    record: station.id.clone(),
                    reason: format!("duplicate station id {:?}", station.id),
                });
            }
            registry.push(station);
        }
        Ok(registry)
    }

    fn push(&mut self, station: Station) {
        let idx = StationIdx(self.stations.len() as u32);
        self.by_id.insert(station.id.clone(), idx);
        self.stations.push(station);
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn index_of(&self, station_id: &str) -> StationResult<StationIdx> {
        self.by_id
            .get(station_id)
            .copied()
            .ok_or_else(|| StationError::UnknownStation(station_id.to_owned()))
    }

    #[inline]
    pub fn get(&self, idx: StationIdx) -> &Station {
        &self.stations[idx.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, idx: StationIdx) -> &mut Station {
        &mut self.stations[idx.index()]
    }

    pub fn by_id(&self, station_id: &str) -> StationResult<&Station> {
        self.index_of(station_id).map(|idx| self.get(idx))
    }

    /// Station indices in load order.  Taken once per request so the
    /// advancer can mutate stations while walking the list.
    pub fn indices(&self) -> Vec<StationIdx> {
        (0..self.stations.len() as u32).map(StationIdx).collect()
    }

    /// Station ids in load order.
    pub fn station_ids(&self) -> Vec<String> {
        self.stations.iter().map(|s| s.id.clone()).collect()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Station> {
        self.stations.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    // ── Queue operations by id ────────────────────────────────────────────

    pub fn is_full(&self, station_id: &str) -> StationResult<bool> {
        Ok(self.by_id(station_id)?.is_full())
    }

    pub fn free_slots(&self, station_id: &str) -> StationResult<u32> {
        Ok(self.by_id(station_id)?.free_slots())
    }

    /// Append `client` to `station_id`'s line.  The caller checks
    /// [`is_full`](Self::is_full) first.
    pub fn enqueue(&mut self, station_id: &str, client: ClientRecord) -> StationResult<()> {
        let idx = self.index_of(station_id)?;
        self.get_mut(idx).enqueue(client);
        Ok(())
    }

    pub fn peek_head(&self, station_id: &str) -> StationResult<Option<&ClientRecord>> {
        Ok(self.by_id(station_id)?.peek_head())
    }

    /// Remove the head of `station_id`'s line; `Ok(None)` if it is empty.
    pub fn dequeue_head(&mut self, station_id: &str) -> StationResult<Option<ClientRecord>> {
        let idx = self.index_of(station_id)?;
        Ok(self.get_mut(idx).dequeue_head())
    }
}
