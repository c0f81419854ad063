//! Core queue types: `ClientRecord` and `Station`.

use std::collections::VecDeque;

use chrono::NaiveDateTime;

use gs_core::{ArrivalClock, Fuel};

// ── ClientRecord ──────────────────────────────────────────────────────────────

/// A client waiting in (or being served at) a station's line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientRecord {
    pub arrival: NaiveDateTime,

    /// Liters the client asked for.
    pub liters: u32,

    pub fuel: Fuel,

    /// `HH:MM <tag> <liters> <fuel>` as printed in reports.
    pub display_id: String,

    /// Estimated service time in minutes, fixed when the client is routed.
    pub service_minutes: u32,
}

impl ClientRecord {
    /// The moment this client's service window ends.
    #[inline]
    pub fn window_end(&self) -> NaiveDateTime {
        ArrivalClock::after(self.arrival, self.service_minutes)
    }

    /// `true` once `now` has reached the end of the service window.
    #[inline]
    pub fn is_done_at(&self, now: NaiveDateTime) -> bool {
        now >= self.window_end()
    }
}

// ── Station ───────────────────────────────────────────────────────────────────

/// One pump with a bounded FIFO line.
///
/// The line never grows past `capacity`; [`enqueue`](Self::enqueue) relies on
/// the caller having checked [`is_full`](Self::is_full).
#[derive(Clone, Debug)]
pub struct Station {
    pub id: String,

    /// Maximum number of clients in the line, including the one being served.
    pub capacity: u32,

    /// Fuels this station dispenses, in record order.
    pub fuels: Vec<Fuel>,

    line: VecDeque<ClientRecord>,
}

impl Station {
    pub fn new(id: impl Into<String>, capacity: u32, fuels: Vec<Fuel>) -> Self {
        Self {
            id: id.into(),
            capacity,
            fuels,
            line: VecDeque::with_capacity(capacity as usize),
        }
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.line.len() >= self.capacity as usize
    }

    /// Free places left in the line.
    #[inline]
    pub fn free_slots(&self) -> u32 {
        self.capacity.saturating_sub(self.line.len() as u32)
    }

    #[inline]
    pub fn supports(&self, fuel: &Fuel) -> bool {
        self.fuels.contains(fuel)
    }

    /// Eligible = supports `fuel` and has a free slot.
    #[inline]
    pub fn accepts(&self, fuel: &Fuel) -> bool {
        self.supports(fuel) && !self.is_full()
    }

    /// Append `client` to the back of the line.
    pub fn enqueue(&mut self, client: ClientRecord) {
        debug_assert!(!self.is_full(), "enqueue on full station {}", self.id);
        self.line.push_back(client);
    }

    /// The client at the head of the line, without removing it.
    #[inline]
    pub fn peek_head(&self) -> Option<&ClientRecord> {
        self.line.front()
    }

    /// Remove and return the client at the head of the line.
    #[inline]
    pub fn dequeue_head(&mut self) -> Option<ClientRecord> {
        self.line.pop_front()
    }

    /// Clients in FIFO order.
    pub fn line(&self) -> impl ExactSizeIterator<Item = &ClientRecord> {
        self.line.iter()
    }

    #[inline]
    pub fn line_len(&self) -> usize {
        self.line.len()
    }
}
