//! Plain data row types written by output backends.

use std::fmt;

/// What happened to a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Assigned,
    Rejected,
    Served,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Assigned => "assigned",
            EventKind::Rejected => "rejected",
            EventKind::Served => "served",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One client event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    /// Sequence number of the request being processed when the event fired.
    pub seq:     u32,
    /// `HH:MM`.  Arrival for assignments and rejections; end of the client's
    /// own service window for completions.
    pub time:    String,
    pub kind:    EventKind,
    /// Empty for rejections.
    pub station: String,
    pub fuel:    String,
    /// Requested liters, or liters credited for completions.
    pub liters:  u32,
    pub client:  String,
}

/// Total liters sold of one fuel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesRow {
    pub fuel:   String,
    pub liters: u64,
}
