use serde::Serialize;
use std::fmt;

/// Maximum number of characters kept from a station code.
pub const CODE_LEN: usize = 3;

/// Monotonic trip sequence number, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TripId(pub u64);

impl TripId {
    /// Id of the node a trip starts from (only node 0 uses this).
    pub fn start_node_id(self) -> u64 {
        self.0 * 10
    }

    /// Id of the node a trip ends at.
    pub fn end_node_id(self) -> u64 {
        self.0 * 10 + 1
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display track of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Level {
    /// Primary track: routes seen once.
    One,
    /// Elevated track: routes seen more than once.
    Two,
}

impl Level {
    pub fn from_count(count: u32) -> Self {
        if count >= 2 { Level::Two } else { Level::One }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Level::One => 1,
            Level::Two => 2,
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.as_u8()
    }
}

/// One directed hop in the trip log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: TripId,
    pub origin: String,
    pub destination: String,
    pub level: Level,
    pub is_continuation: bool,
    pub route_key: String,
}

impl Trip {
    /// Text drawn next to the trip's path.
    pub fn label(&self) -> &str {
        &self.route_key
    }
}

/// Trim, uppercase and cut a raw code to [`CODE_LEN`] characters.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase().chars().take(CODE_LEN).collect()
}

pub fn route_key(origin: &str, destination: &str) -> String {
    format!("{origin}-{destination}")
}
