//! Trip classification: normalization, route history and track levels.

use std::collections::HashMap;

use crate::trip::{Level, Trip, TripId, normalize_code, route_key};

/// Ordered trip log plus the per-route occurrence counts that drive levels.
#[derive(Debug, Clone, Default)]
pub struct TripLog {
    trips: Vec<Trip>,
    route_history: HashMap<String, u32>,
    next_id: u64,
}

impl TripLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Number of times `key` has been submitted.
    pub fn route_count(&self, key: &str) -> u32 {
        self.route_history.get(key).copied().unwrap_or(0)
    }

    /// Classify and append a trip. Returns `None` when either code is empty
    /// after normalization, in which case nothing changes.
    pub fn submit(&mut self, origin_raw: &str, destination_raw: &str) -> Option<&Trip> {
        let origin = normalize_code(origin_raw);
        let destination = normalize_code(destination_raw);
        if origin.is_empty() || destination.is_empty() {
            tracing::trace!(origin_raw, destination_raw, "ignoring empty route");
            return None;
        }

        let key = route_key(&origin, &destination);
        let is_continuation = self
            .trips
            .last()
            .is_some_and(|last| last.destination == origin);

        let count = self.route_history.entry(key.clone()).or_insert(0);
        *count += 1;
        let count = *count;
        let level = Level::from_count(count);

        if level == Level::Two {
            self.upgrade_route_to_level2(&key);
        }

        self.next_id += 1;
        self.trips.push(Trip {
            id: TripId(self.next_id),
            origin,
            destination,
            level,
            is_continuation,
            route_key: key,
        });

        let trip = self.trips.last()?;
        tracing::debug!(
            id = %trip.id,
            route = %trip.route_key,
            count,
            level = trip.level.as_u8(),
            continuation = trip.is_continuation,
            "trip accepted"
        );
        Some(trip)
    }

    /// Move every logged trip on `key` to the elevated track.
    /// Returns how many trips changed level.
    pub fn upgrade_route_to_level2(&mut self, key: &str) -> usize {
        let mut upgraded = 0;
        for trip in self.trips.iter_mut().filter(|t| t.route_key == key) {
            if trip.level != Level::Two {
                trip.level = Level::Two;
                upgraded += 1;
            }
        }
        if upgraded > 0 {
            tracing::debug!(route = key, upgraded, "route promoted to level 2");
        }
        upgraded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(log: &TripLog) -> Vec<u8> {
        log.trips().iter().map(|t| t.level.as_u8()).collect()
    }

    #[test]
    fn test_single_trip() {
        let mut log = TripLog::new();
        let trip = log.submit("abc", " def ").unwrap();

        assert_eq!(trip.id, TripId(1));
        assert_eq!(trip.origin, "ABC");
        assert_eq!(trip.destination, "DEF");
        assert_eq!(trip.route_key, "ABC-DEF");
        assert_eq!(trip.level, Level::One);
        assert!(!trip.is_continuation);
    }

    #[test]
    fn test_empty_input_is_noop() {
        let mut log = TripLog::new();
        log.submit("ABC", "DEF");

        assert!(log.submit("   ", "DEF").is_none());
        assert!(log.submit("ABC", "").is_none());

        assert_eq!(log.trips().len(), 1);
        assert_eq!(log.route_count("ABC-DEF"), 1);
        assert_eq!(log.route_count("-DEF"), 0);
        // ids are not consumed by ignored submissions
        assert_eq!(log.submit("DEF", "GHI").unwrap().id, TripId(2));
    }

    #[test]
    fn test_route_count_increments() {
        let mut log = TripLog::new();
        for expected in 1..=4 {
            log.submit("ABC", "DEF");
            assert_eq!(log.route_count("ABC-DEF"), expected);
        }
        log.submit("DEF", "ABC");
        assert_eq!(log.route_count("ABC-DEF"), 4);
        assert_eq!(log.route_count("DEF-ABC"), 1);
    }

    #[test]
    fn test_count_matches_log() {
        let mut log = TripLog::new();
        for (o, d) in [("a", "b"), ("b", "c"), ("a", "b"), ("c", "a"), ("a", "b")] {
            log.submit(o, d);
        }
        for trip in log.trips() {
            let in_log = log
                .trips()
                .iter()
                .filter(|t| t.route_key == trip.route_key)
                .count() as u32;
            assert_eq!(log.route_count(&trip.route_key), in_log);
        }
    }

    #[test]
    fn test_retroactive_upgrade() {
        let mut log = TripLog::new();
        log.submit("ABC", "DEF");
        assert_eq!(levels(&log), vec![1]);

        log.submit("ABC", "DEF");
        assert_eq!(levels(&log), vec![2, 2]);
    }

    #[test]
    fn test_upgrade_only_touches_matching_route() {
        let mut log = TripLog::new();
        log.submit("ABC", "DEF");
        log.submit("DEF", "GHI");
        log.submit("ABC", "DEF");

        assert_eq!(levels(&log), vec![2, 1, 2]);
    }

    #[test]
    fn test_upgrade_reports_changed_trips() {
        let mut log = TripLog::new();
        log.submit("ABC", "DEF");
        log.submit("XYZ", "ABC");
        assert_eq!(log.upgrade_route_to_level2("ABC-DEF"), 1);
        assert_eq!(log.upgrade_route_to_level2("ABC-DEF"), 0);
        assert_eq!(log.upgrade_route_to_level2("NOP-NOP"), 0);
    }

    #[test]
    fn test_continuation() {
        let mut log = TripLog::new();
        log.submit("ABC", "DEF");
        assert!(log.submit("def", "GHI").unwrap().is_continuation);
        assert!(!log.submit("XYZ", "ABC").unwrap().is_continuation);
    }

    #[test]
    fn test_codes_truncated_before_matching() {
        let mut log = TripLog::new();
        log.submit("Bangalore", "Chennai");
        let trip = log.submit("BAN", "CHE").unwrap();
        assert_eq!(trip.route_key, "BAN-CHE");
        assert_eq!(trip.level, Level::Two);
    }

    #[test]
    fn test_independent_logs() {
        let mut a = TripLog::new();
        let mut b = TripLog::new();
        a.submit("ABC", "DEF");
        a.submit("ABC", "DEF");
        b.submit("ABC", "DEF");

        assert_eq!(levels(&a), vec![2, 2]);
        assert_eq!(levels(&b), vec![1]);
    }
}
