//! Submit-and-recompute loop over one trip log.

use crate::classifier::TripLog;
use crate::layout::{Layout, LayoutEngine};
use crate::trip::Trip;

/// A trip log together with its current diagram.
///
/// Every accepted submission recomputes the whole layout before returning.
#[derive(Debug, Clone)]
pub struct Session {
    log: TripLog,
    engine: LayoutEngine,
    layout: Layout,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(LayoutEngine::default())
    }
}

impl Session {
    pub fn new(engine: LayoutEngine) -> Self {
        let log = TripLog::new();
        let layout = engine.layout(log.trips());
        Self {
            log,
            engine,
            layout,
        }
    }

    pub fn submit(&mut self, origin: &str, destination: &str) -> Option<&Trip> {
        self.log.submit(origin, destination)?;
        self.layout = self.engine.layout(self.log.trips());
        self.log.trips().last()
    }

    /// Submit pairs in order. Returns how many were accepted.
    pub fn extend<I, S>(&mut self, pairs: I) -> usize
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut accepted = 0;
        for (origin, destination) in pairs {
            if self.submit(origin.as_ref(), destination.as_ref()).is_some() {
                accepted += 1;
            }
        }
        accepted
    }

    pub fn trips(&self) -> &[Trip] {
        self.log.trips()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::Level;

    #[test]
    fn test_new_session_has_empty_layout() {
        let session = Session::default();
        assert!(session.trips().is_empty());
        assert!(session.layout().is_empty());
        assert_eq!(session.layout().width, 100.0);
    }

    #[test]
    fn test_submit_recomputes() {
        let mut session = Session::default();
        session.submit("ABC", "DEF");
        assert_eq!(session.layout().nodes.len(), 2);

        session.submit("ABC", "DEF");
        assert_eq!(session.layout().nodes.len(), 3);
        assert!(session.trips().iter().all(|t| t.level == Level::Two));
    }

    #[test]
    fn test_noop_keeps_layout() {
        let mut session = Session::default();
        session.submit("ABC", "DEF");
        let before = session.layout().clone();

        assert!(session.submit("", "DEF").is_none());
        assert_eq!(session.layout(), &before);
    }

    #[test]
    fn test_extend_counts_accepted() {
        let mut session = Session::default();
        let accepted = session.extend([("abc", "def"), (" ", "xyz"), ("def", "ghi")]);
        assert_eq!(accepted, 2);
        assert_eq!(session.trips().len(), 2);
        assert_eq!(session.layout().paths.len(), 2);
    }

    #[test]
    fn test_submit_returns_new_trip() {
        let mut session = Session::default();
        session.submit("ABC", "DEF");
        let trip = session.submit("DEF", "GHI").unwrap();
        assert_eq!(trip.route_key, "DEF-GHI");
        assert!(trip.is_continuation);
    }
}
