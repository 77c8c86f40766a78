//! Progress hooks emitted while a search runs.

use gridstar_core::Coord;

/// A single cell-state transition reported by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    /// The cell was added to the open set.
    EnteredFrontier(Coord),
    /// The cell was expanded and will not be reconsidered.
    Finalized(Coord),
    /// The cell lies on the reconstructed path.
    OnPath(Coord),
}

impl SearchEvent {
    /// The cell the event refers to.
    pub fn coord(self) -> Coord {
        match self {
            Self::EnteredFrontier(c) | Self::Finalized(c) | Self::OnPath(c) => c,
        }
    }
}

/// Receives cell-state transitions in traversal order.
///
/// Every method defaults to a no-op. Return values are never consulted, so
/// an observer cannot change the result of a search.
pub trait SearchObserver {
    fn entered_frontier(&mut self, _c: Coord) {}
    fn finalized(&mut self, _c: Coord) {}
    fn on_path(&mut self, _c: Coord) {}
}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn entered_frontier(&mut self, c: Coord) {
        (**self).entered_frontier(c);
    }

    fn finalized(&mut self, c: Coord) {
        (**self).finalized(c);
    }

    fn on_path(&mut self, c: Coord) {
        (**self).on_path(c);
    }
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Observer that keeps every event, in the order emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventRecorder {
    events: Vec<SearchEvent>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events recorded so far.
    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    /// Consume the recorder, returning its events.
    pub fn into_events(self) -> Vec<SearchEvent> {
        self.events
    }

    /// Cells that received a `Finalized` event, in order.
    pub fn finalized_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.events.iter().filter_map(|e| match *e {
            SearchEvent::Finalized(c) => Some(c),
            _ => None,
        })
    }

    /// Cells that received an `EnteredFrontier` event, in order.
    pub fn frontier_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.events.iter().filter_map(|e| match *e {
            SearchEvent::EnteredFrontier(c) => Some(c),
            _ => None,
        })
    }

    /// Cells that received an `OnPath` event, in order.
    pub fn path_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.events.iter().filter_map(|e| match *e {
            SearchEvent::OnPath(c) => Some(c),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl SearchObserver for EventRecorder {
    fn entered_frontier(&mut self, c: Coord) {
        self.events.push(SearchEvent::EnteredFrontier(c));
    }

    fn finalized(&mut self, c: Coord) {
        self.events.push(SearchEvent::Finalized(c));
    }

    fn on_path(&mut self, c: Coord) {
        self.events.push(SearchEvent::OnPath(c));
    }
}
