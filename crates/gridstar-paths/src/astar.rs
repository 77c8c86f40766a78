use gridstar_core::{Coord, Grid, GridError};
use log::{debug, trace};

use crate::cancel::CancelToken;
use crate::observer::SearchObserver;
use crate::open_set::OpenSet;
use crate::outcome::{Path, SearchError, SearchOutcome};
use crate::state::{SearchState, UNREACHABLE};
use crate::traits::AstarPather;

/// One A* invocation from `start` to `goal`.
///
/// A `Search` owns its score tables, open set and predecessor links. They are
/// created by [`Search::new`], filled by [`Search::run`], readable afterwards
/// through the accessors, and dropped with the value.
pub struct Search<'a, P: ?Sized> {
    pather: &'a P,
    start: Coord,
    goal: Coord,
    state: SearchState,
    expanded: usize,
    outcome: Option<SearchOutcome>,
}

impl<'a, P: AstarPather + ?Sized> Search<'a, P> {
    /// Validate the endpoints and allocate fresh search state.
    ///
    /// Fails with [`GridError::OutOfBounds`] when either endpoint is off the
    /// board and with [`SearchError::InvalidEndpoints`] when they coincide.
    /// The endpoints' own passability is not checked.
    pub fn new(pather: &'a P, start: Coord, goal: Coord) -> Result<Self, SearchError> {
        let size = pather.size();
        for coord in [start, goal] {
            if !coord.in_square(size) {
                return Err(GridError::OutOfBounds { coord, size }.into());
            }
        }
        if start == goal {
            return Err(SearchError::InvalidEndpoints {
                start: Some(start),
                goal: Some(goal),
            });
        }
        Ok(Self {
            pather,
            start,
            goal,
            state: SearchState::new(size),
            expanded: 0,
            outcome: None,
        })
    }

    /// Run the search to completion or cancellation.
    ///
    /// Cell transitions are reported to `observer` as they happen. `cancel`
    /// is polled at the top of every iteration. A second call returns the
    /// first call's outcome without searching or emitting again.
    pub fn run<O: SearchObserver + ?Sized>(
        &mut self,
        observer: &mut O,
        cancel: &CancelToken,
    ) -> SearchOutcome {
        if let Some(done) = &self.outcome {
            return done.clone();
        }
        debug!(
            "astar {} -> {} on {}x{}",
            self.start,
            self.goal,
            self.pather.size(),
            self.pather.size()
        );
        let outcome = self.execute(observer, cancel);
        debug!(
            "astar {} -> {}: {outcome}, {} expanded",
            self.start, self.goal, self.expanded
        );
        self.outcome = Some(outcome.clone());
        outcome
    }

    fn execute<O: SearchObserver + ?Sized>(
        &mut self,
        observer: &mut O,
        cancel: &CancelToken,
    ) -> SearchOutcome {
        let (start, goal) = (self.start, self.goal);
        let mut open = OpenSet::new(self.pather.size());

        let f0 = self.pather.estimate(start, goal);
        if let Some(node) = self.state.get_mut(start) {
            node.g = 0;
            node.f = f0;
        }
        open.push(start, f0);

        let mut nbuf = Vec::with_capacity(4);

        loop {
            if cancel.is_cancelled() {
                debug!("astar {start} -> {goal}: cancel requested");
                return SearchOutcome::Cancelled;
            }

            let Some(entry) = open.pop() else {
                return SearchOutcome::NoPathExists;
            };
            let current = entry.coord;
            if !open.contains(current) {
                continue;
            }
            open.remove(current);

            if current == goal {
                return self.reconstruct(observer);
            }

            self.expanded += 1;
            let current_g = self.state.g(current);
            trace!(
                "expand {current} g={current_g} key=({}, {})",
                entry.f, entry.seq
            );

            nbuf.clear();
            self.pather.neighbors(current, &mut nbuf);

            for &n in &nbuf {
                let tentative_g = current_g + 1;
                let h = self.pather.estimate(n, goal);
                let Some(node) = self.state.get_mut(n) else {
                    continue;
                };
                if tentative_g >= node.g {
                    continue;
                }
                node.parent = Some(current);
                node.g = tentative_g;
                node.f = tentative_g + h;

                // An open cell keeps the key it was queued with.
                if !open.contains(n) {
                    open.push(n, node.f);
                    observer.entered_frontier(n);
                }
            }

            if current != start {
                observer.finalized(current);
            }
        }
    }

    /// Build the path to the goal, announcing each intermediate cell from the
    /// goal side back toward the start.
    fn reconstruct<O: SearchObserver + ?Sized>(&self, observer: &mut O) -> SearchOutcome {
        let Some(cells) = self.state.walk_back(self.goal) else {
            return SearchOutcome::NoPathExists;
        };
        if cells.len() > 2 {
            for &c in cells[1..cells.len() - 1].iter().rev() {
                observer.on_path(c);
            }
        }
        Path::new(cells).map_or(SearchOutcome::NoPathExists, SearchOutcome::PathFound)
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// The outcome of [`run`](Search::run), once it has been called.
    pub fn outcome(&self) -> Option<&SearchOutcome> {
        self.outcome.as_ref()
    }

    /// Number of cells taken off the open set and expanded. The goal
    /// extraction that ends a successful search is not counted.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Best known distance from the start to `c`, `None` if never reached.
    pub fn g_score(&self, c: Coord) -> Option<i32> {
        self.state.get(c).map(|n| n.g).filter(|&g| g != UNREACHABLE)
    }

    /// `g + estimate` for `c`, `None` if never reached.
    pub fn f_score(&self, c: Coord) -> Option<i32> {
        self.state.get(c).map(|n| n.f).filter(|&f| f != UNREACHABLE)
    }

    /// Predecessor of `c` on the best known route; `None` for the start and
    /// for unreached cells.
    pub fn came_from(&self, c: Coord) -> Option<Coord> {
        self.state.get(c).and_then(|n| n.parent)
    }

    /// Replay predecessor links from `c` back to the start. Emits nothing.
    pub fn path_to(&self, c: Coord) -> Option<Path> {
        self.state.walk_back(c).and_then(Path::new)
    }
}

/// Run a single A* search and discard its state.
///
/// `pather` is used as is. For a [`Grid`] this means its neighbor lists must
/// already be current; [`search_grid`] is the entry point that refreshes them.
pub fn astar<P, O>(
    pather: &P,
    start: Coord,
    goal: Coord,
    observer: &mut O,
    cancel: &CancelToken,
) -> Result<SearchOutcome, SearchError>
where
    P: AstarPather + ?Sized,
    O: SearchObserver + ?Sized,
{
    let mut search = Search::new(pather, start, goal)?;
    Ok(search.run(observer, cancel))
}

/// Refresh every neighbor list of `grid` once, then search it.
pub fn search_grid<O: SearchObserver + ?Sized>(
    grid: &mut Grid,
    start: Coord,
    goal: Coord,
    observer: &mut O,
    cancel: &CancelToken,
) -> Result<SearchOutcome, SearchError> {
    grid.update_neighbors();
    astar(&*grid, start, goal, observer, cancel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{EventRecorder, NoopObserver, SearchEvent};

    fn open_grid(n: i32) -> Grid {
        let mut g = Grid::new(n, 1);
        g.update_neighbors();
        g
    }

    fn run(grid: &Grid, start: Coord, goal: Coord) -> SearchOutcome {
        astar(grid, start, goal, &mut NoopObserver, &CancelToken::new()).unwrap()
    }

    #[test]
    fn empty_5x5_corner_to_corner() {
        let g = open_grid(5);
        let (s, t) = (Coord::new(0, 0), Coord::new(4, 4));
        let mut search = Search::new(&g, s, t).unwrap();
        let outcome = search.run(&mut NoopObserver, &CancelToken::new());
        let path = outcome.path().unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path.start(), s);
        assert_eq!(path.goal(), t);
        assert_eq!(search.g_score(t), Some(8));
        assert_eq!(search.g_score(s), Some(0));
        assert_eq!(search.came_from(s), None);
    }

    #[test]
    fn detour_around_single_block() {
        let mut g = Grid::new(3, 1);
        g.set_passable(Coord::new(1, 0), false).unwrap();
        g.update_neighbors();
        let outcome = run(&g, Coord::new(0, 0), Coord::new(2, 0));
        assert_eq!(
            outcome.path().unwrap().cells(),
            &[
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 1),
                Coord::new(2, 1),
                Coord::new(2, 0),
            ]
        );
    }

    #[test]
    fn blocked_middle_row_has_no_path() {
        let mut g = Grid::new(3, 1);
        for col in 0..3 {
            g.set_passable(Coord::new(1, col), false).unwrap();
        }
        g.update_neighbors();
        assert_eq!(
            run(&g, Coord::new(0, 0), Coord::new(2, 0)),
            SearchOutcome::NoPathExists
        );
    }

    #[test]
    fn impassable_start_still_expands() {
        let mut g = Grid::new(3, 1);
        g.set_passable(Coord::new(0, 0), false).unwrap();
        g.update_neighbors();
        let outcome = run(&g, Coord::new(0, 0), Coord::new(0, 2));
        assert_eq!(outcome.path().unwrap().cost(), 2);
    }

    #[test]
    fn impassable_goal_is_unreachable() {
        let mut g = Grid::new(3, 1);
        g.set_passable(Coord::new(2, 2), false).unwrap();
        g.update_neighbors();
        assert_eq!(
            run(&g, Coord::new(0, 0), Coord::new(2, 2)),
            SearchOutcome::NoPathExists
        );
    }

    #[test]
    fn event_trace_on_2x2() {
        let g = open_grid(2);
        let mut rec = EventRecorder::new();
        let mut search = Search::new(&g, Coord::new(0, 0), Coord::new(1, 1)).unwrap();
        let outcome = search.run(&mut rec, &CancelToken::new());
        use SearchEvent::*;
        assert_eq!(
            rec.events(),
            &[
                EnteredFrontier(Coord::new(1, 0)),
                EnteredFrontier(Coord::new(0, 1)),
                EnteredFrontier(Coord::new(1, 1)),
                Finalized(Coord::new(1, 0)),
                Finalized(Coord::new(0, 1)),
                OnPath(Coord::new(1, 0)),
            ]
        );
        assert_eq!(
            outcome.path().unwrap().cells(),
            &[Coord::new(0, 0), Coord::new(1, 0), Coord::new(1, 1)]
        );
        assert_eq!(search.expanded(), 3);
    }

    // ..#.G
    // .#..#
    // .....
    // ...#.
    // .#.S.
    //
    // (2,2) is queued from (2,3) with g=5, f=9 and improved from (3,2) to
    // g=3, f=7 while still open. It keeps its original key, so the goal is
    // reached before (2,2) is ever expanded.
    #[test]
    fn improved_open_cell_keeps_its_queue_key() {
        let mut g = Grid::new(5, 1);
        for (row, col) in [(0, 2), (1, 1), (1, 4), (3, 3), (4, 1)] {
            g.set_passable(Coord::new(row, col), false).unwrap();
        }
        g.update_neighbors();
        let (s, t) = (Coord::new(4, 3), Coord::new(0, 4));
        let mut rec = EventRecorder::new();
        let mut search = Search::new(&g, s, t).unwrap();
        let outcome = search.run(&mut rec, &CancelToken::new());

        let c = Coord::new;
        use SearchEvent::*;
        assert_eq!(
            rec.events(),
            &[
                EnteredFrontier(c(4, 4)),
                EnteredFrontier(c(4, 2)),
                EnteredFrontier(c(3, 4)),
                Finalized(c(4, 4)),
                EnteredFrontier(c(2, 4)),
                Finalized(c(3, 4)),
                EnteredFrontier(c(2, 3)),
                Finalized(c(2, 4)),
                EnteredFrontier(c(3, 2)),
                Finalized(c(4, 2)),
                EnteredFrontier(c(1, 3)),
                EnteredFrontier(c(2, 2)),
                Finalized(c(2, 3)),
                EnteredFrontier(c(3, 1)),
                Finalized(c(3, 2)),
                EnteredFrontier(c(0, 3)),
                EnteredFrontier(c(1, 2)),
                Finalized(c(1, 3)),
                EnteredFrontier(c(0, 4)),
                Finalized(c(0, 3)),
                OnPath(c(0, 3)),
                OnPath(c(1, 3)),
                OnPath(c(2, 3)),
                OnPath(c(2, 4)),
                OnPath(c(3, 4)),
                OnPath(c(4, 4)),
            ]
        );
        assert_eq!(
            outcome.path().unwrap().cells(),
            &[
                c(4, 3),
                c(4, 4),
                c(3, 4),
                c(2, 4),
                c(2, 3),
                c(1, 3),
                c(0, 3),
                c(0, 4),
            ]
        );
        assert_eq!(search.g_score(c(2, 2)), Some(3));
        assert_eq!(search.f_score(c(2, 2)), Some(7));
        assert_eq!(search.came_from(c(2, 2)), Some(c(3, 2)));
        assert!(rec.finalized_cells().all(|f| f != c(2, 2)));
        assert_eq!(search.expanded(), 9);
    }

    #[test]
    fn endpoints_never_finalized() {
        let g = open_grid(6);
        let (s, t) = (Coord::new(1, 1), Coord::new(4, 5));
        let mut rec = EventRecorder::new();
        astar(&g, s, t, &mut rec, &CancelToken::new()).unwrap();
        assert!(rec.finalized_cells().all(|c| c != s && c != t));
        assert!(rec.path_cells().all(|c| c != s && c != t));
    }

    #[test]
    fn adjacent_endpoints_emit_no_path_cells() {
        let g = open_grid(3);
        let mut rec = EventRecorder::new();
        let outcome = astar(&g, Coord::new(1, 1), Coord::new(1, 2), &mut rec, &CancelToken::new())
            .unwrap();
        assert_eq!(outcome.path().unwrap().len(), 2);
        assert_eq!(rec.path_cells().count(), 0);
    }

    #[test]
    fn pre_cancelled_token_stops_immediately() {
        let g = open_grid(4);
        let cancel = CancelToken::new();
        cancel.cancel();
        let mut rec = EventRecorder::new();
        let outcome = astar(&g, Coord::new(0, 0), Coord::new(3, 3), &mut rec, &cancel).unwrap();
        assert_eq!(outcome, SearchOutcome::Cancelled);
        assert!(rec.events().is_empty());
    }

    struct CancelOnFirstFrontier {
        token: CancelToken,
        rec: EventRecorder,
    }

    impl SearchObserver for CancelOnFirstFrontier {
        fn entered_frontier(&mut self, c: Coord) {
            self.token.cancel();
            self.rec.entered_frontier(c);
        }

        fn finalized(&mut self, c: Coord) {
            self.rec.finalized(c);
        }
    }

    #[test]
    fn cancel_during_first_iteration() {
        let g = open_grid(4);
        let token = CancelToken::new();
        let mut obs = CancelOnFirstFrontier {
            token: token.clone(),
            rec: EventRecorder::new(),
        };
        let outcome = astar(&g, Coord::new(0, 0), Coord::new(3, 3), &mut obs, &token).unwrap();
        assert!(outcome.is_cancelled());
        assert_eq!(obs.rec.finalized_cells().count(), 0);
        assert_eq!(obs.rec.frontier_cells().count(), 2);
    }

    #[test]
    fn second_run_replays_outcome_silently() {
        let g = open_grid(4);
        let mut search = Search::new(&g, Coord::new(0, 0), Coord::new(3, 2)).unwrap();
        let first = search.run(&mut NoopObserver, &CancelToken::new());
        let mut rec = EventRecorder::new();
        let second = search.run(&mut rec, &CancelToken::new());
        assert_eq!(first, second);
        assert!(rec.events().is_empty());
        assert_eq!(search.outcome(), Some(&first));
    }

    #[test]
    fn path_to_matches_found_path() {
        let g = open_grid(6);
        let goal = Coord::new(5, 3);
        let mut search = Search::new(&g, Coord::new(0, 4), goal).unwrap();
        let outcome = search.run(&mut NoopObserver, &CancelToken::new());
        assert_eq!(search.path_to(goal).as_ref(), outcome.path());
        assert_eq!(search.path_to(goal), search.path_to(goal));
    }

    #[test]
    fn invalid_endpoints() {
        let g = open_grid(3);
        let c = Coord::new(1, 1);
        assert!(matches!(
            Search::new(&g, c, c),
            Err(SearchError::InvalidEndpoints { .. })
        ));
        assert!(matches!(
            Search::new(&g, c, Coord::new(3, 0)),
            Err(SearchError::Grid(GridError::OutOfBounds { .. }))
        ));
        assert!(matches!(
            Search::new(&g, Coord::new(-1, 0), c),
            Err(SearchError::Grid(_))
        ));
    }

    #[test]
    fn search_grid_refreshes_stale_neighbors() {
        let mut g = open_grid(3);
        for col in 0..3 {
            g.set_passable(Coord::new(1, col), false).unwrap();
        }
        assert!(g.neighbors_stale());
        let outcome = search_grid(
            &mut g,
            Coord::new(0, 0),
            Coord::new(2, 2),
            &mut NoopObserver,
            &CancelToken::new(),
        )
        .unwrap();
        assert_eq!(outcome, SearchOutcome::NoPathExists);
        assert!(!g.neighbors_stale());
    }
}
