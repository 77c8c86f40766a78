use gridstar_core::Coord;

/// Sentinel meaning "no known route" in score tables and BFS maps.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Per-cell search record
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: Option<Coord>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            f: UNREACHABLE,
            parent: None,
        }
    }
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Score and predecessor tables for one search invocation.
///
/// Allocated when a search is created and dropped with it; nothing carries
/// over between searches.
#[derive(Debug)]
pub(crate) struct SearchState {
    size: i32,
    nodes: Vec<Node>,
}

impl SearchState {
    /// Every cell starts with `g = f = UNREACHABLE` and no predecessor.
    pub(crate) fn new(size: i32) -> Self {
        let len = (size.max(0) as usize).pow(2);
        Self {
            size,
            nodes: vec![Node::default(); len],
        }
    }

    #[inline]
    pub(crate) fn get(&self, c: Coord) -> Option<&Node> {
        c.index(self.size).map(|i| &self.nodes[i])
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, c: Coord) -> Option<&mut Node> {
        c.index(self.size).map(|i| &mut self.nodes[i])
    }

    /// Best known distance from the start, `UNREACHABLE` when unknown.
    #[inline]
    pub(crate) fn g(&self, c: Coord) -> i32 {
        self.get(c).map_or(UNREACHABLE, |n| n.g)
    }

    /// Follow predecessor links from `to` back to the first cell without one,
    /// returning the cells in forward order.
    ///
    /// Returns `None` when `to` is off the board or has never been reached.
    pub(crate) fn walk_back(&self, to: Coord) -> Option<Vec<Coord>> {
        if self.g(to) == UNREACHABLE {
            return None;
        }
        let mut cells = vec![to];
        let mut cur = to;
        while let Some(prev) = self.get(cur).and_then(|n| n.parent) {
            cells.push(prev);
            cur = prev;
        }
        cells.reverse();
        Some(cells)
    }
}
