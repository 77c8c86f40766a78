//! The A* open set: a min-heap keyed by `(f, insertion_order)`.
//!
//! Lower `f` is popped first; ties go to the entry pushed earlier (FIFO).
//! Membership is tracked separately in a flat table so that "is this cell
//! enqueued?" costs O(1).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use gridstar_core::Coord;

/// An entry in the open set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) f: i32,
    /// Monotonically increasing counter used to break ties.
    pub(crate) seq: u64,
    pub(crate) coord: Coord,
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Wrapped in Reverse for the BinaryHeap: smaller f first, then
        // smaller seq. `seq` is unique, so coord never decides.
        self.f
            .cmp(&other.f)
            .then(self.seq.cmp(&other.seq))
            .then(self.coord.cmp(&other.coord))
    }
}

/// Priority queue of frontier cells plus a membership table.
#[derive(Debug)]
pub(crate) struct OpenSet {
    heap: BinaryHeap<Reverse<Entry>>,
    member: Vec<bool>,
    size: i32,
    seq: u64,
}

impl OpenSet {
    /// An empty open set for a square board of side `size`.
    pub(crate) fn new(size: i32) -> Self {
        let len = (size.max(0) as usize).pow(2);
        Self {
            heap: BinaryHeap::new(),
            member: vec![false; len],
            size,
            seq: 0,
        }
    }

    /// Push `coord` with priority `f`, assigning the next sequence number.
    /// Returns that number.
    ///
    /// The first push gets sequence 0.
    pub(crate) fn push(&mut self, coord: Coord, f: i32) -> u64 {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { f, seq, coord }));
        if let Some(i) = coord.index(self.size) {
            self.member[i] = true;
        }
        seq
    }

    /// Pop the entry with the lowest `(f, seq)`. Membership is not touched;
    /// the caller decides whether the entry is current.
    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop().map(|Reverse(e)| e)
    }

    /// Whether `coord` is currently marked as enqueued.
    #[inline]
    pub(crate) fn contains(&self, coord: Coord) -> bool {
        coord.index(self.size).is_some_and(|i| self.member[i])
    }

    /// Clear the membership mark of `coord`.
    #[inline]
    pub(crate) fn remove(&mut self, coord: Coord) {
        if let Some(i) = coord.index(self.size) {
            self.member[i] = false;
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
