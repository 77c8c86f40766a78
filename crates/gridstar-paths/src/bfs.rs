use std::collections::VecDeque;

use gridstar_core::Coord;

use crate::state::UNREACHABLE;
use crate::traits::Pather;

/// Breadth-first unit-cost distance map from `source`.
///
/// Returns one entry per cell in row-major order; cells the search never
/// reaches hold [`UNREACHABLE`]. An off-board source yields an all-unreachable
/// map. Distances are exact, which makes the map a reference for checking
/// A* results and heuristic admissibility.
pub fn bfs_distances<P: Pather + ?Sized>(pather: &P, source: Coord) -> Vec<i32> {
    let size = pather.size();
    let len = (size.max(0) as usize).pow(2);
    let mut dist = vec![UNREACHABLE; len];

    let Some(si) = source.index(size) else {
        return dist;
    };
    dist[si] = 0;

    let mut queue = VecDeque::from([source]);
    let mut nbuf = Vec::with_capacity(4);

    while let Some(cur) = queue.pop_front() {
        let Some(ci) = cur.index(size) else {
            continue;
        };
        let nd = dist[ci] + 1;

        nbuf.clear();
        pather.neighbors(cur, &mut nbuf);

        for &n in &nbuf {
            let Some(ni) = n.index(size) else {
                continue;
            };
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = nd;
            queue.push_back(n);
        }
    }

    dist
}

/// Exact step count from `from` to `to`, or `None` when unreachable.
pub fn bfs_distance<P: Pather + ?Sized>(pather: &P, from: Coord, to: Coord) -> Option<i32> {
    let size = pather.size();
    let ti = to.index(size)?;
    let d = bfs_distances(pather, from)[ti];
    (d != UNREACHABLE).then_some(d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_core::Grid;

    #[test]
    fn open_grid_distances_are_manhattan() {
        let mut g = Grid::new(4, 1);
        g.update_neighbors();
        let d = bfs_distances(&g, Coord::new(0, 0));
        for (i, &v) in d.iter().enumerate() {
            let c = Coord::from_index(i, 4);
            assert_eq!(v, c.row + c.col);
        }
    }

    #[test]
    fn walls_leave_cells_unreachable() {
        let mut g = Grid::new(3, 1);
        for row in 0..3 {
            g.set_passable(Coord::new(row, 1), false).unwrap();
        }
        g.update_neighbors();
        assert_eq!(bfs_distance(&g, Coord::new(0, 0), Coord::new(2, 0)), Some(2));
        assert_eq!(bfs_distance(&g, Coord::new(0, 0), Coord::new(0, 2)), None);
        assert_eq!(bfs_distance(&g, Coord::new(0, 0), Coord::new(7, 7)), None);
    }

    #[test]
    fn off_board_source() {
        let mut g = Grid::new(2, 1);
        g.update_neighbors();
        assert!(bfs_distances(&g, Coord::new(-1, 0)).iter().all(|&d| d == UNREACHABLE));
    }
}
