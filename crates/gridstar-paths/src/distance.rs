use gridstar_core::Coord;

/// Manhattan (L1) distance between two cells.
///
/// Admissible and consistent for 4-directional unit-cost movement.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
