//! Neighbor queries shared by every search strategy
//!
//! All queries return `None`/`false` for a neighbor outside the grid before
//! looking at any cell, so strategies never index out of range.

use crate::common::{CellState, Direction, GridCoord};
use crate::utils::Grid;

/// Probe order used by the random walk
pub const RANDOM_WALK_ORDER: [Direction; 4] =
    [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

/// Probe order used by breadth-first and depth-first search
pub const ORTHOGONAL_ORDER: [Direction; 4] =
    [Direction::Right, Direction::Down, Direction::Left, Direction::Up];

/// Probe order used by Dijkstra, counter-clockwise from down
pub const EIGHT_WAY_ORDER: [Direction; 8] = [
    Direction::Down,
    Direction::DownLeft,
    Direction::Left,
    Direction::UpLeft,
    Direction::Up,
    Direction::UpRight,
    Direction::Right,
    Direction::DownRight,
];

/// Bounds-checked adjacency over a [`Grid`]
pub struct Adjacency;

impl Adjacency {
    /// Neighbor of `from` in `dir` if it lies inside the grid
    pub fn neighbor(grid: &Grid, from: GridCoord, dir: Direction) -> Option<GridCoord> {
        from.step(dir, grid.height(), grid.width())
    }

    /// Neighbor of `from` in `dir` if it is inside the grid and `Empty`. No side effect.
    pub fn probe(grid: &Grid, from: GridCoord, dir: Direction) -> Option<GridCoord> {
        Self::neighbor(grid, from, dir).filter(|&n| grid.get(n) == CellState::Empty)
    }

    /// Claim the neighbor of `from` in `dir`.
    ///
    /// If the neighbor is inside the grid and `Empty` it becomes `Visited`
    /// and is returned. Any other neighbor is left untouched.
    pub fn try_claim(grid: &mut Grid, from: GridCoord, dir: Direction) -> Option<GridCoord> {
        let n = Self::neighbor(grid, from, dir)?;
        if grid.try_claim(n) {
            Some(n)
        } else {
            None
        }
    }

    /// Fused availability check: `true` iff the neighbor is inside the grid
    /// and `Empty`. With `claim` set, an available neighbor is also marked
    /// `Visited`.
    pub fn is_empty(grid: &mut Grid, from: GridCoord, dir: Direction, claim: bool) -> bool {
        if claim {
            Self::try_claim(grid, from, dir).is_some()
        } else {
            Self::probe(grid, from, dir).is_some()
        }
    }

    /// Claim every available neighbor in `order`, returning them with their direction
    pub fn claim_all(grid: &mut Grid, from: GridCoord, order: &[Direction]) -> Vec<(Direction, GridCoord)> {
        order
            .iter()
            .filter_map(|&dir| Self::try_claim(grid, from, dir).map(|n| (dir, n)))
            .collect()
    }

    /// Every available neighbor in `order`, without claiming
    pub fn probe_all(grid: &Grid, from: GridCoord, order: &[Direction]) -> Vec<(Direction, GridCoord)> {
        order
            .iter()
            .filter_map(|&dir| Self::probe(grid, from, dir).map(|n| (dir, n)))
            .collect()
    }
}
