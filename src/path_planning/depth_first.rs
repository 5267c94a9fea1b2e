//! Depth-first search over orthogonal moves
//!
//! Same probe order and claim-on-push rule as [`BreadthFirstSearch`](super::BreadthFirstSearch),
//! but the frontier is a stack. Finds a path whenever one exists, not
//! necessarily the shortest.

use log::debug;

use crate::common::{CellState, GridCoord, GridSearch};
use crate::path_planning::adjacency::{Adjacency, ORTHOGONAL_ORDER};
use crate::path_planning::{FrontierEntry, GridPath, SearchOutcome};
use crate::utils::Grid;

#[derive(Debug, Default)]
pub struct DepthFirstSearch;

impl DepthFirstSearch {
    pub fn new() -> Self {
        Self
    }
}

impl GridSearch for DepthFirstSearch {
    fn name(&self) -> &'static str {
        "DFS Search"
    }

    fn search(&mut self, grid: &mut Grid, start: GridCoord, end: GridCoord) -> SearchOutcome {
        let mut frontier = Vec::new();
        grid.set(start, CellState::Visited);
        frontier.push(FrontierEntry::root(start));

        let mut expanded = 0;
        while let Some(entry) = frontier.pop() {
            expanded += 1;
            if entry.coord == end {
                debug!("DFS reached the end after expanding {} cells", expanded);
                return GridPath::trace(start, &entry.moves).into();
            }
            for (dir, next) in Adjacency::claim_all(grid, entry.coord, &ORTHOGONAL_ORDER) {
                frontier.push(entry.child(dir, next));
            }
        }

        debug!("DFS stack empty after expanding {} cells", expanded);
        SearchOutcome::PathNotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_planning::format_moves;

    #[test]
    fn test_open_grid_finds_path() {
        let mut grid = Grid::new(5, 5).unwrap();
        let start = GridCoord::new(0, 0);
        let end = GridCoord::new(4, 4);
        let path = DepthFirstSearch::new().search(&mut grid, start, end).into_path().unwrap();
        assert_eq!(path.start(), Some(start));
        assert_eq!(path.end(), Some(end));
        assert!(path.is_orthogonal());
        assert!(path.step_count() >= 9);
    }

    #[test]
    fn test_last_pushed_is_explored_first() {
        // Up is pushed last, so DFS dives upward before trying right
        let mut grid = Grid::new(3, 3).unwrap();
        let outcome = DepthFirstSearch::new().search(&mut grid, GridCoord::new(2, 0), GridCoord::new(0, 2));
        assert_eq!(format_moves(&outcome.path().unwrap().moves()), "UURR");
    }

    #[test]
    fn test_walled_off_end() {
        let mut grid = Grid::from_rows(&["...", "###", "..."]).unwrap();
        let outcome = DepthFirstSearch::new().search(&mut grid, GridCoord::new(0, 0), GridCoord::new(2, 2));
        assert!(!outcome.is_found());
    }
}
