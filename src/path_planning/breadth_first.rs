//! Breadth-first search over orthogonal moves
//!
//! Returns the path with the fewest orthogonal moves. Neighbors are claimed
//! when they are queued, so each cell enters the queue at most once.

use std::collections::VecDeque;

use log::debug;

use crate::common::{CellState, GridCoord, GridSearch};
use crate::path_planning::adjacency::{Adjacency, ORTHOGONAL_ORDER};
use crate::path_planning::{FrontierEntry, GridPath, SearchOutcome};
use crate::utils::Grid;

#[derive(Debug, Default)]
pub struct BreadthFirstSearch;

impl BreadthFirstSearch {
    pub fn new() -> Self {
        Self
    }
}

impl GridSearch for BreadthFirstSearch {
    fn name(&self) -> &'static str {
        "BFS Search"
    }

    fn search(&mut self, grid: &mut Grid, start: GridCoord, end: GridCoord) -> SearchOutcome {
        let mut frontier = VecDeque::new();
        grid.set(start, CellState::Visited);
        frontier.push_back(FrontierEntry::root(start));

        let mut expanded = 0;
        while let Some(entry) = frontier.pop_front() {
            expanded += 1;
            if entry.coord == end {
                debug!("BFS reached the end after expanding {} cells", expanded);
                return GridPath::trace(start, &entry.moves).into();
            }
            for (dir, next) in Adjacency::claim_all(grid, entry.coord, &ORTHOGONAL_ORDER) {
                frontier.push_back(entry.child(dir, next));
            }
        }

        debug!("BFS frontier empty after expanding {} cells", expanded);
        SearchOutcome::PathNotFound
    }
}
