//! Dijkstra search over 8-connected, unit-cost moves
//!
//! The work queue is a plain FIFO rather than a priority queue. With every
//! edge costing 1, cells leave the queue in non-decreasing distance order, so
//! the first time a cell is settled its distance is final. Weighted terrain
//! would need a min-heap keyed by tentative distance instead.
//!
//! Neighbors are probed without claiming: a cell only becomes `Visited` when it
//! is popped and still `Empty`.

use std::collections::VecDeque;

use log::debug;
use nalgebra::DMatrix;

use crate::common::{GridCoord, GridSearch};
use crate::path_planning::adjacency::{Adjacency, EIGHT_WAY_ORDER};
use crate::path_planning::{GridPath, SearchOutcome};
use crate::utils::Grid;

const UNREACHED: u32 = u32::MAX;

#[derive(Debug, Default)]
pub struct DijkstraSearch {
    distances: Option<DMatrix<u32>>,
}

impl DijkstraSearch {
    pub fn new() -> Self {
        Self { distances: None }
    }

    /// Tentative distance of `coord` after the last search, if it was reached
    pub fn distance(&self, coord: GridCoord) -> Option<u32> {
        self.distances
            .as_ref()
            .and_then(|d| d.get((coord.y, coord.x)).copied())
            .filter(|&d| d != UNREACHED)
    }
}

impl GridSearch for DijkstraSearch {
    fn name(&self) -> &'static str {
        "Dijkstra Search"
    }

    fn search(&mut self, grid: &mut Grid, start: GridCoord, end: GridCoord) -> SearchOutcome {
        let (height, width) = (grid.height(), grid.width());
        let mut distance = DMatrix::from_element(height, width, UNREACHED);
        let mut parent: DMatrix<Option<GridCoord>> = DMatrix::from_element(height, width, None);
        distance[(start.y, start.x)] = 0;
        parent[(start.y, start.x)] = Some(start);

        let mut queue = VecDeque::new();
        queue.push_back(start);

        let mut settled = 0;
        let mut found = false;
        while let Some(current) = queue.pop_front() {
            // Already settled through an earlier queue entry
            if !grid.try_claim(current) {
                continue;
            }
            settled += 1;
            if current == end {
                found = true;
                break;
            }

            let next_distance = distance[(current.y, current.x)] + 1;
            for (_, next) in Adjacency::probe_all(grid, current, &EIGHT_WAY_ORDER) {
                if next_distance < distance[(next.y, next.x)] {
                    distance[(next.y, next.x)] = next_distance;
                    parent[(next.y, next.x)] = Some(current);
                    queue.push_back(next);
                }
            }
        }

        debug!("Dijkstra settled {} cells, end reached: {}", settled, found);
        self.distances = Some(distance);
        if !found {
            return SearchOutcome::PathNotFound;
        }
        GridPath::from_parent_chain(&parent, start, end).into()
    }
}
