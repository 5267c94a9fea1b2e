//! Unguided random walk
//!
//! From the current cell, every empty orthogonal neighbor is claimed and one
//! of them is picked at random as the next cell. The walk never backtracks:
//! claimed but unchosen neighbors are lost, and the search fails as soon as
//! the current cell has nothing left to claim.

use log::debug;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::common::{CellState, GridCoord, GridSearch};
use crate::path_planning::adjacency::{Adjacency, RANDOM_WALK_ORDER};
use crate::path_planning::{GridPath, SearchOutcome};
use crate::utils::Grid;

pub struct RandomWalk {
    rng: StdRng,
}

impl RandomWalk {
    /// Random walk seeded from entropy
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for RandomWalk {
    fn default() -> Self {
        Self::new()
    }
}

impl GridSearch for RandomWalk {
    fn name(&self) -> &'static str {
        "Random Search"
    }

    fn search(&mut self, grid: &mut Grid, start: GridCoord, end: GridCoord) -> SearchOutcome {
        grid.set(start, CellState::Visited);
        let mut current = start;
        let mut moves = Vec::new();

        while current != end {
            let claimed = Adjacency::claim_all(grid, current, &RANDOM_WALK_ORDER);
            match claimed.choose(&mut self.rng) {
                Some(&(dir, next)) => {
                    moves.push(dir);
                    current = next;
                }
                None => {
                    debug!("Random walk stuck at ({}, {}) after {} moves", current.y, current.x, moves.len());
                    return SearchOutcome::PathNotFound;
                }
            }
        }

        debug!("Random walk reached the end after {} moves", moves.len());
        GridPath::trace(start, &moves).into()
    }
}
