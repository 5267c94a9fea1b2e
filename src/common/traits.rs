//! Common traits defining interfaces for grid search algorithms

use crate::common::types::GridCoord;
use crate::path_planning::SearchOutcome;
use crate::utils::Grid;

/// Trait for grid search strategies
///
/// Implementations read and mutate `grid` in place, marking explored cells
/// `Visited`. `start` and `end` must already be in bounds and `Empty`.
pub trait GridSearch {
    /// Human readable name, used in logs and plot titles
    fn name(&self) -> &'static str;

    /// Search a path from start to end
    fn search(&mut self, grid: &mut Grid, start: GridCoord, end: GridCoord) -> SearchOutcome;
}

/// Trait for values that can be drawn by the visualizer
pub trait Visualizable {
    /// Draw current state to visualizer
    fn visualize(&self, vis: &mut crate::utils::Visualizer);
}
