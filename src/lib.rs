//! grid_path_planning - obstacle grids and four classic grid searches
//!
//! This crate generates a 2D occupancy grid filled with tetromino-shaped
//! obstacles and searches it with a random walk, breadth-first search,
//! depth-first search and Dijkstra's algorithm.

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod mapping;
pub mod path_planning;

// Re-export common types for convenience
pub use common::{CellState, Direction, GridCoord, PlannerConfig};
pub use common::{GridSearch, Visualizable};
pub use common::{PlanningError, PlanningResult};
pub use mapping::{ObstacleFieldConfig, ObstacleGenerator, ObstacleShape};
pub use path_planning::{GridPath, SearchConfig, SearchEngine, SearchOutcome, SearchReport, SearchStrategy};
pub use utils::Grid;
