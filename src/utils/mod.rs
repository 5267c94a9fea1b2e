//! Utility modules for grid_path_planning

pub mod grid_map;
pub mod visualization;

pub use grid_map::*;
pub use visualization::{Visualizer, PathStyle, PointStyle, colors};
