// Obstacle field generation

pub mod obstacle_field;

pub use obstacle_field::*;
