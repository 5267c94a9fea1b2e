//! Common types, traits, and error definitions for grid_path_planning
//!
//! This module provides the foundational building blocks shared by the
//! grid, the obstacle generator and every search strategy.

pub mod types;
pub mod traits;
pub mod error;
pub mod config;

pub use types::*;
pub use traits::*;
pub use error::*;
pub use config::*;
