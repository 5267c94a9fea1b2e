//! Error types for grid_path_planning

use std::fmt;

use crate::common::types::GridCoord;

/// Main error type for grid generation and path planning
///
/// A search that exhausts its frontier is not an error; it is reported as
/// [`SearchOutcome::PathNotFound`](crate::path_planning::SearchOutcome).
#[derive(Debug)]
pub enum PlanningError {
    /// Invalid parameter (coverage, grid size, endpoint coordinates)
    InvalidParameter(String),
    /// The obstacle generator gave up before reaching its target
    CoverageUnreachable {
        target: usize,
        achieved: usize,
        placements: usize,
    },
    /// An obstacle footprint would leave the grid
    PlacementOutOfBounds {
        shape: &'static str,
        anchor: GridCoord,
    },
    /// Unknown character in an encoded move sequence
    InvalidMove(char),
    /// Configuration could not be parsed
    ConfigError(String),
    /// I/O error
    IoError(std::io::Error),
}

impl fmt::Display for PlanningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanningError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            PlanningError::CoverageUnreachable { target, achieved, placements } => write!(
                f,
                "Coverage unreachable: {} of {} obstacle cells after {} placements",
                achieved, target, placements
            ),
            PlanningError::PlacementOutOfBounds { shape, anchor } => write!(
                f,
                "Placement out of bounds: {} anchored at ({}, {})",
                shape, anchor.y, anchor.x
            ),
            PlanningError::InvalidMove(c) => write!(f, "Invalid move code: '{}'", c),
            PlanningError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            PlanningError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for PlanningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlanningError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PlanningError {
    fn from(e: std::io::Error) -> Self {
        PlanningError::IoError(e)
    }
}

impl From<serde_json::Error> for PlanningError {
    fn from(e: serde_json::Error) -> Self {
        PlanningError::ConfigError(e.to_string())
    }
}

/// Result type alias for planning operations
pub type PlanningResult<T> = Result<T, PlanningError>;
