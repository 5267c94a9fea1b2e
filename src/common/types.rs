//! Common types used throughout grid_path_planning

use serde::{Deserialize, Serialize};

use crate::common::error::{PlanningError, PlanningResult};

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Empty,
    Obstacle,
    Visited,
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Empty
    }
}

/// Zero-based grid coordinate (row `y`, column `x`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    pub y: usize,
    pub x: usize,
}

impl GridCoord {
    pub fn new(y: usize, x: usize) -> Self {
        Self { y, x }
    }

    /// Convert a one-based (row, col) pair as used by the external interface.
    ///
    /// Only rejects zero components; the upper bound depends on the grid and
    /// is checked by the caller.
    pub fn from_one_based(row: usize, col: usize) -> PlanningResult<Self> {
        if row == 0 || col == 0 {
            return Err(PlanningError::InvalidParameter(format!(
                "one-based coordinate ({}, {}) has a zero component",
                row, col
            )));
        }
        Ok(Self { y: row - 1, x: col - 1 })
    }

    pub fn to_one_based(&self) -> (usize, usize) {
        (self.y + 1, self.x + 1)
    }

    /// Neighbor one step in `dir`, or `None` if it falls outside `height x width`.
    pub fn step(&self, dir: Direction, height: usize, width: usize) -> Option<GridCoord> {
        let (dy, dx) = dir.offset();
        let ny = self.y as isize + dy;
        let nx = self.x as isize + dx;
        if ny < 0 || nx < 0 || ny >= height as isize || nx >= width as isize {
            return None;
        }
        Some(GridCoord::new(ny as usize, nx as usize))
    }
}

impl From<(usize, usize)> for GridCoord {
    fn from(tuple: (usize, usize)) -> Self {
        Self { y: tuple.0, x: tuple.1 }
    }
}

/// One of the 8 unit moves on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Unit offset as (dy, dx)
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    /// Single character code used in encoded move sequences
    pub fn code(&self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::UpLeft => 'Q',
            Direction::UpRight => 'E',
            Direction::DownLeft => 'Z',
            Direction::DownRight => 'C',
        }
    }

    pub fn from_code(code: char) -> Option<Direction> {
        Direction::ALL.iter().copied().find(|d| d.code() == code)
    }

    pub fn is_diagonal(&self) -> bool {
        let (dy, dx) = self.offset();
        dy != 0 && dx != 0
    }

    /// Direction taking `from` to an adjacent `to`, if they are 8-neighbors.
    pub fn between(from: GridCoord, to: GridCoord) -> Option<Direction> {
        let dy = to.y as isize - from.y as isize;
        let dx = to.x as isize - from.x as isize;
        Direction::ALL.iter().copied().find(|d| d.offset() == (dy, dx))
    }
}
