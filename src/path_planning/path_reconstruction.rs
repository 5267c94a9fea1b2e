//! Turning search results into ordered cell sequences
//!
//! Random walk, BFS and DFS carry the sequence of moves that reached each
//! frontier cell; Dijkstra keeps a parent pointer per cell. Both are expanded
//! here into the cells from start to end inclusive.

use itertools::Itertools;
use nalgebra::DMatrix;

use crate::common::{Direction, GridCoord, PlanningError, PlanningResult};

/// Parse a move string such as `"RRDZ"` into directions.
pub fn parse_moves(encoded: &str) -> PlanningResult<Vec<Direction>> {
    encoded
        .chars()
        .map(|c| Direction::from_code(c).ok_or(PlanningError::InvalidMove(c)))
        .collect()
}

/// Encode directions with their single character codes
pub fn format_moves(moves: &[Direction]) -> String {
    moves.iter().map(|d| d.code()).collect()
}

/// Ordered path from start to end, both inclusive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPath {
    cells: Vec<GridCoord>,
}

impl GridPath {
    pub fn from_cells(cells: Vec<GridCoord>) -> Self {
        Self { cells }
    }

    /// Apply `moves` cumulatively from `start`.
    ///
    /// Returns `None` if a move would step below row or column zero.
    pub fn trace(start: GridCoord, moves: &[Direction]) -> Option<Self> {
        let mut cells = Vec::with_capacity(moves.len() + 1);
        cells.push(start);
        let mut current = start;
        for dir in moves {
            let (dy, dx) = dir.offset();
            let y = current.y.checked_add_signed(dy)?;
            let x = current.x.checked_add_signed(dx)?;
            current = GridCoord::new(y, x);
            cells.push(current);
        }
        Some(Self { cells })
    }

    /// Decode a move string from `start`.
    pub fn decode(start: GridCoord, encoded: &str) -> PlanningResult<Self> {
        let moves = parse_moves(encoded)?;
        Self::trace(start, &moves).ok_or_else(|| {
            PlanningError::InvalidParameter(format!(
                "moves '{}' leave the grid from ({}, {})",
                encoded, start.y, start.x
            ))
        })
    }

    /// Walk parent pointers back from `end` to `start`, then reverse.
    ///
    /// Returns `None` if the chain is broken or does not reach `start`.
    pub fn from_parent_chain(
        parents: &DMatrix<Option<GridCoord>>,
        start: GridCoord,
        end: GridCoord,
    ) -> Option<Self> {
        let mut cells = vec![end];
        let mut current = end;
        while current != start {
            // A chain longer than the grid has a cycle
            if cells.len() > parents.len() {
                return None;
            }
            current = (*parents.get((current.y, current.x))?)?;
            cells.push(current);
        }
        cells.reverse();
        Some(Self { cells })
    }

    pub fn cells(&self) -> &[GridCoord] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells on the path, start and end included
    pub fn step_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of moves between consecutive cells
    pub fn move_count(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<GridCoord> {
        self.cells.first().copied()
    }

    pub fn end(&self) -> Option<GridCoord> {
        self.cells.last().copied()
    }

    /// Directions between consecutive cells; empty if the path is not connected
    pub fn moves(&self) -> Vec<Direction> {
        self.cells
            .iter()
            .tuple_windows()
            .map(|(a, b)| Direction::between(*a, *b))
            .collect::<Option<Vec<_>>>()
            .unwrap_or_default()
    }

    /// Every consecutive pair is an 8-neighbor pair
    pub fn is_connected(&self) -> bool {
        self.cells
            .iter()
            .tuple_windows()
            .all(|(a, b)| Direction::between(*a, *b).is_some())
    }

    /// Connected and uses no diagonal move
    pub fn is_orthogonal(&self) -> bool {
        self.cells
            .iter()
            .tuple_windows()
            .all(|(a, b)| matches!(Direction::between(*a, *b), Some(d) if !d.is_diagonal()))
    }

    /// Cells as one-based (row, col) pairs for external labels
    pub fn one_based(&self) -> Vec<(usize, usize)> {
        self.cells.iter().map(|c| c.to_one_based()).collect()
    }
}
