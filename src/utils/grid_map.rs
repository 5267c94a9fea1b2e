// Occupancy grid shared by the obstacle generator and every search strategy

use std::fmt;
use std::ops::Deref;

use log::debug;
use nalgebra::DMatrix;

use crate::common::{CellState, GridCoord, PlanningError, PlanningResult};

/// Largest supported extent along either axis
pub const MAX_GRID_DIMENSION: usize = u8::MAX as usize;

/// Fixed-size grid of cell states, stored row-major as `height x width`.
///
/// `get` and `set` do not validate their coordinate beyond the matrix index
/// check, which panics. Callers (the adjacency service, the obstacle
/// generator, the search engine) are responsible for bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: DMatrix<CellState>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> PlanningResult<Self> {
        if width == 0 || height == 0 {
            return Err(PlanningError::InvalidParameter(format!(
                "grid must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        if width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
            return Err(PlanningError::InvalidParameter(format!(
                "grid dimensions are limited to {} per axis, got {}x{}",
                MAX_GRID_DIMENSION, width, height
            )));
        }
        debug!("Creating {}x{} grid", width, height);
        Ok(Self { cells: DMatrix::from_element(height, width, CellState::Empty) })
    }

    /// Build a grid from text rows: `.` empty, `#` obstacle, `+` visited.
    pub fn from_rows(rows: &[&str]) -> PlanningResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut grid = Self::new(width, height)?;
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(PlanningError::InvalidParameter(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for (x, c) in row.chars().enumerate() {
                let state = match c {
                    '.' => CellState::Empty,
                    '#' => CellState::Obstacle,
                    '+' => CellState::Visited,
                    other => {
                        return Err(PlanningError::InvalidParameter(format!(
                            "unknown cell symbol '{}' at ({}, {})",
                            other, y, x
                        )))
                    }
                };
                grid.set(GridCoord::new(y, x), state);
            }
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.y < self.height() && coord.x < self.width()
    }

    pub fn get(&self, coord: GridCoord) -> CellState {
        self.cells[(coord.y, coord.x)]
    }

    pub fn set(&mut self, coord: GridCoord, state: CellState) {
        self.cells[(coord.y, coord.x)] = state;
    }

    /// Transition `coord` from `Empty` to `Visited`.
    ///
    /// Returns `true` if the cell was empty and is now claimed, `false` if it
    /// was an obstacle or already visited (the cell is left untouched).
    pub fn try_claim(&mut self, coord: GridCoord) -> bool {
        let cell = &mut self.cells[(coord.y, coord.x)];
        if *cell == CellState::Empty {
            *cell = CellState::Visited;
            true
        } else {
            false
        }
    }

    /// Turn every `Visited` cell back into `Empty`, keeping obstacles.
    pub fn reset_visited(&mut self) {
        for cell in self.cells.iter_mut() {
            if *cell == CellState::Visited {
                *cell = CellState::Empty;
            }
        }
    }

    /// Make every cell `Empty`.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Percentage of cells currently holding an obstacle
    pub fn coverage_percentage(&self) -> f64 {
        100.0 * self.count(CellState::Obstacle) as f64 / self.cell_count() as f64
    }

    /// Read-only view of every cell, indexed `(row, col)`
    pub fn snapshot(&self) -> &DMatrix<CellState> {
        &self.cells
    }

    /// Coordinates of every cell holding `state`, in row-major order
    pub fn cells_with(&self, state: CellState) -> Vec<GridCoord> {
        let mut coords = Vec::new();
        for y in 0..self.height() {
            for x in 0..self.width() {
                if self.cells[(y, x)] == state {
                    coords.push(GridCoord::new(y, x));
                }
            }
        }
        coords
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let symbol = match self.cells[(y, x)] {
                    CellState::Empty => '.',
                    CellState::Obstacle => '#',
                    CellState::Visited => '+',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Deref for Grid {
    type Target = DMatrix<CellState>;

    fn deref(&self) -> &Self::Target {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(7, 3).unwrap();
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.count(CellState::Empty), 21);
        assert_eq!(grid.shape(), (3, 7));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Grid::new(0, 5).is_err());
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::new(256, 5).is_err());
        assert!(Grid::new(255, 255).is_ok());
    }

    #[test]
    fn test_set_get_and_count() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(GridCoord::new(1, 2), CellState::Obstacle);
        grid.set(GridCoord::new(3, 3), CellState::Visited);
        assert_eq!(grid.get(GridCoord::new(1, 2)), CellState::Obstacle);
        assert_eq!(grid.count(CellState::Obstacle), 1);
        assert_eq!(grid.count(CellState::Visited), 1);
        assert!((grid.coverage_percentage() - 6.25).abs() < 1e-10);
    }

    #[test]
    fn test_try_claim() {
        let mut grid = Grid::new(3, 3).unwrap();
        let c = GridCoord::new(1, 1);
        assert!(grid.try_claim(c));
        assert_eq!(grid.get(c), CellState::Visited);
        assert!(!grid.try_claim(c));

        let o = GridCoord::new(0, 1);
        grid.set(o, CellState::Obstacle);
        assert!(!grid.try_claim(o));
        assert_eq!(grid.get(o), CellState::Obstacle);
    }

    #[test]
    fn test_reset_visited_keeps_obstacles() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(GridCoord::new(0, 0), CellState::Obstacle);
        grid.set(GridCoord::new(0, 1), CellState::Visited);
        grid.set(GridCoord::new(1, 2), CellState::Visited);
        grid.reset_visited();
        assert_eq!(grid.count(CellState::Visited), 0);
        assert_eq!(grid.count(CellState::Obstacle), 1);
        assert_eq!(grid.cells_with(CellState::Obstacle), vec![GridCoord::new(0, 0)]);

        grid.clear();
        assert_eq!(grid.count(CellState::Empty), 6);
    }

    #[test]
    fn test_from_rows_and_display() {
        let rows = ["..#", "+.#"];
        let grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(GridCoord::new(0, 2)), CellState::Obstacle);
        assert_eq!(grid.get(GridCoord::new(1, 0)), CellState::Visited);
        assert_eq!(grid.to_string(), "..#\n+.#\n");

        assert!(Grid::from_rows(&["..", "..."]).is_err());
        assert!(Grid::from_rows(&["x."]).is_err());
        assert!(Grid::from_rows(&[]).is_err());
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_access_panics() {
        let grid = Grid::new(2, 2).unwrap();
        grid.get(GridCoord::new(2, 0));
    }
}
