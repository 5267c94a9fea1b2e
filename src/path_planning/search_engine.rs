//! Running search strategies against a shared grid
//!
//! [`SearchEngine`] owns the validated endpoints of one experiment. Each run
//! resets visited state, forces both endpoints `Empty` and then hands the grid
//! to a strategy, so several strategies can be compared on one obstacle layout.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::common::{CellState, Direction, GridCoord, GridSearch, PlanningError, PlanningResult};
use crate::path_planning::{BreadthFirstSearch, DepthFirstSearch, DijkstraSearch, GridPath, RandomWalk};
use crate::utils::Grid;

/// Terminal result of one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(GridPath),
    /// Frontier exhausted before the end was reached
    PathNotFound,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn path(&self) -> Option<&GridPath> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::PathNotFound => None,
        }
    }

    pub fn into_path(self) -> Option<GridPath> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::PathNotFound => None,
        }
    }

    /// Number of cells on the path, `None` on failure
    pub fn step_count(&self) -> Option<usize> {
        self.path().map(|p| p.step_count())
    }
}

impl From<Option<GridPath>> for SearchOutcome {
    fn from(path: Option<GridPath>) -> Self {
        match path {
            Some(path) => SearchOutcome::Found(path),
            None => SearchOutcome::PathNotFound,
        }
    }
}

/// Frontier entry for move-carrying strategies
#[derive(Debug, Clone)]
pub(crate) struct FrontierEntry {
    pub coord: GridCoord,
    pub moves: Vec<Direction>,
}

impl FrontierEntry {
    pub fn root(coord: GridCoord) -> Self {
        Self { coord, moves: Vec::new() }
    }

    /// Entry for `next`, reached from this one by `dir`
    pub fn child(&self, dir: Direction, next: GridCoord) -> Self {
        let mut moves = Vec::with_capacity(self.moves.len() + 1);
        moves.extend_from_slice(&self.moves);
        moves.push(dir);
        Self { coord: next, moves }
    }
}

/// The four interchangeable strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchStrategy {
    #[serde(rename = "random")]
    RandomWalk,
    #[serde(rename = "bfs")]
    BreadthFirst,
    #[serde(rename = "dfs")]
    DepthFirst,
    #[serde(rename = "dijkstra")]
    Dijkstra,
}

impl SearchStrategy {
    /// Every strategy, in the order they are compared
    pub const ALL: [SearchStrategy; 4] = [
        SearchStrategy::RandomWalk,
        SearchStrategy::BreadthFirst,
        SearchStrategy::DepthFirst,
        SearchStrategy::Dijkstra,
    ];

    /// Instantiate the strategy. `seed` only affects the random walk.
    pub fn build(&self, seed: Option<u64>) -> Box<dyn GridSearch> {
        match self {
            SearchStrategy::RandomWalk => match seed {
                Some(seed) => Box::new(RandomWalk::with_seed(seed)),
                None => Box::new(RandomWalk::new()),
            },
            SearchStrategy::BreadthFirst => Box::new(BreadthFirstSearch::new()),
            SearchStrategy::DepthFirst => Box::new(DepthFirstSearch::new()),
            SearchStrategy::Dijkstra => Box::new(DijkstraSearch::new()),
        }
    }

    /// Whether the same grid and endpoints always give the same path
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, SearchStrategy::RandomWalk)
    }

    /// Whether diagonal moves are explored
    pub fn uses_diagonals(&self) -> bool {
        matches!(self, SearchStrategy::Dijkstra)
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchStrategy::RandomWalk => "Random Search",
            SearchStrategy::BreadthFirst => "BFS Search",
            SearchStrategy::DepthFirst => "DFS Search",
            SearchStrategy::Dijkstra => "Dijkstra Search",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SearchStrategy {
    type Err = PlanningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" | "random-walk" => Ok(SearchStrategy::RandomWalk),
            "bfs" | "breadth-first" => Ok(SearchStrategy::BreadthFirst),
            "dfs" | "depth-first" => Ok(SearchStrategy::DepthFirst),
            "dijkstra" => Ok(SearchStrategy::Dijkstra),
            other => Err(PlanningError::InvalidParameter(format!("unknown search strategy '{}'", other))),
        }
    }
}

/// Endpoints and seed for a search experiment, in external one-based coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// One-based (row, col) of the start cell
    pub start: (usize, usize),
    /// One-based (row, col) of the end cell, `None` for the bottom-right corner
    pub end: Option<(usize, usize)>,
    /// Seed for the random walk, `None` to seed from entropy
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { start: (1, 1), end: None, seed: None }
    }
}

/// Convert a one-based (row, col) into a zero-based coordinate inside `grid`
pub fn to_grid_coord(grid: &Grid, one_based: (usize, usize), label: &str) -> PlanningResult<GridCoord> {
    let (row, col) = one_based;
    if row == 0 || col == 0 || row > grid.height() || col > grid.width() {
        return Err(PlanningError::InvalidParameter(format!(
            "{} ({}, {}) is outside the {}x{} grid (rows 1..={}, cols 1..={})",
            label,
            row,
            col,
            grid.width(),
            grid.height(),
            grid.height(),
            grid.width()
        )));
    }
    GridCoord::from_one_based(row, col)
}

/// Result of one strategy run
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub name: &'static str,
    pub outcome: SearchOutcome,
    /// Cells left `Visited` by the run
    pub explored: usize,
    pub elapsed: Duration,
}

impl SearchReport {
    pub fn is_found(&self) -> bool {
        self.outcome.is_found()
    }

    /// Step count, 0 when no path was found
    pub fn steps(&self) -> usize {
        self.outcome.step_count().unwrap_or(0)
    }
}

/// Validated endpoints shared by every strategy run
#[derive(Debug, Clone)]
pub struct SearchEngine {
    start: GridCoord,
    end: GridCoord,
    seed: Option<u64>,
}

impl SearchEngine {
    /// Validate `config` against `grid` and convert the endpoints.
    pub fn new(grid: &Grid, config: &SearchConfig) -> PlanningResult<Self> {
        let start = to_grid_coord(grid, config.start, "start")?;
        let end_one_based = config.end.unwrap_or((grid.height(), grid.width()));
        let end = to_grid_coord(grid, end_one_based, "end")?;
        Ok(Self { start, end, seed: config.seed })
    }

    /// Engine for one-based `start` and `end`
    pub fn from_one_based(grid: &Grid, start: (usize, usize), end: (usize, usize)) -> PlanningResult<Self> {
        Self::new(grid, &SearchConfig { start, end: Some(end), seed: None })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn start(&self) -> GridCoord {
        self.start
    }

    pub fn end(&self) -> GridCoord {
        self.end
    }

    /// Reset visited cells and clear both endpoints.
    pub fn prepare(&self, grid: &mut Grid) {
        grid.reset_visited();
        grid.set(self.start, CellState::Empty);
        grid.set(self.end, CellState::Empty);
    }

    /// Run one of the built-in strategies
    pub fn run(&self, grid: &mut Grid, strategy: SearchStrategy) -> SearchReport {
        let mut planner = strategy.build(self.seed);
        self.run_with(grid, planner.as_mut())
    }

    /// Run any [`GridSearch`] implementation
    pub fn run_with(&self, grid: &mut Grid, planner: &mut dyn GridSearch) -> SearchReport {
        self.prepare(grid);
        let (sy, sx) = self.start.to_one_based();
        let (ey, ex) = self.end.to_one_based();
        debug!("{}: start ({}, {}) end ({}, {})", planner.name(), sy, sx, ey, ex);

        let timer = Instant::now();
        let outcome = planner.search(grid, self.start, self.end);
        let elapsed = timer.elapsed();

        let report = SearchReport {
            name: planner.name(),
            explored: grid.count(CellState::Visited),
            outcome,
            elapsed,
        };
        match report.outcome.step_count() {
            Some(steps) => info!("{} Steps: {} ({} cells explored)", report.name, steps, report.explored),
            None => info!("{} failed after exploring {} cells", report.name, report.explored),
        }
        report
    }

    /// Run every strategy on the same layout. The grid keeps the last run's visited cells.
    pub fn run_all(&self, grid: &mut Grid) -> Vec<SearchReport> {
        SearchStrategy::ALL.iter().map(|&s| self.run(grid, s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::ObstacleGenerator;
    use crate::path_planning::format_moves;
    use itertools::iproduct;

    /// Length in cells of the shortest orthogonal path, by exhaustive enumeration of simple paths
    fn brute_force_shortest(grid: &Grid, start: GridCoord, end: GridCoord) -> Option<usize> {
        fn walk(grid: &Grid, current: GridCoord, end: GridCoord, seen: &mut Vec<GridCoord>, best: &mut Option<usize>) {
            if current == end {
                let len = seen.len();
                if best.map_or(true, |b| len < b) {
                    *best = Some(len);
                }
                return;
            }
            if best.map_or(false, |b| seen.len() >= b) {
                return;
            }
            for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right].iter() {
                if let Some(next) = current.step(*dir, grid.height(), grid.width()) {
                    if grid.get(next) != CellState::Obstacle && !seen.contains(&next) {
                        seen.push(next);
                        walk(grid, next, end, seen, best);
                        seen.pop();
                    }
                }
            }
        }
        let mut best = None;
        let mut seen = vec![start];
        walk(grid, start, end, &mut seen, &mut best);
        best
    }

    fn layout(seed: u64, coverage: u8) -> Grid {
        let mut grid = Grid::new(5, 4).unwrap();
        ObstacleGenerator::with_seed(coverage, seed).unwrap().generate(&mut grid).unwrap();
        grid
    }

    #[test]
    fn test_strategy_from_str_and_display() {
        assert_eq!("bfs".parse::<SearchStrategy>().unwrap(), SearchStrategy::BreadthFirst);
        assert_eq!("Dijkstra".parse::<SearchStrategy>().unwrap(), SearchStrategy::Dijkstra);
        assert_eq!("random-walk".parse::<SearchStrategy>().unwrap(), SearchStrategy::RandomWalk);
        assert!("astar".parse::<SearchStrategy>().is_err());
        assert_eq!(SearchStrategy::DepthFirst.to_string(), "DFS Search");
        for s in SearchStrategy::ALL.iter() {
            assert_eq!(s.build(Some(0)).name(), s.to_string());
        }
    }

    #[test]
    fn test_endpoint_validation() {
        let grid = Grid::new(5, 4).unwrap();
        assert!(SearchEngine::from_one_based(&grid, (1, 1), (4, 5)).is_ok());
        assert!(SearchEngine::from_one_based(&grid, (0, 1), (4, 5)).is_err());
        assert!(SearchEngine::from_one_based(&grid, (1, 1), (5, 5)).is_err());
        assert!(SearchEngine::from_one_based(&grid, (1, 1), (4, 6)).is_err());

        // Default end is the bottom-right corner
        let engine = SearchEngine::new(&grid, &SearchConfig::default()).unwrap();
        assert_eq!(engine.start(), GridCoord::new(0, 0));
        assert_eq!(engine.end(), GridCoord::new(3, 4));
    }

    #[test]
    fn test_open_grid_all_strategies_succeed() {
        let mut grid = Grid::new(8, 6).unwrap();
        let engine = SearchEngine::from_one_based(&grid, (1, 1), (6, 8)).unwrap().with_seed(3);
        for report in engine.run_all(&mut grid) {
            // The random walk can box itself in on a 2D grid
            if report.name == "Random Search" {
                continue;
            }
            assert!(report.is_found(), "{} failed on an open grid", report.name);
        }

        // A single row leaves the walk exactly one choice per step
        let mut line = Grid::new(6, 1).unwrap();
        let engine = SearchEngine::from_one_based(&line, (1, 1), (1, 6)).unwrap();
        for report in engine.run_all(&mut line) {
            assert!(report.is_found(), "{} failed on a straight line", report.name);
            assert_eq!(report.steps(), 6);
        }
    }

    #[test]
    fn test_bfs_five_by_five_scenario() {
        let mut grid = Grid::new(5, 5).unwrap();
        let engine = SearchEngine::from_one_based(&grid, (1, 1), (5, 5)).unwrap();
        let report = engine.run(&mut grid, SearchStrategy::BreadthFirst);
        let path = report.outcome.path().unwrap();
        assert_eq!(path.step_count(), 9);
        assert_eq!(path.move_count(), 8);
        assert!(path.is_orthogonal());
        let encoded = format_moves(&path.moves());
        assert_eq!(encoded.chars().filter(|&c| c == 'R').count(), 4);
        assert_eq!(encoded.chars().filter(|&c| c == 'D').count(), 4);
        assert_eq!(path.one_based().first(), Some(&(1, 1)));
        assert_eq!(path.one_based().last(), Some(&(5, 5)));
    }

    #[test]
    fn test_blocked_corridor_all_strategies_fail() {
        let mut grid = Grid::from_rows(&[
            ".....",
            "#####",
            ".....",
            ".....",
            ".....",
        ])
        .unwrap();
        let engine = SearchEngine::from_one_based(&grid, (1, 1), (5, 5)).unwrap().with_seed(8);
        for report in engine.run_all(&mut grid) {
            assert!(!report.is_found(), "{} crossed a solid wall", report.name);
            assert_eq!(report.steps(), 0);
        }
    }

    #[test]
    fn test_diagonal_shortcut_beats_bfs() {
        let mut grid = Grid::from_rows(&[
            "..#..",
            "..#..",
            "...#.",
            ".#...",
            ".....",
        ])
        .unwrap();
        let engine = SearchEngine::from_one_based(&grid, (1, 1), (1, 5)).unwrap();
        let bfs = engine.run(&mut grid, SearchStrategy::BreadthFirst).steps();
        let dijkstra = engine.run(&mut grid, SearchStrategy::Dijkstra).steps();
        assert!(bfs > 0 && dijkstra > 0);
        assert!(dijkstra < bfs, "dijkstra {} vs bfs {}", dijkstra, bfs);
    }

    #[test]
    fn test_bfs_matches_brute_force_on_small_grids() {
        for seed in 0..25 {
            let mut grid = layout(seed, 30);
            let cells: Vec<GridCoord> = iproduct!(0..grid.height(), 0..grid.width())
                .map(|(y, x)| GridCoord::new(y, x))
                .collect();
            let start = cells[seed as usize % cells.len()];
            let end = cells[(seed as usize * 7 + 3) % cells.len()];
            let engine = SearchEngine::from_one_based(&grid, start.to_one_based(), end.to_one_based()).unwrap();
            engine.prepare(&mut grid);

            let expected = brute_force_shortest(&grid, start, end);
            let report = engine.run(&mut grid, SearchStrategy::BreadthFirst);
            assert_eq!(report.outcome.step_count(), expected, "seed {}", seed);
        }
    }

    #[test]
    fn test_dijkstra_never_longer_than_bfs() {
        for seed in 0..25 {
            let mut grid = layout(seed, 25);
            let engine = SearchEngine::from_one_based(&grid, (1, 1), (4, 5)).unwrap();
            let bfs = engine.run(&mut grid, SearchStrategy::BreadthFirst);
            let dijkstra = engine.run(&mut grid, SearchStrategy::Dijkstra);
            if let Some(bfs_steps) = bfs.outcome.step_count() {
                let dij_steps = dijkstra.outcome.step_count().unwrap();
                assert!(dij_steps <= bfs_steps, "seed {}", seed);
            }
        }
    }

    #[test]
    fn test_rerun_after_reset_is_identical() {
        let mut grid = Grid::new(20, 20).unwrap();
        ObstacleGenerator::with_seed(25, 17).unwrap().generate(&mut grid).unwrap();
        let engine = SearchEngine::from_one_based(&grid, (1, 1), (20, 20)).unwrap().with_seed(4);
        for strategy in SearchStrategy::ALL.iter() {
            let first = engine.run(&mut grid, *strategy);
            let second = engine.run(&mut grid, *strategy);
            assert_eq!(first.outcome.is_found(), second.outcome.is_found());
            assert_eq!(first.outcome, second.outcome, "{} is not reproducible", strategy);
            assert_eq!(first.explored, second.explored);
        }
    }

    #[test]
    fn test_endpoints_forced_empty() {
        let mut grid = Grid::from_rows(&["#..", "...", "..#"]).unwrap();
        let engine = SearchEngine::from_one_based(&grid, (1, 1), (3, 3)).unwrap();
        let report = engine.run(&mut grid, SearchStrategy::BreadthFirst);
        assert!(report.is_found());
        assert_eq!(grid.count(CellState::Obstacle), 0);
    }

    #[test]
    fn test_run_leaves_visited_for_rendering() {
        let mut grid = Grid::new(4, 4).unwrap();
        let engine = SearchEngine::from_one_based(&grid, (1, 1), (4, 4)).unwrap();
        let report = engine.run(&mut grid, SearchStrategy::DepthFirst);
        assert_eq!(grid.count(CellState::Visited), report.explored);
        assert!(report.explored > 0);
    }
}
