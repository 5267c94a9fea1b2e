//! Random obstacle field generation
//!
//! Fills a [`Grid`] with 4-cell obstacle shapes at random anchors until the
//! number of obstacle cells reaches `floor(p * W * H / 100)`.
//!
//! Placements overwrite unconditionally, so overlapping shapes add fewer than
//! four new cells. The generator therefore first places `target / 4` shapes
//! and then re-counts the grid after every extra placement.

use log::{debug, info, warn};
use rand::prelude::*;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::common::{CellState, GridCoord, PlanningError, PlanningResult};
use crate::utils::Grid;

/// Fixed 4-cell obstacle footprints
///
/// ```text
/// Line   InvertedL   S      InvertedT
/// |* .|  |* *|       |* .|  |. *|
/// |* .|  |. *|       |* *|  |* *|
/// |* .|  |. *|       |. *|  |. *|
/// |* .|
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleShape {
    Line,
    InvertedL,
    S,
    InvertedT,
}

impl ObstacleShape {
    pub const ALL: [ObstacleShape; 4] = [
        ObstacleShape::Line,
        ObstacleShape::InvertedL,
        ObstacleShape::S,
        ObstacleShape::InvertedT,
    ];

    /// Relative (dy, dx) offsets from the anchor cell
    pub fn offsets(&self) -> [(usize, usize); 4] {
        match self {
            ObstacleShape::Line => [(0, 0), (1, 0), (2, 0), (3, 0)],
            ObstacleShape::InvertedL => [(0, 0), (0, 1), (1, 1), (2, 1)],
            ObstacleShape::S => [(0, 0), (1, 0), (1, 1), (2, 1)],
            ObstacleShape::InvertedT => [(0, 1), (1, 0), (1, 1), (2, 1)],
        }
    }

    /// Bounding box as (height, width)
    pub fn extent(&self) -> (usize, usize) {
        match self {
            ObstacleShape::Line => (4, 1),
            _ => (3, 2),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ObstacleShape::Line => "Line",
            ObstacleShape::InvertedL => "Inverted L",
            ObstacleShape::S => "S",
            ObstacleShape::InvertedT => "Inverted T",
        }
    }

    /// Whether the shape fits anywhere on a `height x width` grid
    pub fn fits_grid(&self, height: usize, width: usize) -> bool {
        let (h, w) = self.extent();
        h <= height && w <= width
    }

    /// Whether the whole footprint stays inside `grid` when anchored at `anchor`
    pub fn fits_at(&self, grid: &Grid, anchor: GridCoord) -> bool {
        let (h, w) = self.extent();
        anchor.y + h <= grid.height() && anchor.x + w <= grid.width()
    }

    /// Absolute cells covered when anchored at `anchor`
    pub fn footprint(&self, anchor: GridCoord) -> [GridCoord; 4] {
        self.offsets()
            .map(|(dy, dx)| GridCoord::new(anchor.y + dy, anchor.x + dx))
    }

    /// Mark the footprint as obstacles, overwriting whatever is there.
    ///
    /// Fails without touching the grid if any footprint cell is out of bounds.
    pub fn place(&self, grid: &mut Grid, anchor: GridCoord) -> PlanningResult<()> {
        if !self.fits_at(grid, anchor) {
            return Err(PlanningError::PlacementOutOfBounds { shape: self.name(), anchor });
        }
        for cell in self.footprint(anchor).iter() {
            grid.set(*cell, CellState::Obstacle);
        }
        Ok(())
    }
}

/// Configuration for the obstacle generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleFieldConfig {
    /// Target share of obstacle cells, 0 to 100
    pub coverage_percentage: u8,
    /// RNG seed, `None` to seed from entropy
    pub seed: Option<u64>,
    /// Cap on placements after the initial batch, `None` for `64 * W * H`
    pub max_extra_placements: Option<usize>,
}

impl Default for ObstacleFieldConfig {
    fn default() -> Self {
        Self {
            coverage_percentage: 20,
            seed: None,
            max_extra_placements: None,
        }
    }
}

impl ObstacleFieldConfig {
    pub fn validate(&self) -> PlanningResult<()> {
        if self.coverage_percentage > 100 {
            return Err(PlanningError::InvalidParameter(format!(
                "coverage percentage must be in [0, 100], got {}",
                self.coverage_percentage
            )));
        }
        Ok(())
    }
}

/// Number of obstacle cells required for `coverage_percentage` on a `width x height` grid
pub fn target_obstacle_cells(width: usize, height: usize, coverage_percentage: u8) -> usize {
    coverage_percentage as usize * width * height / 100
}

/// Summary of one generation run
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub target: usize,
    pub achieved: usize,
    pub placements: usize,
}

/// Random obstacle field generator
pub struct ObstacleGenerator {
    config: ObstacleFieldConfig,
    rng: StdRng,
}

impl ObstacleGenerator {
    pub fn new(config: ObstacleFieldConfig) -> PlanningResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    /// Create a generator for `coverage_percentage` with a fixed seed
    pub fn with_seed(coverage_percentage: u8, seed: u64) -> PlanningResult<Self> {
        Self::new(ObstacleFieldConfig {
            coverage_percentage,
            seed: Some(seed),
            ..Default::default()
        })
    }

    pub fn config(&self) -> &ObstacleFieldConfig {
        &self.config
    }

    /// Populate `grid` until it holds at least the target number of obstacle cells.
    pub fn generate(&mut self, grid: &mut Grid) -> PlanningResult<GenerationReport> {
        let (width, height) = (grid.width(), grid.height());
        let target = target_obstacle_cells(width, height, self.config.coverage_percentage);
        let shapes: Vec<ObstacleShape> = ObstacleShape::ALL
            .iter()
            .copied()
            .filter(|s| s.fits_grid(height, width))
            .collect();

        let mut placements = 0;
        if grid.count(CellState::Obstacle) >= target {
            return Ok(GenerationReport { target, achieved: grid.count(CellState::Obstacle), placements });
        }
        if shapes.is_empty() {
            warn!("No obstacle shape fits a {}x{} grid", width, height);
            return Err(PlanningError::CoverageUnreachable {
                target,
                achieved: grid.count(CellState::Obstacle),
                placements,
            });
        }

        let initial_blocks = target / 4;
        for _ in 0..initial_blocks {
            self.place_random(grid, &shapes)?;
            placements += 1;
        }
        debug!("Placed {} initial blocks for a target of {} cells", initial_blocks, target);

        let max_extra = self
            .config
            .max_extra_placements
            .unwrap_or(64 * grid.cell_count());
        let mut extra = 0;
        let mut achieved = grid.count(CellState::Obstacle);
        while achieved < target {
            if extra >= max_extra {
                warn!(
                    "Giving up after {} extra placements: {} of {} obstacle cells",
                    extra, achieved, target
                );
                return Err(PlanningError::CoverageUnreachable { target, achieved, placements });
            }
            self.place_random(grid, &shapes)?;
            placements += 1;
            extra += 1;
            achieved = grid.count(CellState::Obstacle);
        }

        info!(
            "Grid initialization complete: {} obstacle cells ({:.1}%) after {} placements",
            achieved,
            grid.coverage_percentage(),
            placements
        );
        Ok(GenerationReport { target, achieved, placements })
    }

    fn place_random(&mut self, grid: &mut Grid, shapes: &[ObstacleShape]) -> PlanningResult<()> {
        let shape = shapes[self.rng.gen_range(0..shapes.len())];
        let (h, w) = shape.extent();
        let anchor = GridCoord::new(
            self.rng.gen_range(0..=grid.height() - h),
            self.rng.gen_range(0..=grid.width() - w),
        );
        shape.place(grid, anchor)
    }
}
