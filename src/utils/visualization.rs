//! Visualization utilities for grid_path_planning
//!
//! Draws grid snapshots and search paths with gnuplot. Layers are collected
//! first and rendered onto a single set of axes when the figure is shown or
//! saved, so plot calls can be made in any order.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, LineWidth, PointSize, PointSymbol};

use crate::common::{CellState, GridCoord, Visualizable};
use crate::path_planning::GridPath;
use crate::utils::Grid;

/// Color palette for consistent styling
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const RED: &str = "#FF0000";
    pub const GREEN: &str = "#00FF00";
    pub const BLUE: &str = "#0000FF";
    pub const ORANGE: &str = "#FFA500";
    pub const PURPLE: &str = "#800080";
    pub const GRAY: &str = "#808080";
    pub const LIGHT_GRAY: &str = "#C8C8C8";

    // Semantic colors
    pub const OBSTACLE: &str = BLACK;
    pub const VISITED: &str = LIGHT_GRAY;
    pub const START: &str = GREEN;
    pub const END: &str = BLUE;
    pub const PATH: &str = RED;

    /// One line color per strategy when several paths share a plot
    pub const STRATEGIES: [&str; 4] = [ORANGE, RED, PURPLE, BLUE];
}

/// Style for path rendering
#[derive(Debug, Clone)]
pub struct PathStyle {
    pub color: String,
    pub line_width: f64,
    pub caption: String,
}

impl PathStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            line_width: 2.0,
            caption: caption.to_string(),
        }
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::new(colors::PATH, "Path")
    }
}

/// Style for point rendering
#[derive(Debug, Clone)]
pub struct PointStyle {
    pub color: String,
    pub size: f64,
    pub symbol: char,
    pub caption: String,
}

impl PointStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            size: 1.0,
            symbol: 'O',
            caption: caption.to_string(),
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_symbol(mut self, symbol: char) -> Self {
        self.symbol = symbol;
        self
    }
}

#[derive(Debug, Clone)]
enum Layer {
    Points { x: Vec<f64>, y: Vec<f64>, style: PointStyle },
    Lines { x: Vec<f64>, y: Vec<f64>, style: PathStyle },
}

/// Main visualizer struct
///
/// Cells are drawn at `(column, row)` with row 0 at the top.
pub struct Visualizer {
    figure: Figure,
    layers: Vec<Layer>,
    title: String,
    x_range: Option<(f64, f64)>,
    y_range: Option<(f64, f64)>,
}

impl Visualizer {
    pub fn new() -> Self {
        Self {
            figure: Figure::new(),
            layers: Vec::new(),
            title: String::new(),
            x_range: None,
            y_range: None,
        }
    }

    /// Set the plot title
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Fix both axis ranges to the extent of `grid`
    pub fn fit_grid(&mut self, grid: &Grid) -> &mut Self {
        self.x_range = Some((-1.0, grid.width() as f64));
        self.y_range = Some((-1.0, grid.height() as f64));
        self
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Plot every cell in `state` as a square marker
    pub fn plot_cells(&mut self, grid: &Grid, state: CellState, style: &PointStyle) -> &mut Self {
        let cells = grid.cells_with(state);
        if !cells.is_empty() {
            self.plot_coords(&cells, style);
        }
        self
    }

    /// Plot obstacles and visited cells of a grid snapshot
    pub fn plot_grid(&mut self, grid: &Grid) -> &mut Self {
        self.fit_grid(grid);
        self.plot_cells(
            grid,
            CellState::Visited,
            &PointStyle::new(colors::VISITED, "Visited").with_symbol('S').with_size(0.5),
        );
        self.plot_cells(
            grid,
            CellState::Obstacle,
            &PointStyle::new(colors::OBSTACLE, "Obstacles").with_symbol('S').with_size(0.5),
        )
    }

    /// Plot a path as a polyline through cell centers
    pub fn plot_path(&mut self, path: &GridPath, style: &PathStyle) -> &mut Self {
        if path.is_empty() {
            return self;
        }
        let (x, y) = split_xy(path.cells());
        self.layers.push(Layer::Lines { x, y, style: style.clone() });
        self
    }

    pub fn plot_coords(&mut self, coords: &[GridCoord], style: &PointStyle) -> &mut Self {
        let (x, y) = split_xy(coords);
        self.layers.push(Layer::Points { x, y, style: style.clone() });
        self
    }

    pub fn plot_start(&mut self, coord: GridCoord) -> &mut Self {
        self.plot_coords(&[coord], &PointStyle::new(colors::START, "Start").with_size(1.5))
    }

    pub fn plot_end(&mut self, coord: GridCoord) -> &mut Self {
        self.plot_coords(&[coord], &PointStyle::new(colors::END, "End").with_size(1.5))
    }

    /// Finalize and show the plot
    pub fn show(&mut self) -> Result<(), String> {
        self.render();
        self.figure.show().map_err(|e| e.to_string()).map(|_| ())
    }

    /// Save plot to PNG file
    pub fn save_png(&mut self, path: &str, width: u32, height: u32) -> Result<(), String> {
        self.render();
        self.figure.save_to_png(path, width, height).map_err(|e| e.to_string())
    }

    /// Save plot to SVG file
    pub fn save_svg(&mut self, path: &str) -> Result<(), String> {
        self.render();
        self.figure.save_to_svg(path, 800, 800).map_err(|e| e.to_string())
    }

    fn render(&mut self) {
        self.figure.clear_axes();
        let axes = self.figure.axes2d();

        for layer in &self.layers {
            match layer {
                Layer::Points { x, y, style } => {
                    axes.points(x, y, &[
                        Caption(&style.caption),
                        Color(&style.color),
                        PointSymbol(style.symbol),
                        PointSize(style.size),
                    ]);
                }
                Layer::Lines { x, y, style } => {
                    axes.lines(x, y, &[
                        Caption(&style.caption),
                        Color(&style.color),
                        LineWidth(style.line_width),
                    ]);
                }
            }
        }

        if !self.title.is_empty() {
            axes.set_title(&self.title, &[]);
        }
        axes.set_x_label("column", &[]);
        axes.set_y_label("row", &[]);
        if let Some((min, max)) = self.x_range {
            axes.set_x_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        // Reversed so row 0 is drawn at the top
        if let Some((min, max)) = self.y_range {
            axes.set_y_range(AutoOption::Fix(max), AutoOption::Fix(min));
        }
        axes.set_aspect_ratio(AutoOption::Fix(1.0));
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

fn split_xy(coords: &[GridCoord]) -> (Vec<f64>, Vec<f64>) {
    coords.iter().map(|c| (c.x as f64, c.y as f64)).unzip()
}

impl Visualizable for Grid {
    fn visualize(&self, vis: &mut Visualizer) {
        vis.plot_grid(self);
    }
}

impl Visualizable for GridPath {
    fn visualize(&self, vis: &mut Visualizer) {
        vis.plot_path(self, &PathStyle::default());
        if let (Some(start), Some(end)) = (self.start(), self.end()) {
            vis.plot_start(start).plot_end(end);
        }
    }
}
