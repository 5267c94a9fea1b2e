//! Grid Search Comparison Example
//!
//! Generates one obstacle layout and runs all four strategies on it.

use grid_path_planning::mapping::ObstacleGenerator;
use grid_path_planning::path_planning::{SearchConfig, SearchEngine};
use grid_path_planning::utils::{colors, Grid, PathStyle, Visualizer};

fn main() {
    println!("Grid search comparison start!!");

    let (width, height) = (64, 64);
    let coverage = 20;
    let seed = 42;

    let mut grid = match Grid::new(width, height) {
        Ok(grid) => grid,
        Err(e) => {
            println!("Cannot create grid: {}", e);
            return;
        }
    };

    let report = ObstacleGenerator::with_seed(coverage, seed).and_then(|mut g| g.generate(&mut grid));
    match report {
        Ok(report) => println!(
            "Placed {} shapes, {} obstacle cells ({:.1}%)",
            report.placements,
            report.achieved,
            grid.coverage_percentage()
        ),
        Err(e) => {
            println!("Generation failed: {}", e);
            return;
        }
    }

    let config = SearchConfig { seed: Some(seed), ..Default::default() };
    let engine = match SearchEngine::new(&grid, &config) {
        Ok(engine) => engine,
        Err(e) => {
            println!("Invalid endpoints: {}", e);
            return;
        }
    };

    let mut vis = Visualizer::new();
    vis.set_title("Grid Search Comparison");

    let reports = engine.run_all(&mut grid);
    vis.plot_grid(&grid);
    for (report, color) in reports.iter().zip(colors::STRATEGIES.iter()) {
        match report.outcome.path() {
            Some(path) => {
                println!("{}: {} steps, {} cells explored", report.name, path.step_count(), report.explored);
                vis.plot_path(path, &PathStyle::new(color, report.name));
            }
            None => println!("{}: failed after exploring {} cells", report.name, report.explored),
        }
    }
    vis.plot_start(engine.start()).plot_end(engine.end());

    let _ = vis.save_png("img/path_planning/grid_search_comparison.png", 800, 800);
    println!("Plot saved to: img/path_planning/grid_search_comparison.png");
    let _ = vis.show();

    println!("Grid search comparison finish!!");
}
