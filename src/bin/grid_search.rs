// Generate an obstacle grid and compare the four grid searches on it

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{debug, error, info};

use grid_path_planning::utils::{colors, PathStyle, Visualizer};
use grid_path_planning::{
    Grid, ObstacleGenerator, PlannerConfig, PlanningResult, SearchEngine, SearchReport, SearchStrategy,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Random,
    Bfs,
    Dfs,
    Dijkstra,
    All,
}

impl StrategyArg {
    fn strategies(self) -> Vec<SearchStrategy> {
        match self {
            StrategyArg::Random => vec![SearchStrategy::RandomWalk],
            StrategyArg::Bfs => vec![SearchStrategy::BreadthFirst],
            StrategyArg::Dfs => vec![SearchStrategy::DepthFirst],
            StrategyArg::Dijkstra => vec![SearchStrategy::Dijkstra],
            StrategyArg::All => SearchStrategy::ALL.to_vec(),
        }
    }
}

/// Generate a random tetromino obstacle grid and search it.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// JSON config file; command-line options override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Obstacle coverage percentage (0-100)
    #[arg(short = 'p', long)]
    coverage: Option<u8>,

    /// One-based start cell as ROW,COL
    #[arg(short, long, value_parser = parse_cell)]
    start: Option<(usize, usize)>,

    /// One-based end cell as ROW,COL (defaults to the bottom-right corner)
    #[arg(short, long, value_parser = parse_cell)]
    end: Option<(usize, usize)>,

    /// Strategy to run
    #[arg(value_enum, short = 'a', long, default_value_t = StrategyArg::All)]
    strategy: StrategyArg,

    /// Seed for both the obstacle generator and the random walk
    #[arg(long)]
    seed: Option<u64>,

    /// Number of independent layouts to generate and search
    #[arg(short, long, default_value_t = 1)]
    runs: usize,

    /// Save a plot of the last layout and its paths (.png or .svg)
    #[arg(long)]
    plot: Option<String>,

    /// Print the grid as text after each run
    #[arg(long, default_value_t = false)]
    print_grid: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

fn parse_cell(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{}'", s))?;
    let row = row.trim().parse::<usize>().map_err(|e| format!("bad row '{}': {}", row, e))?;
    let col = col.trim().parse::<usize>().map_err(|e| format!("bad column '{}': {}", col, e))?;
    Ok((row, col))
}

fn build_config(args: &Args) -> PlanningResult<PlannerConfig> {
    let mut config = match &args.config {
        Some(path) => PlannerConfig::from_path(path)?,
        None => PlannerConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(coverage) = args.coverage {
        config.obstacles.coverage_percentage = coverage;
    }
    if let Some(start) = args.start {
        config.search.start = start;
    }
    if args.end.is_some() {
        config.search.end = args.end;
    }
    if let Some(seed) = args.seed {
        config.obstacles.seed = Some(seed);
        config.search.seed = Some(seed);
    }
    config.validate()?;
    Ok(config)
}

fn print_reports(reports: &[SearchReport]) {
    for report in reports {
        if report.is_found() {
            println!("{} Steps: {}", report.name, report.steps());
        } else {
            println!("{} Failed!", report.name);
        }
        debug!("{} took {:?}, {} cells explored", report.name, report.elapsed, report.explored);
    }
}

fn save_plot(path: &str, grid: &Grid, engine: &SearchEngine, reports: &[SearchReport]) -> Result<(), String> {
    let mut vis = Visualizer::new();
    vis.set_title("Grid Search");
    vis.plot_grid(grid);
    for (report, color) in reports.iter().zip(colors::STRATEGIES.iter().cycle()) {
        if let Some(path) = report.outcome.path() {
            vis.plot_path(path, &PathStyle::new(color, report.name));
        }
    }
    vis.plot_start(engine.start()).plot_end(engine.end());

    if path.ends_with(".svg") {
        vis.save_svg(path)
    } else {
        vis.save_png(path, 800, 800)
    }
}

fn run(args: &Args) -> PlanningResult<()> {
    let mut config = build_config(args)?;
    let strategies = args.strategy.strategies();

    for run in 0..args.runs.max(1) {
        // Distinct but reproducible layouts when a seed is given
        if let Some(seed) = args.seed {
            config.obstacles.seed = Some(seed.wrapping_add(run as u64));
        }

        let mut grid = Grid::new(config.width, config.height)?;
        let mut generator = ObstacleGenerator::new(config.obstacles.clone())?;
        let generation = generator.generate(&mut grid)?;
        info!(
            "Run {}: {}x{} grid, {} obstacle cells after {} placements",
            run + 1,
            config.width,
            config.height,
            generation.achieved,
            generation.placements
        );
        println!("Coverage: {:.1}%", grid.coverage_percentage());

        let engine = SearchEngine::new(&grid, &config.search)?;
        let reports: Vec<SearchReport> = strategies.iter().map(|&s| engine.run(&mut grid, s)).collect();
        print_reports(&reports);
        if args.print_grid {
            println!("{}", grid);
        }

        if run + 1 == args.runs.max(1) {
            if let Some(path) = &args.plot {
                match save_plot(path, &grid, &engine, &reports) {
                    Ok(()) => info!("Plot saved to {}", path),
                    Err(e) => error!("Cannot save plot to {}: {}", path, e),
                }
            }
        }
        println!("--------------------------------------------------------------------------");
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.debug {
        env::set_var("RUST_LOG", "debug");
    }
    env_logger::init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell("3,7"), Ok((3, 7)));
        assert_eq!(parse_cell(" 12 , 4 "), Ok((12, 4)));
        assert!(parse_cell("3").is_err());
        assert!(parse_cell("a,1").is_err());
    }

    #[test]
    fn test_cli_overrides_defaults() {
        let args = Args::parse_from(["grid_search", "-W", "20", "-H", "10", "-p", "30", "--seed", "4", "-e", "10,20"]);
        let config = build_config(&args).unwrap();
        assert_eq!((config.width, config.height), (20, 10));
        assert_eq!(config.obstacles.coverage_percentage, 30);
        assert_eq!(config.obstacles.seed, Some(4));
        assert_eq!(config.search.end, Some((10, 20)));
        assert_eq!(args.strategy, StrategyArg::All);
    }

    #[test]
    fn test_end_outside_grid_is_rejected() {
        let args = Args::parse_from(["grid_search", "-W", "5", "-H", "5", "-e", "6,1"]);
        assert!(build_config(&args).is_err());
    }

    #[test]
    fn test_strategy_selection() {
        let args = Args::parse_from(["grid_search", "-a", "dijkstra"]);
        assert_eq!(args.strategy.strategies(), vec![SearchStrategy::Dijkstra]);
        assert_eq!(StrategyArg::All.strategies().len(), 4);
    }
}
