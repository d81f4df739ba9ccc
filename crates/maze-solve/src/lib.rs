//! Command-line maze solving: load a maze file, run the requested searches,
//! report statistics and write the annotated maze.

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use maze_core::{Maze, parse_maze, render};
use maze_paths::{SearchConfig, SearchEngine, Strategy, WeightedManhattan, bfs_distance};

pub mod cli;
pub mod report;

pub use cli::{Algorithm, Cli, OutputFormat};
pub use report::{SolveReport, format_path};

/// Run one search over `maze` and time it.
///
/// With `verify`, the BFS shortest distance is attached to the report.
pub fn solve(maze: &Maze, strategy: Strategy, weight: f64, verify: bool) -> maze_paths::Result<SolveReport> {
    let config = SearchConfig::default()
        .with_strategy(strategy)
        .with_heuristic_weight(weight);
    let engine = SearchEngine::with_config(&maze.grid, config);

    let started = Instant::now();
    let result = engine.search(maze.start, maze.goal)?;
    let elapsed = started.elapsed();
    debug!(
        "{strategy}: {} cells, {} expanded in {elapsed:?}",
        result.path_len(),
        result.nodes_expanded
    );

    let mut report = SolveReport::new(strategy, maze.start, maze.goal, result, elapsed);
    if verify {
        report.shortest_steps = bfs_distance(&maze.grid, maze.start, maze.goal);
    }
    Ok(report)
}

/// Execute the command described by `cli`.
pub fn run(cli: &Cli) -> Result<()> {
    let text = fs::read_to_string(&cli.maze)
        .with_context(|| format!("failed to read maze file {}", cli.maze.display()))?;
    let maze = parse_maze(&text).with_context(|| format!("failed to parse maze file {}", cli.maze.display()))?;
    info!(
        "loaded {}x{} maze, start {} goal {}",
        maze.grid.rows(),
        maze.grid.cols(),
        maze.start,
        maze.goal
    );

    let strategies = cli.algorithm.strategies();
    if strategies.contains(&Strategy::AStar) && !WeightedManhattan::new(cli.weight).is_admissible() {
        warn!("heuristic weight {} overestimates; A* may return a longer path", cli.weight);
    }

    let mut reports = Vec::with_capacity(strategies.len());
    for &strategy in strategies {
        let report = solve(&maze, strategy, cli.weight, cli.verify)
            .with_context(|| format!("{strategy} search failed"))?;
        if let Some(false) = report.is_optimal() {
            let steps = report.path_len.saturating_sub(1);
            match strategy {
                Strategy::AStar => warn!(
                    "A* path has {steps} steps but the shortest has {}",
                    report.shortest_steps.unwrap_or_default()
                ),
                Strategy::DepthFirst => debug!("dfs path has {steps} steps, longer than the shortest"),
            }
        }
        reports.push(report);
    }

    match cli.format {
        OutputFormat::Text => {
            let blocks: Vec<String> = reports.iter().map(SolveReport::to_string).collect();
            println!("{}", blocks.join("\n\n"));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&reports).context("failed to serialize report")?;
            println!("{json}");
        }
    }

    if cli.no_output {
        return Ok(());
    }
    // The last search run wins, so `both` writes the A* path.
    match reports.iter().rev().find_map(|r| r.path.as_deref()) {
        Some(path) => {
            fs::write(&cli.output, render(&maze.grid, path))
                .with_context(|| format!("failed to write {}", cli.output.display()))?;
            info!("annotated maze written to {}", cli.output.display());
        }
        None => warn!("no path found; {} not written", cli.output.display()),
    }
    Ok(())
}
