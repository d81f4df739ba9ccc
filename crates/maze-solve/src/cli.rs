use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use maze_paths::{ADMISSIBLE_WEIGHT, Strategy};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Solve a text maze with depth-first search or A*")]
pub struct Cli {
    /// Maze file: `#` for walls, `-` for open cells, one row per line.
    pub maze: PathBuf,

    /// Search algorithm to run.
    #[arg(short, long, value_enum, default_value_t = Algorithm::Astar)]
    pub algorithm: Algorithm,

    /// Manhattan heuristic weight for A*. Values above 1 may give longer paths.
    #[arg(short, long, default_value_t = ADMISSIBLE_WEIGHT)]
    pub weight: f64,

    /// Where to write the maze with the path drawn in.
    #[arg(short, long, default_value = "maze_path.txt")]
    pub output: PathBuf,

    /// Do not write the annotated maze.
    #[arg(long)]
    pub no_output: bool,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Check every path against the BFS shortest distance.
    #[arg(long)]
    pub verify: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Dfs,
    Astar,
    /// Run DFS, then A*.
    Both,
}

impl Algorithm {
    pub fn strategies(self) -> &'static [Strategy] {
        match self {
            Algorithm::Dfs => &[Strategy::DepthFirst],
            Algorithm::Astar => &[Strategy::AStar],
            Algorithm::Both => &Strategy::ALL,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["maze-solve", "maze.txt"]).unwrap();
        assert_eq!(cli.algorithm, Algorithm::Astar);
        assert_eq!(cli.weight, 1.0);
        assert_eq!(cli.output, PathBuf::from("maze_path.txt"));
        assert!(!cli.no_output);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.verify);
    }

    #[test]
    fn both_runs_dfs_then_astar() {
        let cli = Cli::try_parse_from(["maze-solve", "m.txt", "-a", "both", "--weight", "1.2"]).unwrap();
        assert_eq!(cli.algorithm.strategies(), &[Strategy::DepthFirst, Strategy::AStar]);
        assert_eq!(cli.weight, 1.2);
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        assert!(Cli::try_parse_from(["maze-solve", "m.txt", "--algorithm", "bfs"]).is_err());
    }
}
