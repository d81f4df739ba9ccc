//! Search statistics and their text / JSON forms.

use std::fmt;
use std::time::Duration;

use maze_core::Point;
use maze_paths::{SearchResult, Strategy};
use serde::Serialize;

/// Everything reported about one solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveReport {
    /// Short algorithm name (`dfs` or `astar`).
    pub algorithm: &'static str,
    pub start: Point,
    pub goal: Point,
    pub path: Option<Vec<Point>>,
    /// Cells on the path, endpoints included.
    pub path_len: usize,
    pub nodes_expanded: usize,
    pub elapsed_secs: f64,
    /// Shortest possible path length in steps, when verification ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortest_steps: Option<usize>,
}

impl SolveReport {
    pub fn new(strategy: Strategy, start: Point, goal: Point, result: SearchResult, elapsed: Duration) -> Self {
        Self {
            algorithm: strategy.name(),
            start,
            goal,
            path_len: result.path_len(),
            nodes_expanded: result.nodes_expanded,
            path: result.path,
            elapsed_secs: elapsed.as_secs_f64(),
            shortest_steps: None,
        }
    }

    /// Whether the path is as short as possible. `None` without a path or
    /// without verification.
    pub fn is_optimal(&self) -> Option<bool> {
        let steps = self.path_len.checked_sub(1)?;
        self.shortest_steps.map(|shortest| steps == shortest)
    }
}

/// Join `path` as `(r, c) -> (r, c) -> ...`.
pub fn format_path(path: &[Point]) -> String {
    path.iter()
        .map(Point::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm:                 {}", self.algorithm)?;
        match &self.path {
            Some(path) => {
                writeln!(f, "Path taken:")?;
                writeln!(f, "{}", format_path(path))?;
                writeln!(f, "Cells in path:             {}", self.path_len)?;
            }
            None => writeln!(f, "No path from {} to {}", self.start, self.goal)?,
        }
        writeln!(f, "Nodes explored:            {}", self.nodes_expanded)?;
        if let Some(shortest) = self.shortest_steps {
            writeln!(f, "Shortest possible steps:   {shortest}")?;
        }
        write!(f, "Time taken:                {:.5} seconds", self.elapsed_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(path: Option<Vec<Point>>) -> SolveReport {
        let result = SearchResult {
            path,
            nodes_expanded: 7,
        };
        SolveReport::new(
            Strategy::AStar,
            Point::new(0, 1),
            Point::new(1, 1),
            result,
            Duration::from_micros(1500),
        )
    }

    #[test]
    fn path_is_joined_with_arrows() {
        let path = [Point::new(0, 1), Point::new(1, 1), Point::new(1, 2)];
        assert_eq!(format_path(&path), "(0, 1) -> (1, 1) -> (1, 2)");
        assert_eq!(format_path(&[]), "");
    }

    #[test]
    fn text_report_lists_statistics() {
        let text = report(Some(vec![Point::new(0, 1), Point::new(1, 1)])).to_string();
        assert!(text.contains("Algorithm:                 astar"));
        assert!(text.contains("(0, 1) -> (1, 1)"));
        assert!(text.contains("Cells in path:             2"));
        assert!(text.contains("Nodes explored:            7"));
        assert!(text.ends_with("0.00150 seconds"));
    }

    #[test]
    fn text_report_without_path() {
        let text = report(None).to_string();
        assert!(text.contains("No path from (0, 1) to (1, 1)"));
        assert!(!text.contains("Cells in path"));
    }

    #[test]
    fn optimality_needs_path_and_oracle() {
        let mut r = report(Some(vec![Point::new(0, 1), Point::new(1, 1)]));
        assert_eq!(r.is_optimal(), None);
        r.shortest_steps = Some(1);
        assert_eq!(r.is_optimal(), Some(true));
        r.shortest_steps = Some(0);
        assert_eq!(r.is_optimal(), Some(false));
        assert_eq!(report(None).is_optimal(), None);
    }

    #[test]
    fn json_skips_missing_verification() {
        let value = serde_json::to_value(report(None)).unwrap();
        assert_eq!(value["algorithm"], "astar");
        assert_eq!(value["path"], serde_json::Value::Null);
        assert_eq!(value["path_len"], 0);
        assert!(value.get("shortest_steps").is_none());
        assert_eq!(value["start"]["row"], 0);
    }
}
