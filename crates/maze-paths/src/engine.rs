use std::fmt;
use std::str::FromStr;

use log::debug;
use maze_core::Point;

use crate::distance::{ADMISSIBLE_WEIGHT, WeightedManhattan};
use crate::error::{Endpoint, Result, SearchError};
use crate::traits::Pather;
use crate::{astar, depth_first};

// ---------------------------------------------------------------------------
// SearchResult
// ---------------------------------------------------------------------------

/// Outcome of one search: the path found (if any) and how many cells were
/// expanded to get there.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Start → goal inclusive, or `None` when the goal is unreachable.
    pub path: Option<Vec<Point>>,
    /// Cells popped and expanded, each counted once.
    pub nodes_expanded: usize,
}

impl SearchResult {
    pub(crate) fn found(path: Vec<Point>, nodes_expanded: usize) -> Self {
        Self {
            path: Some(path),
            nodes_expanded,
        }
    }

    pub(crate) fn exhausted(nodes_expanded: usize) -> Self {
        Self {
            path: None,
            nodes_expanded,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// The path as a slice, if one was found.
    #[inline]
    pub fn path(&self) -> Option<&[Point]> {
        self.path.as_deref()
    }

    /// Number of cells on the path, endpoints included. Zero without a path.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Which traversal a [`SearchEngine`] runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Iterative depth-first search. Finds a path, not necessarily a short
    /// one.
    DepthFirst,
    /// A* guided by a weighted Manhattan heuristic.
    #[default]
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::DepthFirst, Strategy::AStar];

    /// Short lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::DepthFirst => "dfs",
            Strategy::AStar => "astar",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "astar" | "a*" => Ok(Strategy::AStar),
            other => Err(format!("unknown search strategy '{other}'")),
        }
    }
}

/// Settings for a [`SearchEngine`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub strategy: Strategy,
    /// Manhattan weight used by A*. Values above
    /// [`ADMISSIBLE_WEIGHT`] trade optimality for fewer expansions.
    pub heuristic_weight: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            heuristic_weight: ADMISSIBLE_WEIGHT,
        }
    }
}

impl SearchConfig {
    /// Set the strategy (builder).
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the A* heuristic weight (builder).
    pub const fn with_heuristic_weight(mut self, weight: f64) -> Self {
        self.heuristic_weight = weight;
        self
    }
}

// ---------------------------------------------------------------------------
// SearchEngine
// ---------------------------------------------------------------------------

/// Runs searches over a borrowed maze.
///
/// The engine keeps no state between calls: every [`search`](Self::search)
/// builds and drops its own frontier, visited set and parent map.
#[derive(Debug)]
pub struct SearchEngine<'a, P: ?Sized> {
    pather: &'a P,
    config: SearchConfig,
}

impl<'a, P: Pather + ?Sized> SearchEngine<'a, P> {
    /// Create an engine with the default configuration (admissible A*).
    pub fn new(pather: &'a P) -> Self {
        Self::with_config(pather, SearchConfig::default())
    }

    pub fn with_config(pather: &'a P, config: SearchConfig) -> Self {
        Self { pather, config }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Search from `start` to `goal` with the configured strategy.
    pub fn search(&self, start: Point, goal: Point) -> Result<SearchResult> {
        let SearchConfig {
            strategy,
            heuristic_weight,
        } = self.config;
        debug!("{strategy} search {start} -> {goal}");
        match strategy {
            Strategy::DepthFirst => depth_first(self.pather, start, goal),
            Strategy::AStar => {
                if !heuristic_weight.is_finite() || heuristic_weight < 0.0 {
                    return Err(SearchError::InvalidWeight(heuristic_weight));
                }
                let heuristic = WeightedManhattan::new(heuristic_weight);
                if !heuristic.is_admissible() {
                    debug!("heuristic weight {heuristic_weight} is inadmissible; path may not be shortest");
                }
                astar(self.pather, &heuristic, start, goal)
            }
        }
    }
}

/// Check that both endpoints are cells a search may stand on.
pub(crate) fn validate_endpoints<P: Pather + ?Sized>(pather: &P, start: Point, goal: Point) -> Result<()> {
    for (endpoint, point) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
        if !pather.passable(point) {
            return Err(SearchError::NotOpen { endpoint, point });
        }
    }
    Ok(())
}
