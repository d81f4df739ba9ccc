use std::fmt;

use maze_core::Point;
use thiserror::Error;

/// Convenient result alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Which end of a search a point was supplied as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::Goal => f.write_str("goal"),
        }
    }
}

/// Errors raised by the search engine.
///
/// An unreachable goal is not an error: it is reported as a
/// [`SearchResult`](crate::SearchResult) without a path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The start or goal is a wall or lies outside the grid.
    #[error("{endpoint} {point} is not an open cell inside the grid")]
    NotOpen { endpoint: Endpoint, point: Point },

    /// The heuristic weight is negative, infinite or NaN.
    #[error("heuristic weight must be finite and non-negative, got {0}")]
    InvalidWeight(f64),

    /// Walking parent links back from the goal did not reach the start.
    #[error("parent chain from {goal} breaks at {at} before reaching {start}")]
    BrokenParentChain { start: Point, goal: Point, at: Point },
}
