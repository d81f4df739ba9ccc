//! Search algorithms for grid mazes.
//!
//! This crate finds a path between two open cells of a 4-connected maze
//! with unit step cost:
//!
//! - **Depth-first** traversal with an explicit stack ([`depth_first`])
//! - **A\*** guided by a weighted Manhattan heuristic ([`astar`])
//! - **BFS** shortest distance, used as an optimality check ([`bfs_distance`])
//!
//! [`SearchEngine`] picks one of the two searches from a [`SearchConfig`].
//! Every call owns its working state (frontier, visited set, parent map), so
//! one grid may serve any number of searches.
//!
//! Neighbors are always considered in the order up, right, down, left,
//! which makes every search deterministic.

mod astar;
mod bfs;
mod dfs;
mod distance;
mod engine;
mod error;
mod frontier;
mod path;
mod traits;

pub use astar::astar;
pub use bfs::bfs_distance;
pub use dfs::depth_first;
pub use distance::{ADMISSIBLE_WEIGHT, Heuristic, REFERENCE_WEIGHT, WeightedManhattan, manhattan};
pub use engine::{SearchConfig, SearchEngine, SearchResult, Strategy};
pub use error::{Endpoint, Result, SearchError};
pub use frontier::Frontier;
pub use path::reconstruct;
pub use traits::Pather;
