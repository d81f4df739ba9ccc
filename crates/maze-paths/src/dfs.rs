use std::collections::{HashMap, HashSet};

use log::{debug, trace};
use maze_core::Point;

use crate::engine::{SearchResult, validate_endpoints};
use crate::error::Result;
use crate::path::reconstruct;
use crate::traits::Pather;

/// Iterative depth-first search from `start` to `goal`.
///
/// Neighbors are pushed in the order up, right, down, left, so the last one
/// pushed (left) is explored first. A cell may sit on the stack more than
/// once; only its first pop expands it. The path returned is the first one
/// found, not necessarily the shortest.
pub fn depth_first<P: Pather + ?Sized>(pather: &P, start: Point, goal: Point) -> Result<SearchResult> {
    validate_endpoints(pather, start, goal)?;

    let mut stack = vec![start];
    let mut visited: HashSet<Point> = HashSet::new();
    let mut parents: HashMap<Point, Point> = HashMap::new();
    let mut nodes_expanded = 0;
    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = stack.pop() {
        // Stale duplicate of an already expanded cell.
        if !visited.insert(current) {
            continue;
        }
        nodes_expanded += 1;
        trace!("dfs expand {current}");

        if current == goal {
            let path = reconstruct(&parents, start, goal)?;
            debug!("dfs found {} cell path after {nodes_expanded} expansions", path.len());
            return Ok(SearchResult::found(path, nodes_expanded));
        }

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);
        for &n in nbuf.iter() {
            if visited.contains(&n) {
                continue;
            }
            parents.insert(n, current);
            stack.push(n);
        }
    }

    debug!("dfs exhausted after {nodes_expanded} expansions");
    Ok(SearchResult::exhausted(nodes_expanded))
}
