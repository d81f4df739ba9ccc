use std::collections::{HashMap, HashSet};

use log::{debug, trace};
use maze_core::Point;

use crate::distance::Heuristic;
use crate::engine::{SearchResult, validate_endpoints};
use crate::error::Result;
use crate::frontier::Frontier;
use crate::path::reconstruct;
use crate::traits::Pather;

/// Cost of one step between adjacent cells.
const STEP_COST: f64 = 1.0;

/// Stored cost of `p`, infinite when it has none yet.
#[inline]
fn cost(map: &HashMap<Point, f64>, p: Point) -> f64 {
    map.get(&p).copied().unwrap_or(f64::INFINITY)
}

/// A* search from `start` to `goal` on a unit-cost 4-connected maze.
///
/// Frontier priorities are `g + h`. A cell is expanded at most once; if a
/// cheaper route to a cell still in the frontier turns up, its priority,
/// costs and parent are lowered to match. With an admissible `heuristic` the
/// path returned is a shortest one.
pub fn astar<P, H>(pather: &P, heuristic: &H, start: Point, goal: Point) -> Result<SearchResult>
where
    P: Pather + ?Sized,
    H: Heuristic + ?Sized,
{
    validate_endpoints(pather, start, goal)?;

    let mut frontier = Frontier::new();
    let mut visited: HashSet<Point> = HashSet::new();
    let mut parents: HashMap<Point, Point> = HashMap::new();
    let mut g_cost: HashMap<Point, f64> = HashMap::new();
    let mut f_cost: HashMap<Point, f64> = HashMap::new();

    let h = heuristic.estimate(start, goal);
    g_cost.insert(start, 0.0);
    f_cost.insert(start, h);
    frontier.insert(start, h);

    let mut nodes_expanded = 0;
    let mut nbuf = Vec::with_capacity(4);

    while !frontier.is_empty() {
        let (current, f) = frontier.pop_min();
        debug_assert_eq!(f_cost.get(&current).copied(), Some(f));
        nodes_expanded += 1;
        trace!("astar expand {current} f={f}");

        if current == goal {
            let path = reconstruct(&parents, start, goal)?;
            debug!("astar found {} cell path after {nodes_expanded} expansions", path.len());
            return Ok(SearchResult::found(path, nodes_expanded));
        }

        visited.insert(current);
        let tentative_g = cost(&g_cost, current) + STEP_COST;

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);
        for &n in nbuf.iter() {
            if visited.contains(&n) {
                continue;
            }
            let candidate = tentative_g + heuristic.estimate(n, goal);

            if !frontier.contains(n) {
                frontier.insert(n, candidate);
            } else {
                frontier.update_priority(n, candidate);
                if tentative_g >= cost(&g_cost, n) {
                    continue;
                }
            }
            g_cost.insert(n, tentative_g);
            f_cost.insert(n, candidate);
            parents.insert(n, current);
        }
    }

    debug!("astar exhausted after {nodes_expanded} expansions");
    Ok(SearchResult::exhausted(nodes_expanded))
}
