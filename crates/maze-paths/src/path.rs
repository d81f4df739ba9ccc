//! Path reconstruction from parent links.

use std::collections::HashMap;

use maze_core::Point;

use crate::error::{Result, SearchError};

/// Walk `parents` back from `goal` to `start` and return the path in
/// start → goal order, both endpoints included.
///
/// Fails if a link is missing or the chain loops.
pub fn reconstruct(parents: &HashMap<Point, Point>, start: Point, goal: Point) -> Result<Vec<Point>> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        let broken = SearchError::BrokenParentChain {
            start,
            goal,
            at: current,
        };
        let Some(&parent) = parents.get(&current) else {
            return Err(broken);
        };
        // Every cell but the start has its own link, so a longer walk loops.
        if path.len() > parents.len() {
            return Err(broken);
        }
        path.push(parent);
        current = parent;
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Point {
        Point::new(row, col)
    }

    #[test]
    fn walks_back_and_reverses() {
        let parents = HashMap::from([
            (p(0, 1), p(0, 0)),
            (p(1, 1), p(0, 1)),
            (p(1, 2), p(1, 1)),
            // Unrelated branch.
            (p(1, 0), p(0, 0)),
        ]);
        let path = reconstruct(&parents, p(0, 0), p(1, 2)).unwrap();
        assert_eq!(path, vec![p(0, 0), p(0, 1), p(1, 1), p(1, 2)]);
    }

    #[test]
    fn start_equal_to_goal_is_single_cell() {
        let path = reconstruct(&HashMap::new(), p(3, 3), p(3, 3)).unwrap();
        assert_eq!(path, vec![p(3, 3)]);
    }

    #[test]
    fn missing_link_is_reported() {
        let parents = HashMap::from([(p(0, 2), p(0, 1))]);
        assert_eq!(
            reconstruct(&parents, p(0, 0), p(0, 2)),
            Err(SearchError::BrokenParentChain {
                start: p(0, 0),
                goal: p(0, 2),
                at: p(0, 1),
            })
        );
    }

    #[test]
    fn cycle_is_reported() {
        let parents = HashMap::from([(p(0, 1), p(0, 2)), (p(0, 2), p(0, 1))]);
        assert!(matches!(
            reconstruct(&parents, p(0, 0), p(0, 2)),
            Err(SearchError::BrokenParentChain { .. })
        ));
    }
}
