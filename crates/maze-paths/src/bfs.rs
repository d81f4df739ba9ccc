use std::collections::{HashMap, VecDeque};

use maze_core::Point;

use crate::traits::Pather;

/// Length in steps of the shortest path from `start` to `goal`, found by
/// breadth-first search.
///
/// Returns `None` if either endpoint is not passable or the goal cannot be
/// reached. Used to check that a search returned an optimal path.
pub fn bfs_distance<P: Pather + ?Sized>(pather: &P, start: Point, goal: Point) -> Option<usize> {
    if !pather.passable(start) || !pather.passable(goal) {
        return None;
    }

    let mut dist: HashMap<Point, usize> = HashMap::new();
    let mut queue: VecDeque<Point> = VecDeque::new();
    dist.insert(start, 0);
    queue.push_back(start);

    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = queue.pop_front() {
        let d = dist[&current];
        if current == goal {
            return Some(d);
        }

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);
        for &n in nbuf.iter() {
            if dist.contains_key(&n) {
                continue;
            }
            dist.insert(n, d + 1);
            queue.push_back(n);
        }
    }

    None
}
