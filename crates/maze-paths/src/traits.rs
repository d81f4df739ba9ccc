use maze_core::{Grid, Point};

/// Minimal pathfinding interface over a bounded 4-connected maze.
pub trait Pather {
    /// Whether `p` is an in-bounds cell a search may stand on.
    fn passable(&self, p: Point) -> bool;

    /// Append passable neighbors of `p` into `buf`, in the fixed order up,
    /// right, down, left. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.passable(n)));
    }
}

impl Pather for Grid {
    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.is_open(p)
    }
}
