use maze_core::Point;

/// Heuristic weight used by the legacy solver. It overestimates the unit
/// step cost, so A* guided by it may return longer than shortest paths.
pub const REFERENCE_WEIGHT: f64 = 1.2;

/// Largest Manhattan weight that never overestimates on a unit-cost grid.
pub const ADMISSIBLE_WEIGHT: f64 = 1.0;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Estimate of the remaining cost from one cell to another.
pub trait Heuristic {
    fn estimate(&self, from: Point, to: Point) -> f64;
}

impl<F: Fn(Point, Point) -> f64> Heuristic for F {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        self(from, to)
    }
}

/// Manhattan distance scaled by a constant weight.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedManhattan {
    pub weight: f64,
}

impl WeightedManhattan {
    pub const fn new(weight: f64) -> Self {
        Self { weight }
    }

    /// Whether A* guided by this heuristic is guaranteed to find shortest
    /// paths.
    #[inline]
    pub fn is_admissible(&self) -> bool {
        self.weight <= ADMISSIBLE_WEIGHT
    }
}

impl Default for WeightedManhattan {
    fn default() -> Self {
        Self::new(ADMISSIBLE_WEIGHT)
    }
}

impl Heuristic for WeightedManhattan {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        self.weight * f64::from(manhattan(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(1, 7);
        let b = Point::new(4, 3);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn weighted_estimate_scales_distance() {
        let a = Point::new(0, 0);
        let b = Point::new(2, 3);
        assert_eq!(WeightedManhattan::default().estimate(a, b), 5.0);
        let legacy = WeightedManhattan::new(REFERENCE_WEIGHT);
        assert!((legacy.estimate(a, b) - 6.0).abs() < 1e-9);
        assert!(!legacy.is_admissible());
        assert!(WeightedManhattan::new(0.5).is_admissible());
    }

    #[test]
    fn closures_are_heuristics() {
        let zero = |_: Point, _: Point| 0.0;
        assert_eq!(zero.estimate(Point::new(0, 0), Point::new(9, 9)), 0.0);
    }
}
