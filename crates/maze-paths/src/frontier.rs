//! Indexed min-priority queue of cells awaiting expansion.

use std::collections::HashMap;

use maze_core::Point;

#[derive(Clone, Copy, Debug)]
struct Entry {
    point: Point,
    priority: f64,
    /// Insertion rank, used to break priority ties first-in-first-out.
    seq: u64,
}

impl Entry {
    #[inline]
    fn precedes(&self, other: &Entry) -> bool {
        self.priority
            .total_cmp(&other.priority)
            .then(self.seq.cmp(&other.seq))
            .is_lt()
    }
}

/// Binary min-heap of `(Point, priority)` entries with a point → slot index.
///
/// Holds at most one entry per point. [`contains`](Frontier::contains) is
/// O(1); [`insert`](Frontier::insert),
/// [`update_priority`](Frontier::update_priority) and
/// [`pop_min`](Frontier::pop_min) are O(log n). Entries with equal
/// priorities pop in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    heap: Vec<Entry>,
    slots: HashMap<Point, usize>,
    next_seq: u64,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.slots.contains_key(&p)
    }

    /// Add `p` with the given priority.
    ///
    /// # Panics
    ///
    /// If `p` is already in the frontier. Lower an existing entry with
    /// [`update_priority`](Frontier::update_priority) instead.
    #[track_caller]
    pub fn insert(&mut self, p: Point, priority: f64) {
        assert!(!self.contains(p), "point {p} is already in the frontier");
        debug_assert!(!priority.is_nan(), "NaN priority for {p}");
        let i = self.heap.len();
        self.heap.push(Entry {
            point: p,
            priority,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        self.slots.insert(p, i);
        self.sift_up(i);
    }

    /// Lower the priority stored for `p` to `priority` if that is strictly
    /// better. Returns whether the entry changed. A worse or equal priority
    /// leaves the entry, including its tie-break rank, untouched.
    ///
    /// # Panics
    ///
    /// If `p` is not in the frontier.
    #[track_caller]
    pub fn update_priority(&mut self, p: Point, priority: f64) -> bool {
        let Some(&i) = self.slots.get(&p) else {
            panic!("point {p} is not in the frontier");
        };
        if priority.total_cmp(&self.heap[i].priority).is_ge() {
            return false;
        }
        self.heap[i].priority = priority;
        self.sift_up(i);
        true
    }

    /// Remove and return the entry with the smallest priority.
    ///
    /// # Panics
    ///
    /// If the frontier is empty.
    #[track_caller]
    pub fn pop_min(&mut self) -> (Point, f64) {
        assert!(!self.is_empty(), "pop_min on an empty frontier");
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let Some(entry) = self.heap.pop() else {
            unreachable!("heap checked non-empty above");
        };
        self.slots.remove(&entry.point);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        (entry.point, entry.priority)
    }

    // -----------------------------------------------------------------------
    // Heap maintenance
    // -----------------------------------------------------------------------

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots.insert(self.heap[a].point, a);
        self.slots.insert(self.heap[b].point, b);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.heap[i].precedes(&self.heap[parent]) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut best = i;
            if left < len && self.heap[left].precedes(&self.heap[best]) {
                best = left;
            }
            if right < len && self.heap[right].precedes(&self.heap[best]) {
                best = right;
            }
            if best == i {
                break;
            }
            self.swap(i, best);
            i = best;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(row: i32, col: i32) -> Point {
        Point::new(row, col)
    }

    #[test]
    fn pops_in_priority_order() {
        let mut f = Frontier::new();
        f.insert(p(0, 0), 5.0);
        f.insert(p(0, 1), 1.0);
        f.insert(p(0, 2), 3.0);
        assert_eq!(f.len(), 3);
        assert_eq!(f.pop_min(), (p(0, 1), 1.0));
        assert_eq!(f.pop_min(), (p(0, 2), 3.0));
        assert_eq!(f.pop_min(), (p(0, 0), 5.0));
        assert!(f.is_empty());
        assert!(!f.contains(p(0, 0)));
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut f = Frontier::new();
        for col in [4, 2, 7, 1, 9] {
            f.insert(p(0, col), 2.5);
        }
        let mut order = Vec::new();
        while !f.is_empty() {
            order.push(f.pop_min().0.col);
        }
        assert_eq!(order, vec![4, 2, 7, 1, 9]);
    }

    #[test]
    fn update_only_lowers() {
        let mut f = Frontier::new();
        f.insert(p(1, 1), 4.0);
        f.insert(p(2, 2), 3.0);
        assert!(!f.update_priority(p(1, 1), 6.0));
        assert!(!f.update_priority(p(1, 1), 4.0));
        assert_eq!(f.pop_min(), (p(2, 2), 3.0));
        f.insert(p(2, 2), 3.0);
        assert!(f.update_priority(p(1, 1), 2.0));
        assert_eq!(f.pop_min(), (p(1, 1), 2.0));
        assert_eq!(f.pop_min(), (p(2, 2), 3.0));
    }

    #[test]
    fn lowered_entry_keeps_its_insertion_rank() {
        let mut f = Frontier::new();
        f.insert(p(0, 0), 5.0);
        f.insert(p(0, 1), 3.0);
        // (0, 0) was inserted first, so once it ties with (0, 1) it wins.
        assert!(f.update_priority(p(0, 0), 3.0));
        assert_eq!(f.pop_min().0, p(0, 0));
        assert_eq!(f.pop_min().0, p(0, 1));
    }

    #[test]
    fn popped_point_can_be_inserted_again() {
        let mut f = Frontier::new();
        f.insert(p(0, 0), 1.0);
        assert_eq!(f.pop_min(), (p(0, 0), 1.0));
        assert!(f.is_empty());
        assert!(!f.contains(p(0, 0)));
        f.insert(p(0, 0), 2.0);
        assert_eq!(f.len(), 1);
    }

    #[test]
    #[should_panic(expected = "already in the frontier")]
    fn duplicate_insert_panics() {
        let mut f = Frontier::new();
        f.insert(p(0, 0), 1.0);
        f.insert(p(0, 0), 0.5);
    }

    #[test]
    #[should_panic(expected = "empty frontier")]
    fn pop_on_empty_panics() {
        Frontier::new().pop_min();
    }

    #[test]
    #[should_panic(expected = "not in the frontier")]
    fn update_of_missing_point_panics() {
        Frontier::new().update_priority(p(0, 0), 1.0);
    }

    /// Reference model: a flat list scanned for the lowest priority, first
    /// inserted wins on ties.
    fn model_pop(model: &mut Vec<(Point, f64)>) -> (Point, f64) {
        let mut best = 0;
        for (i, e) in model.iter().enumerate() {
            if e.1 < model[best].1 {
                best = i;
            }
        }
        model.remove(best)
    }

    #[derive(Debug, Clone)]
    enum Op {
        Push(i32, u8),
        Lower(usize, u8),
        Pop,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0i32..32, 0u8..20).prop_map(|(c, pr)| Op::Push(c, pr)),
            (0usize..32, 0u8..20).prop_map(|(i, pr)| Op::Lower(i, pr)),
            Just(Op::Pop),
        ]
    }

    proptest! {
        #[test]
        fn matches_linear_scan_model(ops in prop::collection::vec(op(), 1..200)) {
            let mut f = Frontier::new();
            let mut model: Vec<(Point, f64)> = Vec::new();
            for op in ops {
                match op {
                    Op::Push(col, pr) => {
                        let pt = p(0, col);
                        if !f.contains(pt) {
                            f.insert(pt, f64::from(pr));
                            model.push((pt, f64::from(pr)));
                        }
                    }
                    Op::Lower(i, pr) => {
                        if model.is_empty() {
                            continue;
                        }
                        let slot = i % model.len();
                        let (pt, old) = model[slot];
                        let changed = f.update_priority(pt, f64::from(pr));
                        prop_assert_eq!(changed, f64::from(pr) < old);
                        if changed {
                            model[slot].1 = f64::from(pr);
                        }
                    }
                    Op::Pop => {
                        if model.is_empty() {
                            prop_assert!(f.is_empty());
                            continue;
                        }
                        prop_assert_eq!(f.pop_min(), model_pop(&mut model));
                    }
                }
                prop_assert_eq!(f.len(), model.len());
            }
        }
    }
}
