//! The [`Grid`] type: a bounded 2D grid of [`CellKind`]s.
//!
//! A `Grid` is built once and then only read. Searches borrow it, so a single
//! grid can back any number of independent searches, including ones running
//! on other threads.

use std::ops::Index;

use crate::cell::CellKind;
use crate::error::GridError;
use crate::geom::{Point, Range};

/// A row-major grid of cell kinds anchored at the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<CellKind>,
    bounds: Range,
}

impl Grid {
    /// Create a grid of the given dimensions where every cell is `kind`.
    pub fn filled(rows: i32, cols: i32, kind: CellKind) -> Self {
        let bounds = Range::with_size(rows, cols);
        Self {
            cells: vec![kind; bounds.len()],
            bounds,
        }
    }

    /// Create a grid by evaluating `f` at every coordinate, row by row.
    pub fn from_fn(rows: i32, cols: i32, mut f: impl FnMut(Point) -> CellKind) -> Self {
        let bounds = Range::with_size(rows, cols);
        Self {
            cells: bounds.iter().map(&mut f).collect(),
            bounds,
        }
    }

    /// Create a grid from rows of cells. Every row must have the same length.
    pub fn from_rows<R: AsRef<[CellKind]>>(rows: &[R]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::RaggedRow {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        let bounds = Range::with_size(rows.len() as i32, cols as i32);
        Ok(Self { cells, bounds })
    }

    /// Return a copy of the grid with the cell at `p` replaced (builder).
    /// No-op if `p` is outside bounds.
    pub fn with_cell(mut self, p: Point, kind: CellKind) -> Self {
        if let Some(i) = self.offset(p) {
            self.cells[i] = kind;
        }
        self
    }

    /// The bounding range of this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, p: Point) -> Option<CellKind> {
        self.offset(p).map(|i| self.cells[i])
    }

    /// Whether `p` is an in-bounds open cell.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.get(p).is_some_and(CellKind::is_open)
    }

    /// Number of open cells in the grid.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_open()).count()
    }

    /// Row-major iterator over `(Point, CellKind)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellKind)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    #[inline]
    fn offset(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols() as usize + p.col as usize)
    }
}

impl Index<Point> for Grid {
    type Output = CellKind;

    /// Panics if `p` is outside the grid. Use [`Grid::get`] for a checked
    /// lookup.
    #[track_caller]
    fn index(&self, p: Point) -> &CellKind {
        match self.offset(p) {
            Some(i) => &self.cells[i],
            None => panic!("point {p} is outside grid bounds {}", self.bounds),
        }
    }
}
