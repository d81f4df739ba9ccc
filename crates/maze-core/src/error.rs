use thiserror::Error;

/// Errors raised while building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A row did not have the same number of cells as the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors raised while reading a maze from its text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input held no cells at all.
    #[error("maze is empty")]
    Empty,

    /// The first row has no open cell to start from.
    #[error("no open cell in the first row to start from")]
    MissingStart,

    /// No row after the first has exactly one open cell.
    #[error("no goal row: expected a later row with exactly one open cell")]
    MissingGoal,

    /// The cells did not form a rectangle.
    #[error(transparent)]
    Grid(#[from] GridError),
}
