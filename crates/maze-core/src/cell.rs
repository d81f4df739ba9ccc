//! The [`CellKind`] type: what a single maze cell is made of.

/// A maze cell: either a wall or an open path cell.
///
/// Only [`Open`](CellKind::Open) cells take part in a search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Wall,
    Open,
}

impl CellKind {
    /// Character used for walls in the maze text format.
    pub const WALL_CHAR: char = '#';
    /// Character used for open cells in the maze text format.
    pub const OPEN_CHAR: char = '-';

    /// Whether the cell can be walked on.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, CellKind::Open)
    }

    /// The character this cell is written as.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            CellKind::Wall => Self::WALL_CHAR,
            CellKind::Open => Self::OPEN_CHAR,
        }
    }

    /// Parse a maze character. Returns `None` for anything that is not a
    /// cell (separators, line endings, ...).
    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            Self::WALL_CHAR => Some(CellKind::Wall),
            Self::OPEN_CHAR => Some(CellKind::Open),
            _ => None,
        }
    }
}
