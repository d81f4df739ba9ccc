//! **maze-core**: core types for grid maze solving.
//!
//! This crate provides the foundational types shared by the search engine
//! and the solver binary: coordinates, cell kinds, an immutable grid and the
//! maze text format.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod text;

pub use cell::CellKind;
pub use error::{GridError, ParseError};
pub use geom::{Point, Range};
pub use grid::Grid;
pub use text::{Maze, parse_grid, parse_maze, render};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        let p = Point::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"row":3,"col":7}"#);
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn maze_round_trip() {
        let maze = parse_maze("# - #\n# - #\n").unwrap();
        let json = serde_json::to_string(&maze).unwrap();
        let back: Maze = serde_json::from_str(&json).unwrap();
        assert_eq!(maze, back);
    }
}
