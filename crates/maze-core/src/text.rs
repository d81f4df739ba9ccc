//! The maze text format.
//!
//! A maze file holds one grid row per line. `#` is a wall and `-` is an open
//! cell; every other character (the spaces between cells, `\r`) is ignored
//! and blank lines are skipped:
//!
//! ```text
//! # - # # #
//! # - - - #
//! # # # - #
//! ```
//!
//! The start is the first open cell of the first row. The goal is the only
//! open cell of the last row (after the first) that has exactly one.

use std::collections::HashSet;
use std::str::FromStr;

use crate::cell::CellKind;
use crate::error::ParseError;
use crate::geom::Point;
use crate::grid::Grid;

/// Marker drawn over path cells by [`render`].
pub const PATH_CHAR: char = 'X';

/// A parsed maze: the grid plus its entry and exit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    pub grid: Grid,
    pub start: Point,
    pub goal: Point,
}

impl FromStr for Maze {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_maze(s)
    }
}

fn parse_rows(s: &str) -> Vec<Vec<CellKind>> {
    s.lines()
        .map(|line| line.chars().filter_map(CellKind::from_char).collect::<Vec<_>>())
        .filter(|row| !row.is_empty())
        .collect()
}

/// Parse only the cells of a maze, without locating start and goal.
pub fn parse_grid(s: &str) -> Result<Grid, ParseError> {
    let rows = parse_rows(s);
    if rows.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(Grid::from_rows(&rows)?)
}

/// Parse a maze and locate its start and goal cells.
pub fn parse_maze(s: &str) -> Result<Maze, ParseError> {
    let grid = parse_grid(s)?;

    let start = (0..grid.cols())
        .map(|col| Point::new(0, col))
        .find(|&p| grid.is_open(p))
        .ok_or(ParseError::MissingStart)?;

    let goal = (1..grid.rows())
        .rev()
        .find_map(|row| {
            let mut open = (0..grid.cols())
                .map(|col| Point::new(row, col))
                .filter(|&p| grid.is_open(p));
            match (open.next(), open.next()) {
                (Some(p), None) => Some(p),
                _ => None,
            }
        })
        .ok_or(ParseError::MissingGoal)?;

    Ok(Maze { grid, start, goal })
}

/// Write `grid` back in maze text form with every cell of `path` drawn as
/// [`PATH_CHAR`]. Each cell is preceded by a single space.
pub fn render(grid: &Grid, path: &[Point]) -> String {
    let on_path: HashSet<Point> = path.iter().copied().collect();
    let mut out = String::with_capacity(grid.bounds().len() * 2 + grid.rows() as usize);
    for (p, kind) in grid.iter() {
        let ch = if on_path.contains(&p) {
            PATH_CHAR
        } else {
            kind.as_char()
        };
        out.push(' ');
        out.push(ch);
        if p.col == grid.cols() - 1 {
            out.push('\n');
        }
    }
    out
}
