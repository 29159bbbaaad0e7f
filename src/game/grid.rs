use serde::Serialize;
use std::fmt;

/// A cell coordinate, 0-indexed from the top-left corner of the grid.
///
/// Coordinates are signed so that a move that ran into a wall can still be
/// recorded (e.g. `x == -1`).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub(crate) struct Position {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Position {
    pub(crate) const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    // Zero-padded "[xx yy]", as shown by the console view
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:02} {:02}]", self.x, self.y)
    }
}

/// The playing field: its dimensions and what happens at its edges
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub(crate) struct Grid {
    pub(crate) cols: u16,
    pub(crate) rows: u16,

    /// `true` if the edges are walls, `false` if the grid wraps around
    pub(crate) boxed: bool,
}

impl Grid {
    pub(crate) fn contains(self, pos: Position) -> bool {
        (0..i32::from(self.cols)).contains(&pos.x) && (0..i32::from(self.rows)).contains(&pos.y)
    }

    /// Map `pos` back onto the grid toroidally
    pub(crate) fn wrap(self, pos: Position) -> Position {
        Position {
            x: pos.x.rem_euclid(i32::from(self.cols)),
            y: pos.y.rem_euclid(i32::from(self.rows)),
        }
    }

    /// Apply the boundary policy to a position one step away from the grid.
    /// Returns `None` if the grid is boxed and `pos` is off the board.
    pub(crate) fn resolve(self, pos: Position) -> Option<Position> {
        if self.boxed {
            self.contains(pos).then_some(pos)
        } else {
            Some(self.wrap(pos))
        }
    }

    /// Iterate over every cell of the grid in row-major order
    pub(crate) fn positions(self) -> impl Iterator<Item = Position> {
        let cols = i32::from(self.cols);
        (0..i32::from(self.rows)).flat_map(move |y| (0..cols).map(move |x| Position { x, y }))
    }
}
