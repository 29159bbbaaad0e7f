use super::direction::Direction;
use super::grid::{Grid, Position};
use super::snake::Segment;
use serde::Serialize;

/// A snapshot of a [`Game`][super::Game], as handed to subscribers
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub(crate) struct GameState {
    pub(crate) grid: Grid,

    /// The direction the snake will move in on the next tick
    pub(crate) direction: Direction,

    /// The snake's segments, head first
    pub(crate) snake: Vec<Segment>,

    /// `None` only once the snake has filled the board
    pub(crate) apple: Option<Position>,

    /// Number of apples eaten
    pub(crate) score: u32,

    pub(crate) running: bool,
    pub(crate) lost: bool,
    pub(crate) won: bool,

    /// Number of successful moves
    pub(crate) ticks: u64,

    /// Where the snake tried and failed to move, either while it is being
    /// given a tick's grace or, once lost, the move that killed it
    pub(crate) touched: Option<Position>,
}

impl GameState {
    pub(crate) fn head(&self) -> Option<Segment> {
        self.snake.first().copied()
    }

    pub(crate) fn over(&self) -> bool {
        self.lost || self.won
    }
}
