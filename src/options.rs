use crate::consts;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Gameplay options recognized by [`Game`][crate::game::Game]
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Options {
    /// Whether running into its own body kills the snake
    pub(crate) eat_self: bool,

    /// Whether the edges of the grid are walls (`true`) or wrap around
    /// (`false`)
    pub(crate) boxed: bool,

    /// Milliseconds between ticks
    pub(crate) speed: u64,

    /// Whether a fatal move is forgiven for one tick before the game is lost
    pub(crate) extra_frame: bool,

    /// How many cells the snake's length increases by per apple eaten
    pub(crate) growth: usize,
}

impl Options {
    pub(crate) fn period(&self) -> Duration {
        Duration::from_millis(self.speed)
    }

    /// Check that a game can be played on a `cols`×`rows` grid with these
    /// options
    pub(crate) fn validate(&self, cols: u16, rows: u16) -> Result<(), OptionsError> {
        if usize::from(cols) < consts::INITIAL_SNAKE_LENGTH {
            return Err(OptionsError::TooNarrow { cols });
        }
        if rows == 0 {
            return Err(OptionsError::NoRows);
        }
        if usize::from(cols) * usize::from(rows) <= consts::INITIAL_SNAKE_LENGTH {
            return Err(OptionsError::NoRoom { cols, rows });
        }
        if self.speed == 0 {
            return Err(OptionsError::ZeroSpeed);
        }
        if self.growth == 0 {
            return Err(OptionsError::ZeroGrowth);
        }
        Ok(())
    }
}

impl Default for Options {
    fn default() -> Options {
        Options {
            eat_self: true,
            boxed: true,
            speed: consts::DEFAULT_SPEED,
            extra_frame: true,
            growth: consts::DEFAULT_GROWTH,
        }
    }
}

/// Error returned when a game is set up with unusable parameters
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum OptionsError {
    #[error("grid must be at least {min} columns wide to fit the snake; got {cols}", min = consts::INITIAL_SNAKE_LENGTH)]
    TooNarrow { cols: u16 },
    #[error("grid must have at least one row")]
    NoRows,
    #[error("a {cols}x{rows} grid leaves no room for an apple")]
    NoRoom { cols: u16, rows: u16 },
    #[error("tick interval must be at least 1 millisecond")]
    ZeroSpeed,
    #[error("snake growth per apple must be at least 1")]
    ZeroGrowth,
}
