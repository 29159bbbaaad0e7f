//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};

/// Default number of columns in the grid
pub(crate) const DEFAULT_COLS: u16 = 20;

/// Default number of rows in the grid
pub(crate) const DEFAULT_ROWS: u16 = 15;

/// Length of the snake at the start of a game
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Default milliseconds between movements of the snake
pub(crate) const DEFAULT_SPEED: u64 = 150;

/// Default number of cells the snake's length increases by upon eating an
/// apple
pub(crate) const DEFAULT_GROWTH: usize = 1;

/// Number of random cells to try when placing an apple before falling back to
/// picking from a list of the free cells
pub(crate) const MAX_APPLE_DRAWS: usize = 64;

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the apple
pub(crate) const APPLE_SYMBOL: char = '●';

/// Glyph for the cell the snake is about to crash into
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the apple
pub(crate) const APPLE_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
