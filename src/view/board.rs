use super::View;
use crate::consts;
use crate::game::{Direction, GameState, Position, Topic};
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{self, Constraint, Layout, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

/// The game board as drawn in the terminal, kept up to date from the feed
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Board {
    state: Option<GameState>,
}

impl Board {
    pub(crate) fn new() -> Board {
        Board::default()
    }
}

impl View for Board {
    fn render(&mut self, state: &GameState) {
        self.state = Some(state.clone());
    }

    // Every event carries a fresh snapshot, so keep all of them.
    fn notify(&mut self, _topic: Topic, state: &GameState) {
        self.render(state);
    }
}

impl Widget for &Board {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(state) = &self.state else {
            return;
        };
        let [score_area, block_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        Line::styled(format!(" Score: {}", state.score), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);

        let block_size = Size {
            width: state.grid.cols.saturating_add(2),
            height: state.grid.rows.saturating_add(2),
        };
        let block_area = center_rect(block_area, block_size);
        if state.grid.boxed {
            Block::bordered().render(block_area, buf);
        } else {
            DottedBorder.render(block_area, buf);
        }

        // Cell (0, 0) of the grid sits just inside the border.  Positions
        // one step off the grid land on the border itself.
        let mut level = Canvas {
            origin: (i32::from(block_area.x) + 1, i32::from(block_area.y) + 1),
            area: block_area,
            buf,
        };
        for seg in state.snake.iter().skip(1) {
            level.draw_cell(seg.pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        if let Some(apple) = state.apple {
            level.draw_cell(apple, consts::APPLE_SYMBOL, consts::APPLE_STYLE);
        }
        if let Some(head) = state.head() {
            level.draw_cell(head.pos, head_symbol(head.direction), consts::SNAKE_STYLE);
        }
        // Draw the collision last so that it overwrites whatever it's
        // colliding with
        if let Some(pos) = state.touched {
            level.draw_cell(pos, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
        }

        if state.over() {
            let headline = if state.won {
                " — BOARD CLEARED —"
            } else {
                " — GAME OVER —"
            };
            Span::from(headline).render(msg1_area, buf);
            Line::from_iter([
                Span::raw(" Restart ("),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(") — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
            .render(msg2_area, buf);
        } else if !state.running {
            Span::from(" — PAUSED —").render(msg1_area, buf);
            Line::from_iter([
                Span::raw(" Play ("),
                Span::styled("Enter", consts::KEY_STYLE),
                Span::raw(") — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
            .render(msg2_area, buf);
        }
    }
}

fn head_symbol(direction: Direction) -> char {
    match direction {
        Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
        Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
        Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
        Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
    }
}

/// Draws grid cells into a region of a buffer, clipped to `area`
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    origin: (i32, i32),
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn locate(&self, pos: Position) -> Option<layout::Position> {
        let x = u16::try_from(self.origin.0 + pos.x).ok()?;
        let y = u16::try_from(self.origin.1 + pos.y).ok()?;
        let p = layout::Position { x, y };
        self.area.contains(p).then_some(p)
    }

    fn draw_char(&mut self, pos: Position, symbol: char) {
        if let Some(cell) = self.locate(pos).and_then(|p| self.buf.cell_mut(p)) {
            cell.set_char(symbol);
        }
    }

    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        if let Some(cell) = self.locate(pos).and_then(|p| self.buf.cell_mut(p)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DottedBorder;

impl Widget for DottedBorder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let max_x = i32::from(area.width) - 1;
        let max_y = i32::from(area.height) - 1;
        let mut canvas = Canvas {
            origin: (i32::from(area.x), i32::from(area.y)),
            area,
            buf,
        };
        canvas.draw_char(Position::new(0, 0), '·');
        canvas.draw_char(Position::new(max_x, 0), '·');
        canvas.draw_char(Position::new(max_x, max_y), '·');
        canvas.draw_char(Position::new(0, max_y), '·');
        for x in 1..max_x {
            canvas.draw_char(Position::new(x, 0), '⋯');
            canvas.draw_char(Position::new(x, max_y), '⋯');
        }
        for y in 1..max_y {
            canvas.draw_char(Position::new(0, y), '⋮');
            canvas.draw_char(Position::new(max_x, y), '⋮');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Grid, Segment};

    fn state(boxed: bool) -> GameState {
        GameState {
            grid: Grid {
                cols: 10,
                rows: 3,
                boxed,
            },
            direction: Direction::Right,
            snake: vec![
                Segment::new(2, 1, Direction::Right),
                Segment::new(1, 1, Direction::Right),
                Segment::new(0, 1, Direction::Right),
            ],
            apple: Some(Position::new(4, 2)),
            score: 0,
            running: true,
            lost: false,
            won: false,
            ticks: 0,
            touched: None,
        }
    }

    fn draw(state: &GameState) -> Buffer {
        draw_in(state, Rect::new(0, 0, 12, 8))
    }

    fn draw_in(state: &GameState, area: Rect) -> Buffer {
        let mut board = Board::new();
        View::render(&mut board, state);
        let mut buffer = Buffer::empty(area);
        (&board).render(area, &mut buffer);
        buffer
    }

    #[test]
    fn empty_board_draws_nothing() {
        let area = Rect::new(0, 0, 12, 8);
        let mut buffer = Buffer::empty(area);
        (&Board::new()).render(area, &mut buffer);
        pretty_assertions::assert_eq!(buffer, Buffer::empty(area));
    }

    #[test]
    fn boxed_board() {
        let buffer = draw(&state(true));
        let mut expected = Buffer::with_lines([
            " Score: 0",
            "┌──────────┐",
            "│          │",
            "│⚬⚬<       │",
            "│    ●     │",
            "└──────────┘",
            "",
            "",
        ]);
        expected.set_style(Rect::new(0, 0, 12, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(1, 3, 3, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(5, 4, 1, 1), consts::APPLE_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn wrapped_board() {
        let buffer = draw(&state(false));
        let mut expected = Buffer::with_lines([
            " Score: 0",
            "·⋯⋯⋯⋯⋯⋯⋯⋯⋯⋯·",
            "⋮          ⋮",
            "⋮⚬⚬<       ⋮",
            "⋮    ●     ⋮",
            "·⋯⋯⋯⋯⋯⋯⋯⋯⋯⋯·",
            "",
            "",
        ]);
        expected.set_style(Rect::new(0, 0, 12, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(1, 3, 3, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(5, 4, 1, 1), consts::APPLE_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn collision_on_wall() {
        let mut st = state(true);
        st.snake = vec![
            Segment::new(9, 1, Direction::Right),
            Segment::new(8, 1, Direction::Right),
            Segment::new(7, 1, Direction::Right),
        ];
        st.score = 2;
        st.touched = Some(Position::new(10, 1));
        let buffer = draw(&st);
        let mut expected = Buffer::with_lines([
            " Score: 2",
            "┌──────────┐",
            "│          │",
            "│       ⚬⚬<×",
            "│    ●     │",
            "└──────────┘",
            "",
            "",
        ]);
        expected.set_style(Rect::new(0, 0, 12, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(8, 3, 3, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(5, 4, 1, 1), consts::APPLE_STYLE);
        expected.set_style(Rect::new(11, 3, 1, 1), consts::COLLISION_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn paused_message() {
        let mut st = state(true);
        st.running = false;
        let buffer = draw_in(&st, Rect::new(0, 0, 26, 8));
        let mut expected = Buffer::with_lines([
            " Score: 0",
            "       ┌──────────┐",
            "       │          │",
            "       │⚬⚬<       │",
            "       │    ●     │",
            "       └──────────┘",
            " — PAUSED —",
            " Play (Enter) — Quit (q)",
        ]);
        expected.set_style(Rect::new(0, 0, 26, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(8, 3, 3, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(12, 4, 1, 1), consts::APPLE_STYLE);
        expected.set_style(Rect::new(7, 7, 5, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(22, 7, 1, 1), consts::KEY_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn game_over_message() {
        let mut st = state(true);
        st.snake = vec![
            Segment::new(9, 1, Direction::Right),
            Segment::new(8, 1, Direction::Right),
            Segment::new(7, 1, Direction::Right),
        ];
        st.running = false;
        st.lost = true;
        st.touched = Some(Position::new(10, 1));
        let buffer = draw_in(&st, Rect::new(0, 0, 26, 8));
        let mut expected = Buffer::with_lines([
            " Score: 0",
            "       ┌──────────┐",
            "       │          │",
            "       │       ⚬⚬<×",
            "       │    ●     │",
            "       └──────────┘",
            " — GAME OVER —",
            " Restart (r) — Quit (q)",
        ]);
        expected.set_style(Rect::new(0, 0, 26, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(15, 3, 3, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(12, 4, 1, 1), consts::APPLE_STYLE);
        expected.set_style(Rect::new(18, 3, 1, 1), consts::COLLISION_STYLE);
        expected.set_style(Rect::new(10, 7, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(21, 7, 1, 1), consts::KEY_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn board_cleared_message() {
        let st = GameState {
            grid: Grid {
                cols: 4,
                rows: 1,
                boxed: true,
            },
            direction: Direction::Right,
            snake: vec![
                Segment::new(3, 0, Direction::Right),
                Segment::new(2, 0, Direction::Right),
                Segment::new(1, 0, Direction::Right),
                Segment::new(0, 0, Direction::Right),
            ],
            apple: None,
            score: 1,
            running: false,
            lost: false,
            won: true,
            ticks: 1,
            touched: None,
        };
        let buffer = draw_in(&st, Rect::new(0, 0, 26, 8));
        let mut expected = Buffer::with_lines([
            " Score: 1",
            "",
            "          ┌────┐",
            "          │⚬⚬⚬<│",
            "          └────┘",
            "",
            " — BOARD CLEARED —",
            " Restart (r) — Quit (q)",
        ]);
        expected.set_style(Rect::new(0, 0, 26, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(11, 3, 4, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(10, 7, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(21, 7, 1, 1), consts::KEY_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }
}
