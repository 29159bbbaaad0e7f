use super::grid::Position;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the position one cell away from `pos` in this direction,
    /// without regard for the edges of the grid
    pub(crate) fn step(self, pos: Position) -> Position {
        let Position { x, y } = pos;
        match self {
            Direction::Up => Position::new(x, y - 1),
            Direction::Down => Position::new(x, y + 1),
            Direction::Left => Position::new(x - 1, y),
            Direction::Right => Position::new(x + 1, y),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub(crate) fn arrow(self) -> char {
        match self {
            Direction::Up => '↑',
            Direction::Down => '↓',
            Direction::Left => '←',
            Direction::Right => '→',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Up, Position::new(2, 7), Position::new(2, 6))]
    #[case(Direction::Down, Position::new(2, 7), Position::new(2, 8))]
    #[case(Direction::Left, Position::new(2, 7), Position::new(1, 7))]
    #[case(Direction::Right, Position::new(2, 7), Position::new(3, 7))]
    #[case(Direction::Up, Position::new(2, 0), Position::new(2, -1))]
    #[case(Direction::Left, Position::new(0, 7), Position::new(-1, 7))]
    fn test_step(#[case] d: Direction, #[case] pos: Position, #[case] r: Position) {
        assert_eq!(d.step(pos), r);
    }

    #[rstest]
    #[case(Direction::Up)]
    #[case(Direction::Down)]
    #[case(Direction::Left)]
    #[case(Direction::Right)]
    fn reverse_undoes_step(#[case] d: Direction) {
        let pos = Position::new(5, 5);
        assert_ne!(d.reverse(), d);
        assert_eq!(d.reverse().reverse(), d);
        assert_eq!(d.reverse().step(d.step(pos)), pos);
    }
}
