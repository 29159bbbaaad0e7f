use super::grid::{Grid, Position};
use super::snake::Snake;
use crate::consts;
use rand::{seq::IteratorRandom, Rng};

/// Pick a cell for a new apple that the snake does not occupy.
///
/// Cells are drawn uniformly at random and redrawn while they land on the
/// snake.  After [`MAX_APPLE_DRAWS`] misses the free cells are enumerated and
/// one of them is chosen instead.  Returns `None` if the snake covers every
/// cell of the grid.  The snake's length is no guide to this, as a snake that
/// may cross itself can be longer than the area it covers.
///
/// [`MAX_APPLE_DRAWS`]: consts::MAX_APPLE_DRAWS
pub(super) fn place_apple<R: Rng>(rng: &mut R, grid: Grid, snake: &Snake) -> Option<Position> {
    for _ in 0..consts::MAX_APPLE_DRAWS {
        let pos = Position::new(
            rng.random_range(0..i32::from(grid.cols)),
            rng.random_range(0..i32::from(grid.rows)),
        );
        if !snake.occupies(pos) {
            return Some(pos);
        }
    }
    grid.positions().filter(|&p| !snake.occupies(p)).choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::direction::Direction;
    use crate::game::snake::Segment;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::VecDeque;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn grid(cols: u16, rows: u16) -> Grid {
        Grid {
            cols,
            rows,
            boxed: true,
        }
    }

    #[test]
    fn apple_never_on_snake() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let snake = Snake::new();
        let grid = grid(4, 2);
        for _ in 0..200 {
            let apple = place_apple(&mut rng, grid, &snake).unwrap();
            assert!(grid.contains(apple));
            assert!(!snake.occupies(apple));
        }
    }

    #[test]
    fn single_free_cell() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let snake = Snake::new();
        assert_eq!(
            place_apple(&mut rng, grid(4, 1), &snake),
            Some(Position::new(3, 0))
        );
    }

    #[test]
    fn full_board() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut snake = Snake::new();
        assert_eq!(place_apple(&mut rng, grid(3, 1), &snake), None);
        snake.segments = VecDeque::from([
            Segment::new(0, 0, Direction::Up),
            Segment::new(0, 1, Direction::Up),
            Segment::new(1, 1, Direction::Left),
            Segment::new(1, 0, Direction::Down),
        ]);
        snake.target_len = 4;
        assert_eq!(place_apple(&mut rng, grid(2, 2), &snake), None);
    }

    #[test]
    fn overlapping_snake_leaves_room() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut snake = Snake::new();
        snake.segments = VecDeque::from([
            Segment::new(2, 0, Direction::Right),
            Segment::new(1, 0, Direction::Right),
            Segment::new(0, 0, Direction::Right),
            Segment::new(2, 0, Direction::Right),
            Segment::new(1, 0, Direction::Right),
            Segment::new(0, 0, Direction::Right),
        ]);
        snake.target_len = 6;
        for _ in 0..50 {
            let apple = place_apple(&mut rng, grid(3, 2), &snake).unwrap();
            assert_eq!(apple.y, 1);
        }
    }
}
