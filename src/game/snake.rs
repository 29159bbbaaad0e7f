use super::direction::Direction;
use super::grid::Position;
use serde::Serialize;
use std::collections::VecDeque;

/// One cell of the snake, together with the direction the snake was moving
/// in when the cell was entered
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub(crate) struct Segment {
    #[serde(flatten)]
    pub(crate) pos: Position,
    pub(crate) direction: Direction,
}

impl Segment {
    pub(crate) const fn new(x: i32, y: i32, direction: Direction) -> Segment {
        Segment {
            pos: Position::new(x, y),
            direction,
        }
    }
}

/// Snake state.  Snate.
///
/// The segments are stored head first.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    pub(super) segments: VecDeque<Segment>,

    /// The length the snake grows to.  The snake only ever gets longer by
    /// not dropping its tail while it is shorter than this.
    pub(super) target_len: usize,
}

impl Snake {
    /// Create the starting snake: three segments along the top row, head
    /// rightmost, all facing right
    pub(super) fn new() -> Snake {
        let segments = VecDeque::from([
            Segment::new(2, 0, Direction::Right),
            Segment::new(1, 0, Direction::Right),
            Segment::new(0, 0, Direction::Right),
        ]);
        Snake {
            target_len: segments.len(),
            segments,
        }
    }

    pub(super) fn head(&self) -> Segment {
        // The snake is never empty
        self.segments[0]
    }

    pub(super) fn len(&self) -> usize {
        self.segments.len()
    }

    pub(super) fn occupies(&self, pos: Position) -> bool {
        self.segments.iter().any(|seg| seg.pos == pos)
    }

    /// Whether the tail cell will be vacated when the snake next moves
    pub(super) fn tail_vacates(&self) -> bool {
        self.segments.len() >= self.target_len
    }

    /// Whether moving the head onto `pos` would run into the snake's body.
    /// The tail does not count if it moves out of the way on the same tick.
    pub(super) fn blocks(&self, pos: Position) -> bool {
        let skip_tail = usize::from(self.tail_vacates());
        self.segments
            .iter()
            .take(self.segments.len() - skip_tail)
            .any(|seg| seg.pos == pos)
    }

    /// Put a new head on the snake and drop the tail if the snake is now
    /// longer than its target length
    pub(super) fn advance(&mut self, head: Segment) {
        self.segments.push_front(head);
        if self.segments.len() > self.target_len {
            let _ = self.segments.pop_back();
        }
    }

    /// Extend the target length in response to eating an apple
    pub(super) fn grow(&mut self, growth: usize) {
        self.target_len = self.target_len.saturating_add(growth);
    }
}
