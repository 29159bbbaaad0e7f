mod apple;
mod direction;
mod feed;
mod grid;
mod snake;
mod state;
mod ticker;
pub(crate) use self::direction::Direction;
pub(crate) use self::feed::Topic;
pub(crate) use self::grid::{Grid, Position};
pub(crate) use self::snake::Segment;
pub(crate) use self::state::GameState;
use self::apple::place_apple;
use self::feed::Feed;
use self::snake::Snake;
use self::ticker::Ticker;
use crate::options::{Options, OptionsError};
use crate::view::View;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// The snake simulation.
///
/// All mutation happens inside the command methods (`tick()`,
/// `change_direction()`, `play()`, `pause()`), each of which runs to
/// completion and reports what changed through the feed before returning.
#[derive(Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    options: Options,
    snake: Snake,

    /// The direction the snake will move in on the next tick
    direction: Direction,

    apple: Option<Position>,
    score: u32,
    ticks: u64,
    touched: Option<Position>,
    lost: bool,
    ticker: Ticker,
    feed: Feed,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(cols: u16, rows: u16, options: Options) -> Result<Self, OptionsError> {
        Game::new_with_rng(cols, rows, options, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(
        cols: u16,
        rows: u16,
        options: Options,
        mut rng: R,
    ) -> Result<Game<R>, OptionsError> {
        options.validate(cols, rows)?;
        let grid = Grid {
            cols,
            rows,
            boxed: options.boxed,
        };
        let snake = Snake::new();
        let apple = place_apple(&mut rng, grid, &snake);
        tracing::debug!(?grid, ?options, ?apple, "new game");
        Ok(Game {
            rng,
            grid,
            options,
            direction: snake.head().direction,
            snake,
            apple,
            score: 0,
            ticks: 0,
            touched: None,
            lost: false,
            ticker: Ticker::new(options.period()),
            feed: Feed::new(),
        })
    }

    /// Advance the simulation by one step.  Does nothing once the game is
    /// over.
    pub(crate) fn tick(&mut self) {
        if self.over() {
            return;
        }
        let direction = self.direction;
        let next = direction.step(self.snake.head().pos);
        match self.grid.resolve(next) {
            Some(pos) if self.options.eat_self && self.snake.blocks(pos) => self.collide(pos),
            Some(pos) => self.advance(Segment { pos, direction }),
            None => self.collide(next),
        }
    }

    /// Run a tick if the timer says one is due at `now`.  Returns `true` if
    /// a tick was run.
    pub(crate) fn poll(&mut self, now: Instant) -> bool {
        if self.ticker.poll(now) {
            self.tick();
            true
        } else {
            false
        }
    }

    fn advance(&mut self, head: Segment) {
        self.ticks += 1;
        self.touched = None;
        self.snake.advance(head);
        tracing::trace!(ticks = self.ticks, head = %head.pos, "snake moved");
        if self.apple == Some(head.pos) {
            self.snake.grow(self.options.growth);
            self.score += 1;
            self.apple = place_apple(&mut self.rng, self.grid, &self.snake);
            tracing::debug!(score = self.score, apple = ?self.apple, "apple eaten");
            self.publish(Topic::AppleEaten);
        }
        self.publish(Topic::AfterTick);
        if self.apple.is_none() {
            self.ticker.stop();
            tracing::info!(
                score = self.score,
                ticks = self.ticks,
                "snake fills the board; game won"
            );
            self.publish(Topic::Won);
        }
    }

    fn collide(&mut self, pos: Position) {
        if self.options.extra_frame && self.touched.is_none() {
            tracing::debug!(touched = %pos, "fatal move forgiven for one tick");
            self.touched = Some(pos);
            self.publish(Topic::AfterTick);
        } else {
            self.ticker.stop();
            self.lost = true;
            self.touched = Some(pos);
            tracing::info!(score = self.score, ticks = self.ticks, at = %pos, "snake crashed; game lost");
            self.publish(Topic::Lost);
        }
    }
}

impl<R> Game<R> {
    /// Ask the snake to turn.  Returns `false` if the turn was refused
    /// because it would reverse the snake into its own body or because the
    /// game is over.  The new direction takes effect on the next tick.
    pub(crate) fn change_direction(&mut self, direction: Direction) -> bool {
        if self.over() {
            return false;
        }
        let heading = self.snake.head().direction;
        if self.snake.len() > 1 && direction == heading.reverse() {
            tracing::trace!(?direction, ?heading, "reversal refused");
            return false;
        }
        if self.direction != direction {
            self.direction = direction;
            tracing::debug!(?direction, "direction changed");
            self.publish(Topic::DirectionChanged);
        }
        true
    }

    pub(crate) fn up(&mut self) -> bool {
        self.change_direction(Direction::Up)
    }

    pub(crate) fn down(&mut self) -> bool {
        self.change_direction(Direction::Down)
    }

    pub(crate) fn left(&mut self) -> bool {
        self.change_direction(Direction::Left)
    }

    pub(crate) fn right(&mut self) -> bool {
        self.change_direction(Direction::Right)
    }

    /// Start (or resume) the timer.  Does nothing if already running or if
    /// the game is over.
    pub(crate) fn play(&mut self) {
        if !self.over() && !self.running() {
            self.ticker.start(Instant::now());
            tracing::debug!(ticks = self.ticks, "play");
            self.publish(Topic::Play);
        }
    }

    /// Stop the timer, leaving everything else as it is.  Does nothing if
    /// not running or if the game is over.
    pub(crate) fn pause(&mut self) {
        if !self.over() && self.running() {
            self.ticker.stop();
            tracing::debug!(ticks = self.ticks, "pause");
            self.publish(Topic::Pause);
        }
    }

    pub(crate) fn toggle(&mut self) {
        if self.running() {
            self.pause();
        } else {
            self.play();
        }
    }

    pub(crate) fn running(&self) -> bool {
        self.ticker.is_running()
    }

    pub(crate) fn over(&self) -> bool {
        self.lost || self.apple.is_none()
    }

    /// How long the event loop may wait before the next tick is due.
    /// Returns `None` while the game is not running.
    pub(crate) fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.remaining(now)
    }

    pub(crate) fn state(&self) -> GameState {
        GameState {
            grid: self.grid,
            direction: self.direction,
            snake: Vec::from(self.snake.segments.clone()),
            apple: self.apple,
            score: self.score,
            running: self.running(),
            lost: self.lost,
            won: self.apple.is_none(),
            ticks: self.ticks,
            touched: self.touched,
        }
    }

    pub(crate) fn subscribe<F>(&mut self, topic: Topic, listener: F)
    where
        F: FnMut(&GameState) + 'static,
    {
        self.feed.subscribe(topic, listener);
    }

    pub(crate) fn subscribe_all<F>(&mut self, listener: F)
    where
        F: FnMut(Topic, &GameState) + 'static,
    {
        self.feed.subscribe_all(listener);
    }

    /// Render the current state in `view` and keep it informed of every
    /// subsequent event
    pub(crate) fn attach<V: View + 'static>(&mut self, view: Rc<RefCell<V>>) {
        view.borrow_mut().render(&self.state());
        self.feed
            .subscribe_all(move |topic, state| view.borrow_mut().notify(topic, state));
    }

    fn publish(&mut self, topic: Topic) {
        if self.feed.is_empty() {
            return;
        }
        let state = self.state();
        self.feed.publish(topic, &state);
    }
}
