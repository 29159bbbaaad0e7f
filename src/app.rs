use crate::command::Command;
use crate::config::{Config, GridConfig};
use crate::game::{Game, Topic};
use crate::options::Options;
use crate::view::{Board, Console, Recorder};
use anyhow::Context;
use crossterm::event::{poll, read, Event};
use ratatui::{backend::Backend, Terminal};
use std::cell::RefCell;
use std::io::BufWriter;
use std::path::Path;
use std::rc::Rc;
use std::time::Instant;

type FileRecorder = Recorder<BufWriter<fs_err::File>>;

#[derive(Debug)]
pub(crate) struct App {
    game: Game,
    board: Rc<RefCell<Board>>,
    recorder: Option<Rc<RefCell<FileRecorder>>>,
    grid: GridConfig,
    options: Options,

    /// Whether to describe each game state in the log
    console: bool,

    quitting: bool,
}

impl App {
    pub(crate) fn new(config: &Config, record: Option<&Path>) -> anyhow::Result<App> {
        let recorder = record
            .map(|path| {
                fs_err::File::create(path)
                    .map(|fp| Rc::new(RefCell::new(Recorder::new(BufWriter::new(fp)))))
            })
            .transpose()
            .context("failed to open record file")?;
        let mut app = App {
            game: Game::new(config.grid.cols, config.grid.rows, config.options)?,
            board: Rc::new(RefCell::new(Board::new())),
            recorder,
            grid: config.grid,
            options: config.options,
            console: config.logging.file.is_some(),
            quitting: false,
        };
        app.attach_views();
        Ok(app)
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> anyhow::Result<()> {
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.process_input()?;
            self.game.poll(Instant::now());
        }
        if let Some(recorder) = self.recorder {
            recorder.borrow_mut().finish()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> std::io::Result<()> {
        let board = self.board.borrow();
        terminal.draw(|frame| frame.render_widget(&*board, frame.area()))?;
        Ok(())
    }

    /// Wait for input until the next tick is due, handling at most one event
    fn process_input(&mut self) -> anyhow::Result<()> {
        let ready = match self.game.time_until_tick(Instant::now()) {
            Some(wait) => poll(wait)?,
            None => true,
        };
        if ready {
            self.handle_event(read()?)?;
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> anyhow::Result<()> {
        if let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) {
            self.handle_command(cmd)?;
        }
        Ok(())
    }

    fn handle_command(&mut self, cmd: Command) -> anyhow::Result<()> {
        match cmd {
            Command::Quit | Command::Q => self.quitting = true,
            Command::Up => {
                self.game.up();
            }
            Command::Down => {
                self.game.down();
            }
            Command::Left => {
                self.game.left();
            }
            Command::Right => {
                self.game.right();
            }
            Command::Enter | Command::Space => self.game.toggle(),
            Command::R if self.game.over() => self.restart()?,
            Command::R => (),
        }
        Ok(())
    }

    fn restart(&mut self) -> anyhow::Result<()> {
        tracing::debug!("restarting");
        self.game = Game::new(self.grid.cols, self.grid.rows, self.options)?;
        self.attach_views();
        Ok(())
    }

    fn attach_views(&mut self) {
        self.game.attach(Rc::clone(&self.board));
        if self.console {
            self.game.attach(Rc::new(RefCell::new(Console::new())));
        }
        if let Some(ref recorder) = self.recorder {
            self.game.attach(Rc::clone(recorder));
        }
        self.game.subscribe(Topic::AppleEaten, |state| {
            tracing::trace!(length = state.snake.len(), "snake grew");
        });
    }
}
