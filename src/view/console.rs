use super::View;
use crate::game::{GameState, Topic};
use std::fmt;

/// A plain-text view that describes each snapshot in a few lines: the tick
/// count, the apple, and the snake, with a new line for every run of
/// segments sharing a direction.
///
/// By default the text goes to the log.
pub(crate) struct Console {
    output: Box<dyn FnMut(&str)>,
}

impl Console {
    pub(crate) fn new() -> Console {
        Console::with_output(|text| tracing::info!("{text}"))
    }

    pub(crate) fn with_output<F: FnMut(&str) + 'static>(output: F) -> Console {
        Console {
            output: Box::new(output),
        }
    }
}

impl Default for Console {
    fn default() -> Console {
        Console::new()
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

impl View for Console {
    fn render(&mut self, state: &GameState) {
        (self.output)(&Description(state).to_string());
    }

    fn notify(&mut self, topic: Topic, state: &GameState) {
        match topic {
            Topic::AfterTick => self.render(state),
            Topic::Play => (self.output)("▶ play"),
            Topic::Pause => (self.output)("⏸ pause"),
            Topic::Lost => (self.output)(&format!(
                "⏹ lost\n\t{} eaten\n\t{} ticks",
                state.score, state.ticks
            )),
            Topic::Won => (self.output)(&format!(
                "🏆 board filled\n\t{} eaten\n\t{} ticks",
                state.score, state.ticks
            )),
            Topic::DirectionChanged | Topic::AppleEaten => (),
        }
    }
}

/// Multi-line text description of a snapshot
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Description<'a>(&'a GameState);

impl fmt::Display for Description<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        write!(f, "ticks={}\napple\teaten={}\n\t", state.ticks, state.score)?;
        match state.apple {
            Some(apple) => write!(f, "{apple}")?,
            None => write!(f, "--")?,
        }
        write!(f, "\nsnake\tlength={}", state.snake.len())?;
        let mut previous = None;
        for seg in &state.snake {
            if previous == Some(seg.direction) {
                write!(f, "\n\t{}", seg.pos)?;
            } else {
                write!(f, "\n{}\t{}", seg.direction.arrow(), seg.pos)?;
            }
            previous = Some(seg.direction);
        }
        Ok(())
    }
}
