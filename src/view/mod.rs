//! Ways of presenting a game to the outside world.
//!
//! Every view consumes [`GameState`] snapshots from a game's feed; none of
//! them can reach into the game itself.
mod board;
mod console;
mod record;
pub(crate) use self::board::Board;
pub(crate) use self::console::Console;
pub(crate) use self::record::Recorder;
use crate::game::{GameState, Topic};

pub(crate) trait View {
    /// Redraw the view from `state`
    fn render(&mut self, state: &GameState);

    /// React to an event from the game.  By default, the view is redrawn
    /// after every tick and otherwise left alone.
    fn notify(&mut self, topic: Topic, state: &GameState) {
        if topic == Topic::AfterTick {
            self.render(state);
        }
    }
}
