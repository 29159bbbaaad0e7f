use super::state::GameState;
use enum_map::{Enum, EnumMap};
use serde::Serialize;
use std::fmt;

/// The kinds of event published by a [`Game`][super::Game]
#[derive(Clone, Copy, Debug, Enum, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum Topic {
    DirectionChanged,
    AfterTick,
    AppleEaten,
    Play,
    Pause,
    Lost,
    Won,
}

impl Topic {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Topic::DirectionChanged => "directionChanged",
            Topic::AfterTick => "afterTick",
            Topic::AppleEaten => "appleEaten",
            Topic::Play => "play",
            Topic::Pause => "pause",
            Topic::Lost => "lost",
            Topic::Won => "won",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

type Listener = Box<dyn FnMut(&GameState)>;
type WildcardListener = Box<dyn FnMut(Topic, &GameState)>;

/// Topic-keyed fan-out of game snapshots.
///
/// Listeners run synchronously, in the order they were registered; for each
/// event the listeners for its topic run before the wildcard listeners.
#[derive(Default)]
pub(crate) struct Feed {
    listeners: EnumMap<Topic, Vec<Listener>>,
    wildcard: Vec<WildcardListener>,
}

impl Feed {
    pub(crate) fn new() -> Feed {
        Feed::default()
    }

    pub(crate) fn subscribe<F>(&mut self, topic: Topic, listener: F)
    where
        F: FnMut(&GameState) + 'static,
    {
        self.listeners[topic].push(Box::new(listener));
    }

    /// Register a listener for every topic
    pub(crate) fn subscribe_all<F>(&mut self, listener: F)
    where
        F: FnMut(Topic, &GameState) + 'static,
    {
        self.wildcard.push(Box::new(listener));
    }

    pub(crate) fn publish(&mut self, topic: Topic, state: &GameState) {
        for listener in &mut self.listeners[topic] {
            listener(state);
        }
        for listener in &mut self.wildcard {
            listener(topic, state);
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.wildcard.is_empty() && self.listeners.values().all(Vec::is_empty)
    }
}

impl fmt::Debug for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts = f.debug_map();
        for (topic, listeners) in &self.listeners {
            counts.entry(&topic, &listeners.len());
        }
        counts.entry(&"*", &self.wildcard.len());
        counts.finish()
    }
}
