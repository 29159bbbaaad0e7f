use super::View;
use crate::game::{GameState, Topic};
use serde_json::json;
use std::io::{self, Write};
use thiserror::Error;

/// A view that writes every event it sees as a line of JSON:
/// `{"event": "afterTick", "state": {...}}`.  The snapshot taken when the
/// recorder is attached has no `event` key.
///
/// Errors cannot be reported back through the feed, so the first one is
/// kept, recording stops, and the error is returned by
/// [`Recorder::finish()`].
#[derive(Debug)]
pub(crate) struct Recorder<W> {
    writer: W,
    error: Option<RecordError>,
}

impl<W: Write> Recorder<W> {
    pub(crate) fn new(writer: W) -> Recorder<W> {
        Recorder {
            writer,
            error: None,
        }
    }

    fn record(&mut self, topic: Option<Topic>, state: &GameState) {
        if self.error.is_some() {
            return;
        }
        let line = match topic {
            Some(topic) => json!({"event": topic, "state": state}),
            None => json!({ "state": state }),
        };
        let r = serde_json::to_writer(&mut self.writer, &line)
            .map_err(RecordError::Serialize)
            .and_then(|()| self.writer.write_all(b"\n").map_err(RecordError::Write));
        if let Err(e) = r {
            tracing::warn!(error = %e, "recording stopped");
            self.error = Some(e);
        }
    }

    /// Flush the output and report the first error encountered, if any
    pub(crate) fn finish(&mut self) -> Result<(), RecordError> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.writer.flush().map_err(RecordError::Write)
    }
}

impl<W: Write> View for Recorder<W> {
    fn render(&mut self, state: &GameState) {
        self.record(None, state);
    }

    fn notify(&mut self, topic: Topic, state: &GameState) {
        self.record(Some(topic), state);
    }
}

#[derive(Debug, Error)]
pub(crate) enum RecordError {
    #[error("failed to serialize game event")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write game event")]
    Write(#[source] io::Error),
}
