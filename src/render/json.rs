//! Machine-readable battle report: one JSON object per event.

use std::io::Write;

use crate::core::BattleError;
use crate::events::{BattleEvent, BattleObserver};

/// Writes every event as a line of JSON.
#[derive(Debug)]
pub struct JsonLinesRenderer<W> {
    out: W,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> BattleObserver for JsonLinesRenderer<W> {
    fn on_event(&mut self, event: &BattleEvent) -> Result<(), BattleError> {
        serde_json::to_writer(&mut self.out, event)?;
        writeln!(self.out)?;
        if matches!(event, BattleEvent::BattleEnded { .. }) {
            self.out.flush()?;
        }
        Ok(())
    }
}
