//! Replay logs.
//!
//! `ReplayLog` buffers the events of a batch of matches in memory, each
//! tagged with the seed of the match it came from. Nothing touches the
//! filesystem until the batch is over and `save` is called, so a failed
//! write never interrupts a match.
//!
//! The on-disk format is JSON lines, one event per line:
//!
//! ```text
//! {"seed":3,"event":"draw","card":"Forest"}
//! {"seed":3,"event":"horde_attack","damage":2,"life":18}
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::event::EventSink;
use crate::error::ReplayError;
use crate::rules::MatchEvent;

/// One logged event and the seed of its match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayRecord {
    pub seed: u64,
    #[serde(flatten)]
    pub event: MatchEvent,
}

/// In-memory event log for a batch of matches.
#[derive(Clone, Debug, Default)]
pub struct ReplayLog {
    records: Vec<ReplayRecord>,
    current_seed: u64,
}

impl ReplayLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All records so far, in arrival order.
    #[must_use]
    pub fn records(&self) -> &[ReplayRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records belonging to one seed.
    pub fn for_seed(&self, seed: u64) -> impl Iterator<Item = &ReplayRecord> {
        self.records.iter().filter(move |r| r.seed == seed)
    }

    /// Write every record as a JSON line.
    pub fn write_jsonl<W: Write>(&self, mut writer: W) -> Result<(), ReplayError> {
        for record in &self.records {
            serde_json::to_writer(&mut writer, record)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Create (or truncate) `path` and write the log to it.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ReplayError> {
        let file = File::create(path.as_ref())?;
        self.write_jsonl(BufWriter::new(file))?;
        tracing::debug!(
            path = %path.as_ref().display(),
            records = self.records.len(),
            "replay log written"
        );
        Ok(())
    }
}

impl EventSink for ReplayLog {
    fn begin_match(&mut self, seed: u64) {
        self.current_seed = seed;
    }

    fn record(&mut self, event: MatchEvent) {
        self.records.push(ReplayRecord {
            seed: self.current_seed,
            event,
        });
    }
}
