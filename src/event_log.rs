//! JSON-lines gameplay log.
//!
//! [`EventLog`] is a [`View`] that appends one JSON object per core
//! notification. A write failure disables the log; the error is kept and
//! surfaces from [`EventLog::finish`], so play is never interrupted.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::core::{GameEvent, GameSnapshot, View};

/// One line of the log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub seq: u64,
    /// Milliseconds since the Unix epoch
    pub ts: u64,
    pub event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub piece: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<&'static str>,
}

impl LogRecord {
    pub fn from_event(seq: u64, ts: u64, event: &GameEvent) -> Self {
        let mut record = Self {
            seq,
            ts,
            event: event.as_str(),
            score: None,
            lines: None,
            piece: None,
            phase: None,
        };
        match *event {
            GameEvent::ScoreChanged(score) => record.score = Some(score),
            GameEvent::LinesCleared(n) => record.lines = Some(n),
            GameEvent::UpcomingChanged(kind) | GameEvent::PieceFrozen(kind) => {
                record.piece = Some(kind.as_str())
            }
            GameEvent::PhaseChanged(phase) => record.phase = Some(phase.as_str()),
            GameEvent::GridChanged | GameEvent::GameOver => {}
        }
        record
    }
}

pub struct EventLog<W: Write> {
    out: W,
    seq: u64,
    buf: Vec<u8>,
    error: Option<io::Error>,
}

impl EventLog<BufWriter<File>> {
    /// Append to `path`, creating it if needed.
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| anyhow!("event log: open {} failed: {}", path, e))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            seq: 0,
            buf: Vec::with_capacity(256),
            error: None,
        }
    }

    /// Records written so far
    pub fn written(&self) -> u64 {
        self.seq
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    fn write_record(&mut self, record: &LogRecord) {
        if self.error.is_some() {
            return;
        }
        self.buf.clear();
        if let Err(e) = serde_json::to_writer(&mut self.buf, record) {
            self.error = Some(e.into());
            return;
        }
        self.buf.push(b'\n');
        if let Err(e) = self.out.write_all(&self.buf) {
            self.error = Some(e);
            return;
        }
        self.seq += 1;
    }

    /// Flush and report the first write failure, if any.
    pub fn finish(mut self) -> Result<W> {
        if let Some(e) = self.error.take() {
            return Err(anyhow!("event log: write failed: {}", e));
        }
        self.out
            .flush()
            .map_err(|e| anyhow!("event log: flush failed: {}", e))?;
        Ok(self.out)
    }
}

impl<W: Write> View for EventLog<W> {
    fn update(&mut self, _snapshot: &GameSnapshot) {}

    fn record(&mut self, event: &GameEvent) {
        let record = LogRecord::from_event(self.seq, now_ms(), event);
        self.write_record(&record);
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GamePhase, PieceKind};

    #[test]
    fn record_fields_follow_event_payload() {
        let rec = LogRecord::from_event(3, 10, &GameEvent::PieceFrozen(PieceKind::T));
        assert_eq!(rec.piece, Some("t"));
        assert_eq!(rec.score, None);

        let rec = LogRecord::from_event(4, 10, &GameEvent::PhaseChanged(GamePhase::GameOver));
        assert_eq!(rec.phase, Some("gameOver"));
    }

    #[test]
    fn optional_fields_are_omitted() {
        let rec = LogRecord::from_event(0, 5, &GameEvent::GridChanged);
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json, r#"{"seq":0,"ts":5,"event":"gridChanged"}"#);
    }
}
