use std::io::{self, Write};

use serde_json::Value;
use tui_blockfall::core::{GameController, GameEvent, View};
use tui_blockfall::event_log::EventLog;
use tui_blockfall::term::TermView;

fn lines(bytes: &[u8]) -> Vec<Value> {
    std::str::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn event_log_writes_one_json_object_per_event() {
    let mut game = GameController::with_seed(10, 20, 7);
    let mut log = EventLog::new(Vec::new());
    game.start();
    game.flush_to(&mut log);
    let written = log.written();

    let out = log.finish().unwrap();
    let records = lines(&out);
    assert_eq!(records.len() as u64, written);

    assert_eq!(records[0]["seq"], 0);
    assert_eq!(records[0]["event"], "upcomingChanged");
    assert!(records[0]["piece"].is_string());
    assert_eq!(records[1]["event"], "gridChanged");
    assert!(records[1].get("score").is_none());

    let last = records.last().unwrap();
    assert_eq!(last["event"], "phaseChanged");
    assert_eq!(last["phase"], "active");
    for (i, rec) in records.iter().enumerate() {
        assert_eq!(rec["seq"], i as u64);
        assert!(rec["ts"].as_u64().is_some());
    }
}

#[test]
fn event_log_composes_with_term_view() {
    let mut game = GameController::with_seed(10, 20, 8);
    let mut log = EventLog::new(Vec::new());
    let mut term_view = TermView::new();
    game.start();
    game.flush_to(&mut (&mut term_view, &mut log));

    assert!(term_view.snapshot().playable());
    assert!(log.written() > 0);
}

#[test]
fn event_log_records_score() {
    let mut log = EventLog::new(Vec::new());
    log.record(&GameEvent::ScoreChanged(260));
    log.record(&GameEvent::LinesCleared(2));
    let records = lines(&log.finish().unwrap());
    assert_eq!(records[0]["score"], 260);
    assert_eq!(records[1]["lines"], 2);
}

#[derive(Debug)]
struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn event_log_failure_is_reported_at_finish() {
    let mut log = EventLog::new(FailingWriter);
    log.record(&GameEvent::GridChanged);
    log.record(&GameEvent::GameOver);
    assert!(log.is_failed());
    assert_eq!(log.written(), 0);

    let err = log.finish().unwrap_err();
    assert!(err.to_string().contains("disk full"));
}
