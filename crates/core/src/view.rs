//! View module - notifications for rendering collaborators
//!
//! The controller never draws anything. It queues [`GameEvent`]s as its state
//! changes, and front-ends drain them through a [`View`]. A terminal, a test
//! harness and a log file can all consume the same stream.

use crate::generator::Piece;
use crate::snapshot::GameSnapshot;
use crate::types::{GamePhase, PieceKind};

/// State-change notification queued by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Board or falling piece changed
    GridChanged,
    /// Lookahead piece was replaced
    UpcomingChanged(PieceKind),
    /// Score total after an award
    ScoreChanged(u32),
    /// A piece froze into the board
    PieceFrozen(PieceKind),
    LinesCleared(u32),
    PhaseChanged(GamePhase),
    /// Terminal; queued once
    GameOver,
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::GridChanged => "gridChanged",
            GameEvent::UpcomingChanged(_) => "upcomingChanged",
            GameEvent::ScoreChanged(_) => "scoreChanged",
            GameEvent::PieceFrozen(_) => "pieceFrozen",
            GameEvent::LinesCleared(_) => "linesCleared",
            GameEvent::PhaseChanged(_) => "phaseChanged",
            GameEvent::GameOver => "gameOver",
        }
    }
}

/// Rendering collaborator
pub trait View {
    /// Redraw from the current board projection
    fn update(&mut self, snapshot: &GameSnapshot);

    /// The lookahead piece changed
    fn show_upcoming(&mut self, _piece: &Piece) {}

    /// The score total changed
    fn show_score(&mut self, _score: u32) {}

    /// The game ended
    fn show_game_over(&mut self) {}

    /// Every event, in order, before it is dispatched to the methods above
    fn record(&mut self, _event: &GameEvent) {}
}

impl<V: View + ?Sized> View for &mut V {
    fn update(&mut self, snapshot: &GameSnapshot) {
        (**self).update(snapshot)
    }

    fn show_upcoming(&mut self, piece: &Piece) {
        (**self).show_upcoming(piece)
    }

    fn show_score(&mut self, score: u32) {
        (**self).show_score(score)
    }

    fn show_game_over(&mut self) {
        (**self).show_game_over()
    }

    fn record(&mut self, event: &GameEvent) {
        (**self).record(event)
    }
}

impl<A: View, B: View> View for (A, B) {
    fn update(&mut self, snapshot: &GameSnapshot) {
        self.0.update(snapshot);
        self.1.update(snapshot);
    }

    fn show_upcoming(&mut self, piece: &Piece) {
        self.0.show_upcoming(piece);
        self.1.show_upcoming(piece);
    }

    fn show_score(&mut self, score: u32) {
        self.0.show_score(score);
        self.1.show_score(score);
    }

    fn show_game_over(&mut self) {
        self.0.show_game_over();
        self.1.show_game_over();
    }

    fn record(&mut self, event: &GameEvent) {
        self.0.record(event);
        self.1.record(event);
    }
}

/// View that remembers everything it was told (useful in tests and tools)
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    pub events: Vec<GameEvent>,
    pub updates: usize,
    pub last_snapshot: Option<GameSnapshot>,
    pub upcoming: Option<Piece>,
    pub score: Option<u32>,
    pub game_over_shown: usize,
}

impl View for RecordingView {
    fn update(&mut self, snapshot: &GameSnapshot) {
        self.updates += 1;
        match self.last_snapshot.as_mut() {
            Some(last) => last.clone_from(snapshot),
            None => self.last_snapshot = Some(snapshot.clone()),
        }
    }

    fn show_upcoming(&mut self, piece: &Piece) {
        self.upcoming = Some(*piece);
    }

    fn show_score(&mut self, score: u32) {
        self.score = Some(score);
    }

    fn show_game_over(&mut self) {
        self.game_over_shown += 1;
    }

    fn record(&mut self, event: &GameEvent) {
        self.events.push(*event);
    }
}
