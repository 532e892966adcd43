//! TermView: the terminal's rendering collaborator.
//!
//! Collects notifications from the core into a local snapshot and remembers
//! whether anything changed since the last frame was drawn.

use crate::core::{GameSnapshot, Piece, View};
use crate::types::GamePhase;

#[derive(Debug, Clone, Default)]
pub struct TermView {
    snapshot: GameSnapshot,
    dirty: bool,
}

impl TermView {
    pub fn new() -> Self {
        Self {
            snapshot: GameSnapshot::default(),
            dirty: true,
        }
    }

    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    /// Whether a redraw is needed; clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Force a redraw (e.g. after a terminal resize).
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }
}

impl View for TermView {
    fn update(&mut self, snapshot: &GameSnapshot) {
        self.snapshot.clone_from(snapshot);
        self.dirty = true;
    }

    fn show_upcoming(&mut self, piece: &Piece) {
        self.snapshot.upcoming = Some(*piece);
        self.dirty = true;
    }

    fn show_score(&mut self, score: u32) {
        self.snapshot.score = score;
        self.dirty = true;
    }

    fn show_game_over(&mut self) {
        self.snapshot.phase = GamePhase::GameOver;
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameController;

    #[test]
    fn flush_marks_dirty_and_copies_snapshot() {
        let mut game = GameController::with_seed(10, 20, 5);
        let mut view = TermView::new();
        assert!(view.take_dirty());
        assert!(!view.take_dirty());

        game.start();
        game.flush_to(&mut view);
        assert!(view.take_dirty());
        assert_eq!(view.snapshot().phase, GamePhase::Active);
        assert_eq!(view.snapshot().width, 10);
        assert!(view.snapshot().active.is_some());
    }

    #[test]
    fn game_over_sets_phase() {
        let mut view = TermView::new();
        view.take_dirty();
        view.show_game_over();
        assert!(view.snapshot().game_over());
        assert!(view.take_dirty());
    }
}
