//! Controller module - the game state machine
//!
//! The controller owns the grid, the falling piece, the generator, the score
//! and the random source. Everything that changes the game goes through it:
//! spawning, shifting, rotating, freezing, clearing lines and ending the game.
//!
//! It knows nothing about time or keyboards. A scheduler calls [`GameController::tick`]
//! at a fixed period and an input layer calls the move/rotate actions; both
//! are plain synchronous calls.
//!
//! Gravity and the manual down action differ on purpose: only a tick turns a
//! blocked downward shift into a freeze. [`GameController::move_down`] just
//! reports whether the piece moved.

use rand::Rng;

use crate::generator::{Piece, PieceGenerator};
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::scoring::ScoreKeeper;
use crate::shapes::{rotate, Shape};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, ViewCell};
use crate::types::{Anchor, GameAction, GamePhase, PieceKind, SPAWN_COLUMN_MARGIN};
use crate::view::{GameEvent, View};

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Current orientation
    pub shape: Shape,
    pub anchor: Anchor,
    /// Quarter turns since spawn, mod 4
    pub rotation: u8,
}

/// Result of one gravity tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running (paused or over)
    Ignored,
    /// Piece moved down one row
    Shifted,
    /// Piece froze, lines were cleared and the next piece spawned
    Frozen { lines: u32 },
    /// Piece froze and the next piece did not fit
    GameOver { lines: u32 },
}

#[derive(Debug, Clone)]
pub struct GameController<R = SimpleRng> {
    grid: Grid,
    active: Option<ActivePiece>,
    generator: PieceGenerator,
    score: ScoreKeeper,
    rng: R,
    phase: GamePhase,
    events: Vec<GameEvent>,
}

impl GameController<SimpleRng> {
    /// New game on an empty `width x height` board with a deterministic RNG
    pub fn with_seed(width: u16, height: u16, seed: u32) -> Self {
        Self::new(width, height, SimpleRng::new(seed))
    }
}

impl<R: Rng> GameController<R> {
    /// New game on an empty `width x height` board
    pub fn new(width: u16, height: u16, rng: R) -> Self {
        Self::from_grid(Grid::new(width, height), rng)
    }

    /// New game on a prepared board (puzzles, tests)
    pub fn from_grid(grid: Grid, mut rng: R) -> Self {
        let generator = PieceGenerator::new(&mut rng);
        let upcoming = generator.upcoming().kind;
        Self {
            grid,
            active: None,
            generator,
            score: ScoreKeeper::new(),
            rng,
            phase: GamePhase::Idle,
            events: vec![GameEvent::UpcomingChanged(upcoming), GameEvent::GridChanged],
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn upcoming(&self) -> &Piece {
        self.generator.upcoming()
    }

    pub fn score(&self) -> u32 {
        self.score.total()
    }

    pub fn lines(&self) -> u32 {
        self.score.lines()
    }

    pub fn pieces(&self) -> u32 {
        self.score.pieces()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Spawn the first piece. Returns `false` if the game was already started.
    ///
    /// Ends the game immediately if the first piece does not fit.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Idle {
            return false;
        }
        self.spawn_next();
        true
    }

    /// Gravity step: shift down, or freeze, clear lines and spawn the next piece.
    pub fn tick(&mut self) -> TickOutcome {
        self.assert_started();
        if self.phase != GamePhase::Active {
            return TickOutcome::Ignored;
        }

        if self.try_move(1, 0) {
            return TickOutcome::Shifted;
        }

        let lines = self.freeze_active();
        if self.spawn_next() {
            TickOutcome::Frozen { lines }
        } else {
            TickOutcome::GameOver { lines }
        }
    }

    /// Shift the piece down one row. Never freezes.
    pub fn move_down(&mut self) -> bool {
        self.guarded_move(1, 0)
    }

    pub fn move_left(&mut self) -> bool {
        self.guarded_move(0, -1)
    }

    pub fn move_right(&mut self) -> bool {
        self.guarded_move(0, 1)
    }

    /// Turn the piece a quarter clockwise in place, without kicks.
    ///
    /// Each press turns the current shape exactly once; turns never compound,
    /// so four presses always return to the starting orientation.
    pub fn rotate(&mut self) -> bool {
        self.assert_started();
        if self.phase != GamePhase::Active {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let shape = rotate(&active.shape, 1);
        if !self.grid.can_place(&shape, active.anchor) {
            return false;
        }

        self.active = Some(ActivePiece {
            shape,
            rotation: (active.rotation + 1) % 4,
            ..active
        });
        self.events.push(GameEvent::GridChanged);
        true
    }

    /// Apply an input action. Returns whether the piece changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::ShiftDown => self.move_down(),
            GameAction::ShiftLeft => self.move_left(),
            GameAction::ShiftRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
        }
    }

    /// Active → Paused. Board, piece and score are untouched.
    pub fn pause(&mut self) -> bool {
        if self.phase != GamePhase::Active {
            return false;
        }
        self.set_phase(GamePhase::Paused);
        true
    }

    /// Paused → Active.
    pub fn resume(&mut self) -> bool {
        if self.phase != GamePhase::Paused {
            return false;
        }
        self.set_phase(GamePhase::Active);
        true
    }

    /// Place `piece` with its box at `anchor` as the falling piece.
    ///
    /// On success the game is `Active`; if the piece does not fit the game is
    /// over. Used for every spawn; also handy for setting up positions.
    pub fn spawn_at(&mut self, piece: Piece, anchor: Anchor) -> bool {
        self.assert_started();
        if matches!(self.phase, GamePhase::GameOver | GamePhase::Paused) {
            return false;
        }

        self.set_phase(GamePhase::Spawning);
        if !self.grid.can_place(&piece.shape, anchor) {
            self.active = None;
            self.set_phase(GamePhase::GameOver);
            self.events.push(GameEvent::GameOver);
            return false;
        }

        self.active = Some(ActivePiece {
            kind: piece.kind,
            shape: piece.shape,
            anchor,
            rotation: 0,
        });
        self.events.push(GameEvent::GridChanged);
        self.set_phase(GamePhase::Active);
        true
    }

    /// Take the lookahead piece and spawn it at row 0 in a random column.
    fn spawn_next(&mut self) -> bool {
        self.set_phase(GamePhase::Spawning);
        let piece = self.generator.next(&mut self.rng);
        self.events
            .push(GameEvent::UpcomingChanged(self.generator.upcoming().kind));

        let columns = self.grid.width().saturating_sub(SPAWN_COLUMN_MARGIN).max(1);
        let col = self.rng.gen_range(0..columns) as i16;
        self.spawn_at(piece, Anchor::new(0, col))
    }

    /// Freeze the falling piece, award points and clear lines.
    fn freeze_active(&mut self) -> u32 {
        let Some(active) = self.active.take() else {
            return 0;
        };

        self.grid.freeze(&active.shape, active.anchor, active.kind);
        self.events.push(GameEvent::PieceFrozen(active.kind));
        self.score.count_tetromino();
        self.events.push(GameEvent::ScoreChanged(self.score.total()));

        let lines = self.grid.clear_completed_lines() as u32;
        if lines > 0 {
            self.events.push(GameEvent::LinesCleared(lines));
        }
        self.events.push(GameEvent::GridChanged);
        self.score.count_lines(lines);
        self.events.push(GameEvent::ScoreChanged(self.score.total()));
        lines
    }

    fn guarded_move(&mut self, d_row: i16, d_col: i16) -> bool {
        self.assert_started();
        if self.phase != GamePhase::Active {
            return false;
        }
        self.try_move(d_row, d_col)
    }

    fn try_move(&mut self, d_row: i16, d_col: i16) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let anchor = active.anchor.offset(d_row, d_col);
        if !self.grid.can_place(&active.shape, anchor) {
            return false;
        }

        self.active = Some(ActivePiece { anchor, ..active });
        self.events.push(GameEvent::GridChanged);
        true
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            self.phase = phase;
            self.events.push(GameEvent::PhaseChanged(phase));
        }
    }

    fn assert_started(&self) {
        assert!(
            self.phase != GamePhase::Idle,
            "game action invoked before start()"
        );
    }

    /// Project the board with the falling piece drawn on top.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.cells.clear();
        out.cells
            .extend(self.grid.cells().iter().map(|&c| ViewCell::from(c)));

        if let Some(active) = self.active {
            let width = self.grid.width() as usize;
            for &(dr, dc) in active.shape.occupied().iter() {
                let row = active.anchor.row + dr as i16;
                let col = active.anchor.col + dc as i16;
                if row >= 0 && col >= 0 {
                    let idx = row as usize * width + col as usize;
                    if let Some(cell) = out.cells.get_mut(idx) {
                        *cell = ViewCell::Active(active.kind);
                    }
                }
            }
        }

        out.active = self.active.map(ActiveSnapshot::from);
        out.upcoming = Some(*self.generator.upcoming());
        out.phase = self.phase;
        out.score = self.score.total();
        out.lines = self.score.lines();
        out.pieces = self.score.pieces();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take queued notifications without dispatching them.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Deliver queued notifications to `view`, in order.
    ///
    /// Board and phase changes trigger `update` with the current projection,
    /// at most once per flush.
    pub fn flush_to<V: View + ?Sized>(&mut self, view: &mut V) {
        if self.events.is_empty() {
            return;
        }
        let events = std::mem::take(&mut self.events);
        let mut updated = false;
        for event in &events {
            view.record(event);
            match *event {
                GameEvent::GridChanged | GameEvent::PhaseChanged(_) if !updated => {
                    view.update(&self.snapshot());
                    updated = true;
                }
                GameEvent::UpcomingChanged(_) => view.show_upcoming(self.generator.upcoming()),
                GameEvent::ScoreChanged(total) => view.show_score(total),
                GameEvent::GameOver => view.show_game_over(),
                _ => {}
            }
        }
        // Reuse the allocation for the next batch.
        self.events = events;
        self.events.clear();
    }
}
