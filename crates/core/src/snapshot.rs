use crate::controller::ActivePiece;
use crate::generator::Piece;
use crate::types::{Anchor, Cell, GamePhase, PieceKind};

/// What a renderer should draw in one board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewCell {
    #[default]
    Empty,
    /// Part of the falling piece
    Active(PieceKind),
    Frozen(PieceKind),
}

impl ViewCell {
    pub fn kind(&self) -> Option<PieceKind> {
        match self {
            ViewCell::Empty => None,
            ViewCell::Active(kind) | ViewCell::Frozen(kind) => Some(*kind),
        }
    }
}

impl From<Cell> for ViewCell {
    fn from(value: Cell) -> Self {
        match value {
            Cell::Empty => ViewCell::Empty,
            Cell::Frozen(kind) => ViewCell::Frozen(kind),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub anchor: Anchor,
    pub rotation: u8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            anchor: value.anchor,
            rotation: value.rotation,
        }
    }
}

/// Render-ready projection of a game: frozen cells with the falling piece
/// drawn on top, plus the numbers shown around the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major, `width * height` cells
    pub cells: Vec<ViewCell>,
    pub active: Option<ActiveSnapshot>,
    pub upcoming: Option<Piece>,
    pub phase: GamePhase,
    pub score: u32,
    pub lines: u32,
    pub pieces: u32,
}

impl GameSnapshot {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![ViewCell::Empty; width as usize * height as usize],
            active: None,
            upcoming: None,
            phase: GamePhase::Idle,
            score: 0,
            lines: 0,
            pieces: 0,
        }
    }

    /// Cell at `(row, col)`, `None` outside the board
    pub fn cell(&self, row: usize, col: usize) -> Option<ViewCell> {
        if row >= self.height as usize || col >= self.width as usize {
            return None;
        }
        self.cells.get(row * self.width as usize + col).copied()
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[ViewCell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    pub fn paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Active
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
