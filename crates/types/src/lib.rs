//! Shared types module - vocabulary used by every layer of the game
//!
//! This crate defines the plain data types and gameplay constants shared by
//! the core state machine, the input mapping and the terminal renderer.
//! It has no dependencies so it can be used anywhere.
//!
//! # Board Dimensions
//!
//! The board size is chosen by the caller when a game is built. The defaults
//! match the classic playfield:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! Boards narrower or shorter than [`MIN_BOARD_SIDE`] cannot hold the tallest
//! piece and are rejected.
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TETROMINO_SCORE` | 10 | Awarded for every piece that freezes |
//! | `LINE_SCORE` | 100 | Awarded per cleared line |
//! | `MULTI_LINE_BONUS` | 50 | Extra per line beyond the first in one clear |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{Anchor, Cell, GameAction, PieceKind};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(PieceKind::from_index(kind.index()), Some(kind));
//!
//! let cell = Cell::Frozen(kind);
//! assert!(cell.is_frozen());
//!
//! let anchor = Anchor::new(0, 4).offset(1, 0);
//! assert_eq!(anchor, Anchor::new(1, 4));
//!
//! assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
//! ```

/// Default board width in cells (10 columns)
pub const DEFAULT_BOARD_WIDTH: u16 = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_BOARD_HEIGHT: u16 = 20;

/// Smallest accepted board side; the I piece needs a 4x4 box.
pub const MIN_BOARD_SIDE: u16 = 4;

/// Largest accepted board side.
pub const MAX_BOARD_SIDE: u16 = 255;

/// Gravity tick period in milliseconds (one row per second)
pub const TICK_MS: u32 = 1000;

/// Points awarded when any piece freezes
pub const TETROMINO_SCORE: u32 = 10;

/// Points awarded per cleared line
pub const LINE_SCORE: u32 = 100;

/// Bonus per extra line when more than one line clears at once
pub const MULTI_LINE_BONUS: u32 = 50;

/// Spawn columns are drawn from `0..width - SPAWN_COLUMN_MARGIN`.
pub const SPAWN_COLUMN_MARGIN: u16 = 3;

/// Number of piece kinds in the catalog
pub const PIECE_KIND_COUNT: usize = 7;

/// The seven piece kinds, in catalog order
///
/// - **L**: three tall with a foot to the right
/// - **I**: four in a line
/// - **J**: three tall with a foot to the left
/// - **O**: 2x2 square
/// - **S**: S-shaped
/// - **T**: T-shaped
/// - **Z**: Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    L,
    I,
    J,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; PIECE_KIND_COUNT] = [
        PieceKind::L,
        PieceKind::I,
        PieceKind::J,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Position of this kind in the catalog
    pub fn index(self) -> usize {
        match self {
            PieceKind::L => 0,
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    /// Kind at a catalog position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "l" => Some(PieceKind::L),
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::L => "l",
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// A cell on the game board
///
/// Frozen cells remember which kind produced them; the kind only affects
/// rendering. A frozen cell only becomes empty again when its whole line is
/// removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Frozen(PieceKind),
}

impl Cell {
    pub fn is_frozen(&self) -> bool {
        matches!(self, Cell::Frozen(_))
    }

    pub fn kind(&self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::Frozen(kind) => Some(*kind),
        }
    }
}

/// Top-left corner of a piece's bounding box, in board coordinates.
///
/// Signed so that candidate positions left of column 0 can be expressed and
/// rejected by the placement check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Anchor {
    pub row: i16,
    pub col: i16,
}

impl Anchor {
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    /// Anchor shifted by `d_row` rows and `d_col` columns
    pub fn offset(self, d_row: i16, d_col: i16) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// Player actions delivered by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one row down (never freezes it)
    ShiftDown,
    /// Move piece one column left
    ShiftLeft,
    /// Move piece one column right
    ShiftRight,
    /// Rotate piece 90° clockwise in place
    Rotate,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("shiftLeft"), Some(GameAction::ShiftLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "shiftdown" => Some(GameAction::ShiftDown),
            "shiftleft" => Some(GameAction::ShiftLeft),
            "shiftright" => Some(GameAction::ShiftRight),
            "rotate" => Some(GameAction::Rotate),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::ShiftDown => "shiftDown",
            GameAction::ShiftLeft => "shiftLeft",
            GameAction::ShiftRight => "shiftRight",
            GameAction::Rotate => "rotate",
        }
    }
}

/// Lifecycle phase of a game
///
/// `Idle` → `Spawning` → `Active` ⇄ `Paused`, and from `Spawning` to the
/// terminal `GameOver` when a new piece does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Idle,
    Spawning,
    Active,
    Paused,
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Spawning => "spawning",
            GamePhase::Active => "active",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "gameOver",
        }
    }
}
