//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and the state machine. It has no
//! terminal, file or clock-driven code of its own, which makes it:
//!
//! - **Deterministic**: the random source is injected, so a seed replays a game
//! - **Testable**: every transition can be driven by direct calls
//! - **Portable**: any front-end consumes the same notifications
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven piece shapes and the rotation transform
//! - [`grid`]: fixed-size board with placement checks and line compaction
//! - [`rng`]: small seedable LCG implementing `rand::RngCore`
//! - [`generator`]: random pieces with one piece of lookahead
//! - [`scoring`]: piece and line-clear awards
//! - [`controller`]: the game state machine
//! - [`snapshot`]: render-ready projection of a game
//! - [`view`]: notifications for rendering collaborators
//! - [`scheduler`]: fixed-period tick sources
//! - [`session`]: controller + scheduler + input gate
//!
//! # Game Rules
//!
//! - New pieces appear on row 0 in a random column, already turned by a
//!   random number of quarter turns.
//! - Rotation turns the piece in place; if it does not fit it does not turn.
//! - Each tick moves the piece down one row. When it cannot move it freezes,
//!   full rows are removed and the next piece spawns. A piece that cannot
//!   spawn ends the game.
//! - 10 points per frozen piece; 100 per line, plus 50 per extra line in a
//!   multi-line clear.
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{GameController, TickOutcome};
//! use tui_blockfall_core::types::{GameAction, GamePhase};
//!
//! let mut game = GameController::with_seed(10, 20, 12345);
//! game.start();
//! assert_eq!(game.phase(), GamePhase::Active);
//!
//! game.apply_action(GameAction::ShiftLeft);
//! game.apply_action(GameAction::Rotate);
//!
//! // Let gravity run until the first piece lands.
//! while let TickOutcome::Shifted = game.tick() {}
//! assert_eq!(game.score(), 10);
//! ```

pub mod controller;
pub mod generator;
pub mod grid;
pub mod rng;
pub mod scheduler;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;
pub mod view;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use controller::{ActivePiece, GameController, TickOutcome};
pub use generator::{Piece, PieceGenerator};
pub use grid::Grid;
pub use rng::SimpleRng;
pub use scheduler::{IntervalScheduler, ManualScheduler, Scheduler};
pub use scoring::{calculate_line_score, ScoreKeeper};
pub use session::Session;
pub use shapes::{get_shape, rotate, Shape};
pub use snapshot::{ActiveSnapshot, GameSnapshot, ViewCell};
pub use view::{GameEvent, RecordingView, View};
