//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]s, the pause
//! control and quit. It holds no state; whether an action reaches the game
//! is decided by the session's listening gate.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, is_pause_key, should_quit};
