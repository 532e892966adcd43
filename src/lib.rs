//! TUI Blockfall (workspace facade crate).
//!
//! The game logic, input mapping and terminal rendering live in dedicated
//! crates under `crates/`; this package re-exports them as
//! `tui_blockfall::{core,input,term,types}` and adds the runtime pieces the
//! binary needs: configuration and the gameplay event log.

pub mod config;
pub mod event_log;

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;
