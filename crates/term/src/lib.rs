//! Terminal front-end for the falling-block game.
//!
//! Renders into a simple framebuffer that is then flushed to a terminal
//! backend, rather than going through a widget toolkit.
//!
//! - [`TermView`] receives notifications from the core and keeps the latest
//!   snapshot plus a dirty flag.
//! - [`GameView`] turns a snapshot into a [`FrameBuffer`] (pure, testable).
//! - [`TerminalRenderer`] writes frames to the terminal, diffing against the
//!   previous one.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod term_view;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use term_view::TermView;
