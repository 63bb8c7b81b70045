//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Intent`] and exposes the
//! [`InputSource`] seam the game loop polls once per frame.

pub mod map;
pub mod source;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::{InputSource, ScriptedInput, TerminalInput};
