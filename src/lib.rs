//! TUI Blockfall (workspace facade crate).
//!
//! Re-exports the member crates as `tui_blockfall::{core,input,term,audio,types}`
//! and hosts the game loop that ties them together.

pub use tui_blockfall_audio as audio;
pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;

pub mod shell;

pub use shell::{Flow, Shell};
