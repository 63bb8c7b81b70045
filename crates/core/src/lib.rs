//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and state machine of the falling-block
//! game. It has **no dependencies** on terminal I/O, input or audio, making it:
//!
//! - **Deterministic**: Same seed and same inputs produce identical games
//! - **Testable**: Unit tests for every rule beside the code
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid of settled cells, merging and row clearing
//! - [`pieces`]: shape definitions and the falling [`Piece`]
//! - [`collision`]: in-bounds / occupancy tests for candidate moves
//! - [`engine`]: the spawn / fall / lock / clear state machine
//! - [`gravity`]: gravity cadence with a soft drop override
//! - [`rng`]: uniform shape and color selection
//! - [`config`]: game configuration and validation
//! - [`snapshot`]: read-only state copies for renderers
//!
//! # Game Rules
//!
//! - One piece falls at a time; it moves left, right, or down, never rotates
//! - A piece that cannot move down locks into the board
//! - Every completely filled row is removed in one pass after a lock
//! - The game ends when a new piece's spawn cells are already taken
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{GameConfig, GameEngine, Phase};
//! use tui_blockfall_types::Direction;
//!
//! let mut engine = GameEngine::new(&GameConfig::default()).unwrap();
//! engine.start();
//!
//! engine.try_move(Direction::Left);
//! engine.tick();
//!
//! let snap = engine.snapshot();
//! assert_eq!(snap.phase, Phase::Falling);
//! assert!(!snap.game_over);
//! ```
//!
//! # Timing
//!
//! The engine has no clock of its own. The shell feeds elapsed time to a
//! [`GravityClock`] and calls [`GameEngine::tick`] whenever a tick is due.

pub mod board;
pub mod collision;
pub mod config;
pub mod engine;
pub mod gravity;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::can_move;
pub use config::{parse_shapes, ConfigError, GameConfig};
pub use engine::{GameEngine, Phase, TickOutcome};
pub use gravity::GravityClock;
pub use pieces::{get_shape, Piece, PieceCells};
pub use rng::{Randomizer, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
