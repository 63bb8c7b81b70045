//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn row**: 0, horizontally centered per shape
//!
//! Coordinates are `(row, col)` in grid units, row 0 at the top.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Shell loop interval (~60 FPS) |
//! | `GRAVITY_MS` | 1000 | One gravity tick per second |
//! | `SOFT_DROP_MS` | 50 | Gravity interval while soft drop is held |
//! | `SOFT_DROP_GRACE_MS` | 150 | Soft drop override countdown |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{Direction, Position, Shape, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let pos = Position::new(3, 4);
//! assert_eq!(pos.offset(1, -1), Position::new(4, 3));
//!
//! assert_eq!(Direction::Left.col_delta(), -1);
//! assert_eq!(Shape::from_str("t"), Some(Shape::T));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: u16 = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: u16 = 20;

/// Smallest accepted board edge. Every shape fits inside a 4x4 box.
pub const MIN_BOARD_EDGE: u16 = 4;

/// Largest accepted board edge.
pub const MAX_BOARD_EDGE: u16 = 64;

/// Shell loop interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity interval (1000ms = 1 row per second)
pub const GRAVITY_MS: u32 = 1000;

/// Gravity interval while the soft drop override is active.
pub const SOFT_DROP_MS: u32 = 50;

/// Soft drop override countdown, renewed by every soft drop intent.
pub const SOFT_DROP_GRACE_MS: u32 = 150;

/// A grid coordinate in cell units.
///
/// Ordering is lexicographic by `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return this position shifted by `(d_row, d_col)`.
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// Horizontal movement direction for the falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta for one step in this direction.
    pub fn col_delta(&self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Discrete player intents reported by an input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Shift the falling piece one column left
    Left,
    /// Shift the falling piece one column right
    Right,
    /// Temporarily speed up gravity
    SoftDrop,
    /// End the process
    Quit,
}

/// Piece colors.
///
/// Color is cosmetic and drawn independently of the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

impl PieceColor {
    /// The fixed spawn palette.
    pub const PALETTE: [PieceColor; 7] = [
        PieceColor::Cyan,
        PieceColor::Yellow,
        PieceColor::Purple,
        PieceColor::Green,
        PieceColor::Red,
        PieceColor::Blue,
        PieceColor::Orange,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceColor::Cyan => "cyan",
            PieceColor::Yellow => "yellow",
            PieceColor::Purple => "purple",
            PieceColor::Green => "green",
            PieceColor::Red => "red",
            PieceColor::Blue => "blue",
            PieceColor::Orange => "orange",
        }
    }
}

/// The closed set of piece shapes.
///
/// The seven tetrominoes plus a single-cell `Mono` piece. Shapes have one
/// fixed orientation; there is no rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
    Mono,
}

impl Shape {
    /// The seven tetrominoes, the default spawn set.
    pub const TETROMINOES: [Shape; 7] = [
        Shape::I,
        Shape::O,
        Shape::T,
        Shape::S,
        Shape::Z,
        Shape::J,
        Shape::L,
    ];

    /// Parse shape from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::Shape;
    ///
    /// assert_eq!(Shape::from_str("i"), Some(Shape::I));
    /// assert_eq!(Shape::from_str("MONO"), Some(Shape::Mono));
    /// assert_eq!(Shape::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(Shape::I),
            "o" => Some(Shape::O),
            "t" => Some(Shape::T),
            "s" => Some(Shape::S),
            "z" => Some(Shape::Z),
            "j" => Some(Shape::J),
            "l" => Some(Shape::L),
            "mono" | "m" => Some(Shape::Mono),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::I => "i",
            Shape::O => "o",
            Shape::T => "t",
            Shape::S => "s",
            Shape::Z => "z",
            Shape::J => "j",
            Shape::L => "l",
            Shape::Mono => "mono",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceColor)`: Cell settled by a locked piece of that color
pub type Cell = Option<PieceColor>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(FRAME_MS, 16);
        assert_eq!(GRAVITY_MS, 1000);
        assert!(SOFT_DROP_MS < GRAVITY_MS);
        assert!(SOFT_DROP_GRACE_MS >= SOFT_DROP_MS);
    }

    #[test]
    fn position_orders_by_row_then_col() {
        let mut v = vec![
            Position::new(2, 0),
            Position::new(0, 5),
            Position::new(0, 1),
            Position::new(1, 9),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                Position::new(0, 1),
                Position::new(0, 5),
                Position::new(1, 9),
                Position::new(2, 0),
            ]
        );
    }

    #[test]
    fn shape_names_roundtrip() {
        for shape in Shape::TETROMINOES.iter().copied().chain([Shape::Mono]) {
            assert_eq!(Shape::from_str(shape.as_str()), Some(shape));
        }
    }

    #[test]
    fn palette_has_distinct_colors() {
        for (i, a) in PieceColor::PALETTE.iter().enumerate() {
            for b in PieceColor::PALETTE.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
