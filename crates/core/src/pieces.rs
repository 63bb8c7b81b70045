//! Pieces module - shape definitions and the falling piece
//!
//! Each shape is a fixed set of 1..4 `(row, col)` offsets from the piece anchor,
//! normalized so that the smallest row and column offsets are both 0.
//! Pieces never rotate.

use arrayvec::ArrayVec;

use crate::types::{PieceColor, Position, Shape};

/// Offset of a single cell relative to the piece anchor, as `(d_row, d_col)`
pub type CellOffset = (i32, i32);

/// Maximum number of cells in any shape
pub const MAX_PIECE_CELLS: usize = 4;

/// Absolute cells occupied by a piece
pub type PieceCells = ArrayVec<Position, MAX_PIECE_CELLS>;

/// Get the cell offsets for a shape
pub fn get_shape(shape: Shape) -> &'static [CellOffset] {
    match shape {
        // ####
        Shape::I => &[(0, 0), (0, 1), (0, 2), (0, 3)],
        // ##
        // ##
        Shape::O => &[(0, 0), (0, 1), (1, 0), (1, 1)],
        // ###
        //  #
        Shape::T => &[(0, 0), (0, 1), (0, 2), (1, 1)],
        //  ##
        // ##
        Shape::S => &[(0, 1), (0, 2), (1, 0), (1, 1)],
        // ##
        //  ##
        Shape::Z => &[(0, 0), (0, 1), (1, 1), (1, 2)],
        // #
        // ###
        Shape::J => &[(0, 0), (1, 0), (1, 1), (1, 2)],
        //   #
        // ###
        Shape::L => &[(0, 2), (1, 0), (1, 1), (1, 2)],
        Shape::Mono => &[(0, 0)],
    }
}

/// Width of a shape in columns
pub fn shape_width(shape: Shape) -> i32 {
    get_shape(shape)
        .iter()
        .map(|&(_, dc)| dc + 1)
        .max()
        .unwrap_or(0)
}

/// Height of a shape in rows
pub fn shape_height(shape: Shape) -> i32 {
    get_shape(shape)
        .iter()
        .map(|&(dr, _)| dr + 1)
        .max()
        .unwrap_or(0)
}

/// Spawn anchor for a shape on a board of the given width: top row,
/// horizontally centered.
pub fn spawn_anchor(shape: Shape, board_width: u16) -> Position {
    let col = (board_width as i32 - shape_width(shape)) / 2;
    Position::new(0, col.max(0))
}

/// A falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    shape: Shape,
    color: PieceColor,
    anchor: Position,
}

impl Piece {
    pub fn new(shape: Shape, color: PieceColor, anchor: Position) -> Self {
        Self {
            shape,
            color,
            anchor,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn color(&self) -> PieceColor {
        self.color
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// Absolute board cells covered by this piece
    pub fn occupied_cells(&self) -> PieceCells {
        get_shape(self.shape)
            .iter()
            .map(|&(dr, dc)| self.anchor.offset(dr, dc))
            .collect()
    }

    /// A copy of this piece with the anchor shifted. No legality check.
    pub fn translated(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            anchor: self.anchor.offset(d_row, d_col),
            ..*self
        }
    }

    pub fn move_left(&mut self) {
        *self = self.translated(0, -1);
    }

    pub fn move_right(&mut self) {
        *self = self.translated(0, 1);
    }

    pub fn move_down(&mut self) {
        *self = self.translated(1, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_shapes() -> impl Iterator<Item = Shape> {
        Shape::TETROMINOES.iter().copied().chain([Shape::Mono])
    }

    #[test]
    fn test_shapes_are_normalized() {
        for shape in all_shapes() {
            let offsets = get_shape(shape);
            assert!(!offsets.is_empty() && offsets.len() <= MAX_PIECE_CELLS);
            assert_eq!(offsets.iter().map(|o| o.0).min(), Some(0), "{:?}", shape);
            assert_eq!(offsets.iter().map(|o| o.1).min(), Some(0), "{:?}", shape);
        }
    }

    #[test]
    fn test_shapes_have_distinct_cells() {
        for shape in all_shapes() {
            let offsets = get_shape(shape);
            for (i, a) in offsets.iter().enumerate() {
                assert!(!offsets[i + 1..].contains(a), "{:?} repeats {:?}", shape, a);
            }
        }
    }

    #[test]
    fn test_shape_dimensions() {
        assert_eq!((shape_height(Shape::I), shape_width(Shape::I)), (1, 4));
        assert_eq!((shape_height(Shape::O), shape_width(Shape::O)), (2, 2));
        assert_eq!((shape_height(Shape::T), shape_width(Shape::T)), (2, 3));
        assert_eq!((shape_height(Shape::Mono), shape_width(Shape::Mono)), (1, 1));
    }

    #[test]
    fn test_spawn_anchor_is_centered() {
        assert_eq!(spawn_anchor(Shape::Mono, 10), Position::new(0, 4));
        assert_eq!(spawn_anchor(Shape::I, 10), Position::new(0, 3));
        assert_eq!(spawn_anchor(Shape::O, 10), Position::new(0, 4));
        assert_eq!(spawn_anchor(Shape::T, 10), Position::new(0, 3));
    }

    #[test]
    fn test_occupied_cells_follow_anchor() {
        let mut piece = Piece::new(Shape::O, PieceColor::Yellow, Position::new(5, 2));
        let cells = piece.occupied_cells();
        assert_eq!(
            cells.as_slice(),
            &[
                Position::new(5, 2),
                Position::new(5, 3),
                Position::new(6, 2),
                Position::new(6, 3)
            ]
        );

        piece.move_down();
        piece.move_right();
        assert_eq!(piece.anchor(), Position::new(6, 3));
        assert_eq!(piece.occupied_cells()[0], Position::new(6, 3));

        piece.move_left();
        assert_eq!(piece.anchor(), Position::new(6, 2));
    }

    #[test]
    fn test_translated_leaves_original_untouched() {
        let piece = Piece::new(Shape::T, PieceColor::Purple, Position::new(0, 3));
        let moved = piece.translated(2, -1);

        assert_eq!(piece.anchor(), Position::new(0, 3));
        assert_eq!(moved.anchor(), Position::new(2, 2));
        assert_eq!(moved.shape(), Shape::T);
        assert_eq!(moved.color(), PieceColor::Purple);
    }
}
