//! Collision checks between a piece and the board.
//!
//! Walls, floor and settled cells are all the same test: a destination cell
//! must be in bounds and empty.

use crate::board::Board;
use crate::pieces::Piece;

/// True if every cell of `piece` lies in bounds on an empty board cell.
pub fn fits(piece: &Piece, board: &Board) -> bool {
    piece
        .occupied_cells()
        .iter()
        .all(|&pos| board.in_bounds(pos) && !board.is_occupied(pos))
}

/// True if `piece` translated by `(d_row, d_col)` would fit on `board`.
pub fn can_move(piece: &Piece, board: &Board, d_row: i32, d_col: i32) -> bool {
    fits(&piece.translated(d_row, d_col), board)
}

/// True if the piece cannot move down any further.
pub fn is_grounded(piece: &Piece, board: &Board) -> bool {
    !can_move(piece, board, 1, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceColor, Position, Shape};

    fn piece(shape: Shape, row: i32, col: i32) -> Piece {
        Piece::new(shape, PieceColor::Cyan, Position::new(row, col))
    }

    #[test]
    fn test_walls_block_horizontal_moves() {
        let board = Board::new(10, 20);

        let left = piece(Shape::O, 5, 0);
        assert!(!can_move(&left, &board, 0, -1));
        assert!(can_move(&left, &board, 0, 1));

        let right = piece(Shape::I, 5, 6);
        assert!(!can_move(&right, &board, 0, 1));
        assert!(can_move(&right, &board, 0, -1));
    }

    #[test]
    fn test_floor_blocks_downward_move() {
        let board = Board::new(10, 20);
        let p = piece(Shape::O, 18, 4);
        assert!(!can_move(&p, &board, 1, 0));
        assert!(is_grounded(&p, &board));
        assert!(!is_grounded(&piece(Shape::O, 17, 4), &board));
    }

    #[test]
    fn test_settled_cells_block_any_direction() {
        let mut board = Board::new(10, 20);
        board.set(Position::new(10, 5), Some(PieceColor::Red));

        // Directly above.
        assert!(!can_move(&piece(Shape::Mono, 9, 5), &board, 1, 0));
        // Side neighbours.
        assert!(!can_move(&piece(Shape::Mono, 10, 4), &board, 0, 1));
        assert!(!can_move(&piece(Shape::Mono, 10, 6), &board, 0, -1));
        // Diagonal is free.
        assert!(can_move(&piece(Shape::Mono, 9, 4), &board, 1, 0));
    }

    #[test]
    fn test_partial_horizontal_overlap_is_detected() {
        let mut board = Board::new(10, 20);
        board.set(Position::new(11, 2), Some(PieceColor::Red));

        // T occupies (10,1) (10,2) (10,3) (11,2); shifting down lands (12,2) and (11,1..=3).
        let t = piece(Shape::T, 10, 1);
        assert!(!fits(&t, &board));
        let t = piece(Shape::T, 9, 1);
        assert!(fits(&t, &board));
        assert!(!can_move(&t, &board, 1, 0));
    }

    #[test]
    fn test_out_of_range_above_top_does_not_fit() {
        let board = Board::new(10, 20);
        assert!(!can_move(&piece(Shape::Mono, 0, 0), &board, -1, 0));
    }
}
