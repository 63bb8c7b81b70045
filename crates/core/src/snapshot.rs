use crate::engine::Phase;
use crate::pieces::{Piece, PieceCells};
use crate::types::{Cell, PieceColor, Position, Shape, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub color: PieceColor,
    pub anchor: Position,
    pub cells: PieceCells,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            shape: value.shape(),
            color: value.color(),
            anchor: value.anchor(),
            cells: value.occupied_cells(),
        }
    }
}

/// Read-only copy of the engine state for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major board cells.
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub phase: Phase,
    pub game_over: bool,
    pub piece_id: u32,
}

impl GameSnapshot {
    /// Cell at `(row, col)`, or None when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.height as usize || col >= self.width as usize {
            return None;
        }
        self.board.get(row * self.width as usize + col).copied()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            board: vec![None; BOARD_WIDTH as usize * BOARD_HEIGHT as usize],
            active: None,
            phase: Phase::Spawning,
            game_over: false,
            piece_id: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_reads_row_major() {
        let mut snap = GameSnapshot::default();
        snap.board[2 * BOARD_WIDTH as usize + 3] = Some(PieceColor::Red);
        assert_eq!(snap.cell(2, 3), Some(Some(PieceColor::Red)));
        assert_eq!(snap.cell(3, 2), Some(None));
        assert_eq!(snap.cell(BOARD_HEIGHT as usize, 0), None);
    }

    #[test]
    fn cell_with_short_board_is_none() {
        let snap = GameSnapshot {
            board: vec![None; 5],
            ..GameSnapshot::default()
        };
        assert_eq!(snap.cell(0, 4), Some(None));
        assert_eq!(snap.cell(19, 9), None);
    }
}
