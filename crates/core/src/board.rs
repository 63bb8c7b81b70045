//! Board module - manages the game grid
//!
//! The board is a fixed `width x height` grid where each cell is empty or holds
//! the color of a locked piece. Uses a flat vector in row-major order
//! (`row * width + col`) for cache locality.
//! Coordinates: `(row, col)`, row 0 is the top.

use crate::pieces::Piece;
use crate::types::{Cell, Position};

/// The game board
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Flat vector of cells, row-major order
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "board must have at least one cell");
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(pos.row as usize * self.width as usize + pos.col as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// True if `0 <= row < height` and `0 <= col < width`
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.row < self.height as i32
            && pos.col >= 0
            && pos.col < self.width as i32
    }

    /// Get cell at position. Returns None if out of bounds.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Set cell at position. Returns false if out of bounds.
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row).is_some_and(|cells| cells.iter().all(Option::is_some))
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        let start = row * width;
        Some(&self.cells[start..start + width])
    }

    /// Write a locked piece's color into every cell it occupies.
    ///
    /// # Panics
    ///
    /// Panics if any cell is out of bounds or already occupied. Callers must
    /// check the placement with [`crate::collision::fits`] first.
    pub fn merge(&mut self, piece: &Piece) {
        let cells = piece.occupied_cells();
        for &pos in &cells {
            assert!(self.in_bounds(pos), "merge out of bounds at {:?}", pos);
            assert!(!self.is_occupied(pos), "merge onto occupied cell {:?}", pos);
        }
        for pos in cells {
            self.set(pos, Some(piece.color()));
        }
    }

    /// Remove every filled row in a single pass and return how many were removed.
    ///
    /// Surviving rows keep their relative order and settle at the bottom;
    /// the same number of empty rows are inserted at the top.
    pub fn clear_filled_rows(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        assert_eq!(self.cells.len(), width * height, "malformed board grid");

        let keep: Vec<usize> = (0..height).filter(|&row| !self.is_row_full(row)).collect();
        let cleared = height - keep.len();
        if cleared == 0 {
            return 0;
        }

        let mut next = vec![None; width * height];
        for (i, &row) in keep.iter().enumerate() {
            let dst = (cleared + i) * width;
            next[dst..dst + width].copy_from_slice(&self.cells[row * width..(row + 1) * width]);
        }
        self.cells = next;

        cleared
    }

    /// Check if any spawn cell is already taken (game over condition)
    pub fn is_spawn_blocked(&self, spawn_cells: &[Position]) -> bool {
        spawn_cells.iter().any(|&pos| self.is_occupied(pos))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from rows of cells
    ///
    /// # Panics
    ///
    /// Panics if the rows are empty or ragged.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len();
        assert!(height > 0, "board needs at least one row");
        let width = rows[0].len();
        assert!(rows.iter().all(|r| r.len() == width), "ragged board rows");

        let mut board = Self::new(width as u16, height as u16);
        for (row, cells) in rows.into_iter().enumerate() {
            let start = row * width;
            board.cells[start..start + width].copy_from_slice(&cells);
        }
        board
    }

    /// Convert to rows of cells
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.width as usize)
            .map(<[Cell]>::to_vec)
            .collect()
    }
}
