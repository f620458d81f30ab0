//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds a piece kind.
//! Uses a flat array for cache locality and zero-allocation row compaction.
//! Coordinates: (x, y) with x in 0..10 left to right, y in 0..20 top to bottom.
//! Pieces may extend above the board (y < 0); those cells are simply not stored.

use arrayvec::ArrayVec;

use crate::core::shape::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const CELL_COUNT: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH || y < 0 || y >= BOARD_HEIGHT {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> i8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> i8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y); None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is inside the board and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Merge a shape into the board at anchor (x, y).
    ///
    /// Cells that map outside the board (including rows above the top) are
    /// dropped silently; callers are expected to have validated the placement.
    pub fn merge(&mut self, shape: &Shape, x: i8, y: i8, kind: PieceKind) {
        for (row, col) in shape.filled_cells() {
            self.set(x + col, y + row, Some(kind));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        self.cells[start..start + BOARD_WIDTH as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove every full row, shift the rest down, and refill the top with
    /// empty rows so the total row count stays constant.
    ///
    /// Returns the cleared row indices, bottom to top. A locking piece spans
    /// at most 4 rows, so at most 4 rows can become full at once.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Two-pointer compaction from the bottom, copy_within per kept row.
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    self.cells.copy_within(src..src + width, write_y * width);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Flat view of the cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
