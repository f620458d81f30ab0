//! Shape module - tetromino matrices and rotation
//!
//! A shape is a small boolean matrix (at most 4x4) with explicit row and
//! column counts. Rotation is a pure matrix transform; wall-kick resolution
//! against a board lives in the session state machine.

use crate::types::PieceKind;

/// Upper bound on shape matrix dimensions
pub const SHAPE_MAX: usize = 4;

/// A piece shape: `rows x cols` boolean matrix stored in a fixed 4x4 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: i8,
    cols: i8,
    cells: [[bool; SHAPE_MAX]; SHAPE_MAX],
}

impl Shape {
    fn from_pattern(pattern: &[&[u8]]) -> Self {
        debug_assert!(!pattern.is_empty() && pattern.len() <= SHAPE_MAX);
        debug_assert!(pattern.iter().all(|row| row.len() == pattern[0].len()));

        let mut cells = [[false; SHAPE_MAX]; SHAPE_MAX];
        for (r, row) in pattern.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }
        Self {
            rows: pattern.len() as i8,
            cols: pattern[0].len() as i8,
            cells,
        }
    }

    /// Number of rows in the matrix
    pub fn rows(&self) -> i8 {
        self.rows
    }

    /// Number of columns in the matrix
    pub fn cols(&self) -> i8 {
        self.cols
    }

    /// Whether the matrix cell at (row, col) is occupied
    pub fn is_filled(&self, row: i8, col: i8) -> bool {
        if row < 0 || row >= self.rows || col < 0 || col >= self.cols {
            return false;
        }
        self.cells[row as usize][col as usize]
    }

    /// Iterate occupied cells as (row, col) offsets
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows).flat_map(move |r| {
            (0..self.cols).filter_map(move |c| self.cells[r as usize][c as usize].then_some((r, c)))
        })
    }

    /// Rotate 90 degrees clockwise.
    ///
    /// The new row for original column `c` is built from original rows in
    /// reverse order: `new[c][rows - 1 - r] = old[r][c]`. Dimensions swap.
    pub fn rotated_cw(&self) -> Self {
        let mut cells = [[bool::default(); SHAPE_MAX]; SHAPE_MAX];
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        for r in 0..rows {
            for c in 0..cols {
                cells[c][rows - 1 - r] = self.cells[r][c];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// Canonical spawn-orientation shape for a piece kind
pub fn spawn_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_pattern(&[&[1, 1, 1, 1]]),
        PieceKind::O => Shape::from_pattern(&[&[1, 1], &[1, 1]]),
        PieceKind::T => Shape::from_pattern(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::S => Shape::from_pattern(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::Z => Shape::from_pattern(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::J => Shape::from_pattern(&[&[1, 0, 0], &[1, 1, 1]]),
        PieceKind::L => Shape::from_pattern(&[&[0, 0, 1], &[1, 1, 1]]),
    }
}
