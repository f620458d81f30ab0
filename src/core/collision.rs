//! Collision detector
//!
//! Decides whether a candidate placement (shape + anchor) is illegal on a
//! board. Rows above the board (y < 0) are deliberately asymmetric: they are
//! never out of bounds and are excluded from the occupancy check, so pieces
//! may spawn or rotate partially above the visible area.

use crate::core::board::Board;
use crate::core::shape::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Returns true iff the placement is illegal: some filled shape cell maps to
/// a column outside [0, width), a row >= height, or an occupied cell at a
/// row >= 0.
pub fn collides(board: &Board, shape: &Shape, x: i8, y: i8) -> bool {
    for (row, col) in shape.filled_cells() {
        let bx = x + col;
        let by = y + row;

        if bx < 0 || bx >= BOARD_WIDTH || by >= BOARD_HEIGHT {
            return true;
        }
        if by >= 0 && board.is_occupied(bx, by) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shape::spawn_shape;
    use crate::types::PieceKind;

    #[test]
    fn test_inside_empty_board_is_legal() {
        let board = Board::new();
        let o = spawn_shape(PieceKind::O);
        assert!(!collides(&board, &o, 0, 0));
        assert!(!collides(&board, &o, 8, 18));
    }

    #[test]
    fn test_horizontal_bounds() {
        let board = Board::new();
        let o = spawn_shape(PieceKind::O);
        assert!(collides(&board, &o, -1, 0));
        assert!(collides(&board, &o, 9, 0));
    }

    #[test]
    fn test_bottom_bound() {
        let board = Board::new();
        let o = spawn_shape(PieceKind::O);
        assert!(!collides(&board, &o, 0, 18));
        assert!(collides(&board, &o, 0, 19));
    }

    #[test]
    fn test_rows_above_board_are_never_out_of_bounds() {
        let board = Board::new();
        // Vertical I entirely above the visible area.
        let vertical_i = spawn_shape(PieceKind::I).rotated_cw();
        assert!(!collides(&board, &vertical_i, 4, -4));
        // Partially above.
        assert!(!collides(&board, &vertical_i, 4, -2));
    }

    #[test]
    fn test_occupancy_checked_only_at_rows_zero_and_below() {
        let mut board = Board::new();
        board.set(4, 0, Some(PieceKind::T));

        let vertical_i = spawn_shape(PieceKind::I).rotated_cw();
        // Bottom cell lands on the occupied (4, 0).
        assert!(collides(&board, &vertical_i, 4, -3));
        // Fully above row 0: nothing to overlap with.
        assert!(!collides(&board, &vertical_i, 4, -4));
    }

    #[test]
    fn test_overlap_with_occupied_cell() {
        let mut board = Board::new();
        board.set(3, 5, Some(PieceKind::S));
        let o = spawn_shape(PieceKind::O);
        assert!(collides(&board, &o, 3, 5));
        assert!(collides(&board, &o, 2, 4));
        assert!(!collides(&board, &o, 5, 5));
    }

    #[test]
    fn test_only_filled_cells_count() {
        let mut board = Board::new();
        // T spawn matrix has empty corners on the top row.
        board.set(3, 5, Some(PieceKind::I));
        let t = spawn_shape(PieceKind::T);
        // Anchor (3, 5): matrix (0, 0) is empty, so the occupied board cell
        // underneath it does not collide.
        assert!(!collides(&board, &t, 3, 5));
    }
}
