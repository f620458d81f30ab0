//! Board tests - grid storage and row compaction through the public API

use gridfall::core::{spawn_shape, Board};
use gridfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT {
        for x in 0..BOARD_WIDTH {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
            assert!(!board.is_occupied(x, y));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, -1, Some(PieceKind::T)));
    assert!(!board.set(BOARD_WIDTH, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT, Some(PieceKind::T)));
}

#[test]
fn test_merge_keeps_piece_kind() {
    let mut board = Board::new();
    board.merge(&spawn_shape(PieceKind::L), 2, 10, PieceKind::L);

    let filled: Vec<_> = (0..BOARD_HEIGHT)
        .flat_map(|y| (0..BOARD_WIDTH).map(move |x| (x, y)))
        .filter(|&(x, y)| board.is_occupied(x, y))
        .collect();
    assert_eq!(filled.len(), 4);
    for (x, y) in filled {
        assert_eq!(board.get(x, y), Some(Some(PieceKind::L)));
    }
}

#[test]
fn test_is_row_full() {
    let mut board = Board::new();
    assert!(!board.is_row_full(19));

    for x in 0..BOARD_WIDTH {
        board.set(x, 19, Some(PieceKind::I));
    }
    assert!(board.is_row_full(19));

    board.set(0, 19, None);
    assert!(!board.is_row_full(19));

    // Out-of-range rows are never full.
    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
}

#[test]
fn test_clear_full_rows_returns_indices_bottom_to_top() {
    let mut board = Board::new();
    for y in [17, 19] {
        for x in 0..BOARD_WIDTH {
            board.set(x, y, Some(PieceKind::S));
        }
    }
    board.set(0, 18, Some(PieceKind::Z));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19, 17]);

    // The partial row between the two full ones dropped to the bottom.
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::Z)));
    assert_eq!(
        board.cells().iter().filter(|c| c.is_some()).count(),
        1
    );
}

#[test]
fn test_clear_resets_everything() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH {
        board.set(x, 19, Some(PieceKind::J));
    }

    board.clear();
    assert!(board.cells().iter().all(|c| c.is_none()));
}
