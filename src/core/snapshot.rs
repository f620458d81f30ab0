//! Immutable state snapshot published to renderers.
//!
//! The session is the single writer; everything outside the core reads one
//! of these and never touches live state.

use crate::core::game::ActivePiece;
use crate::core::shape::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Board grid as published to renderers, row-major
pub type BoardGrid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<&ActivePiece> for ActiveSnapshot {
    fn from(value: &ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: BoardGrid,
    pub active: Option<ActiveSnapshot>,
    pub ghost_row: Option<i8>,
    pub next: PieceKind,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub playing: bool,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn empty_board() -> BoardGrid {
        [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]
    }

    /// Whether gravity should be ticking for this state
    pub fn gravity_active(&self) -> bool {
        self.playing && !self.paused && !self.game_over
    }
}
