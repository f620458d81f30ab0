//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: i8 = 10;
pub const BOARD_HEIGHT: i8 = 20;

/// Gravity timing (in milliseconds)
/// Period for level L is `max(MIN_DROP_MS, BASE_DROP_MS - (L - 1) * DROP_STEP_MS)`.
pub const BASE_DROP_MS: u64 = 1000;
pub const DROP_STEP_MS: u64 = 50;
pub const MIN_DROP_MS: u64 = 100;

/// Line clear scoring table, indexed by lines cleared (multiplied by level)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Hard drop bonus per cell of drop distance
pub const HARD_DROP_POINTS_PER_CELL: u32 = 2;

/// Level increases every this many cleared lines
pub const LINES_PER_LEVEL: u32 = 10;

/// Tetromino piece kinds (each kind doubles as its color tag)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in canonical order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    HardDrop,
    TogglePause,
    /// Starts a fresh session; also serves as restart after game over.
    Start,
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;
