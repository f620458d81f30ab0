//! Game module - the session state machine
//!
//! Ties together board, shapes, collision, RNG, and scoring. The session is
//! the single writer of all game state; renderers consume `GameSnapshot`.
//!
//! Lifecycle: idle (not playing) -> playing <-> paused; playing -> game over,
//! terminal until `start` is called again. Every mutating command is a silent
//! no-op unless the session is exactly playing with an active piece.

use crate::core::board::Board;
use crate::core::collision::collides;
use crate::core::rng::PieceRng;
use crate::core::scoring::{hard_drop_bonus, level_for_lines, line_clear_score};
use crate::core::shape::{spawn_shape, Shape};
use crate::core::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, PieceKind, BOARD_WIDTH};

/// The falling piece: kind, current rotation matrix, and board anchor
/// (top-left corner of the matrix)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece of `kind` at its spawn position: horizontally centered
    /// (rounding left), anchored at the top row.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = spawn_shape(kind);
        Self {
            kind,
            shape,
            x: (BOARD_WIDTH - shape.cols()) / 2,
            y: 0,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Option<ActivePiece>,
    next: PieceKind,
    rng: PieceRng,
    score: u32,
    level: u32,
    lines: u32,
    playing: bool,
    paused: bool,
    game_over: bool,
}

impl Game {
    /// Create an idle session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = PieceRng::new(seed);
        let next = rng.draw();
        Self {
            board: Board::new(),
            active: None,
            next,
            rng,
            score: 0,
            level: 1,
            lines: 0,
            playing: false,
            paused: false,
            game_over: false,
        }
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Start (or restart) a session: reset board, score, and level, spawn the
    /// queued piece, and draw a fresh preview piece.
    pub fn start(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.playing = true;
        self.paused = false;
        self.game_over = false;
        self.active = Some(ActivePiece::spawn(self.next));
        self.next = self.rng.draw();
    }

    /// Flip the paused flag; only meaningful while playing
    pub fn toggle_pause(&mut self) {
        if self.playing && !self.game_over {
            self.paused = !self.paused;
        }
    }

    /// Whether mutating piece commands are accepted right now
    fn command_ready(&self) -> bool {
        self.playing && !self.paused && !self.game_over && self.active.is_some()
    }

    /// Translate the active piece one column left; no-op on collision
    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    /// Translate the active piece one column right; no-op on collision
    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        if !self.command_ready() {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if collides(&self.board, &active.shape, active.x + dx, active.y) {
            return false;
        }
        active.x += dx;
        true
    }

    /// Rotate the active piece clockwise with wall-kick resolution.
    ///
    /// Kicks are tried in order: in place, one column left, then one column
    /// right of the original position. If all three placements collide the
    /// rotation is rejected and nothing changes.
    pub fn rotate(&mut self) -> bool {
        if !self.command_ready() {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let rotated = active.shape.rotated_cw();
        for dx in [0, -1, 1] {
            if !collides(&self.board, &rotated, active.x + dx, active.y) {
                active.shape = rotated;
                active.x += dx;
                return true;
            }
        }
        false
    }

    /// Move the active piece down one row; locks the piece when descent is
    /// blocked. Driven by the gravity timer and by the soft-drop command.
    pub fn descend(&mut self) -> bool {
        if !self.command_ready() {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        if collides(&self.board, &active.shape, active.x, active.y + 1) {
            self.lock_and_resolve(0);
        } else {
            active.y += 1;
        }
        true
    }

    /// Drop the active piece to the deepest legal row and lock it there,
    /// scoring a bonus per cell of distance traveled.
    pub fn hard_drop(&mut self) -> bool {
        if !self.command_ready() {
            return false;
        }
        let Some(distance) = self.drop_distance() else {
            return false;
        };
        if let Some(active) = self.active.as_mut() {
            active.y += distance;
        }
        self.lock_and_resolve(distance as u32);
        true
    }

    /// Maximal legal downward translation of the active piece
    fn drop_distance(&self) -> Option<i8> {
        let active = self.active.as_ref()?;
        let mut distance = 0;
        while !collides(&self.board, &active.shape, active.x, active.y + distance + 1) {
            distance += 1;
        }
        Some(distance)
    }

    /// Projected landing row of the active piece (display only)
    pub fn ghost_row(&self) -> Option<i8> {
        let y = self.active.as_ref()?.y;
        Some(y + self.drop_distance()?)
    }

    /// Lock the active piece and resolve the consequences as one atomic
    /// transition: merge, clear full rows, score, advance level, respawn.
    ///
    /// Score uses the level in effect at lock time; the level recomputation
    /// happens afterwards within the same transition.
    fn lock_and_resolve(&mut self, drop_distance: u32) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.merge(&active.shape, active.x, active.y, active.kind);
        let cleared = self.board.clear_full_rows().len();

        self.score += line_clear_score(cleared, self.level) + hard_drop_bonus(drop_distance);
        self.lines += cleared as u32;
        self.level = level_for_lines(self.lines);

        let piece = ActivePiece::spawn(self.next);
        self.next = self.rng.draw();

        if collides(&self.board, &piece.shape, piece.x, piece.y) {
            // Fresh spawn is blocked: terminal state, nothing is written.
            self.playing = false;
            self.game_over = true;
        } else {
            self.active = Some(piece);
        }
    }

    /// Apply a discrete action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => self.descend(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::TogglePause => {
                let before = self.paused;
                self.toggle_pause();
                self.paused != before
            }
            GameAction::Start => {
                self.start();
                true
            }
        }
    }

    /// Publish an immutable snapshot for renderers
    pub fn snapshot(&self) -> GameSnapshot {
        let mut board = GameSnapshot::empty_board();
        for (idx, cell) in self.board.cells().iter().enumerate() {
            let y = idx / BOARD_WIDTH as usize;
            let x = idx % BOARD_WIDTH as usize;
            board[y][x] = *cell;
        }

        GameSnapshot {
            board,
            active: self.active.as_ref().map(ActiveSnapshot::from),
            ghost_row: self.ghost_row(),
            next: self.next,
            score: self.score,
            level: self.level,
            lines: self.lines,
            playing: self.playing,
            paused: self.paused,
            game_over: self.game_over,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
