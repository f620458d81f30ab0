//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::GameSnapshot;
use crate::core::Shape;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Canonical color per piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 220, 220),
        PieceKind::O => Rgb::new(220, 220, 0),
        PieceKind::T => Rgb::new(170, 0, 220),
        PieceKind::S => Rgb::new(0, 210, 0),
        PieceKind::Z => Rgb::new(220, 0, 0),
        PieceKind::J => Rgb::new(40, 60, 230),
        PieceKind::L => Rgb::new(230, 150, 0),
    }
}

/// A lightweight terminal view for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a snapshot into a framebuffer sized to the viewport.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let well = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(25, 25, 35),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', well);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Locked board cells.
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                if let Some(kind) = snap.board[y as usize][x as usize] {
                    self.fill_board_cell(&mut fb, start_x, start_y, x, y, '█', solid(kind));
                }
            }
        }

        // Ghost projection under the active piece.
        if let (Some(active), Some(ghost_row)) = (snap.active, snap.ghost_row) {
            let ghost = CellStyle {
                fg: Rgb::new(130, 130, 140),
                bg: Rgb::new(25, 25, 35),
                bold: false,
                dim: true,
            };
            self.draw_shape(&mut fb, start_x, start_y, &active.shape, active.x, ghost_row, '░', ghost);
        }

        // Active piece on top.
        if let Some(active) = snap.active {
            self.draw_shape(
                &mut fb,
                start_x,
                start_y,
                &active.shape,
                active.x,
                active.y,
                '█',
                solid(active.kind),
            );
        }

        self.draw_side_panel(&mut fb, snap, start_x + frame_w + 2, start_y + 1);

        // Overlays.
        if !snap.playing && !snap.game_over {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "PRESS ENTER");
        } else if snap.paused {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        } else if snap.game_over {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }

        fb
    }

    fn draw_shape(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        shape: &Shape,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        for (row, col) in shape.filled_cells() {
            let bx = x + col;
            let by = y + row;
            // Cells above the visible board are simply not drawn.
            if bx >= 0 && bx < BOARD_WIDTH && by >= 0 && by < BOARD_HEIGHT {
                self.fill_board_cell(fb, start_x, start_y, bx, by, ch, style);
            }
        }
    }

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + (x as u16) * self.cell_w;
        let py = start_y + 1 + (y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let label = CellStyle {
            fg: Rgb::new(150, 150, 160),
            ..CellStyle::default()
        };
        let value = CellStyle {
            bold: true,
            ..CellStyle::default()
        };

        fb.put_str(x, y, "SCORE", label);
        fb.put_str(x, y + 1, &snap.score.to_string(), value);
        fb.put_str(x, y + 3, "LEVEL", label);
        fb.put_str(x, y + 4, &snap.level.to_string(), value);
        fb.put_str(x, y + 6, "LINES", label);
        fb.put_str(x, y + 7, &snap.lines.to_string(), value);

        if snap.playing {
            fb.put_str(x, y + 9, "NEXT", label);
            let preview = crate::core::spawn_shape(snap.next);
            let style = solid(snap.next);
            for (row, col) in preview.filled_cells() {
                let px = x + (col as u16) * self.cell_w;
                let py = y + 10 + (row as u16) * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
            }
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(60, 60, 70),
            bold: true,
            dim: false,
        };
        let tx = x + w.saturating_sub(text.len() as u16) / 2;
        let ty = y + h / 2;
        fb.put_str(tx, ty, text, style);
    }
}

/// Panel width reserved to the right of the board frame.
const PANEL_W: u16 = 12;

fn solid(kind: PieceKind) -> CellStyle {
    CellStyle {
        fg: piece_color(kind),
        bg: Rgb::new(25, 25, 35),
        bold: false,
        dim: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Game;

    fn rendered(snapshot: &GameSnapshot) -> FrameBuffer {
        GameView::default().render(snapshot, Viewport::new(80, 24))
    }

    fn contains_text(fb: &FrameBuffer, text: &str) -> bool {
        let mut line = String::new();
        for y in 0..fb.height() {
            line.clear();
            for x in 0..fb.width() {
                line.push(fb.get(x, y).map(|c| c.ch).unwrap_or(' '));
            }
            if line.contains(text) {
                return true;
            }
        }
        false
    }

    #[test]
    fn test_idle_shows_start_prompt() {
        let game = Game::new(1);
        let fb = rendered(&game.snapshot());
        assert!(contains_text(&fb, "PRESS ENTER"));
    }

    #[test]
    fn test_playing_shows_panel_and_no_overlay() {
        let mut game = Game::new(1);
        game.start();
        let fb = rendered(&game.snapshot());
        assert!(contains_text(&fb, "SCORE"));
        assert!(contains_text(&fb, "NEXT"));
        assert!(!contains_text(&fb, "PRESS ENTER"));
        assert!(!contains_text(&fb, "PAUSED"));
    }

    #[test]
    fn test_paused_overlay() {
        let mut game = Game::new(1);
        game.start();
        game.toggle_pause();
        let fb = rendered(&game.snapshot());
        assert!(contains_text(&fb, "PAUSED"));
    }

    #[test]
    fn test_active_piece_is_drawn() {
        let mut game = Game::new(1);
        game.start();
        let fb = rendered(&game.snapshot());
        let blocks = (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.get(x, y).map(|c| c.ch) == Some('█'))
            .count();
        // Active piece (4 cells) at cell_w=2, plus the next preview.
        assert!(blocks >= 8);
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let game = Game::new(1);
        let _ = GameView::default().render(&game.snapshot(), Viewport::new(3, 2));
    }
}
