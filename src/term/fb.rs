//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write a string horizontally starting at (x, y); clipped at the edge.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: CellStyle) {
        for (i, ch) in text.chars().enumerate() {
            let cx = x.saturating_add(i as u16);
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer_is_blank() {
        let fb = FrameBuffer::new(4, 3);
        assert_eq!(fb.width(), 4);
        assert_eq!(fb.height(), 3);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(fb.get(x, y), Some(Cell::default()));
            }
        }
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut fb = FrameBuffer::new(4, 3);
        assert_eq!(fb.get(4, 0), None);
        assert_eq!(fb.get(0, 3), None);
        // Out-of-bounds set is ignored.
        fb.set(10, 10, CellStyle::default().into_cell('X'));
    }

    #[test]
    fn test_put_str_clips_at_edge() {
        let mut fb = FrameBuffer::new(5, 1);
        fb.put_str(3, 0, "ABCD", CellStyle::default());
        assert_eq!(fb.get(3, 0).map(|c| c.ch), Some('A'));
        assert_eq!(fb.get(4, 0).map(|c| c.ch), Some('B'));
    }

    #[test]
    fn test_fill_rect() {
        let mut fb = FrameBuffer::new(4, 4);
        let style = CellStyle::default();
        fb.fill_rect(1, 1, 2, 2, '#', style);
        assert_eq!(fb.get(1, 1).map(|c| c.ch), Some('#'));
        assert_eq!(fb.get(2, 2).map(|c| c.ch), Some('#'));
        assert_eq!(fb.get(0, 0).map(|c| c.ch), Some(' '));
        assert_eq!(fb.get(3, 3).map(|c| c.ch), Some(' '));
    }
}
