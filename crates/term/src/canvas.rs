//! The drawing capability the game view renders through.
//!
//! Board cells are addressed in board coordinates (column, row); text is
//! addressed in terminal character positions. Colors are palette indices.

use anyhow::Result;

use crate::fb::{FrameBuffer, Glyph, GlyphStyle};
use crate::palette::{self, GRID_COLOR, TEXT_COLOR};
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL};

/// Drawing surface for one frame.
pub trait Canvas {
    fn clear(&mut self, color: Cell);

    /// Cells outside the board are ignored.
    fn draw_cell(&mut self, col: i8, row: i8, color: Cell);

    fn draw_text(&mut self, x: u16, y: u16, text: &str, color: Cell);

    /// Full-screen centered text, used for the title and end screens.
    fn draw_banner(&mut self, lines: &[&str]);

    fn present(&mut self) -> Result<()>;
}

/// Terminal columns per board cell.
pub const CELL_WIDTH: u16 = 2;
/// Board frame including the border.
pub const FRAME_WIDTH: u16 = BOARD_WIDTH as u16 * CELL_WIDTH + 2;
pub const FRAME_HEIGHT: u16 = BOARD_HEIGHT as u16 + 2;
/// Side panel column.
pub const PANEL_X: u16 = FRAME_WIDTH + 2;
/// Smallest viewport that fits the board and the side panel.
pub const MIN_VIEWPORT: (u16, u16) = (PANEL_X + 14, FRAME_HEIGHT);

/// A canvas that draws into an in-memory framebuffer.
///
/// `present` is a no-op; [`crate::TerminalCanvas`] wraps this to flush.
#[derive(Debug, Clone)]
pub struct FrameCanvas {
    fb: FrameBuffer,
}

impl FrameCanvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            fb: FrameBuffer::new(width.max(MIN_VIEWPORT.0), height.max(MIN_VIEWPORT.1)),
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.fb
            .resize(width.max(MIN_VIEWPORT.0), height.max(MIN_VIEWPORT.1));
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    fn draw_border(&mut self) {
        let style = GlyphStyle::new(palette::rgb(GRID_COLOR), palette::rgb(EMPTY_CELL));
        let (w, h) = (FRAME_WIDTH, FRAME_HEIGHT);
        let fb = &mut self.fb;
        fb.set(0, 0, Glyph::new('┌', style));
        fb.set(w - 1, 0, Glyph::new('┐', style));
        fb.set(0, h - 1, Glyph::new('└', style));
        fb.set(w - 1, h - 1, Glyph::new('┘', style));
        for x in 1..w - 1 {
            fb.set(x, 0, Glyph::new('─', style));
            fb.set(x, h - 1, Glyph::new('─', style));
        }
        for y in 1..h - 1 {
            fb.set(0, y, Glyph::new('│', style));
            fb.set(w - 1, y, Glyph::new('│', style));
        }
    }
}

impl Canvas for FrameCanvas {
    fn clear(&mut self, color: Cell) {
        let bg = palette::rgb(color);
        self.fb.fill(Glyph::new(' ', GlyphStyle::new(TEXT_COLOR, bg)));
        self.draw_border();
    }

    fn draw_cell(&mut self, col: i8, row: i8, color: Cell) {
        if col < 0 || row < 0 || col >= BOARD_WIDTH as i8 || row >= BOARD_HEIGHT as i8 {
            return;
        }
        let background = palette::rgb(EMPTY_CELL);
        let glyph = if color == EMPTY_CELL {
            Glyph::new('·', GlyphStyle::new(palette::rgb(GRID_COLOR), background))
        } else {
            Glyph::new('█', GlyphStyle::new(palette::rgb(color), background))
        };
        let x = 1 + col as u16 * CELL_WIDTH;
        let y = 1 + row as u16;
        self.fb.fill_rect(x, y, CELL_WIDTH, 1, glyph);
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str, color: Cell) {
        let style = GlyphStyle::new(palette::rgb(color), palette::rgb(EMPTY_CELL));
        self.fb.put_str(x, y, text, style);
    }

    fn draw_banner(&mut self, lines: &[&str]) {
        let style = GlyphStyle::new(TEXT_COLOR, palette::rgb(EMPTY_CELL)).bold();
        self.fb.fill(Glyph::new(' ', style));

        let top = self.fb.height().saturating_sub(lines.len() as u16) / 2;
        for (i, line) in lines.iter().enumerate() {
            let w = line.chars().count() as u16;
            let x = self.fb.width().saturating_sub(w) / 2;
            self.fb.put_str(x, top + i as u16, line, style);
        }
    }

    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_cell_covers_two_columns() {
        let mut canvas = FrameCanvas::new(0, 0);
        canvas.clear(EMPTY_CELL);
        canvas.draw_cell(0, 0, 1);

        let fb = canvas.framebuffer();
        assert_eq!(fb.get(1, 1).map(|g| g.ch), Some('█'));
        assert_eq!(fb.get(2, 1).map(|g| g.ch), Some('█'));
        assert_eq!(fb.get(3, 1).map(|g| g.ch), Some(' '));
        assert_eq!(fb.get(1, 1).map(|g| g.style.fg), Some(palette::rgb(1)));
    }

    #[test]
    fn test_off_board_cells_are_ignored() {
        let mut canvas = FrameCanvas::new(0, 0);
        canvas.clear(EMPTY_CELL);
        let before = canvas.framebuffer().clone();
        canvas.draw_cell(-1, 0, 3);
        canvas.draw_cell(0, BOARD_HEIGHT as i8, 3);
        canvas.draw_cell(BOARD_WIDTH as i8, 5, 3);
        assert_eq!(canvas.framebuffer(), &before);
    }

    #[test]
    fn test_banner_is_centered() {
        let mut canvas = FrameCanvas::new(20, 5);
        canvas.draw_banner(&["HI"]);
        let fb = canvas.framebuffer();
        let y = (fb.height() - 1) / 2;
        let row = fb.row_text(y);
        let x = row.find("HI").map(|i| i as u16);
        assert_eq!(x, Some((fb.width() - 2) / 2));
    }
}
