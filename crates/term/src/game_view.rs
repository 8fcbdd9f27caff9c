//! GameView: draws a `GameSnapshot` through a [`Canvas`].
//!
//! This module is pure (no I/O). It can be unit-tested against a
//! [`crate::FrameCanvas`].

use anyhow::Result;

use crate::canvas::{Canvas, PANEL_X};
use crate::core::GameSnapshot;
use crate::palette::GRID_COLOR;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL};

const LABEL_COLOR: Cell = 2;
const VALUE_COLOR: Cell = 1;

pub const TITLE_LINES: [&str; 4] = ["T E T R I M I N O", "", "press any key to start", "q to quit"];

/// Stateless renderer for the play screen and the banners around it.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Draw one frame of the play screen and present it.
    pub fn render<C: Canvas>(&self, canvas: &mut C, snap: &GameSnapshot) -> Result<()> {
        canvas.clear(EMPTY_CELL);

        for row in 0..BOARD_HEIGHT as i8 {
            for col in 0..BOARD_WIDTH as i8 {
                canvas.draw_cell(col, row, snap.board[row as usize][col as usize]);
            }
        }
        for (x, y, color) in snap.active.cells() {
            canvas.draw_cell(x, y, color);
        }

        self.draw_panel(canvas, snap);
        canvas.present()
    }

    pub fn render_title<C: Canvas>(&self, canvas: &mut C) -> Result<()> {
        canvas.clear(EMPTY_CELL);
        canvas.draw_banner(&TITLE_LINES);
        canvas.present()
    }

    pub fn render_game_over<C: Canvas>(&self, canvas: &mut C, snap: &GameSnapshot) -> Result<()> {
        let score = format!("score {}", snap.score);
        let detail = format!("level {}  lines {}", snap.level, snap.rows);
        canvas.clear(EMPTY_CELL);
        canvas.draw_banner(&["G A M E   O V E R", "", &score, &detail]);
        canvas.present()
    }

    fn draw_panel<C: Canvas>(&self, canvas: &mut C, snap: &GameSnapshot) {
        let mut y = 1;
        for (label, value) in [
            ("SCORE", snap.score),
            ("LEVEL", u64::from(snap.level)),
            ("LINES", u64::from(snap.rows)),
        ] {
            canvas.draw_text(PANEL_X, y, label, LABEL_COLOR);
            canvas.draw_text(PANEL_X, y + 1, &value.to_string(), VALUE_COLOR);
            y += 3;
        }

        if snap.soft_drop {
            canvas.draw_text(PANEL_X, y, "DROP", GRID_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::FrameCanvas;
    use crate::core::{EngineConfig, FixedSequence, GameState, PieceCatalog};
    use crate::types::PieceKind;

    /// Records every call for assertions on draw order and arguments.
    #[derive(Default)]
    struct RecordingCanvas {
        cells: Vec<(i8, i8, Cell)>,
        texts: Vec<String>,
        banners: Vec<Vec<String>>,
        clears: usize,
        presents: usize,
    }

    impl Canvas for RecordingCanvas {
        fn clear(&mut self, _color: Cell) {
            self.clears += 1;
        }

        fn draw_cell(&mut self, col: i8, row: i8, color: Cell) {
            self.cells.push((col, row, color));
        }

        fn draw_text(&mut self, _x: u16, _y: u16, text: &str, _color: Cell) {
            self.texts.push(text.to_string());
        }

        fn draw_banner(&mut self, lines: &[&str]) {
            self.banners
                .push(lines.iter().map(|l| l.to_string()).collect());
        }

        fn present(&mut self) -> Result<()> {
            self.presents += 1;
            Ok(())
        }
    }

    fn snapshot() -> GameSnapshot {
        GameState::new(
            PieceCatalog::classic(),
            EngineConfig::default(),
            FixedSequence::repeat(PieceKind::O),
        )
        .snapshot()
    }

    #[test]
    fn test_render_draws_board_then_piece() {
        let mut canvas = RecordingCanvas::default();
        GameView::new().render(&mut canvas, &snapshot()).unwrap();

        let board_cells = BOARD_WIDTH as usize * BOARD_HEIGHT as usize;
        assert_eq!(canvas.cells.len(), board_cells + 4);
        assert!(canvas.cells[board_cells..].iter().all(|&(_, _, c)| c == 2));
        assert_eq!(canvas.clears, 1);
        assert_eq!(canvas.presents, 1);
        assert!(canvas.texts.iter().any(|t| t == "SCORE"));
    }

    #[test]
    fn test_render_shows_active_piece_in_framebuffer() {
        let mut canvas = FrameCanvas::new(0, 0);
        GameView::new().render(&mut canvas, &snapshot()).unwrap();

        // O spawns at x = 3 with its mask in columns 1..=2
        let fb = canvas.framebuffer();
        let row = fb.row_text(1);
        assert_eq!(row.chars().nth(1 + 4 * 2), Some('█'));
        assert_eq!(row.chars().nth(1 + 3 * 2), Some('·'));
    }

    #[test]
    fn test_game_over_banner_reports_score() {
        let mut canvas = RecordingCanvas::default();
        let mut snap = snapshot();
        snap.score = 1240;
        snap.alive = false;
        GameView::new().render_game_over(&mut canvas, &snap).unwrap();

        assert_eq!(canvas.banners.len(), 1);
        assert!(canvas.banners[0].iter().any(|l| l == "score 1240"));
    }
}
