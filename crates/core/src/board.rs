//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell holds a color index (0 = empty).
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::catalog::{occupied_cells, PieceMask};
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL, MAX_COLOR_INDEX};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Result of one [`Board::clear_full_rows`] pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearReport {
    /// Removed rows, in pre-clear coordinates, bottom to top
    rows: ArrayVec<u8, { BOARD_HEIGHT as usize }>,
    /// Sizes of the runs of adjacent full rows, bottom to top
    batches: ArrayVec<u8, { BOARD_HEIGHT as usize }>,
}

impl ClearReport {
    pub fn rows(&self) -> &[u8] {
        &self.rows
    }

    pub fn batches(&self) -> &[u8] {
        &self.batches
    }

    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY_CELL; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds or `cell` is not a color index
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        if cell > MAX_COLOR_INDEX {
            return false;
        }
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled).
    /// Positions off the board are never occupied.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(cell) if cell != EMPTY_CELL)
    }

    fn row(&self, y: usize) -> &[Cell] {
        let start = y * BOARD_WIDTH as usize;
        &self.cells[start..start + BOARD_WIDTH as usize]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < BOARD_HEIGHT as usize && self.row(y).iter().all(|&cell| cell != EMPTY_CELL)
    }

    /// Check if a row holds at least one block
    pub fn is_row_occupied(&self, y: usize) -> bool {
        y < BOARD_HEIGHT as usize && self.row(y).iter().any(|&cell| cell != EMPTY_CELL)
    }

    /// Write every occupied cell of `mask` at offset (x, y).
    ///
    /// Overwrites whatever is there. Cells that fall off the board are
    /// dropped. Returns the number of cells written.
    pub fn lock_in(&mut self, mask: &PieceMask, x: i8, y: i8) -> usize {
        occupied_cells(mask)
            .filter(|&(dx, dy, cell)| self.set(x + dx, y + dy, cell))
            .count()
    }

    /// Remove all full rows, shifting the rows above them down.
    ///
    /// Rows are scanned bottom to top. Every run of adjacent full rows is
    /// reported as one batch; a row that is not full ends the run.
    /// Uses a two-pointer pass with zero allocation.
    pub fn clear_full_rows(&mut self) -> ClearReport {
        let mut report = ClearReport::default();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;
        let mut run: u8 = 0;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                report.rows.push(read_y as u8);
                run += 1;
            } else {
                if run > 0 {
                    report.batches.push(run);
                    run = 0;
                }
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }
        if run > 0 {
            report.batches.push(run);
        }

        // Rows vacated at the top become empty
        self.cells[..write_y * width].fill(EMPTY_CELL);

        report
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a row-major grid
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(self.row(y));
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY_CELL);
    }

    /// Fill a whole row with one color (test and benchmark helper)
    pub fn fill_row(&mut self, y: i8, cell: Cell) {
        for x in 0..BOARD_WIDTH as i8 {
            self.set(x, y, cell);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, 1);
        board.set(5, 10, 3);

        assert_eq!(board.get(0, 0), Some(1));
        assert_eq!(board.get(5, 10), Some(3));

        assert_eq!(board.cells[0], 1);
        assert_eq!(board.cells[10 * 10 + 5], 3);
    }

    #[test]
    fn test_set_rejects_invalid_color() {
        let mut board = Board::new();
        assert!(!board.set(0, 0, MAX_COLOR_INDEX + 1));
        assert_eq!(board.get(0, 0), Some(EMPTY_CELL));
        assert!(board.set(0, 0, MAX_COLOR_INDEX));
    }

    #[test]
    fn test_lock_in_drops_cells_off_the_board() {
        let mut board = Board::new();
        let mut mask: PieceMask = [[0; 4]; 4];
        mask[0][3] = 4;
        mask[1][3] = 4;

        // Row 3 of the mask lands on y = 20
        assert_eq!(board.lock_in(&mask, 0, 17), 0);
        assert_eq!(board.lock_in(&mask, 0, 16), 2);
        assert_eq!(board.get(0, 19), Some(4));
        assert_eq!(board.get(1, 19), Some(4));
    }

    #[test]
    fn test_clear_batches_single_run() {
        let mut board = Board::new();
        for y in 17..20 {
            board.fill_row(y, 1);
        }
        board.set(0, 16, 2);

        let report = board.clear_full_rows();
        assert_eq!(report.batches(), &[3]);
        assert_eq!(report.rows(), &[19, 18, 17]);
        assert_eq!(board.get(0, 19), Some(2));
        assert!(!board.is_row_occupied(18));
    }

    #[test]
    fn test_clear_batches_split_by_partial_row() {
        let mut board = Board::new();
        board.fill_row(19, 1);
        board.set(4, 18, 5);
        board.fill_row(17, 2);

        let report = board.clear_full_rows();
        assert_eq!(report.batches(), &[1, 1]);
        assert_eq!(report.total_rows(), 2);
        assert_eq!(board.get(4, 19), Some(5));
        assert_eq!(board.get(4, 18), Some(EMPTY_CELL));
    }
}
