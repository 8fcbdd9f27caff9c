use crate::catalog::{occupied_cells, PieceMask};
use crate::types::{Cell, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL, MASK_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub mask: PieceMask,
}

impl ActiveSnapshot {
    /// Occupied cells in board coordinates as `(x, y, color)`
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        occupied_cells(&self.mask).map(move |(dx, dy, cell)| (self.x + dx, self.y + dy, cell))
    }
}

impl Default for ActiveSnapshot {
    fn default() -> Self {
        Self {
            kind: PieceKind::I,
            rotation: Rotation::North,
            x: 0,
            y: 0,
            mask: [[EMPTY_CELL; MASK_SIZE]; MASK_SIZE],
        }
    }
}

/// Everything the rendering layer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: ActiveSnapshot,
    pub score: u64,
    pub level: u32,
    pub rows: u32,
    pub alive: bool,
    pub soft_drop: bool,
    pub episode_id: u32,
    pub pieces_spawned: u32,
}

impl GameSnapshot {
    /// Color at (x, y) with the falling piece drawn over the board
    pub fn composed_cell(&self, x: i8, y: i8) -> Cell {
        self.active
            .cells()
            .find(|&(px, py, _)| px == x && py == y)
            .map(|(_, _, cell)| cell)
            .unwrap_or_else(|| {
                if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
                    EMPTY_CELL
                } else {
                    self.board[y as usize][x as usize]
                }
            })
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[EMPTY_CELL; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveSnapshot::default(),
            score: 0,
            level: 0,
            rows: 0,
            alive: true,
            soft_drop: false,
            episode_id: 0,
            pieces_spawned: 0,
        }
    }
}
