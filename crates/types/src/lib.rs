//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the engine, the input layer and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: (3, 0), the top-left corner of the piece's 4x4 box
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the terminal shell |
//! | `BASE_MOVE_MS` | 500 | Gravity interval at level 0 |
//! | `SOFT_DROP_MOVE_MS` | 50 | Gravity interval while soft dropping |
//! | `LEVEL_SPEEDUP_MS` | 50 | Interval removed per level |
//! | `MIN_MOVE_MS` | 50 | Gravity interval floor |
//! | `MOVE_COOLDOWN_MS` | 50 | Input pause after a horizontal move |
//! | `ROTATE_COOLDOWN_MS` | 200 | Input pause after a rotation |
//!
//! # Examples
//!
//! ```
//! use tetrimino_types::{PieceKind, Rotation, Key, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let piece = PieceKind::from_index(2).unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.color_index(), 3);
//!
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//! assert_eq!(Key::from_str("softDrop"), Some(Key::SoftDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Number of distinct pieces in a catalog
pub const PIECE_COUNT: usize = 7;

/// Number of rotation states per piece
pub const ROTATION_COUNT: usize = 4;

/// Side length of the square occupancy mask of every piece
pub const MASK_SIZE: usize = 4;

/// Number of integers in a complete piece catalog (7 x 4 x 4 x 4)
pub const CATALOG_LEN: usize = PIECE_COUNT * ROTATION_COUNT * MASK_SIZE * MASK_SIZE;

/// Spawn column of a new piece's bounding box
pub const SPAWN_X: i8 = 3;

/// Spawn row of a new piece's bounding box
pub const SPAWN_Y: i8 = 0;

/// A cell on the game board or in a piece mask: a color index, 0 when empty.
pub type Cell = u8;

/// The empty cell value
pub const EMPTY_CELL: Cell = 0;

/// Largest color index a cell may hold
pub const MAX_COLOR_INDEX: Cell = 8;

/// Frame interval of the terminal shell (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 0
pub const BASE_MOVE_MS: u32 = 500;

/// Gravity interval substituted while soft drop is in effect
pub const SOFT_DROP_MOVE_MS: u32 = 50;

/// Milliseconds removed from the gravity interval per level
pub const LEVEL_SPEEDUP_MS: u32 = 50;

/// The gravity interval never goes below this
pub const MIN_MOVE_MS: u32 = 50;

/// Input pause after a horizontal move attempt
pub const MOVE_COOLDOWN_MS: u32 = 50;

/// Input pause after a rotation attempt
pub const ROTATE_COOLDOWN_MS: u32 = 200;

/// Cleared rows needed for one level-up
pub const ROWS_PER_LEVEL: u32 = 10;

/// Line clear scoring table (NES values)
///
/// Base points for a batch of N adjacent rows at level 0:
/// - 1 row: 40 points
/// - 2 rows: 100 points
/// - 3 rows: 300 points
/// - 4 rows: 1200 points
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u64; 5] = [0, 40, 100, 300, 1200];


/// The seven tetromino piece kinds, in catalog order
///
/// The catalog index of each kind is fixed (I = 0 ... L = 6) and its color
/// index is catalog index + 1:
/// - **I**: cyan
/// - **O**: yellow
/// - **T**: purple
/// - **S**: green
/// - **Z**: red
/// - **J**: blue
/// - **L**: red, same as Z
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
    /// All kinds in catalog order
    pub const ALL: [PieceKind; PIECE_COUNT] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Catalog index in `0..7`
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Kind for a catalog index, `None` outside `0..7`
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Color index written to the board when this kind locks
    pub fn color_index(&self) -> Cell {
        self.index() as Cell + 1
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrimino_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("L"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
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

/// Rotation state of a piece (catalog rotation index 0-3)
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// All rotations in catalog order
    pub const ALL: [Rotation; ROTATION_COUNT] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Catalog rotation index in `0..4`
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Rotation for a catalog index, `None` outside `0..4`
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Rotate clockwise (index + 1, wrapping 3 → 0)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrimino_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (index - 1, wrapping 0 → 3)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrimino_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// Discrete keys the engine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Rotate,
    SoftDrop,
}

impl Key {
    /// All keys in input priority order
    pub const ALL: [Key; 4] = [Key::Left, Key::Right, Key::Rotate, Key::SoftDrop];

    /// Parse a key name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrimino_types::Key;
    ///
    /// assert_eq!(Key::from_str("left"), Some(Key::Left));
    /// assert_eq!(Key::from_str("ROTATE"), Some(Key::Rotate));
    /// assert_eq!(Key::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Key::Left),
            "right" => Some(Key::Right),
            "rotate" | "up" => Some(Key::Rotate),
            "softdrop" | "down" => Some(Key::SoftDrop),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Key::Left => "left",
            Key::Right => "right",
            Key::Rotate => "rotate",
            Key::SoftDrop => "softDrop",
        }
    }
}

/// Held-key state sampled once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub rotate: bool,
    pub soft_drop: bool,
}

impl FrameInput {
    /// Input with a single key held
    pub fn held(key: Key) -> Self {
        let mut input = Self::default();
        input.set(key, true);
        input
    }

    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Left => self.left,
            Key::Right => self.right,
            Key::Rotate => self.rotate,
            Key::SoftDrop => self.soft_drop,
        }
    }

    pub fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::Left => self.left = held,
            Key::Right => self.right = held,
            Key::Rotate => self.rotate = held,
            Key::SoftDrop => self.soft_drop = held,
        }
    }

    /// The single key acted on this frame: the first held key in priority
    /// order left, right, rotate, soft drop.
    pub fn resolve(&self) -> Option<Key> {
        Key::ALL.into_iter().find(|&key| self.is_held(key))
    }
}
