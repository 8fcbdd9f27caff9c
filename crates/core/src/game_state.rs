//! Game state module - the turn controller
//!
//! This module ties together all core components: catalog, board, collision,
//! piece source and scoring. [`GameState::step`] advances one frame:
//!
//! 1. gravity (accumulated elapsed time against the level's interval)
//! 2. input (one key per frame: left, right, rotate, soft drop)
//! 3. lock check and respawn
//! 4. line clear and scoring
//! 5. top-out check
//!
//! Once the top row holds a block the game is over and further frames do
//! nothing until [`GameState::new_game`].

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::board::Board;
use crate::catalog::{PieceCatalog, PieceMask};
use crate::collision::{collides, extends_below_floor, is_resting};
use crate::config::EngineConfig;
use crate::rng::{PieceSource, SimpleRng};
use crate::scoring::{gravity_interval_ms, Progress};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{FrameInput, Key, PieceKind, Rotation, BOARD_HEIGHT, SPAWN_X, SPAWN_Y};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Column of the top-left corner of the 4x4 box
    pub x: i8,
    /// Row of the top-left corner of the 4x4 box
    pub y: i8,
}

impl ActivePiece {
    /// Create a new piece at the spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    pub fn mask<'a>(&self, catalog: &'a PieceCatalog) -> &'a PieceMask {
        catalog.shape_of(self.kind, self.rotation)
    }

    pub fn collides(&self, board: &Board, catalog: &PieceCatalog) -> bool {
        collides(board, catalog, self.kind, self.rotation, self.x, self.y)
    }

    /// Check if the piece rests on the stack or the floor
    pub fn is_resting(&self, board: &Board, catalog: &PieceCatalog) -> bool {
        is_resting(board, catalog, self.kind, self.rotation, self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Falling,
    GameOver,
}

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameEvents {
    /// Gravity moved the piece down one row
    pub moved_down: bool,
    /// The piece locked and a new one spawned
    pub locked: bool,
    /// Sizes of the cleared batches, bottom to top
    pub batches: ArrayVec<u8, { BOARD_HEIGHT as usize }>,
    pub rows_cleared: u32,
    pub points: u64,
    pub levels_gained: u32,
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = SimpleRng> {
    catalog: PieceCatalog,
    config: EngineConfig,
    source: S,
    board: Board,
    active: ActivePiece,
    progress: Progress,
    phase: Phase,
    gravity_timer_ms: u32,
    /// Sticky: set by a soft-drop frame, cleared by a frame without input
    soft_drop: bool,
    input_cooldown_ms: u32,
    /// Monotonic game counter (increments on new game)
    episode_id: u32,
    pieces_spawned: u32,
}

impl GameState<SimpleRng> {
    /// Create a new game drawing pieces from a seeded [`SimpleRng`]
    pub fn with_seed(catalog: PieceCatalog, config: EngineConfig, seed: u32) -> Self {
        Self::new(catalog, config, SimpleRng::new(seed))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a new game and spawn the first piece
    pub fn new(catalog: PieceCatalog, config: EngineConfig, mut source: S) -> Self {
        let first = source.next_piece();
        Self {
            catalog,
            config,
            source,
            board: Board::new(),
            active: ActivePiece::spawn(first),
            progress: Progress::new(config.start_level),
            phase: Phase::Falling,
            gravity_timer_ms: 0,
            soft_drop: false,
            input_cooldown_ms: 0,
            episode_id: 0,
            pieces_spawned: 1,
        }
    }

    /// Replace the board (for setting up positions)
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Replace the falling piece (for setting up positions)
    pub fn with_active(mut self, active: ActivePiece) -> Self {
        self.active = active;
        self
    }

    /// Start over: empty board, fresh score and level, new piece.
    pub fn new_game(&mut self) {
        self.board.clear();
        self.progress = Progress::new(self.config.start_level);
        self.phase = Phase::Falling;
        self.gravity_timer_ms = 0;
        self.soft_drop = false;
        self.input_cooldown_ms = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.pieces_spawned = 0;
        self.spawn_next();
        info!(
            "new game #{} at level {}",
            self.episode_id,
            self.progress.level()
        );
    }

    pub fn alive(&self) -> bool {
        self.phase == Phase::Falling
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u64 {
        self.progress.score()
    }

    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    /// Rows cleared in this game
    pub fn rows_cleared(&self) -> u32 {
        self.progress.rows()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn catalog(&self) -> &PieceCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn is_soft_dropping(&self) -> bool {
        self.soft_drop
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn gravity_timer_ms(&self) -> u32 {
        self.gravity_timer_ms
    }

    /// Current gravity interval based on level and soft drop
    pub fn gravity_interval_ms(&self) -> u32 {
        gravity_interval_ms(self.progress.level(), self.soft_drop, &self.config)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = ActiveSnapshot {
            kind: self.active.kind,
            rotation: self.active.rotation,
            x: self.active.x,
            y: self.active.y,
            mask: *self.active.mask(&self.catalog),
        };
        out.score = self.progress.score();
        out.level = self.progress.level();
        out.rows = self.progress.rows();
        out.alive = self.alive();
        out.soft_drop = self.soft_drop;
        out.episode_id = self.episode_id;
        out.pieces_spawned = self.pieces_spawned;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance one frame
    pub fn step(&mut self, elapsed_ms: u32, input: FrameInput) -> FrameEvents {
        let mut events = FrameEvents::default();
        if self.phase == Phase::GameOver {
            events.game_over = true;
            return events;
        }

        // Soft drop is decided before gravity so it applies this frame
        let key = self.resolve_input(elapsed_ms, input);

        events.moved_down = self.apply_gravity(elapsed_ms);

        match key {
            Some(Key::Left) => {
                self.try_shift(-1);
            }
            Some(Key::Right) => {
                self.try_shift(1);
            }
            Some(Key::Rotate) => {
                self.try_rotate();
            }
            Some(Key::SoftDrop) | None => {}
        }

        if self.active.is_resting(&self.board, &self.catalog) {
            self.lock_active();
            events.locked = true;
        }

        self.clear_rows(&mut events);

        events.game_over = self.check_top_out();
        events
    }

    /// Pick this frame's key, update soft drop mode and the input cooldown.
    ///
    /// Returns the key to act on, or `None` when nothing should move.
    fn resolve_input(&mut self, elapsed_ms: u32, input: FrameInput) -> Option<Key> {
        self.input_cooldown_ms = self.input_cooldown_ms.saturating_sub(elapsed_ms);
        match input.resolve() {
            Some(Key::SoftDrop) => {
                self.soft_drop = true;
                None
            }
            None => {
                self.soft_drop = false;
                None
            }
            Some(_) if self.input_cooldown_ms > 0 => None,
            key => key,
        }
    }

    /// Accumulate time and drop the piece one row when the interval is reached.
    fn apply_gravity(&mut self, elapsed_ms: u32) -> bool {
        self.gravity_timer_ms = self.gravity_timer_ms.saturating_add(elapsed_ms);
        if self.gravity_timer_ms < self.gravity_interval_ms() {
            return false;
        }
        self.gravity_timer_ms = 0;

        // A resting piece is locked by this frame's lock check instead
        if self.active.is_resting(&self.board, &self.catalog) {
            return false;
        }
        self.active.y += 1;
        true
    }

    fn is_blocked(&self) -> bool {
        self.active.collides(&self.board, &self.catalog)
            || extends_below_floor(
                &self.catalog,
                self.active.kind,
                self.active.rotation,
                self.active.y,
            )
    }

    /// Move the piece `dx` columns, reverting on collision.
    ///
    /// Returns whether the piece moved.
    pub fn try_shift(&mut self, dx: i8) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        self.input_cooldown_ms = self.config.move_cooldown_ms;

        self.active.x += dx;
        if self.is_blocked() {
            self.active.x -= dx;
            return false;
        }
        true
    }

    /// Rotate the piece clockwise, stepping back one rotation on collision.
    ///
    /// Returns whether the piece rotated.
    pub fn try_rotate(&mut self) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        self.input_cooldown_ms = self.config.rotate_cooldown_ms;

        self.active.rotation = self.active.rotation.rotate_cw();
        if self.is_blocked() {
            self.active.rotation = self.active.rotation.rotate_ccw();
            return false;
        }
        true
    }

    /// Write the falling piece into the board and spawn the next one
    pub fn lock_active(&mut self) {
        if self.phase == Phase::GameOver {
            return;
        }
        let piece = self.active;
        let written = self
            .board
            .lock_in(piece.mask(&self.catalog), piece.x, piece.y);
        debug!(
            "locked {} rotation {} at ({}, {}), {} cells",
            piece.kind.as_str(),
            piece.rotation.index(),
            piece.x,
            piece.y,
            written
        );
        self.spawn_next();
    }

    fn spawn_next(&mut self) {
        let kind = self.source.next_piece();
        self.active = ActivePiece::spawn(kind);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        debug!("spawned {}", kind.as_str());
    }

    fn clear_rows(&mut self, events: &mut FrameEvents) {
        let report = self.board.clear_full_rows();
        if report.is_empty() {
            return;
        }

        for &batch in report.batches() {
            let outcome = self
                .progress
                .record_batch(batch, self.config.rows_per_level);
            events.batches.push(batch);
            events.points += outcome.points;
            events.levels_gained += outcome.levels_gained;
            if outcome.levels_gained > 0 {
                info!("level {}", self.progress.level());
            }
        }
        events.rows_cleared += report.total_rows() as u32;

        debug!(
            "cleared rows {:?} in batches {:?}, +{} points (score {})",
            report.rows(),
            report.batches(),
            events.points,
            self.progress.score()
        );
    }

    /// End the game if the top row holds a block.
    ///
    /// Returns whether the game is over.
    pub fn check_top_out(&mut self) -> bool {
        if self.phase == Phase::Falling && self.board.is_row_occupied(0) {
            self.phase = Phase::GameOver;
            info!(
                "game over: score {}, level {}, {} rows",
                self.progress.score(),
                self.progress.level(),
                self.progress.rows()
            );
        }
        self.phase == Phase::GameOver
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::with_seed(PieceCatalog::classic(), EngineConfig::default(), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FixedSequence;

    fn game(pieces: &[PieceKind]) -> GameState<FixedSequence> {
        GameState::new(
            PieceCatalog::classic(),
            EngineConfig::default().without_cooldowns(),
            FixedSequence::new(pieces.iter().copied()),
        )
    }

    #[test]
    fn test_new_game_state() {
        let state = game(&[PieceKind::T]);

        assert!(state.alive());
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 0);
        assert_eq!(state.rows_cleared(), 0);
        assert_eq!(state.pieces_spawned(), 1);
        assert_eq!(state.active(), ActivePiece::spawn(PieceKind::T));
    }

    #[test]
    fn test_spawn_position() {
        let piece = ActivePiece::spawn(PieceKind::L);
        assert_eq!(piece.rotation, Rotation::North);
        assert_eq!((piece.x, piece.y), (3, 0));
    }

    #[test]
    fn test_gravity_moves_after_interval() {
        let mut state = game(&[PieceKind::O]);

        assert!(!state.step(499, FrameInput::default()).moved_down);
        assert_eq!(state.active().y, 0);

        assert!(state.step(1, FrameInput::default()).moved_down);
        assert_eq!(state.active().y, 1);
        assert_eq!(state.gravity_timer_ms(), 0);
    }

    #[test]
    fn test_soft_drop_is_sticky() {
        let mut state = game(&[PieceKind::O]);

        state.step(0, FrameInput::held(Key::SoftDrop));
        assert!(state.is_soft_dropping());
        assert_eq!(state.gravity_interval_ms(), 50);

        // Moving sideways keeps soft drop on
        state.step(0, FrameInput::held(Key::Left));
        assert!(state.is_soft_dropping());

        // Releasing every key turns it off
        state.step(0, FrameInput::default());
        assert!(!state.is_soft_dropping());
        assert_eq!(state.gravity_interval_ms(), 500);
    }

    #[test]
    fn test_soft_drop_applies_in_same_frame() {
        let mut state = game(&[PieceKind::O]);
        let events = state.step(50, FrameInput::held(Key::SoftDrop));
        assert!(events.moved_down);
    }

    #[test]
    fn test_rotation_reverts_one_step() {
        let mut state = game(&[PieceKind::T]);
        // T rotation 2 only allows x up to 8; at x = 8 rotating into 3 fails
        state.active = ActivePiece {
            kind: PieceKind::T,
            rotation: Rotation::South,
            x: 8,
            y: 5,
        };
        assert!(!state.try_rotate());
        assert_eq!(state.active.rotation, Rotation::South);
    }

    #[test]
    fn test_rotation_wraps_from_west() {
        let mut state = game(&[PieceKind::T]);
        state.active = ActivePiece {
            kind: PieceKind::T,
            rotation: Rotation::West,
            x: 3,
            y: 5,
        };
        assert!(state.try_rotate());
        assert_eq!(state.active.rotation, Rotation::North);
    }

    #[test]
    fn test_rotation_into_floor_is_reverted() {
        let mut state = game(&[PieceKind::I]);
        // Horizontal I on the last row; vertical I would reach row 21
        state.active = ActivePiece {
            kind: PieceKind::I,
            rotation: Rotation::East,
            x: 3,
            y: 18,
        };
        assert!(!state.try_rotate());
        assert_eq!(state.active.rotation, Rotation::East);
    }

    #[test]
    fn test_input_cooldown() {
        let mut state = GameState::new(
            PieceCatalog::classic(),
            EngineConfig::default(),
            FixedSequence::repeat(PieceKind::O),
        );

        state.step(16, FrameInput::held(Key::Right));
        assert_eq!(state.active().x, 4);

        // 16 + 16 + 16 < 50: still cooling down
        state.step(16, FrameInput::held(Key::Right));
        state.step(16, FrameInput::held(Key::Right));
        assert_eq!(state.active().x, 4);

        state.step(18, FrameInput::held(Key::Right));
        assert_eq!(state.active().x, 5);
    }

    #[test]
    fn test_lock_spawns_next_piece() {
        let mut state = game(&[PieceKind::O, PieceKind::T]);
        state.active.y = 18;

        let events = state.step(0, FrameInput::default());
        assert!(events.locked);
        assert_eq!(state.active(), ActivePiece::spawn(PieceKind::T));
        assert_eq!(state.board().get(4, 19), Some(2));
        assert_eq!(state.board().get(5, 18), Some(2));
        assert_eq!(state.pieces_spawned(), 2);
    }

    #[test]
    fn test_resting_piece_is_not_pushed_by_gravity() {
        let mut state = game(&[PieceKind::O]);
        state.active.y = 18;
        let events = state.step(500, FrameInput::default());
        assert!(!events.moved_down);
        assert!(events.locked);
        assert_eq!(state.board().get(4, 19), Some(2));
    }

    #[test]
    fn test_new_game_resets() {
        let mut state = game(&[PieceKind::O]);
        state.board.fill_row(0, 1);
        assert!(state.check_top_out());
        assert!(!state.alive());

        state.new_game();
        assert!(state.alive());
        assert_eq!(state.episode_id(), 1);
        assert_eq!(state.pieces_spawned(), 1);
        assert!(!state.board().is_row_occupied(0));
    }
}
