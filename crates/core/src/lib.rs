//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the tetrimino engine: the piece catalog, collision checks,
//! board mutation, scoring and the per-frame turn controller. It has **no
//! dependencies** on rendering, terminals or wall-clock time, so it is:
//!
//! - **Deterministic**: the same piece source and frame inputs replay the same game
//! - **Testable**: every rule can be exercised without a terminal
//! - **Fast**: zero-allocation frame steps
//!
//! # Module Structure
//!
//! - [`catalog`]: the 7 x 4 table of 4x4 piece masks and its text format
//! - [`bounds`]: per piece/rotation horizontal offset ranges
//! - [`collision`]: overlap, boundary and resting checks
//! - [`board`]: 10x20 grid, lock-in and line clearing
//! - [`scoring`]: NES line scores, leveling and gravity speed
//! - [`rng`]: injectable piece sources
//! - [`game_state`]: the turn controller
//! - [`snapshot`]: per-frame view for the renderer
//! - [`config`]: engine tuning
//!
//! # Example
//!
//! ```
//! use tetrimino_core::{EngineConfig, FixedSequence, GameState, PieceCatalog};
//! use tetrimino_types::{FrameInput, Key, PieceKind};
//!
//! let mut game = GameState::new(
//!     PieceCatalog::classic(),
//!     EngineConfig::default(),
//!     FixedSequence::repeat(PieceKind::O),
//! );
//!
//! // Half a second of gravity moves the piece down one row
//! let events = game.step(500, FrameInput::default());
//! assert!(events.moved_down);
//!
//! game.step(16, FrameInput::held(Key::Left));
//! assert_eq!(game.active().x, 2);
//! assert!(game.alive());
//! ```
//!
//! # Timing
//!
//! [`GameState::step`](game_state::GameState::step) takes the milliseconds
//! elapsed since the previous frame. Gravity fires when the accumulated time
//! reaches `max(500 - level * 50, 50)` ms, or 50 ms while soft dropping.

pub mod board;
pub mod bounds;
pub mod catalog;
pub mod collision;
pub mod config;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tetrimino_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearReport};
pub use bounds::{audit, horizontal_range, BoundaryMismatch, HorizontalRange, BOUNDARY_TABLE};
pub use catalog::{CatalogError, PieceCatalog, PieceMask};
pub use collision::{collides, is_resting};
pub use config::EngineConfig;
pub use game_state::{ActivePiece, FrameEvents, GameState, Phase};
pub use rng::{FixedSequence, PieceSource, SimpleRng};
pub use scoring::{gravity_interval_ms, line_clear_score, BatchOutcome, Progress};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
