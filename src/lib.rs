//! Tetrimino (workspace facade crate).
//!
//! The engine, input, and terminal layers live in dedicated crates under
//! `crates/`; this package re-exports them and owns the application config.

pub mod config;

pub use tetrimino_core as core;
pub use tetrimino_input as input;
pub use tetrimino_term as term;
pub use tetrimino_types as types;

pub use config::{AppConfig, ConfigError};
