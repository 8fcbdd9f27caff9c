//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events to [`crate::types::Key`] and keeps the held state
//! the engine samples once per frame, including for terminals that never
//! send key-release events.

pub mod handler;
pub mod map;
pub mod source;

pub use tetrimino_types as types;

pub use handler::KeyboardState;
pub use map::{map_key, should_quit, wait_for_any_key};
pub use source::InputSource;
