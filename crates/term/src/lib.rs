//! Terminal rendering for the tetrimino game.
//!
//! The game view only talks to the [`Canvas`] trait. [`FrameCanvas`] draws
//! into an in-memory framebuffer (what the tests use) and [`TerminalCanvas`]
//! flushes that framebuffer to the terminal with `crossterm`, writing only
//! the glyphs that changed.
//!
//! Board cells are two terminal columns wide to compensate for the usual
//! glyph aspect ratio.

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tetrimino_core as core;
pub use tetrimino_types as types;

pub use canvas::{Canvas, FrameCanvas};
pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use game_view::GameView;
pub use renderer::{encode_diff_into, encode_full_into, TerminalCanvas, TerminalRenderer};
