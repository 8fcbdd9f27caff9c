//! Color index to RGB mapping.

use crate::fb::Rgb;
use crate::types::{Cell, MAX_COLOR_INDEX};

/// Index 0 is the empty background, 1..=7 the pieces, 8 the grid lines.
pub const PALETTE: [Rgb; MAX_COLOR_INDEX as usize + 1] = [
    Rgb::new(0, 0, 0),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 255, 0),
    Rgb::new(128, 0, 128),
    Rgb::new(0, 255, 0),
    Rgb::new(255, 0, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(255, 0, 0),
    Rgb::new(30, 30, 30),
];

pub const GRID_COLOR: Cell = 8;
pub const TEXT_COLOR: Rgb = Rgb::new(220, 220, 220);

/// Unknown indices render as the background.
pub fn rgb(color: Cell) -> Rgb {
    PALETTE.get(color as usize).copied().unwrap_or(PALETTE[0])
}
