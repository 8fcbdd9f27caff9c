//! Collision checks between a piece mask and the board
//!
//! Pure predicates, no side effects.

use crate::board::Board;
use crate::bounds::horizontal_range;
use crate::catalog::PieceCatalog;
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT};

/// Does the piece at (x, y) collide?
///
/// True when an occupied mask cell overlaps an occupied board cell, or when
/// x lies outside the boundary table range for (kind, rotation). Rows are not
/// bounds-checked: a mask cell above or below the grid never overlaps.
pub fn collides(
    board: &Board,
    catalog: &PieceCatalog,
    kind: PieceKind,
    rotation: Rotation,
    x: i8,
    y: i8,
) -> bool {
    if !horizontal_range(kind, rotation).contains(x) {
        return true;
    }
    catalog
        .occupied_cells(kind, rotation)
        .any(|(dx, dy, _)| board.is_occupied(x + dx, y + dy))
}

/// Does the piece rest on the stack or the floor?
///
/// True when some occupied mask cell has an occupied board cell directly
/// below it, or sits on the last row.
pub fn is_resting(
    board: &Board,
    catalog: &PieceCatalog,
    kind: PieceKind,
    rotation: Rotation,
    x: i8,
    y: i8,
) -> bool {
    catalog.occupied_cells(kind, rotation).any(|(dx, dy, _)| {
        let below = y + dy + 1;
        below >= BOARD_HEIGHT as i8 || board.is_occupied(x + dx, below)
    })
}

/// Does any occupied mask cell lie below the last row?
pub fn extends_below_floor(
    catalog: &PieceCatalog,
    kind: PieceKind,
    rotation: Rotation,
    y: i8,
) -> bool {
    catalog
        .occupied_cells(kind, rotation)
        .any(|(_, dy, _)| y + dy >= BOARD_HEIGHT as i8)
}
