//! Horizontal boundary table
//!
//! Each (piece, rotation) pair has a fixed range of legal x offsets for its
//! 4x4 box, because the masks carry different amounts of padding. The table is
//! a constant, not derived from the loaded catalog; [`audit`] cross-checks the
//! two so that a custom catalog with different padding gets reported.

use crate::catalog::PieceCatalog;
use crate::types::{PieceKind, Rotation, PIECE_COUNT, ROTATION_COUNT};

/// Inclusive range of legal x offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HorizontalRange {
    pub min_x: i8,
    pub max_x: i8,
}

impl HorizontalRange {
    pub const fn new(min_x: i8, max_x: i8) -> Self {
        Self { min_x, max_x }
    }

    #[inline]
    pub fn contains(&self, x: i8) -> bool {
        self.min_x <= x && x <= self.max_x
    }
}

const fn r(min_x: i8, max_x: i8) -> HorizontalRange {
    HorizontalRange::new(min_x, max_x)
}

/// Legal x ranges indexed `[piece][rotation]`
pub const BOUNDARY_TABLE: [[HorizontalRange; ROTATION_COUNT]; PIECE_COUNT] = [
    // I: vertical in rotations 0 and 2
    [r(-2, 7), r(0, 6), r(-2, 7), r(0, 6)],
    // O
    [r(-1, 7), r(-1, 7), r(-1, 7), r(-1, 7)],
    // T
    [r(-1, 7), r(0, 7), r(0, 8), r(0, 7)],
    // S
    [r(-1, 7), r(0, 7), r(-1, 7), r(0, 7)],
    // Z
    [r(-1, 7), r(0, 7), r(-1, 7), r(0, 7)],
    // J
    [r(-1, 7), r(0, 7), r(0, 8), r(0, 7)],
    // L
    [r(-1, 7), r(0, 7), r(0, 8), r(0, 7)],
];

/// Legal x range for a piece in a rotation
#[inline]
pub fn horizontal_range(kind: PieceKind, rotation: Rotation) -> HorizontalRange {
    BOUNDARY_TABLE[kind.index()][rotation.index()]
}

/// A table entry that disagrees with the catalog's mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryMismatch {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub table: HorizontalRange,
    /// Range implied by the mask's occupied columns; `None` for an empty mask
    pub derived: Option<HorizontalRange>,
}

/// Compare the boundary table with the column occupancy of `catalog`.
///
/// Returns every entry whose table range differs from the range derived
/// from the mask. An empty result means the table and catalog agree.
pub fn audit(catalog: &PieceCatalog) -> Vec<BoundaryMismatch> {
    let mut mismatches = Vec::new();
    for kind in PieceKind::ALL {
        for rotation in Rotation::ALL {
            let table = horizontal_range(kind, rotation);
            let derived = catalog
                .derived_range(kind, rotation)
                .map(|(lo, hi)| HorizontalRange::new(lo, hi));
            if derived != Some(table) {
                mismatches.push(BoundaryMismatch {
                    kind,
                    rotation,
                    table,
                    derived,
                });
            }
        }
    }
    mismatches
}
