//! Catalog module - the 7 x 4 table of piece occupancy masks
//!
//! A catalog is read once from a flat, whitespace-separated list of 448
//! integers in canonical order: piece, then rotation, then column, then row.
//! Each integer is a color index in `0..=8`, `0` meaning an empty mask cell.
//! Anything else (a bad token, a value out of range, too few or too many
//! values) is a [`CatalogError`] and the engine cannot start without a
//! complete catalog.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::types::{
    Cell, PieceKind, Rotation, BOARD_WIDTH, CATALOG_LEN, EMPTY_CELL, MASK_SIZE, MAX_COLOR_INDEX,
    PIECE_COUNT, ROTATION_COUNT,
};

/// The catalog shipped with the game.
const CLASSIC_SOURCE: &str = include_str!("../assets/tetriminos.txt");

/// A 4x4 occupancy mask, indexed `[column][row]`.
pub type PieceMask = [[Cell; MASK_SIZE]; MASK_SIZE];

/// Error raised while loading a catalog
#[derive(Debug)]
pub enum CatalogError {
    /// The source could not be read
    Io(io::Error),
    /// A token is not an integer
    Parse { index: usize, token: String },
    /// An integer is not a valid color index
    OutOfRange { index: usize, value: i64 },
    /// The source ended before 448 values were read
    Short { found: usize },
    /// The source continues after the 448th value
    Trailing { token: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read piece catalog: {err}"),
            CatalogError::Parse { index, token } => {
                write!(f, "value #{index} of piece catalog is not an integer: {token:?}")
            }
            CatalogError::OutOfRange { index, value } => write!(
                f,
                "value #{index} of piece catalog is {value}, expected 0..={MAX_COLOR_INDEX}"
            ),
            CatalogError::Short { found } => write!(
                f,
                "piece catalog is incomplete: found {found} of {CATALOG_LEN} values"
            ),
            CatalogError::Trailing { token } => write!(
                f,
                "piece catalog has data after {CATALOG_LEN} values, starting with {token:?}"
            ),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for CatalogError {
    fn from(err: io::Error) -> Self {
        CatalogError::Io(err)
    }
}

/// Immutable table of piece masks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceCatalog {
    masks: [[PieceMask; ROTATION_COUNT]; PIECE_COUNT],
}

impl PieceCatalog {
    /// The catalog shipped with the game
    pub fn classic() -> Self {
        // The embedded asset is checked by the tests below.
        match Self::parse(CLASSIC_SOURCE) {
            Ok(catalog) => catalog,
            Err(err) => unreachable!("embedded piece catalog is invalid: {err}"),
        }
    }

    /// Parse a catalog from its textual form
    pub fn parse(source: &str) -> Result<Self, CatalogError> {
        let mut values = [EMPTY_CELL; CATALOG_LEN];
        let mut tokens = source.split_whitespace();

        for (index, slot) in values.iter_mut().enumerate() {
            let token = tokens.next().ok_or(CatalogError::Short { found: index })?;
            let value: i64 = token.parse().map_err(|_| CatalogError::Parse {
                index,
                token: token.to_string(),
            })?;
            if !(0..=i64::from(MAX_COLOR_INDEX)).contains(&value) {
                return Err(CatalogError::OutOfRange { index, value });
            }
            *slot = value as Cell;
        }

        if let Some(token) = tokens.next() {
            return Err(CatalogError::Trailing {
                token: token.to_string(),
            });
        }

        Ok(Self::from_values(&values))
    }

    /// Read and parse a catalog from any reader
    pub fn from_reader(mut reader: impl Read) -> Result<Self, CatalogError> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Self::parse(&source)
    }

    /// Load a catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    fn from_values(values: &[Cell; CATALOG_LEN]) -> Self {
        let mut masks = [[[[EMPTY_CELL; MASK_SIZE]; MASK_SIZE]; ROTATION_COUNT]; PIECE_COUNT];
        let mut it = values.iter();
        for piece in masks.iter_mut() {
            for mask in piece.iter_mut() {
                for column in mask.iter_mut() {
                    for (cell, value) in column.iter_mut().zip(&mut it) {
                        *cell = *value;
                    }
                }
            }
        }
        Self { masks }
    }

    /// Mask for a piece in a rotation
    pub fn shape_of(&self, kind: PieceKind, rotation: Rotation) -> &PieceMask {
        &self.masks[kind.index()][rotation.index()]
    }

    /// Occupied cells of a mask as `(column, row, color)`
    pub fn occupied_cells(
        &self,
        kind: PieceKind,
        rotation: Rotation,
    ) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        occupied_cells(self.shape_of(kind, rotation))
    }

    /// Leftmost and rightmost occupied column, `None` for an empty mask
    pub fn column_span(&self, kind: PieceKind, rotation: Rotation) -> Option<(i8, i8)> {
        self.occupied_cells(kind, rotation)
            .fold(None, |span, (col, _, _)| match span {
                None => Some((col, col)),
                Some((lo, hi)) => Some((lo.min(col), hi.max(col))),
            })
    }

    /// Horizontal offsets that keep every occupied column on the board,
    /// derived from the mask itself.
    pub fn derived_range(&self, kind: PieceKind, rotation: Rotation) -> Option<(i8, i8)> {
        self.column_span(kind, rotation)
            .map(|(lo, hi)| (-lo, BOARD_WIDTH as i8 - 1 - hi))
    }
}

impl Default for PieceCatalog {
    fn default() -> Self {
        Self::classic()
    }
}

/// Occupied cells of a mask as `(column, row, color)`
pub fn occupied_cells(mask: &PieceMask) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
    mask.iter().enumerate().flat_map(|(col, column)| {
        column
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell != EMPTY_CELL)
            .map(move |(row, &cell)| (col as i8, row as i8, cell))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_catalog_parses() {
        assert!(PieceCatalog::parse(CLASSIC_SOURCE).is_ok());
    }

    #[test]
    fn test_every_classic_mask_has_four_cells_of_its_color() {
        let catalog = PieceCatalog::classic();
        for kind in PieceKind::ALL {
            for rotation in Rotation::ALL {
                let cells: Vec<_> = catalog.occupied_cells(kind, rotation).collect();
                assert_eq!(cells.len(), 4, "{:?} {:?}", kind, rotation);
                assert!(cells.iter().all(|&(_, _, c)| c == kind.color_index()));
            }
        }
    }

    #[test]
    fn test_canonical_order_is_piece_rotation_column_row() {
        // Only the last value (piece 6, rotation 3, column 3, row 3) is set.
        let mut values = vec!["0"; CATALOG_LEN];
        values[CATALOG_LEN - 1] = "7";
        let catalog = PieceCatalog::parse(&values.join(" ")).unwrap();

        let mask = catalog.shape_of(PieceKind::L, Rotation::West);
        assert_eq!(mask[3][3], 7);
        assert_eq!(mask[3][2], 0);

        // Value #4 is piece 0, rotation 0, column 1, row 0.
        let mut values = vec!["0"; CATALOG_LEN];
        values[4] = "1";
        let catalog = PieceCatalog::parse(&values.join("\n")).unwrap();
        assert_eq!(catalog.shape_of(PieceKind::I, Rotation::North)[1][0], 1);
    }

    #[test]
    fn test_short_input_is_rejected() {
        let source = vec!["0"; 447].join(" ");
        match PieceCatalog::parse(&source) {
            Err(CatalogError::Short { found }) => assert_eq!(found, 447),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_bad_token_is_rejected() {
        let mut values = vec!["0"; CATALOG_LEN];
        values[10] = "x";
        match PieceCatalog::parse(&values.join(" ")) {
            Err(CatalogError::Parse { index, token }) => {
                assert_eq!(index, 10);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_value_is_rejected() {
        let mut values = vec!["0"; CATALOG_LEN];
        values[3] = "9";
        assert!(matches!(
            PieceCatalog::parse(&values.join(" ")),
            Err(CatalogError::OutOfRange { index: 3, value: 9 })
        ));

        values[3] = "-1";
        assert!(matches!(
            PieceCatalog::parse(&values.join(" ")),
            Err(CatalogError::OutOfRange { index: 3, value: -1 })
        ));
    }

    #[test]
    fn test_trailing_data_is_rejected() {
        let source = format!("{} 0", vec!["0"; CATALOG_LEN].join(" "));
        assert!(matches!(
            PieceCatalog::parse(&source),
            Err(CatalogError::Trailing { .. })
        ));
    }

    #[test]
    fn test_column_span() {
        let catalog = PieceCatalog::classic();
        assert_eq!(catalog.column_span(PieceKind::I, Rotation::North), Some((2, 2)));
        assert_eq!(catalog.column_span(PieceKind::I, Rotation::East), Some((0, 3)));
        assert_eq!(catalog.column_span(PieceKind::O, Rotation::South), Some((1, 2)));
        assert_eq!(catalog.derived_range(PieceKind::T, Rotation::South), Some((0, 8)));
    }
}
