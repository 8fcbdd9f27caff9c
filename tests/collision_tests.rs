//! Collision tests - boundary table and overlap

use tetrimino::core::{audit, collides, horizontal_range, is_resting, Board, PieceCatalog};
use tetrimino::types::{PieceKind, Rotation};

#[test]
fn test_every_in_range_offset_is_free_on_empty_board() {
    let catalog = PieceCatalog::classic();
    let board = Board::new();

    for kind in PieceKind::ALL {
        for rotation in Rotation::ALL {
            let range = horizontal_range(kind, rotation);
            for x in range.min_x..=range.max_x {
                assert!(
                    !collides(&board, &catalog, kind, rotation, x, 5),
                    "{kind:?} {rotation:?} at x = {x}"
                );
            }
            assert!(collides(&board, &catalog, kind, rotation, range.min_x - 1, 5));
            assert!(collides(&board, &catalog, kind, rotation, range.max_x + 1, 5));
        }
    }
}

#[test]
fn test_in_range_offsets_keep_every_cell_on_the_board() {
    let catalog = PieceCatalog::classic();
    for kind in PieceKind::ALL {
        for rotation in Rotation::ALL {
            let range = horizontal_range(kind, rotation);
            for x in range.min_x..=range.max_x {
                for (dx, _, _) in catalog.occupied_cells(kind, rotation) {
                    assert!((0..10).contains(&(x + dx)));
                }
            }
        }
    }
}

#[test]
fn test_classic_catalog_matches_boundary_table() {
    assert!(audit(&PieceCatalog::classic()).is_empty());
}

#[test]
fn test_overlap_with_stack() {
    let catalog = PieceCatalog::classic();
    let mut board = Board::new();
    board.set(4, 10, 5);

    // O covers columns x+1 and x+2
    assert!(collides(&board, &catalog, PieceKind::O, Rotation::North, 3, 9));
    assert!(!collides(&board, &catalog, PieceKind::O, Rotation::North, 4, 9));
    assert!(!collides(&board, &catalog, PieceKind::O, Rotation::North, 3, 7));
}

#[test]
fn test_rows_above_the_grid_never_collide() {
    let catalog = PieceCatalog::classic();
    let board = Board::new();
    assert!(!collides(&board, &catalog, PieceKind::I, Rotation::North, 3, -3));
}

#[test]
fn test_resting_on_floor_and_stack() {
    let catalog = PieceCatalog::classic();
    let mut board = Board::new();

    // O occupies the top two rows of its box
    assert!(is_resting(&board, &catalog, PieceKind::O, Rotation::North, 3, 18));
    assert!(!is_resting(&board, &catalog, PieceKind::O, Rotation::North, 3, 17));

    board.set(5, 10, 1);
    assert!(is_resting(&board, &catalog, PieceKind::O, Rotation::North, 3, 8));
    assert!(!is_resting(&board, &catalog, PieceKind::O, Rotation::North, 3, 7));
}
