//! Collision module - pure placement validation
//!
//! A placement is legal when every occupied cell of the shape lands inside
//! the column range, above the floor, and on an unlocked cell. Rows above
//! the visible field (negative y) are always permitted: they form the spawn
//! buffer where a piece may momentarily exist at spawn time, and must not be
//! rejected as out of bounds.
//!
//! The check is side-effect free, so it doubles as the speculative probe for
//! hard-drop searches and rotation attempts.

use blockfall_types::{BOARD_HEIGHT, BOARD_WIDTH};

use crate::board::Board;
use crate::pieces::Shape;

/// Would `shape`, with its bounding box's top-left corner at (x, y), rest
/// entirely on legal, unoccupied positions?
pub fn placement_fits(board: &Board, shape: &Shape, x: i8, y: i8) -> bool {
    shape.cells().all(|(ox, oy)| {
        let cx = x + ox;
        let cy = y + oy;
        if cx < 0 || cx >= BOARD_WIDTH as i8 {
            return false;
        }
        if cy >= BOARD_HEIGHT as i8 {
            return false;
        }
        // Spawn buffer: anything above the visible field is free.
        cy < 0 || !board.is_occupied(cx, cy)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_types::PieceKind;

    #[test]
    fn fits_on_open_field() {
        let board = Board::new();
        let shape = Shape::of(PieceKind::T);
        assert!(placement_fits(&board, &shape, 0, 0));
        assert!(placement_fits(&board, &shape, 7, 18));
    }

    #[test]
    fn rejects_wall_overlap() {
        let board = Board::new();
        let shape = Shape::of(PieceKind::T);
        assert!(!placement_fits(&board, &shape, -1, 5));
        assert!(!placement_fits(&board, &shape, 8, 5));
    }

    #[test]
    fn rejects_floor_overlap() {
        let board = Board::new();
        // T is two rows tall, so row 19 would push it past the floor.
        let shape = Shape::of(PieceKind::T);
        assert!(placement_fits(&board, &shape, 3, 18));
        assert!(!placement_fits(&board, &shape, 3, 19));
    }

    #[test]
    fn rejects_locked_cells() {
        let mut board = Board::new();
        board.set(4, 10, Some(PieceKind::I));
        let shape = Shape::of(PieceKind::O);
        assert!(!placement_fits(&board, &shape, 4, 10));
        assert!(placement_fits(&board, &shape, 6, 10));
    }

    #[test]
    fn spawn_buffer_rows_are_legal() {
        let board = Board::new();
        let shape = Shape::of(PieceKind::I);
        assert!(placement_fits(&board, &shape, 0, -1));

        let upright = shape.rotated();
        // Three of four cells above the field, one visible: still legal.
        assert!(placement_fits(&board, &upright, 5, -3));
    }

    #[test]
    fn spawn_buffer_does_not_excuse_visible_collisions() {
        let mut board = Board::new();
        board.set(5, 0, Some(PieceKind::Z));
        let upright = Shape::of(PieceKind::I).rotated();
        // Bottom cell lands on the locked cell at (5, 0).
        assert!(!placement_fits(&board, &upright, 5, -3));
    }

    #[test]
    fn check_is_pure() {
        let mut board = Board::new();
        board.set(2, 17, Some(PieceKind::L));
        let before = board.clone();
        let shape = Shape::of(PieceKind::S);

        let first = placement_fits(&board, &shape, 1, 16);
        let second = placement_fits(&board, &shape, 1, 16);
        assert_eq!(first, second);
        assert_eq!(board, before);
    }
}
