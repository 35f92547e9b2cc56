//! Board module - the grid of locked cells
//!
//! The board is a 10x20 grid where each cell is empty or locked with a piece
//! kind. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) with x in 0..9 (left to right), y in 0..19 (top to
//! bottom). The board only ever stores locked cells; the falling piece lives
//! in the session until it locks.

use blockfall_types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

use crate::pieces::Shape;

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y). Returns None if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is inside the grid and holds a locked cell.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Lock a shape onto the board with its bounding box's top-left corner
    /// at (x, y).
    ///
    /// Performs no validation: the caller must already have vetted the
    /// placement through the collision checker. Locking an overlapping or
    /// out-of-range placement overwrites cells or drops them silently.
    /// The split keeps validation reusable for speculative checks (hard-drop
    /// search) without side effects.
    pub fn place(&mut self, shape: &Shape, x: i8, y: i8) {
        for (ox, oy) in shape.cells() {
            self.set(x + ox, y + oy, Some(shape.kind()));
        }
    }

    /// Check if a row is completely locked
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        self.cells[start..start + BOARD_WIDTH as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove every full row in a single pass, shifting the rows above down
    /// and leaving fresh empty rows at the top. Returns the number of rows
    /// removed. Simultaneous multi-row clears are handled in the same sweep;
    /// the grid's row and column counts never change.
    pub fn clear_lines(&mut self) -> usize {
        let width = BOARD_WIDTH as usize;
        let mut cleared = 0;
        let mut write = BOARD_HEIGHT as usize;

        // Bottom-up sweep: full rows are skipped, surviving rows compact
        // toward the write cursor.
        for read in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read) {
                cleared += 1;
            } else {
                write -= 1;
                if write != read {
                    let src = read * width;
                    self.cells.copy_within(src..src + width, write * width);
                }
            }
        }

        for cell in &mut self.cells[..write * width] {
            *cell = None;
        }

        cleared
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Flat view of the cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the cells into a 2D grid, for snapshots.
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * width;
            row.copy_from_slice(&self.cells[start..start + width]);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_types::PieceKind;

    #[test]
    fn index_maps_row_major() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn place_writes_every_cell_of_the_shape() {
        let mut board = Board::new();
        board.place(&Shape::of(PieceKind::O), 3, 5);

        assert_eq!(board.get(3, 5), Some(Some(PieceKind::O)));
        assert_eq!(board.get(4, 5), Some(Some(PieceKind::O)));
        assert_eq!(board.get(3, 6), Some(Some(PieceKind::O)));
        assert_eq!(board.get(4, 6), Some(Some(PieceKind::O)));
        assert_eq!(board.get(5, 5), Some(None));
    }

    #[test]
    fn place_drops_spawn_buffer_cells() {
        let mut board = Board::new();
        // Horizontal I entirely above the visible field: nothing lands.
        board.place(&Shape::of(PieceKind::I), 0, -1);
        assert!(board.cells().iter().all(|cell| cell.is_none()));
    }

    #[test]
    fn place_does_not_validate_overlap() {
        let mut board = Board::new();
        board.set(3, 5, Some(PieceKind::T));
        board.place(&Shape::of(PieceKind::O), 3, 5);
        // Unvalidated locking overwrites; validity is the caller's problem.
        assert_eq!(board.get(3, 5), Some(Some(PieceKind::O)));
    }

    #[test]
    fn row_fullness() {
        let mut board = Board::new();
        assert!(!board.is_row_full(5));

        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, 5, Some(PieceKind::T));
        }
        assert!(board.is_row_full(5));

        board.set(9, 5, None);
        assert!(!board.is_row_full(5));
        assert!(!board.is_row_full(BOARD_HEIGHT as usize));
    }

    #[test]
    fn clear_lines_removes_single_full_row() {
        let mut board = Board::new();
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, 19, Some(PieceKind::I));
        }
        board.set(0, 18, Some(PieceKind::T));

        assert_eq!(board.clear_lines(), 1);
        // The marker above drops into the vacated bottom row.
        assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
        assert_eq!(board.get(1, 19), Some(None));
    }

    #[test]
    fn clear_lines_handles_simultaneous_rows() {
        let mut board = Board::new();
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, 5, Some(PieceKind::T));
            board.set(x, 10, Some(PieceKind::I));
            board.set(x, 15, Some(PieceKind::O));
        }
        board.set(0, 4, Some(PieceKind::J));
        board.set(0, 9, Some(PieceKind::L));
        board.set(0, 14, Some(PieceKind::S));

        assert_eq!(board.clear_lines(), 3);
        // Each marker falls by the number of full rows that were below it.
        assert_eq!(board.get(0, 7), Some(Some(PieceKind::J)));
        assert_eq!(board.get(0, 11), Some(Some(PieceKind::L)));
        assert_eq!(board.get(0, 15), Some(Some(PieceKind::S)));
    }

    #[test]
    fn clear_lines_preserves_grid_shape() {
        let mut board = Board::new();
        for y in 16..20 {
            for x in 0..BOARD_WIDTH as i8 {
                board.set(x, y, Some(PieceKind::S));
            }
        }
        assert_eq!(board.clear_lines(), 4);
        assert_eq!(board.cells().len(), BOARD_SIZE);
        assert!(board.cells().iter().all(|cell| cell.is_none()));
    }

    #[test]
    fn clear_lines_on_empty_board_is_zero() {
        let mut board = Board::new();
        assert_eq!(board.clear_lines(), 0);
    }
}
