//! Pieces module - the tetromino catalog and clockwise rotation
//!
//! Each of the 7 kinds is defined by an occupancy grid inside a tight
//! bounding box (a 1x4 bar, a 2x2 square, and so on). Rotating transposes
//! the grid and reverses each resulting row: one fixed clockwise step that
//! swaps the box's width and height. There are no orientation lookup tables
//! and no wall kicks; a rotation that does not fit simply never happens.

use arrayvec::ArrayVec;
use blockfall_types::{PieceKind, Rgb};

/// One row of a shape's bounding box.
pub type ShapeRow = ArrayVec<bool, 4>;

type Grid = ArrayVec<ShapeRow, 4>;

/// An immutable shape value: a piece kind plus the occupancy grid of its
/// current orientation. Rotation produces a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    kind: PieceKind,
    grid: Grid,
}

fn grid<const R: usize, const C: usize>(rows: [[u8; C]; R]) -> Grid {
    rows.iter()
        .map(|row| -> ShapeRow { row.iter().map(|&cell| cell != 0).collect() })
        .collect()
}

impl Shape {
    /// The spawn orientation of a kind.
    pub fn of(kind: PieceKind) -> Self {
        let grid = match kind {
            PieceKind::I => grid([[1, 1, 1, 1]]),
            PieceKind::O => grid([[1, 1], [1, 1]]),
            PieceKind::T => grid([[0, 1, 0], [1, 1, 1]]),
            PieceKind::S => grid([[0, 1, 1], [1, 1, 0]]),
            PieceKind::Z => grid([[1, 1, 0], [0, 1, 1]]),
            PieceKind::L => grid([[1, 0], [1, 0], [1, 1]]),
            PieceKind::J => grid([[0, 1], [0, 1], [1, 1]]),
        };
        Self { kind, grid }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    /// Bounding-box width in columns.
    pub fn width(&self) -> i8 {
        self.grid[0].len() as i8
    }

    /// Bounding-box height in rows.
    pub fn height(&self) -> i8 {
        self.grid.len() as i8
    }

    /// The shape rotated one clockwise step: transpose, then reverse each
    /// resulting row. A `w x h` box becomes `h x w`.
    pub fn rotated(&self) -> Self {
        let rows = self.grid.len();
        let cols = self.grid[0].len();
        let mut grid = Grid::new();
        for x in 0..cols {
            let mut row = ShapeRow::new();
            for y in (0..rows).rev() {
                row.push(self.grid[y][x]);
            }
            grid.push(row);
        }
        Self {
            kind: self.kind,
            grid,
        }
    }

    /// Occupied offsets within the bounding box, as (x, y) pairs.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.grid.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &filled)| filled)
                .map(move |(x, _)| (x as i8, y as i8))
        })
    }
}
