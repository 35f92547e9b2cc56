//! Shared types and constants for the falling-block engine.
//!
//! Pure data with no dependencies, usable from the core engine, render
//! collaborators, and persistence glue alike.
//!
//! # Board dimensions
//!
//! - **Width**: 10 columns (indexed 0..9, left to right)
//! - **Height**: 20 rows (indexed 0..19, top to bottom)
//!
//! Rows above the visible field (negative row indices) form the spawn
//! buffer: a piece may momentarily occupy them, but the board never stores
//! cells there.

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity cadence (milliseconds): one downward step every
/// `max(MIN_TICK_MS, BASE_TICK_MS - (level - 1) * TICK_STEP_MS)`.
/// The engine only computes this value; the caller owns the timer.
pub const BASE_TICK_MS: u32 = 1000;
pub const TICK_STEP_MS: u32 = 100;
pub const MIN_TICK_MS: u32 = 100;

/// Points awarded per simultaneous line clear, indexed by cleared-row count
/// (a single piece can complete at most 4 rows). Multiplied by the level.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Rows cleared per level-up; level = lines / LINES_PER_LEVEL + 1.
pub const LINES_PER_LEVEL: u32 = 10;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    L,
    J,
}

impl PieceKind {
    /// Every kind, in catalog order. The randomizer draws uniformly from
    /// this list.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Display color associated with the kind.
    pub fn color(self) -> Rgb {
        match self {
            PieceKind::I => Rgb(0, 240, 240),
            PieceKind::O => Rgb(240, 240, 0),
            PieceKind::T => Rgb(160, 0, 240),
            PieceKind::S => Rgb(0, 240, 0),
            PieceKind::Z => Rgb(240, 0, 0),
            PieceKind::L => Rgb(240, 160, 0),
            PieceKind::J => Rgb(0, 0, 240),
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Cell on the board (None = empty, Some = locked cell of a piece kind)
pub type Cell = Option<PieceKind>;

/// Discrete player commands, delivered already debounced by the input
/// collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    MoveLeft,
    MoveRight,
    RotateCw,
    SoftDrop,
    HardDrop,
    Restart,
}

/// Session lifecycle state. `GameOver` is terminal until a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Playing,
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_each_kind_once() {
        for kind in PieceKind::ALL {
            assert_eq!(
                PieceKind::ALL.iter().filter(|&&k| k == kind).count(),
                1,
                "{:?} should appear exactly once",
                kind
            );
        }
    }

    #[test]
    fn colors_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }
}
