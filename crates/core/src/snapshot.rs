//! Read-only state views for rendering collaborators.
//!
//! A snapshot is a plain-data sample of the session, safe to take at any
//! point between commands and ticks. Colors ride along so a renderer needs
//! no knowledge of the catalog.

use arrayvec::ArrayVec;
use blockfall_types::{Cell, Phase, PieceKind, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

use crate::session::ActivePiece;

/// View of the falling piece in absolute board coordinates. Cells still in
/// the spawn buffer carry negative rows; renderers clip those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveView {
    pub kind: PieceKind,
    pub color: Rgb,
    pub cells: ArrayVec<(i8, i8), 4>,
}

impl ActiveView {
    pub fn of(piece: &ActivePiece) -> Self {
        Self {
            kind: piece.kind(),
            color: piece.kind().color(),
            cells: piece.cells().collect(),
        }
    }
}

/// Full render-facing sample of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    /// Locked cells only; the falling piece is in `active`.
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveView>,
    pub next: PieceKind,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub phase: Phase,
}
