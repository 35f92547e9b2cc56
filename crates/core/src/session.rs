//! Session module - the idle/playing/gameover state machine
//!
//! A session owns one board, one falling piece, and one next-piece slot for
//! its whole lifetime. It never arms timers: an external scheduler calls
//! [`Session::tick`] at the cadence [`Session::speed_ms`] prescribes and
//! re-arms itself after every level change, and player commands arrive
//! through [`Session::apply`] between ticks. Every entry point takes
//! `&mut self`, so delivery is serialized by construction; the caller must
//! still cancel any outstanding scheduled tick before restarting.
//!
//! Invalid moves and rotations are not errors - they leave the state
//! untouched and are observable only as the absence of a transition.

use std::fmt;

use blockfall_types::{Command, Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

use crate::board::Board;
use crate::collision::placement_fits;
use crate::pieces::Shape;
use crate::rng::PieceRng;
use crate::scoring;
use crate::snapshot::{ActiveView, SessionSnapshot};

/// The falling piece: a shape value plus the board position of its bounding
/// box's top-left corner. Orientation is implicit in the shape value; the
/// piece is replaced wholesale when it locks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    shape: Shape,
    x: i8,
    y: i8,
}

impl ActivePiece {
    /// A fresh piece at the canonical spawn position: horizontally centered,
    /// top row.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::of(kind);
        let x = (BOARD_WIDTH as i8 - shape.width()) / 2;
        Self { shape, x, y: 0 }
    }

    pub fn kind(&self) -> PieceKind {
        self.shape.kind()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    /// Absolute board coordinates of the occupied cells. May include
    /// spawn-buffer rows (negative y).
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let (x, y) = (self.x, self.y);
        self.shape.cells().map(move |(ox, oy)| (x + ox, y + oy))
    }

    /// Would the piece fit after translating by (dx, dy)?
    pub fn fits(&self, board: &Board, dx: i8, dy: i8) -> bool {
        placement_fits(board, &self.shape, self.x + dx, self.y + dy)
    }
}

/// High-score collaborator, consulted exactly once per session on entering
/// `GameOver`. Implementations must not block the gameplay path; fallible
/// backends belong behind `blockfall-persist`, which absorbs and logs their
/// failures before they can reach the engine.
pub trait HighScores {
    fn high_score(&mut self, game_id: &str) -> u32;
    fn save_high_score(&mut self, game_id: &str, score: u32);
}

/// Null collaborator for sessions that do not track high scores.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHighScores;

impl HighScores for NoHighScores {
    fn high_score(&mut self, _game_id: &str) -> u32 {
        0
    }

    fn save_high_score(&mut self, _game_id: &str, _score: u32) {}
}

/// One game session. Created in `Idle`; `Start` (or `Restart`) moves it to
/// `Playing`; a blocked spawn ends it in the terminal `GameOver` state.
pub struct Session {
    board: Board,
    active: Option<ActivePiece>,
    next: PieceKind,
    rng: PieceRng,
    score: u32,
    level: u32,
    lines: u32,
    phase: Phase,
    game_id: String,
    scores: Box<dyn HighScores>,
}

impl Session {
    /// Session without high-score tracking.
    pub fn new(game_id: impl Into<String>, seed: u32) -> Self {
        Self::with_high_scores(game_id, seed, Box::new(NoHighScores))
    }

    /// Session wired to a high-score collaborator.
    pub fn with_high_scores(
        game_id: impl Into<String>,
        seed: u32,
        scores: Box<dyn HighScores>,
    ) -> Self {
        let mut rng = PieceRng::new(seed);
        let next = rng.draw();
        Self {
            board: Board::new(),
            active: None,
            next,
            rng,
            score: 0,
            level: 1,
            lines: 0,
            phase: Phase::Idle,
            game_id: game_id.into(),
            scores,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    /// The one upcoming piece in the next-piece slot.
    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    /// Current gravity interval in milliseconds. Re-read after every level
    /// change; the caller owns the timer that uses it.
    pub fn speed_ms(&self) -> u32 {
        scoring::speed_ms(self.level)
    }

    /// Apply one player command. Commands that do not apply to the current
    /// phase are ignored; `Restart` is the exception and is honored from any
    /// phase, since it is the only exit from `GameOver`.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Restart => self.begin(),
            Command::Start => {
                if self.phase == Phase::Idle {
                    self.begin();
                }
            }
            _ if self.phase != Phase::Playing => {}
            Command::MoveLeft => self.shift(-1),
            Command::MoveRight => self.shift(1),
            Command::RotateCw => self.rotate(),
            Command::SoftDrop => self.step_down(),
            Command::HardDrop => self.hard_drop(),
        }
    }

    /// One gravity step: move the piece down a row, or lock it and spawn the
    /// next one. No-op outside `Playing`.
    pub fn tick(&mut self) {
        if self.phase == Phase::Playing {
            self.step_down();
        }
    }

    /// Read-only sample of the full session state.
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut board = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.board.write_grid(&mut board);
        SessionSnapshot {
            board,
            active: self.active.as_ref().map(ActiveView::of),
            next: self.next,
            score: self.score,
            level: self.level,
            lines: self.lines,
            phase: self.phase,
        }
    }

    fn begin(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.active = Some(ActivePiece::spawn(self.rng.draw()));
        self.next = self.rng.draw();
        self.phase = Phase::Playing;
    }

    fn shift(&mut self, dx: i8) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if placement_fits(&self.board, &active.shape, active.x + dx, active.y) {
            active.x += dx;
        }
    }

    fn rotate(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let rotated = active.shape.rotated();
        // No wall kicks: a blocked rotation leaves the piece untouched.
        if placement_fits(&self.board, &rotated, active.x, active.y) {
            active.shape = rotated;
        }
    }

    fn step_down(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if placement_fits(&self.board, &active.shape, active.x, active.y + 1) {
            active.y += 1;
        } else {
            self.lock_and_spawn();
        }
    }

    fn hard_drop(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let mut fall = 0;
        while placement_fits(&self.board, &active.shape, active.x, active.y + fall + 1) {
            fall += 1;
        }
        active.y += fall;
        self.lock_and_spawn();
    }

    /// Lock the piece, compact full rows, update the counters, and bring the
    /// next piece in. A blocked spawn ends the session.
    fn lock_and_spawn(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        self.board.place(&piece.shape, piece.x, piece.y);

        let cleared = self.board.clear_lines();
        if cleared > 0 {
            self.score += scoring::line_clear_points(cleared, self.level);
            self.lines += cleared as u32;
            self.level = scoring::level_for_lines(self.lines);
        }

        let spawned = ActivePiece::spawn(self.next);
        self.next = self.rng.draw();
        let blocked = !spawned.fits(&self.board, 0, 0);
        // The overlapping piece stays visible in the terminal snapshot; the
        // board itself never absorbs it.
        self.active = Some(spawned);
        if blocked {
            self.finish();
        }
    }

    /// Enter the terminal state and notify the high-score collaborator.
    /// The save is fire-and-forget: its outcome cannot change the phase.
    fn finish(&mut self) {
        self.phase = Phase::GameOver;
        let final_score = self.score;
        if final_score > self.scores.high_score(&self.game_id) {
            self.scores.save_high_score(&self.game_id, final_score);
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("game_id", &self.game_id)
            .field("phase", &self.phase)
            .field("score", &self.score)
            .field("level", &self.level)
            .field("lines", &self.lines)
            .field("active", &self.active)
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}
