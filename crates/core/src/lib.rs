//! Core game logic: pure, deterministic, and free of I/O.
//!
//! The engine exposes a state-transition API that an external scheduler
//! ticks and a rendering collaborator polls. It never draws, never starts
//! timers, and never touches the network; the only outward call is the
//! high-score notification a session issues once, on reaching its terminal
//! state.
//!
//! # Module structure
//!
//! - [`board`]: 10x20 occupancy grid, locking, line compaction
//! - [`pieces`]: the 7-shape catalog and clockwise rotation
//! - [`collision`]: pure placement validation with the spawn-buffer rule
//! - [`rng`]: seedable uniform next-piece draw
//! - [`scoring`]: reward table, level curve, gravity cadence
//! - [`session`]: the idle/playing/gameover state machine
//! - [`snapshot`]: read-only view for rendering collaborators
//!
//! # Example
//!
//! ```
//! use blockfall_core::session::Session;
//! use blockfall_types::Command;
//!
//! let mut session = Session::new("arcade-puzzle", 12345);
//! session.apply(Command::Start);
//! session.apply(Command::MoveLeft);
//! session.tick();
//!
//! let view = session.snapshot();
//! assert!(view.active.is_some());
//! ```

pub mod board;
pub mod collision;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::placement_fits;
pub use pieces::Shape;
pub use rng::{PieceRng, SimpleRng};
pub use session::{ActivePiece, HighScores, NoHighScores, Session};
pub use snapshot::{ActiveView, SessionSnapshot};
