//! Core module - pure game rules with no external dependencies
//!
//! Board, shapes, collision, scoring, and the session state machine.
//! It has zero dependencies on UI, timing, or I/O.

pub mod board;
pub mod collision;
pub mod game;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use collision::collides;
pub use game::{ActivePiece, Game};
pub use rng::{PieceRng, SimpleRng};
pub use shape::{spawn_shape, Shape};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
