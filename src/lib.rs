//! Gridfall: a terminal falling-block puzzle game.
//!
//! The crate splits into a pure game core (`core`), a gravity scheduler
//! (`runtime`), and a crossterm-based terminal layer (`term`, `input`).
//! The core never performs I/O and is driven entirely through
//! [`core::Game::apply_action`] and [`core::Game::descend`].

pub mod core;
pub mod input;
pub mod runtime;
pub mod term;
pub mod types;
