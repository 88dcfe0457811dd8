//! Geister rules engine library.
//!
//! Exposes the board state machine, the player capability seam, the turn
//! loop, and setup helpers for use by integration tests and the console
//! binary.

pub mod board;
pub mod game;
pub mod player;
pub mod setup;
