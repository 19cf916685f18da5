//! Core module - shared infrastructure for the game crate
//!
//! Currently holds the crate-wide error types. Logging setup lives in the
//! binary (`main.rs`); everything game-specific lives under [`crate::game`].

pub mod error;

pub use error::{GameError, GameResult};
