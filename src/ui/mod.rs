//! Presentation layer - egui rendering of the board, sidebar, and move log
//!
//! Pure glue over [`crate::game`]: the UI reads session state for
//! rendering and forwards square clicks to the session. It never touches
//! board state directly.

pub mod app;
pub mod board;
pub mod panels;

pub use app::GrimApp;
