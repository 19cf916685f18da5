//! Game logic module - selection handling, bot move selection, session state
//!
//! Implements the click-to-move core on top of the `shakmaty` rules crate,
//! with clean separation between pure game logic and the egui presentation
//! layer in [`crate::ui`].
//!
//! # Module Organization
//!
//! - `rules` - Narrow capability interface over the rules engine
//!   ([`rules::RulesEngine`]) plus the shakmaty-backed implementation
//! - `selection` - The Idle/Armed click-selection value
//! - `session` - The session object owning board, selection, move log, and
//!   bot configuration; entry points for clicks and New Game
//! - `bot` - Greedy capture-value move selector with random tie-breaking
//! - `history` - Append-only move log with paired display rows
//! - `theme` - Faction names, piece codes, and the sidebar legend
//!
//! # Control Flow
//!
//! A square click reaches [`session::GameSession::handle_click`]. If it
//! completes a legal move, the move is applied through the rules layer and
//! notated into the log; if the configured opponent is a bot and it is now
//! the bot's turn, the selector in [`bot`] replies once. The UI never
//! mutates board state directly.

pub mod bot;
pub mod history;
pub mod rules;
pub mod selection;
pub mod session;
pub mod theme;
