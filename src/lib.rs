pub mod core;
pub mod game;
pub mod ui;

pub use game::session::{BotSide, GameSession};
pub use ui::GrimApp;
