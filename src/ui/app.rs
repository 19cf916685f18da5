//! The eframe application - wires the session to the board and panels
//!
//! One click (or New Game) event is fully processed inside a single
//! `update` call: the state-machine transition, an optional move
//! application, and an optional single bot reply all happen before the
//! next frame's input is read. `tick_bot` also runs once per frame so a
//! bot configured for the opening side starts the game unprompted.

use egui::Ui;
use tracing::error;

use crate::game::session::GameSession;
use crate::ui::{board, panels};

/// Top-level application state: the game session plus view options
pub struct GrimApp {
    session: GameSession,
    show_legal: bool,
}

impl GrimApp {
    pub fn new(session: GameSession, show_legal: bool) -> Self {
        Self {
            session,
            show_legal,
        }
    }

    fn central_panel(&mut self, ui: &mut Ui) {
        ui.heading("Grimdark Chess");
        panels::status(ui, &self.session);
        ui.add_space(8.0);

        if let Some(square) = board::draw(ui, &self.session, self.show_legal) {
            if let Err(e) = self.session.handle_click(square) {
                error!("[UI] click handling failed: {e}");
            }
        }

        ui.add_space(8.0);
        panels::moves_table(ui, self.session.move_log());
        ui.add_space(4.0);
        ui.weak("Tip: click a piece, then its destination square. Guardsmen auto promote to Inquisitor for speed.");
    }
}

impl eframe::App for GrimApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("control_panel")
            .resizable(false)
            .show(ctx, |ui| {
                let mut bot_side = self.session.bot_side();
                let new_game = panels::sidebar(ui, &mut bot_side, &mut self.show_legal);
                self.session.set_bot_side(bot_side);
                if new_game {
                    self.session.new_game();
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| self.central_panel(ui));

        // Lets a bot configured for the side to move open the game.
        if let Err(e) = self.session.tick_bot() {
            error!("[UI] bot move failed: {e}");
        }
    }
}
