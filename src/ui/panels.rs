//! Sidebar controls, status caption, and the paired moves table

use egui::{Color32, RichText, Ui};

use crate::game::history::MoveLog;
use crate::game::rules::{GameOutcome, RulesEngine};
use crate::game::session::{BotSide, GameSession};
use crate::game::theme::{self, Faction};

const WIN_BANNER: Color32 = Color32::from_rgb(0x2e, 0xcc, 0x71);
const DRAW_BANNER: Color32 = Color32::from_rgb(0x5d, 0xad, 0xe2);

/// Sidebar: New Game, bot side selector, show-legal toggle, faction legend
///
/// Returns `true` when New Game was clicked.
pub fn sidebar(ui: &mut Ui, bot_side: &mut BotSide, show_legal: &mut bool) -> bool {
    ui.heading("Grimdark Chess");
    ui.add_space(6.0);

    let new_game = ui.button("New Game").clicked();
    ui.add_space(6.0);

    egui::ComboBox::from_label("Easy bot plays")
        .selected_text(bot_side.label())
        .show_ui(ui, |ui| {
            for side in [BotSide::Chaos, BotSide::Imperium, BotSide::Off] {
                ui.selectable_value(bot_side, side, side.label());
            }
        });
    ui.checkbox(show_legal, "Show legal moves");

    ui.separator();
    ui.strong("Legend");
    for (code, name) in theme::legend(Faction::Imperium) {
        ui.label(format!("{code} = {name} [Imperium]"));
    }
    for (code, name) in theme::legend(Faction::Chaos) {
        ui.label(format!("{code} = {name} [Chaos]"));
    }

    new_game
}

/// Whose-turn caption, replaced by a result banner once the game ends
pub fn status(ui: &mut Ui, session: &GameSession) {
    match session.rules().result() {
        Some(GameOutcome::Winner(color)) => {
            ui.label(
                RichText::new(format!("Checkmate. {} wins.", Faction::from(color).name()))
                    .color(WIN_BANNER)
                    .strong(),
            );
        }
        Some(GameOutcome::Draw) => {
            ui.label(RichText::new("Draw.").color(DRAW_BANNER).strong());
        }
        None => {
            let faction = Faction::from(session.rules().side_to_move());
            ui.label(format!("{} to move", faction.name()));
        }
    }
}

/// The move log paired two-by-two with move numbers
pub fn moves_table(ui: &mut Ui, log: &MoveLog) {
    ui.strong("Moves");
    if log.is_empty() {
        ui.label("No moves yet.");
        return;
    }

    egui::ScrollArea::vertical()
        .max_height(180.0)
        .show(ui, |ui| {
            egui::Grid::new("moves_table")
                .striped(true)
                .min_col_width(48.0)
                .show(ui, |ui| {
                    ui.strong("No.");
                    ui.strong("Imperium");
                    ui.strong("Chaos");
                    ui.end_row();
                    for row in log.rows() {
                        ui.label(row.number.to_string());
                        ui.label(&row.imperium);
                        ui.label(row.chaos.as_deref().unwrap_or(""));
                        ui.end_row();
                    }
                });
        });
}
