//! Board rendering - an 8x8 clickable grid of themed piece codes
//!
//! Squares are painted directly (fill, border, centered piece code) and
//! made clickable with per-square interact regions. Highlights: the armed
//! square in gold, its legal destinations in green when the show-legal
//! toggle is on.

use egui::{Align2, Color32, FontId, Rect, Sense, Stroke, Ui};
use shakmaty::{Color, File, Rank, Square};

use crate::game::rules::RulesEngine;
use crate::game::selection::legal_targets;
use crate::game::session::GameSession;
use crate::game::theme;

const SQUARE_SIZE: f32 = 58.0;

const LIGHT_SQUARE: Color32 = Color32::from_rgb(0xed, 0xeb, 0xe9);
const DARK_SQUARE: Color32 = Color32::from_rgb(0xb7, 0xb7, 0xb7);
const SELECTED_SQUARE: Color32 = Color32::from_rgb(0xf7, 0xdc, 0x6f);
const TARGET_SQUARE: Color32 = Color32::from_rgb(0x82, 0xe0, 0xaa);
const SQUARE_BORDER: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);
const IMPERIUM_TEXT: Color32 = Color32::from_rgb(0x1b, 0x4f, 0x72);
const CHAOS_TEXT: Color32 = Color32::from_rgb(0x64, 0x1e, 0x16);

fn square_fill(file: u32, rank: u32) -> Color32 {
    if (file + rank) % 2 == 0 {
        LIGHT_SQUARE
    } else {
        DARK_SQUARE
    }
}

/// Draw the board and report which square was clicked this frame, if any
pub fn draw(ui: &mut Ui, session: &GameSession, show_legal: bool) -> Option<Square> {
    let (board_rect, _) = ui.allocate_exact_size(
        egui::vec2(8.0 * SQUARE_SIZE, 8.0 * SQUARE_SIZE),
        Sense::hover(),
    );
    let painter = ui.painter_at(board_rect);

    let armed = session.selection().armed();
    let targets: Vec<Square> = match armed {
        Some(src) if show_legal => legal_targets(session.rules(), src),
        _ => Vec::new(),
    };

    let mut clicked = None;

    // Top row is rank 8, Imperium at the bottom.
    for row in 0..8u32 {
        let rank = 7 - row;
        for file in 0..8u32 {
            let square = Square::from_coords(File::new(file), Rank::new(rank));
            let min = board_rect.min
                + egui::vec2(file as f32 * SQUARE_SIZE, row as f32 * SQUARE_SIZE);
            let rect = Rect::from_min_size(min, egui::vec2(SQUARE_SIZE, SQUARE_SIZE));

            let fill = if armed == Some(square) {
                SELECTED_SQUARE
            } else if targets.contains(&square) {
                TARGET_SQUARE
            } else {
                square_fill(file, rank)
            };
            painter.rect_filled(rect, 0.0, fill);
            painter.rect_stroke(rect, 0.0, Stroke::new(1.0, SQUARE_BORDER));

            if let Some(piece) = session.rules().piece_at(square) {
                let text_color = match piece.color {
                    Color::White => IMPERIUM_TEXT,
                    Color::Black => CHAOS_TEXT,
                };
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    theme::piece_code(piece),
                    FontId::proportional(SQUARE_SIZE * 0.38),
                    text_color,
                );
            }

            let response = ui
                .interact(rect, ui.id().with(u32::from(square)), Sense::click())
                .on_hover_text(hover_text(session, square));
            if response.clicked() {
                clicked = Some(square);
            }
        }
    }

    clicked
}

fn hover_text(session: &GameSession, square: Square) -> String {
    match session.rules().piece_at(square) {
        Some(piece) => format!("{square}: {}", theme::piece_name(piece)),
        None => square.to_string(),
    }
}
