//! Grimdark theming - faction names and piece labels
//!
//! Maps standard chess onto the Imperium (white) vs Chaos (black) setting:
//! every piece kind carries a two-letter board code and a full name shown
//! in the sidebar legend.

use shakmaty::{Color, Piece, Role};

/// The two warring sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Faction {
    Imperium,
    Chaos,
}

impl From<Color> for Faction {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Faction::Imperium,
            Color::Black => Faction::Chaos,
        }
    }
}

impl Faction {
    pub fn name(self) -> &'static str {
        match self {
            Faction::Imperium => "Imperium",
            Faction::Chaos => "Chaos",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Faction::Imperium => Color::White,
            Faction::Chaos => Color::Black,
        }
    }
}

/// Two-letter code shown on the board square
pub fn piece_code(piece: Piece) -> &'static str {
    match (Faction::from(piece.color), piece.role) {
        (Faction::Imperium, Role::King) => "EM",
        (Faction::Imperium, Role::Queen) => "IN",
        (Faction::Imperium, Role::Rook) => "DR",
        (Faction::Imperium, Role::Bishop) => "LB",
        (Faction::Imperium, Role::Knight) => "AM",
        (Faction::Imperium, Role::Pawn) => "GD",
        (Faction::Chaos, Role::King) => "WM",
        (Faction::Chaos, Role::Queen) => "DP",
        (Faction::Chaos, Role::Rook) => "HB",
        (Faction::Chaos, Role::Bishop) => "SC",
        (Faction::Chaos, Role::Knight) => "CB",
        (Faction::Chaos, Role::Pawn) => "CT",
    }
}

/// Full name shown in the legend and square tooltips
pub fn piece_name(piece: Piece) -> &'static str {
    match (Faction::from(piece.color), piece.role) {
        (Faction::Imperium, Role::King) => "Emperor",
        (Faction::Imperium, Role::Queen) => "Inquisitor",
        (Faction::Imperium, Role::Rook) => "Dreadnought",
        (Faction::Imperium, Role::Bishop) => "Librarian",
        (Faction::Imperium, Role::Knight) => "Assault Marine",
        (Faction::Imperium, Role::Pawn) => "Guardsman",
        (Faction::Chaos, Role::King) => "Warmaster",
        (Faction::Chaos, Role::Queen) => "Daemon Prince",
        (Faction::Chaos, Role::Rook) => "Hellbrute",
        (Faction::Chaos, Role::Bishop) => "Sorcerer",
        (Faction::Chaos, Role::Knight) => "Chaos Biker",
        (Faction::Chaos, Role::Pawn) => "Cultist",
    }
}

/// Legend order: king down to pawn, matching the sidebar listing
pub const LEGEND_ORDER: [Role; 6] = [
    Role::King,
    Role::Queen,
    Role::Rook,
    Role::Bishop,
    Role::Knight,
    Role::Pawn,
];

/// `(code, name)` pairs for one faction, in legend order
pub fn legend(faction: Faction) -> Vec<(&'static str, &'static str)> {
    LEGEND_ORDER
        .iter()
        .map(|&role| {
            let piece = Piece {
                color: faction.color(),
                role,
            };
            (piece_code(piece), piece_name(piece))
        })
        .collect()
}
