//! Click-selection state - the pending square between two clicks
//!
//! The selection machine has exactly two states: nothing selected, or one
//! source square armed. It is memoryless beyond that single square; every
//! completed or abandoned move attempt returns it to [`Selection::Idle`].
//! The transition logic itself lives in
//! [`crate::game::session::GameSession::handle_click`] - this module only
//! holds the value and its read queries.

use shakmaty::Square;

use crate::game::rules::RulesEngine;

/// Currently selected source square, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    /// No square selected
    #[default]
    Idle,
    /// A side-to-move piece on this square is awaiting a destination click
    Armed(Square),
}

impl Selection {
    /// The armed source square, `None` when idle
    pub fn armed(self) -> Option<Square> {
        match self {
            Selection::Idle => None,
            Selection::Armed(square) => Some(square),
        }
    }

    pub fn is_armed(self) -> bool {
        matches!(self, Selection::Armed(_))
    }

    pub fn clear(&mut self) {
        *self = Selection::Idle;
    }
}

/// Destination squares of all legal moves leaving `src`
///
/// Used by the board renderer to highlight move targets for the armed
/// square. Castling moves contribute the king's destination square in
/// addition to the rook square shakmaty encodes, matching the squares
/// [`crate::game::session`] accepts as castling clicks.
pub fn legal_targets<R: RulesEngine + ?Sized>(rules: &R, src: Square) -> Vec<Square> {
    let side = rules.side_to_move();
    let mut targets = Vec::new();
    for m in rules.legal_moves() {
        if m.from() != Some(src) {
            continue;
        }
        push_unique(&mut targets, m.to());
        if let Some(castle) = m.castling_side() {
            push_unique(&mut targets, castle.king_to(side));
        }
    }
    targets
}

fn push_unique(targets: &mut Vec<Square>, square: Square) {
    if !targets.contains(&square) {
        targets.push(square);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rules::StandardChess;

    #[test]
    fn test_default_selection_is_idle() {
        let selection = Selection::default();
        assert_eq!(selection, Selection::Idle);
        assert!(!selection.is_armed());
        assert_eq!(selection.armed(), None);
    }

    #[test]
    fn test_armed_selection_reports_source() {
        let selection = Selection::Armed(Square::E2);
        assert!(selection.is_armed());
        assert_eq!(selection.armed(), Some(Square::E2));
    }

    #[test]
    fn test_clear_returns_to_idle() {
        let mut selection = Selection::Armed(Square::D7);
        selection.clear();
        assert_eq!(selection, Selection::Idle);
    }

    #[test]
    fn test_legal_targets_for_start_pawn() {
        let rules = StandardChess::new();
        let mut targets = legal_targets(&rules, Square::E2);
        targets.sort();
        assert_eq!(targets, vec![Square::E3, Square::E4]);
    }

    #[test]
    fn test_legal_targets_empty_for_blocked_piece() {
        let rules = StandardChess::new();
        // Rook on a1 has no moves at the start.
        assert!(legal_targets(&rules, Square::A1).is_empty());
    }

    #[test]
    fn test_legal_targets_include_castle_king_square() {
        // White king and rooks alone: both castles available.
        let rules = StandardChess::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1")
            .expect("valid position");
        let targets = legal_targets(&rules, Square::E1);
        assert!(targets.contains(&Square::G1), "king-side castle target");
        assert!(targets.contains(&Square::C1), "queen-side castle target");
    }
}
