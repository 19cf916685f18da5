//! Rules engine interface - the single gateway to chess legality
//!
//! The rest of the crate never talks to `shakmaty` positions directly.
//! [`RulesEngine`] is the narrow capability surface the selection handler
//! and the bot depend on: legal move enumeration, per-square occupants,
//! side to move, apply-with-notation, and game-over/result queries. Any
//! compliant rules implementation can be substituted without touching the
//! session or the bot; [`StandardChess`] is the production implementation
//! backed by [`shakmaty::Chess`].
//!
//! # Notation
//!
//! `apply` notates before mutating: SAN depends on pre-move context
//! (disambiguation, check and mate suffixes), so the two are fused into
//! one operation and the caller gets the notation string back.

use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::{CastlingMode, Chess, Color, Move, MoveList, Outcome, Piece, Position, Square};

use crate::core::{GameError, GameResult};

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// One side delivered checkmate
    Winner(Color),
    /// Stalemate or dead position
    Draw,
}

/// Capability interface over the chess rules library
///
/// Mirrors exactly what the session and bot consume. `apply` is the sole
/// mutator; everything else is a read-only query.
pub trait RulesEngine {
    /// All legal moves for the side to move
    fn legal_moves(&self) -> MoveList;

    /// Membership test against [`Self::legal_moves`]
    fn is_legal(&self, m: &Move) -> bool;

    /// Occupant of a square, if any
    fn piece_at(&self, square: Square) -> Option<Piece>;

    /// The player whose turn it currently is
    fn side_to_move(&self) -> Color;

    /// Apply a legal move, returning its SAN notation
    ///
    /// Errors with [`GameError::IllegalMove`] if `m` is not in the current
    /// legal-move set; the position is left untouched in that case.
    fn apply(&mut self, m: &Move) -> GameResult<String>;

    /// Whether the game has ended (checkmate, stalemate, dead position)
    fn is_game_over(&self) -> bool;

    /// Result of the game, `None` while still in progress
    fn result(&self) -> Option<GameOutcome>;

    /// Reset to the standard starting position
    fn reset(&mut self);
}

/// Production rules engine backed by `shakmaty`
#[derive(Debug, Clone, Default)]
pub struct StandardChess {
    position: Chess,
}

impl StandardChess {
    /// Standard starting position
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary FEN string
    pub fn from_fen(fen: &str) -> GameResult<Self> {
        let setup: Fen = fen
            .parse()
            .map_err(|e| GameError::InvalidPosition(format!("{e}")))?;
        let position = setup
            .into_position(CastlingMode::Standard)
            .map_err(|e| GameError::InvalidPosition(format!("{e}")))?;
        Ok(Self { position })
    }
}

impl RulesEngine for StandardChess {
    fn legal_moves(&self) -> MoveList {
        self.position.legal_moves()
    }

    fn is_legal(&self, m: &Move) -> bool {
        self.position.legal_moves().contains(m)
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.board().piece_at(square)
    }

    fn side_to_move(&self) -> Color {
        self.position.turn()
    }

    fn apply(&mut self, m: &Move) -> GameResult<String> {
        if !self.is_legal(m) {
            return Err(GameError::IllegalMove(format!("{m:?}")));
        }
        // Notates against the pre-move position, then advances it.
        let san = SanPlus::from_move_and_play_unchecked(&mut self.position, m);
        Ok(san.to_string())
    }

    fn is_game_over(&self) -> bool {
        self.position.is_game_over()
    }

    fn result(&self) -> Option<GameOutcome> {
        self.position.outcome().map(|outcome| match outcome {
            Outcome::Decisive { winner } => GameOutcome::Winner(winner),
            Outcome::Draw => GameOutcome::Draw,
        })
    }

    fn reset(&mut self) {
        self.position = Chess::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::Role;

    #[test]
    fn test_start_position_has_twenty_moves() {
        let rules = StandardChess::new();
        assert_eq!(rules.legal_moves().len(), 20);
        assert_eq!(rules.side_to_move(), Color::White);
        assert!(!rules.is_game_over());
        assert_eq!(rules.result(), None);
    }

    #[test]
    fn test_apply_notates_and_advances() {
        let mut rules = StandardChess::new();
        let e4 = rules
            .legal_moves()
            .into_iter()
            .find(|m| m.from() == Some(Square::E2) && m.to() == Square::E4)
            .expect("e2-e4 should be legal from the start");
        let san = rules.apply(&e4).expect("legal move should apply");
        assert_eq!(san, "e4");
        assert_eq!(rules.side_to_move(), Color::Black);
        assert_eq!(rules.piece_at(Square::E2), None);
        assert_eq!(
            rules.piece_at(Square::E4).map(|p| p.role),
            Some(Role::Pawn)
        );
    }

    #[test]
    fn test_apply_rejects_illegal_move_without_mutating() {
        let mut rules = StandardChess::new();
        let bogus = Move::Normal {
            role: Role::Pawn,
            from: Square::E2,
            capture: None,
            to: Square::E5,
            promotion: None,
        };
        assert!(!rules.is_legal(&bogus));
        assert!(matches!(
            rules.apply(&bogus),
            Err(GameError::IllegalMove(_))
        ));
        assert_eq!(rules.side_to_move(), Color::White);
        assert_eq!(rules.legal_moves().len(), 20);
    }

    #[test]
    fn test_checkmate_is_game_over_with_winner() {
        // Fool's mate: white is checkmated.
        let rules = StandardChess::from_fen(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 3",
        )
        .expect("valid position");
        assert!(rules.is_game_over());
        assert_eq!(rules.result(), Some(GameOutcome::Winner(Color::Black)));
        assert!(rules.legal_moves().is_empty());
    }

    #[test]
    fn test_stalemate_is_draw() {
        let rules = StandardChess::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1")
            .expect("valid position");
        assert!(rules.is_game_over());
        assert_eq!(rules.result(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_invalid_fen_is_rejected() {
        assert!(matches!(
            StandardChess::from_fen("not a position"),
            Err(GameError::InvalidPosition(_))
        ));
    }

    #[test]
    fn test_reset_restores_start_position() {
        let mut rules = StandardChess::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1")
            .expect("valid position");
        rules.reset();
        assert!(!rules.is_game_over());
        assert_eq!(rules.legal_moves().len(), 20);
    }
}
