//! Easy bot - greedy capture selector with random tie-breaking
//!
//! Picks exactly one legal move for the side to move, biased toward
//! capturing the most valuable piece on offer. Every legal move is scored
//! as the material value of whatever it captures (zero for quiet moves)
//! plus an independent uniform draw in `[0, 5)`. The noise breaks ties
//! among equal captures and occasionally lets a quiet move outscore a pawn
//! grab, producing varied but still roughly sensible play.
//!
//! This is a single-ply linear scan over the legal-move list. Intentionally
//! weak: no search, no evaluation beyond the capture table.
//!
//! # Randomness
//!
//! The RNG is injected by the caller, so tests can seed it and replay a
//! decision deterministically. Production sessions use a `SmallRng` seeded
//! from the OS (see [`crate::game::session`]).

use rand::seq::IndexedRandom;
use rand::Rng;
use shakmaty::{Move, Role};
use tracing::debug;

use crate::game::rules::RulesEngine;

/// Material value of a captured piece, in centipawns
///
/// The king is valued far above everything else so it never reads as a
/// rational sacrifice target; it cannot actually be captured in legal
/// play, the entry just keeps the table total.
pub fn material_value(role: Role) -> i32 {
    match role {
        Role::King => 10_000,
        Role::Queen => 900,
        Role::Rook => 500,
        Role::Bishop => 330,
        Role::Knight => 320,
        Role::Pawn => 100,
    }
}

/// Choose one legal move for the side to move
///
/// Returns `None` only when the position has no legal moves, which a
/// correct caller rules out by checking game-over status first. The
/// returned move is always a member of the current legal-move set.
pub fn choose_move<R, G>(rules: &R, rng: &mut G) -> Option<Move>
where
    R: RulesEngine + ?Sized,
    G: Rng,
{
    let mut best_score = f64::NEG_INFINITY;
    let mut tie_set: Vec<Move> = Vec::new();

    for m in rules.legal_moves() {
        let mut score = 0.0;
        if let Some(captured) = m.capture() {
            score += f64::from(material_value(captured));
        }
        score += rng.random_range(0.0..5.0);

        // Strict-greater keeps the first move at a new maximum; exact
        // ties grow the tie set.
        if score > best_score {
            best_score = score;
            tie_set.clear();
            tie_set.push(m);
        } else if score == best_score {
            tie_set.push(m);
        }
    }

    let pick = tie_set.choose(rng).cloned();
    if let Some(ref m) = pick {
        debug!(
            "[BOT] picked {:?} (best score {:.2}, tie set {})",
            m,
            best_score,
            tie_set.len()
        );
    }
    pick
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rules::StandardChess;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_material_values_rank_pieces_correctly() {
        assert!(material_value(Role::King) > material_value(Role::Queen));
        assert!(material_value(Role::Queen) > material_value(Role::Rook));
        assert!(material_value(Role::Rook) > material_value(Role::Bishop));
        assert!(material_value(Role::Bishop) > material_value(Role::Knight));
        assert!(material_value(Role::Knight) > material_value(Role::Pawn));
    }

    #[test]
    fn test_choose_move_returns_legal_move() {
        let rules = StandardChess::new();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let m = choose_move(&rules, &mut rng).expect("start position has moves");
            assert!(rules.is_legal(&m), "bot move {m:?} must be legal");
        }
    }

    #[test]
    fn test_choose_move_is_none_without_legal_moves() {
        // Stalemate: black to move with nothing available.
        let rules = StandardChess::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1")
            .expect("valid position");
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(choose_move(&rules, &mut rng), None);
    }

    #[test]
    fn test_seeded_bot_is_deterministic() {
        let rules = StandardChess::new();
        let first = choose_move(&rules, &mut SmallRng::seed_from_u64(42));
        for _ in 0..10 {
            let again = choose_move(&rules, &mut SmallRng::seed_from_u64(42));
            assert_eq!(first, again, "same seed and board must give same move");
        }
    }

    #[test]
    fn test_forced_single_move_is_chosen() {
        // Black king in the corner with exactly one legal reply (Kb8).
        let rules = StandardChess::from_fen("k7/8/1K6/8/8/8/8/1R6 b - - 0 1")
            .expect("valid position");
        assert_eq!(rules.legal_moves().len(), 1);
        let mut rng = SmallRng::seed_from_u64(3);
        let m = choose_move(&rules, &mut rng).expect("black has a move");
        assert_eq!(m.to(), shakmaty::Square::B8);
    }

    #[test]
    fn test_bot_prefers_bigger_capture() {
        // Black queen on d5 can take a rook on d1 or a pawn on a5. The
        // rook outweighs the pawn by more than the noise band, so the
        // rook capture must win every draw.
        let rules = StandardChess::from_fen("k7/8/8/P2q4/8/8/8/3R2K1 b - - 0 1")
            .expect("valid position");
        let mut rng = SmallRng::seed_from_u64(11);
        let mut rook_captures = 0u32;
        let mut pawn_captures = 0u32;
        for _ in 0..1000 {
            let m = choose_move(&rules, &mut rng).expect("black has moves");
            assert!(rules.is_legal(&m), "bot move {m:?} must be legal");
            match m.to() {
                shakmaty::Square::D1 => rook_captures += 1,
                shakmaty::Square::A5 => pawn_captures += 1,
                _ => {}
            }
        }
        assert!(
            rook_captures > pawn_captures,
            "higher-value captures must be chosen strictly more often \
             ({rook_captures} rook vs {pawn_captures} pawn)"
        );
    }
}
