//! Game session - board, selection, move log, and turn orchestration
//!
//! One [`GameSession`] owns everything a game needs: the rules-engine
//! board state, the click selection, the move log, the bot configuration,
//! and the bot's RNG. All three pieces of game state are created together
//! and reset together by [`GameSession::new_game`]; no partial reset
//! exists.
//!
//! # Click Handling
//!
//! [`GameSession::handle_click`] is the single entry point for square
//! clicks. From idle, clicking a side-to-move piece arms it; anything else
//! is a harmless no-op. From armed, the click builds a candidate move and
//! applies it if legal; either way the selection returns to idle, so an
//! illegal destination silently cancels rather than erroring.
//!
//! Pawns reaching the farthest rank always promote to a queen
//! (Inquisitor / Daemon Prince). No input path offers under-promotion.
//!
//! # Bot Turns
//!
//! After a click applies a move, the session immediately plays the bot's
//! reply if the configured bot side is now to move. The UI additionally
//! calls [`GameSession::tick_bot`] once per frame so a bot configured for
//! the opening side makes the first move without waiting for input.
//! Replies never cascade: only one side can be bot-controlled.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use shakmaty::{Color, Move, Rank, Role, Square};
use tracing::{debug, info};

use crate::core::{GameError, GameResult};
use crate::game::bot;
use crate::game::history::MoveLog;
use crate::game::rules::{RulesEngine, StandardChess};
use crate::game::selection::Selection;
use crate::game::theme::Faction;

/// Which side, if any, the easy bot plays
///
/// At most one side is ever bot-controlled, so a human move triggers at
/// most one bot reply before control returns to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BotSide {
    /// Bot plays Chaos (black) - the default, as the human leads Imperium
    #[default]
    Chaos,
    /// Bot plays Imperium (white)
    Imperium,
    /// Two human players
    Off,
}

impl BotSide {
    /// The rules-engine color the bot controls, `None` when off
    pub fn color(self) -> Option<Color> {
        match self {
            BotSide::Chaos => Some(Color::Black),
            BotSide::Imperium => Some(Color::White),
            BotSide::Off => None,
        }
    }

    /// Label shown in the bot selector
    pub fn label(self) -> &'static str {
        match self {
            BotSide::Chaos => "Chaos (black)",
            BotSide::Imperium => "Imperium (white)",
            BotSide::Off => "Off",
        }
    }
}

/// A complete game in progress
#[derive(Debug)]
pub struct GameSession<R = StandardChess> {
    rules: R,
    selection: Selection,
    log: MoveLog,
    bot_side: BotSide,
    rng: SmallRng,
}

impl GameSession<StandardChess> {
    /// Fresh game from the standard starting position
    pub fn new(bot_side: BotSide) -> Self {
        Self::with_rules(StandardChess::new(), bot_side, SmallRng::from_os_rng())
    }

    /// Fresh game with a fixed bot seed, for reproducible games and tests
    pub fn seeded(bot_side: BotSide, seed: u64) -> Self {
        Self::with_rules(StandardChess::new(), bot_side, SmallRng::seed_from_u64(seed))
    }

    /// Game starting from an arbitrary FEN position
    pub fn from_fen(fen: &str, bot_side: BotSide) -> GameResult<Self> {
        Ok(Self::with_rules(
            StandardChess::from_fen(fen)?,
            bot_side,
            SmallRng::from_os_rng(),
        ))
    }
}

impl<R: RulesEngine> GameSession<R> {
    /// Build a session over any rules implementation
    pub fn with_rules(rules: R, bot_side: BotSide, rng: SmallRng) -> Self {
        Self {
            rules,
            selection: Selection::Idle,
            log: MoveLog::default(),
            bot_side,
            rng,
        }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn move_log(&self) -> &MoveLog {
        &self.log
    }

    pub fn bot_side(&self) -> BotSide {
        self.bot_side
    }

    pub fn set_bot_side(&mut self, bot_side: BotSide) {
        self.bot_side = bot_side;
    }

    /// Reset board, selection, and move log together
    pub fn new_game(&mut self) {
        self.rules.reset();
        self.selection.clear();
        self.log = MoveLog::default();
        info!("[SESSION] new game started");
    }

    /// Interpret one square click
    ///
    /// No-op once the game is over. Errors only surface rules-layer
    /// failures that the click path itself cannot cause.
    pub fn handle_click(&mut self, square: Square) -> GameResult<()> {
        if self.rules.is_game_over() {
            debug!("[INPUT] click on {square} ignored, game is over");
            return Ok(());
        }

        match self.selection {
            Selection::Idle => {
                let own_piece = self
                    .rules
                    .piece_at(square)
                    .is_some_and(|p| p.color == self.rules.side_to_move());
                if own_piece {
                    self.selection = Selection::Armed(square);
                    debug!("[INPUT] armed {square}");
                }
                Ok(())
            }
            Selection::Armed(src) => {
                // Always drop the selection, legal destination or not.
                self.selection.clear();
                let Some(m) = self.candidate_move(src, square) else {
                    debug!("[INPUT] no legal move {src} -> {square}, selection cancelled");
                    return Ok(());
                };
                self.apply_move(&m)?;
                self.tick_bot().map(|_| ())
            }
        }
    }

    /// Play the bot's move if the bot side is to move and the game is on
    ///
    /// Returns whether a move was played. Called once after every applied
    /// human move and once per UI frame (to cover a bot that opens the
    /// game).
    pub fn tick_bot(&mut self) -> GameResult<bool> {
        if self.rules.is_game_over() {
            return Ok(false);
        }
        let Some(bot_color) = self.bot_side.color() else {
            return Ok(false);
        };
        if bot_color != self.rules.side_to_move() {
            return Ok(false);
        }

        let m = bot::choose_move(&self.rules, &mut self.rng).ok_or(GameError::NoMoveAvailable)?;
        self.apply_move(&m)?;
        Ok(true)
    }

    /// Candidate move for an armed source square and a destination click
    ///
    /// Pawns clicked onto the farthest rank are fixed to queen promotion,
    /// so the under-promoting variants of the same push never match. A
    /// castling move matches a click on the king's destination square or
    /// on the castling rook itself.
    fn candidate_move(&self, src: Square, dst: Square) -> Option<Move> {
        let side = self.rules.side_to_move();
        let promotion = match self.rules.piece_at(src) {
            Some(p) if p.role == Role::Pawn && dst.rank() == promotion_rank(side) => {
                Some(Role::Queen)
            }
            _ => None,
        };

        self.rules.legal_moves().into_iter().find(|m| {
            m.from() == Some(src)
                && m.promotion() == promotion
                && (m.to() == dst
                    || m.castling_side()
                        .is_some_and(|castle| castle.king_to(side) == dst))
        })
    }

    /// Apply one validated move: mutate the board, append its notation
    fn apply_move(&mut self, m: &Move) -> GameResult<()> {
        let mover = Faction::from(self.rules.side_to_move());
        let san = self.rules.apply(m)?;
        info!("[SESSION] {} played {san}", mover.name());
        self.log.push(san);
        Ok(())
    }
}

fn promotion_rank(side: Color) -> Rank {
    match side {
        Color::White => Rank::Eighth,
        Color::Black => Rank::First,
    }
}
