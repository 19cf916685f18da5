//! Move log - append-only record of notated moves
//!
//! One SAN string per applied move, for either side, in order. Used only
//! for display: the moves table pairs entries two by two, Imperium's move
//! first, the way a printed score sheet reads.

/// One row of the displayed moves table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRow {
    /// Full-move number, starting at 1
    pub number: usize,
    /// Imperium's (white's) move in SAN
    pub imperium: String,
    /// Chaos's (black's) reply, empty until it is made
    pub chaos: Option<String>,
}

/// Append-only sequence of notated moves for the current game
#[derive(Debug, Clone, Default)]
pub struct MoveLog {
    moves: Vec<String>,
}

impl MoveLog {
    /// Record one applied move. The session calls this exactly once per
    /// successful move application.
    pub fn push(&mut self, san: String) {
        self.moves.push(san);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// All recorded moves in order
    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    /// The log paired two-by-two for the moves table
    pub fn rows(&self) -> Vec<MoveRow> {
        self.moves
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| MoveRow {
                number: i + 1,
                imperium: pair[0].clone(),
                chaos: pair.get(1).cloned(),
            })
            .collect()
    }
}
