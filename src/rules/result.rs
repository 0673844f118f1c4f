//! Game end detection and results.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::players::PlayerLedger;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players tied at the top score.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Result from the current scores: everyone tied at the maximum wins.
    ///
    /// Returns `None` for an empty ledger.
    #[must_use]
    pub fn from_scores(players: &PlayerLedger) -> Option<Self> {
        let mut leaders = players.leaders();
        match leaders.len() {
            0 => None,
            1 => leaders.pop().map(GameResult::Winner),
            _ => Some(GameResult::Winners(leaders)),
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }

    /// Winning players in table order.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        match self {
            GameResult::Winner(p) => std::slice::from_ref(p),
            GameResult::Winners(ps) => ps,
        }
    }
}

/// The game is over once every hand and the deck are empty.
#[must_use]
pub fn is_game_over(players: &PlayerLedger, deck_remaining: usize) -> bool {
    deck_remaining == 0 && players.all_hands_empty()
}
