//! Events published by the authoritative core.
//!
//! Observers (presentation, animation, logging, replication) receive these
//! after the state they describe is already final. The core never waits on
//! an observer.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardId, Suit};
use crate::core::PlayerId;
use crate::rules::GuessOutcome;
use crate::zones::Container;

/// Something that happened in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card changed container (deal, draw, transfer or extraction).
    CardMoved {
        card: CardId,
        from: Container,
        to: Container,
    },
    /// A guess was accepted and resolved.
    GuessResolved {
        guesser: PlayerId,
        target: PlayerId,
        card: CardId,
        outcome: GuessOutcome,
    },
    /// A suit was completed and moved to the quartet pool.
    QuartetCompleted {
        player: PlayerId,
        suit: Suit,
        cards: SmallVec<[CardId; 4]>,
    },
    /// A player now holds the turn.
    TurnChanged { player: PlayerId },
    /// The game is over.
    GameEnded { winners: Vec<PlayerId> },
}

impl GameEvent {
    /// Player the event is mainly about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::CardMoved { to, from, .. } => to.hand_owner().or_else(|| from.hand_owner()),
            GameEvent::GuessResolved { guesser, .. } => Some(*guesser),
            GameEvent::QuartetCompleted { player, .. } | GameEvent::TurnChanged { player } => {
                Some(*player)
            }
            GameEvent::GameEnded { .. } => None,
        }
    }
}
