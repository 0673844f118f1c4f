//! Read-only public projection of a session.
//!
//! Replicas and observers mirror this instead of the authoritative state.
//! Hands are reduced to card counts; only the quartet pool is face up.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardRegistry};
use crate::core::PlayerId;
use crate::players::{Player, PlayerLedger};
use crate::turns::{TurnPhase, TurnSequencer};
use crate::zones::Container;

/// What everyone at the table can see about one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
    pub hand_count: usize,
    pub has_turn: bool,
    pub is_winner: bool,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            name: player.name().to_string(),
            score: player.score(),
            hand_count: player.hand_len(),
            has_turn: player.has_turn(),
            is_winner: player.is_winner(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicSnapshot {
    pub phase: TurnPhase,
    pub current_player: Option<PlayerId>,
    pub deck_remaining: usize,
    /// Players in table order.
    pub players: Vector<PlayerView>,
    pub quartet_pool: Vec<CardId>,
    pub winners: Vec<PlayerId>,
    /// Number of events published so far.
    pub event_count: usize,
}

impl PublicSnapshot {
    #[must_use]
    pub fn capture(
        cards: &CardRegistry,
        players: &PlayerLedger,
        turns: &TurnSequencer,
        event_count: usize,
    ) -> Self {
        Self {
            phase: turns.phase(),
            current_player: turns.current_player(),
            deck_remaining: cards.deck_len(),
            players: players.iter().map(PlayerView::from).collect(),
            quartet_pool: cards.cards_in_container(Container::QuartetPool).to_vec(),
            winners: turns
                .result()
                .map(|r| r.winners().to_vec())
                .unwrap_or_default(),
            event_count,
        }
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&PlayerView> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Total cards accounted for: deck, hands and quartet pool.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck_remaining
            + self.players.iter().map(|p| p.hand_count).sum::<usize>()
            + self.quartet_pool.len()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
