//! Per-player state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{PlayerDefinition, PlayerId};

/// One seat at the table.
///
/// The hand is a set, so a card can never appear twice. The askable sets are
/// derived data: they are only correct right after
/// [`PlayerLedger::recompute_askable`](super::PlayerLedger::recompute_askable).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    score: u32,
    has_turn: bool,
    is_winner: bool,
    hand: BTreeSet<CardId>,
    askable_cards: BTreeSet<CardId>,
    askable_players: Vec<PlayerId>,
}

impl Player {
    #[must_use]
    pub fn new(definition: PlayerDefinition) -> Self {
        Self {
            id: definition.id,
            name: definition.name,
            score: 0,
            has_turn: false,
            is_winner: false,
            hand: BTreeSet::new(),
            askable_cards: BTreeSet::new(),
            askable_players: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn has_turn(&self) -> bool {
        self.has_turn
    }

    /// Set once the game has ended, for every player tied at the top score.
    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.is_winner
    }

    /// Hand contents, ascending by card id.
    #[must_use]
    pub fn hand(&self) -> &BTreeSet<CardId> {
        &self.hand
    }

    #[must_use]
    pub fn holds(&self, card: CardId) -> bool {
        self.hand.contains(&card)
    }

    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn is_hand_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Cards this player may currently ask for.
    #[must_use]
    pub fn askable_cards(&self) -> &BTreeSet<CardId> {
        &self.askable_cards
    }

    /// Players this player may currently ask, in table order.
    #[must_use]
    pub fn askable_players(&self) -> &[PlayerId] {
        &self.askable_players
    }

    // === Mutation (ledger only) ===

    pub(super) fn insert_card(&mut self, card: CardId) -> bool {
        self.hand.insert(card)
    }

    pub(super) fn take_card(&mut self, card: CardId) -> bool {
        self.hand.remove(&card)
    }

    pub(super) fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    pub(super) fn set_turn(&mut self, has_turn: bool) {
        self.has_turn = has_turn;
    }

    pub(super) fn set_winner(&mut self, is_winner: bool) {
        self.is_winner = is_winner;
    }

    pub(super) fn set_askable(&mut self, cards: BTreeSet<CardId>, players: Vec<PlayerId>) {
        self.askable_cards = cards;
        self.askable_players = players;
    }

    pub(super) fn reset(&mut self) {
        self.score = 0;
        self.has_turn = false;
        self.is_winner = false;
        self.hand.clear();
        self.askable_cards.clear();
        self.askable_players.clear();
    }
}
