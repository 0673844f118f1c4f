//! Player ledger: hands, scores, turn flags and askable sets for every seat.
//!
//! Players are kept in table order; turn rotation follows that order.
//! The ledger never touches card containers. Callers pair each hand change
//! with the matching [`CardRegistry::move_card`](crate::cards::CardRegistry::move_card).

use std::collections::BTreeSet;

use rustc_hash::{FxHashMap, FxHashSet};

use super::player::Player;
use crate::cards::{CardId, CardRegistry};
use crate::core::{PlayerDefinition, PlayerId};
use crate::error::{SetupError, TransitionError};

/// All players of one session.
///
/// ```
/// use quartets_core::core::{PlayerDefinition, PlayerId};
/// use quartets_core::players::PlayerLedger;
///
/// let ledger = PlayerLedger::new(vec![
///     PlayerDefinition::new(PlayerId::new(10), "Ann"),
///     PlayerDefinition::new(PlayerId::new(20), "Ben"),
/// ]).unwrap();
///
/// assert_eq!(ledger.next_player(PlayerId::new(20)), Some(PlayerId::new(10)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PlayerLedger {
    /// Table order.
    players: Vec<Player>,
    seats: FxHashMap<PlayerId, usize>,
}

impl PlayerLedger {
    /// Build a ledger from roster data. Fails on a repeated id.
    pub fn new(definitions: Vec<PlayerDefinition>) -> Result<Self, SetupError> {
        let mut ledger = Self::default();
        for definition in definitions {
            if ledger.seats.contains_key(&definition.id) {
                return Err(SetupError::DuplicatePlayer(definition.id));
            }
            ledger.seats.insert(definition.id, ledger.players.len());
            ledger.players.push(Player::new(definition));
        }
        Ok(ledger)
    }

    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.seats.get(&id).map(|&seat| &self.players[seat])
    }

    fn get_mut(&mut self, id: PlayerId) -> Result<&mut Player, TransitionError> {
        let seat = *self.seats.get(&id).ok_or(TransitionError::UnknownPlayer(id))?;
        Ok(&mut self.players[seat])
    }

    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.seats.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Player ids in table order.
    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().map(Player::id)
    }

    /// Player at a table position.
    #[must_use]
    pub fn at_seat(&self, seat: usize) -> Option<PlayerId> {
        self.players.get(seat).map(Player::id)
    }

    // === Hands ===

    /// Add a card to a hand. Adding a card already held is a no-op.
    pub fn add_to_hand(&mut self, player: PlayerId, card: CardId) -> Result<(), TransitionError> {
        self.get_mut(player)?.insert_card(card);
        Ok(())
    }

    /// Remove a card from a hand.
    ///
    /// Removing a card that is not held is a no-op and returns `false`; it
    /// does not validate possession.
    pub fn remove_from_hand(
        &mut self,
        player: PlayerId,
        card: CardId,
    ) -> Result<bool, TransitionError> {
        Ok(self.get_mut(player)?.take_card(card))
    }

    /// Check whether every hand is empty.
    #[must_use]
    pub fn all_hands_empty(&self) -> bool {
        self.players.iter().all(Player::is_hand_empty)
    }

    /// Total cards held across all hands.
    #[must_use]
    pub fn cards_in_hands(&self) -> usize {
        self.players.iter().map(Player::hand_len).sum()
    }

    // === Askable sets ===

    /// Rebuild a player's askable cards and askable players.
    ///
    /// Askable cards: for every suit in the hand, all cards of that suit not
    /// in the hand, wherever they are. Askable players: everyone else, in
    /// table order.
    pub fn recompute_askable(
        &mut self,
        player: PlayerId,
        cards: &CardRegistry,
    ) -> Result<(), TransitionError> {
        let seat = *self.seats.get(&player).ok_or(TransitionError::UnknownPlayer(player))?;
        let hand = self.players[seat].hand();

        let suits: FxHashSet<_> = hand.iter().filter_map(|&c| cards.suit_of(c)).collect();
        let askable_cards: BTreeSet<CardId> = suits
            .into_iter()
            .flat_map(|suit| cards.cards_of_suit(suit).iter().copied())
            .filter(|c| !hand.contains(c))
            .collect();

        let askable_players: Vec<PlayerId> = self.ids().filter(|&p| p != player).collect();

        self.players[seat].set_askable(askable_cards, askable_players);
        Ok(())
    }

    // === Score ===

    /// Set a score, clamped at zero.
    pub fn set_score(&mut self, player: PlayerId, score: i64) -> Result<(), TransitionError> {
        let clamped = score.clamp(0, i64::from(u32::MAX)) as u32;
        self.get_mut(player)?.set_score(clamped);
        Ok(())
    }

    /// Add one point.
    pub fn increment_score(&mut self, player: PlayerId) -> Result<u32, TransitionError> {
        let entry = self.get_mut(player)?;
        let score = entry.score().saturating_add(1);
        entry.set_score(score);
        Ok(score)
    }

    /// Players tied at the highest score, in table order.
    #[must_use]
    pub fn leaders(&self) -> Vec<PlayerId> {
        let Some(best) = self.players.iter().map(Player::score).max() else {
            return Vec::new();
        };
        self.players
            .iter()
            .filter(|p| p.score() == best)
            .map(Player::id)
            .collect()
    }

    pub fn set_winner(&mut self, player: PlayerId, is_winner: bool) -> Result<(), TransitionError> {
        self.get_mut(player)?.set_winner(is_winner);
        Ok(())
    }

    // === Turn flags ===

    /// Set one player's turn flag. Other players' flags are left alone.
    pub fn set_turn(&mut self, player: PlayerId, has_turn: bool) -> Result<(), TransitionError> {
        self.get_mut(player)?.set_turn(has_turn);
        Ok(())
    }

    /// Clear every turn flag.
    pub fn clear_turns(&mut self) {
        for player in &mut self.players {
            player.set_turn(false);
        }
    }

    /// Players whose turn flag is set.
    pub fn turn_holders(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().filter(|p| p.has_turn()).map(Player::id)
    }

    /// Next player after `player` in table order, wrapping around.
    #[must_use]
    pub fn next_player(&self, player: PlayerId) -> Option<PlayerId> {
        let seat = *self.seats.get(&player)?;
        self.at_seat((seat + 1) % self.players.len())
    }

    /// Clear hands, scores and flags. The roster is kept.
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
    }
}
