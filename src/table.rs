//! Mutable view over one session's cards, players and observers.
//!
//! A `Table` borrows the registry, the ledger and the event sink together so
//! that a card move and the matching hand change happen in one call. No
//! caller can observe a card that belongs to neither hand or to both.

use crate::cards::{CardId, CardRegistry};
use crate::core::PlayerId;
use crate::error::TransitionError;
use crate::events::{EventSink, GameEvent};
use crate::players::PlayerLedger;
use crate::zones::Container;

pub struct Table<'a> {
    pub cards: &'a mut CardRegistry,
    pub players: &'a mut PlayerLedger,
    pub events: &'a mut dyn EventSink,
}

impl<'a> Table<'a> {
    pub fn new(
        cards: &'a mut CardRegistry,
        players: &'a mut PlayerLedger,
        events: &'a mut dyn EventSink,
    ) -> Self {
        Self {
            cards,
            players,
            events,
        }
    }

    fn check_destination(&self, to: Container) -> Result<(), TransitionError> {
        match to.hand_owner() {
            Some(owner) if !self.players.contains(owner) => {
                Err(TransitionError::UnknownPlayer(owner))
            }
            _ => Ok(()),
        }
    }

    /// Move a card to `to`, updating the hands on both sides.
    ///
    /// Returns the previous container. Moving a card to where it already is
    /// changes nothing and emits nothing.
    pub fn relocate(&mut self, card: CardId, to: Container) -> Result<Container, TransitionError> {
        self.check_destination(to)?;
        let from = self.cards.move_card(card, to)?;
        if from == to {
            return Ok(from);
        }

        if let Some(owner) = from.hand_owner() {
            self.players.remove_from_hand(owner, card)?;
        }
        if let Some(owner) = to.hand_owner() {
            self.players.add_to_hand(owner, card)?;
        }
        self.cards.set_visible(card, to != Container::Deck)?;

        log::debug!("{} moved {} -> {}", card, from, to);
        self.events.publish(&GameEvent::CardMoved { card, from, to });
        Ok(from)
    }

    /// Draw the oldest deck card into a player's hand.
    ///
    /// Returns `None` when the deck is empty.
    pub fn draw(&mut self, player: PlayerId) -> Result<Option<CardId>, TransitionError> {
        let to = Container::Hand(player);
        self.check_destination(to)?;

        let Some(card) = self.cards.draw_one(to) else {
            return Ok(None);
        };
        self.players.add_to_hand(player, card)?;
        self.cards.set_visible(card, true)?;

        log::debug!("{} drew {} ({} left in deck)", player, card, self.cards.deck_len());
        self.events.publish(&GameEvent::CardMoved {
            card,
            from: Container::Deck,
            to,
        });
        Ok(Some(card))
    }
}
