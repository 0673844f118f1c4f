//! Card registry: the authoritative catalog of cards and their containers.
//!
//! The `CardRegistry` owns every card definition and the only
//! [`ContainerIndex`] of a session. All container transitions go through
//! [`CardRegistry::move_card`] (or [`CardRegistry::draw_one`], which is a
//! FIFO move out of the deck). The registry enforces existence and
//! exclusivity; it does not know game rules.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId, Suit};
use crate::core::GameRng;
use crate::error::{SetupError, TransitionError};
use crate::zones::{Container, ContainerIndex};

/// Presentation flags. Never consulted by game logic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFace {
    pub face_up: bool,
    pub visible: bool,
}

/// Registry of card definitions and locations.
///
/// ## Example
///
/// ```
/// use quartets_core::cards::{CardDefinition, CardId, CardRegistry};
/// use quartets_core::core::PlayerId;
/// use quartets_core::zones::Container;
///
/// let mut registry = CardRegistry::initialize(vec![
///     CardDefinition::new(CardId::new(1), "Cod", "Fish"),
///     CardDefinition::new(CardId::new(2), "Eel", "Fish"),
/// ]).unwrap();
///
/// let hand = Container::Hand(PlayerId::new(1));
/// assert_eq!(registry.draw_one(hand), Some(CardId::new(1)));
/// assert_eq!(registry.cards_in_container(hand), &[CardId::new(1)]);
/// assert_eq!(registry.deck_len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
    /// Setup order, used to rebuild the deck on reset.
    catalog: Vec<CardId>,
    /// Suit -> card ids, ascending.
    suits: FxHashMap<Suit, Vec<CardId>>,
    locations: ContainerIndex,
    faces: FxHashMap<CardId, CardFace>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry with every card in the deck, in the given order.
    ///
    /// Fails if no cards are supplied or an id repeats.
    pub fn initialize(definitions: Vec<CardDefinition>) -> Result<Self, SetupError> {
        if definitions.is_empty() {
            return Err(SetupError::NoCards);
        }

        let mut registry = Self::new();
        for card in definitions {
            registry.register(card)?;
        }
        Ok(registry)
    }

    /// Register one card into the deck.
    pub fn register(&mut self, card: CardDefinition) -> Result<(), SetupError> {
        if self.cards.contains_key(&card.id) {
            return Err(SetupError::DuplicateCard(card.id));
        }

        let id = card.id;
        let suit = self.suits.entry(card.suit.clone()).or_default();
        let at = suit.partition_point(|&c| c < id);
        suit.insert(at, id);

        self.locations.place(id, Container::Deck);
        self.faces.insert(id, CardFace::default());
        self.catalog.push(id);
        self.cards.insert(id, card);
        Ok(())
    }

    /// Move a card to `destination`, whatever its current container.
    ///
    /// Returns the previous container.
    pub fn move_card(
        &mut self,
        card: CardId,
        destination: Container,
    ) -> Result<Container, TransitionError> {
        self.locations
            .relocate(card, destination)
            .ok_or(TransitionError::UnknownCard(card))
    }

    /// Move the oldest deck card to `destination`.
    ///
    /// Returns `None` without blocking when the deck is empty.
    pub fn draw_one(&mut self, destination: Container) -> Option<CardId> {
        let card = self.locations.front(Container::Deck)?;
        self.locations.relocate(card, destination);
        Some(card)
    }

    /// Cards in a container, in arrival order.
    #[must_use]
    pub fn cards_in_container(&self, container: Container) -> &[CardId] {
        self.locations.members(container)
    }

    /// Container a card is in.
    #[must_use]
    pub fn container_of(&self, card: CardId) -> Option<Container> {
        self.locations.container_of(card)
    }

    /// Number of cards left in the deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.locations.len_of(Container::Deck)
    }

    /// Shuffle the remaining deck.
    pub fn shuffle_deck(&mut self, rng: &mut GameRng) {
        self.locations.reorder(Container::Deck, |cards| rng.shuffle(cards));
    }

    /// Put every card back in the deck, in setup order.
    pub fn reset(&mut self) {
        self.locations.clear();
        for &id in &self.catalog {
            self.locations.place(id, Container::Deck);
        }
        for face in self.faces.values_mut() {
            *face = CardFace::default();
        }
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Find a card by name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&CardDefinition> {
        self.catalog
            .iter()
            .filter_map(|id| self.cards.get(id))
            .find(|c| c.name == name)
    }

    /// Suit of a card.
    #[must_use]
    pub fn suit_of(&self, id: CardId) -> Option<&Suit> {
        self.cards.get(&id).map(|c| &c.suit)
    }

    /// All cards of a suit, ascending by id.
    #[must_use]
    pub fn cards_of_suit(&self, suit: &Suit) -> &[CardId] {
        self.suits.get(suit).map_or(&[], |v| v.as_slice())
    }

    /// Cards in the quartet pool grouped by suit.
    #[must_use]
    pub fn quartets_by_suit(&self) -> BTreeMap<Suit, Vec<CardId>> {
        let mut grouped: BTreeMap<Suit, Vec<CardId>> = BTreeMap::new();
        for &id in self.cards_in_container(Container::QuartetPool) {
            if let Some(card) = self.cards.get(&id) {
                grouped.entry(card.suit.clone()).or_default().push(id);
            }
        }
        grouped
    }

    /// Presentation flags of a card.
    #[must_use]
    pub fn face(&self, id: CardId) -> Option<CardFace> {
        self.faces.get(&id).copied()
    }

    pub fn set_face_up(&mut self, id: CardId, face_up: bool) -> Result<(), TransitionError> {
        let face = self.faces.get_mut(&id).ok_or(TransitionError::UnknownCard(id))?;
        face.face_up = face_up;
        Ok(())
    }

    pub fn set_visible(&mut self, id: CardId, visible: bool) -> Result<(), TransitionError> {
        let face = self.faces.get_mut(&id).ok_or(TransitionError::UnknownCard(id))?;
        face.visible = visible;
        Ok(())
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions in setup order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.catalog.iter().filter_map(|id| self.cards.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn fish_and_birds() -> CardRegistry {
        CardRegistry::initialize(vec![
            CardDefinition::new(CardId::new(4), "Trout", "Fish"),
            CardDefinition::new(CardId::new(1), "Cod", "Fish"),
            CardDefinition::new(CardId::new(10), "Owl", "Birds"),
        ])
        .unwrap()
    }

    #[test]
    fn test_initialize_puts_everything_in_deck() {
        let registry = fish_and_birds();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.deck_len(), 3);
        assert_eq!(
            registry.cards_in_container(Container::Deck),
            &[CardId::new(4), CardId::new(1), CardId::new(10)]
        );
    }

    #[test]
    fn test_initialize_rejects_duplicates_and_empty() {
        let dup = CardRegistry::initialize(vec![
            CardDefinition::new(CardId::new(1), "Cod", "Fish"),
            CardDefinition::new(CardId::new(1), "Eel", "Fish"),
        ]);
        assert_eq!(dup.unwrap_err(), SetupError::DuplicateCard(CardId::new(1)));

        assert_eq!(CardRegistry::initialize(vec![]).unwrap_err(), SetupError::NoCards);
    }

    #[test]
    fn test_move_card() {
        let mut registry = fish_and_birds();
        let hand = Container::Hand(PlayerId::new(2));

        let from = registry.move_card(CardId::new(1), hand).unwrap();
        assert_eq!(from, Container::Deck);
        assert_eq!(registry.container_of(CardId::new(1)), Some(hand));
        assert_eq!(registry.deck_len(), 2);

        // Any prior container is accepted.
        let from = registry.move_card(CardId::new(1), Container::QuartetPool).unwrap();
        assert_eq!(from, hand);
        assert!(registry.cards_in_container(hand).is_empty());
    }

    #[test]
    fn test_move_unknown_card() {
        let mut registry = fish_and_birds();
        assert_eq!(
            registry.move_card(CardId::new(99), Container::Deck),
            Err(TransitionError::UnknownCard(CardId::new(99)))
        );
    }

    #[test]
    fn test_draw_is_fifo_and_never_blocks() {
        let mut registry = fish_and_birds();
        let hand = Container::Hand(PlayerId::new(1));

        assert_eq!(registry.draw_one(hand), Some(CardId::new(4)));
        assert_eq!(registry.draw_one(hand), Some(CardId::new(1)));
        assert_eq!(registry.draw_one(hand), Some(CardId::new(10)));
        assert_eq!(registry.draw_one(hand), None);
        assert_eq!(registry.cards_in_container(hand).len(), 3);
    }

    #[test]
    fn test_suit_index_is_ascending() {
        let registry = fish_and_birds();
        assert_eq!(
            registry.cards_of_suit(&Suit::from("Fish")),
            &[CardId::new(1), CardId::new(4)]
        );
        assert!(registry.cards_of_suit(&Suit::from("Cats")).is_empty());
        assert_eq!(registry.suit_of(CardId::new(10)), Some(&Suit::from("Birds")));
    }

    #[test]
    fn test_find_by_name() {
        let registry = fish_and_birds();
        assert_eq!(registry.find_by_name("Owl").map(|c| c.id), Some(CardId::new(10)));
        assert!(registry.find_by_name("Cat").is_none());
    }

    #[test]
    fn test_quartets_by_suit() {
        let mut registry = fish_and_birds();
        registry.move_card(CardId::new(1), Container::QuartetPool).unwrap();
        registry.move_card(CardId::new(4), Container::QuartetPool).unwrap();

        let pool = registry.quartets_by_suit();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[&Suit::from("Fish")], vec![CardId::new(1), CardId::new(4)]);
    }

    #[test]
    fn test_reset_restores_deck() {
        let mut registry = fish_and_birds();
        registry.draw_one(Container::Hand(PlayerId::new(1)));
        registry.move_card(CardId::new(10), Container::QuartetPool).unwrap();
        registry.set_face_up(CardId::new(10), true).unwrap();

        registry.reset();

        assert_eq!(registry.deck_len(), 3);
        assert_eq!(registry.face(CardId::new(10)), Some(CardFace::default()));
    }

    #[test]
    fn test_shuffle_keeps_deck_members() {
        let mut registry = CardRegistry::initialize(
            (0..20)
                .map(|i| CardDefinition::new(CardId::new(i), format!("Card {}", i), "S"))
                .collect(),
        )
        .unwrap();
        let before = registry.cards_in_container(Container::Deck).to_vec();

        registry.shuffle_deck(&mut GameRng::new(42));

        let mut after = registry.cards_in_container(Container::Deck).to_vec();
        assert_ne!(before, after);
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_face_flags() {
        let mut registry = fish_and_birds();
        registry.set_visible(CardId::new(1), true).unwrap();
        assert_eq!(
            registry.face(CardId::new(1)),
            Some(CardFace { face_up: false, visible: true })
        );
        assert!(registry.set_face_up(CardId::new(77), true).is_err());
    }
}
