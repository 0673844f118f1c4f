//! Container index for card locations.
//!
//! The `ContainerIndex` records which container every card is in, and keeps
//! a reverse index from container to members so membership queries never
//! scan the whole catalog. Member lists keep insertion order, which makes
//! the deck FIFO.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::PlayerId;

/// Logical location of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Container {
    /// Not yet distributed.
    Deck,
    /// In a player's hand.
    Hand(PlayerId),
    /// Part of a completed quartet.
    QuartetPool,
}

impl Container {
    /// Owning player, for hands.
    #[must_use]
    pub fn hand_owner(self) -> Option<PlayerId> {
        match self {
            Container::Hand(player) => Some(player),
            Container::Deck | Container::QuartetPool => None,
        }
    }
}

impl std::fmt::Display for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Container::Deck => write!(f, "Deck"),
            Container::Hand(player) => write!(f, "Hand({})", player.raw()),
            Container::QuartetPool => write!(f, "QuartetPool"),
        }
    }
}

/// Tracks the container of every card.
///
/// Each card is in exactly one container; `place` and `relocate` update the
/// forward and reverse maps together.
///
/// ```
/// use quartets_core::cards::CardId;
/// use quartets_core::zones::{Container, ContainerIndex};
///
/// let mut index = ContainerIndex::new();
/// index.place(CardId::new(1), Container::Deck);
/// index.place(CardId::new(2), Container::Deck);
///
/// assert_eq!(index.front(Container::Deck), Some(CardId::new(1)));
/// index.relocate(CardId::new(1), Container::QuartetPool);
/// assert_eq!(index.members(Container::Deck), &[CardId::new(2)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ContainerIndex {
    /// card -> container
    locations: FxHashMap<CardId, Container>,
    /// container -> members, in arrival order
    members: FxHashMap<Container, Vec<CardId>>,
}

impl ContainerIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a card.
    ///
    /// Panics if the card is already tracked.
    pub fn place(&mut self, card: CardId, container: Container) {
        if self.locations.contains_key(&card) {
            panic!("{} already placed in the container index", card);
        }
        self.locations.insert(card, container);
        self.members.entry(container).or_default().push(card);
    }

    /// Move a tracked card to the back of `to`.
    ///
    /// Returns the previous container, or `None` if the card is untracked.
    pub fn relocate(&mut self, card: CardId, to: Container) -> Option<Container> {
        let from = self.locations.get(&card).copied()?;
        if from == to {
            return Some(from);
        }

        if let Some(list) = self.members.get_mut(&from) {
            list.retain(|&c| c != card);
        }
        self.locations.insert(card, to);
        self.members.entry(to).or_default().push(card);

        Some(from)
    }

    /// Container a card is in.
    #[must_use]
    pub fn container_of(&self, card: CardId) -> Option<Container> {
        self.locations.get(&card).copied()
    }

    /// Members of a container, in arrival order.
    #[must_use]
    pub fn members(&self, container: Container) -> &[CardId] {
        self.members.get(&container).map_or(&[], |v| v.as_slice())
    }

    /// Number of cards in a container.
    #[must_use]
    pub fn len_of(&self, container: Container) -> usize {
        self.members(container).len()
    }

    /// Oldest member of a container.
    #[must_use]
    pub fn front(&self, container: Container) -> Option<CardId> {
        self.members(container).first().copied()
    }

    /// Reorder a container's members. The set of members must not change.
    pub fn reorder(&mut self, container: Container, reorder: impl FnOnce(&mut [CardId])) {
        if let Some(list) = self.members.get_mut(&container) {
            reorder(list);
        }
    }

    /// Every non-empty container.
    pub fn containers(&self) -> impl Iterator<Item = Container> + '_ {
        self.members
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(&c, _)| c)
    }

    /// Total number of tracked cards.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    /// Forget every card.
    pub fn clear(&mut self) {
        self.locations.clear();
        self.members.clear();
    }
}
