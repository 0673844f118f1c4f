//! Card definitions - static card data.
//!
//! A `CardDefinition` is created once at setup and never changes during a
//! session. Where the card currently is lives in the registry, not here.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Unique identifier for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Grouping category of a card. Four cards of one suit form a quartet.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Suit(pub String);

impl Suit {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Suit {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use quartets_core::cards::{CardDefinition, CardId};
///
/// let cod = CardDefinition::new(CardId::new(1), "Cod", "Fish")
///     .with_hint("Lives in cold water")
///     .with_siblings(["Eel", "Pike", "Trout"]);
///
/// assert_eq!(cod.suit.as_str(), "Fish");
/// assert_eq!(cod.siblings.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    pub suit: Suit,

    #[serde(default)]
    pub hint: String,

    /// Names of the other cards sharing this suit.
    #[serde(default, alias = "siblingNames")]
    pub siblings: SmallVec<[String; 3]>,
}

impl CardDefinition {
    /// Create a new card definition without hint or siblings.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, suit: impl Into<Suit>) -> Self {
        Self {
            id,
            name: name.into(),
            suit: suit.into(),
            hint: String::new(),
            siblings: SmallVec::new(),
        }
    }

    /// Set the hint (builder pattern).
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Set the sibling names (builder pattern).
    #[must_use]
    pub fn with_siblings<I, S>(mut self, siblings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.siblings = siblings.into_iter().map(Into::into).collect();
        self
    }

    /// Check whether another card shares this card's suit.
    #[must_use]
    pub fn same_suit(&self, other: &CardDefinition) -> bool {
        self.suit == other.suit
    }
}

impl From<String> for Suit {
    fn from(name: String) -> Self {
        Self(name)
    }
}
