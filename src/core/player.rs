//! Player identification and static roster data.
//!
//! ## PlayerId
//!
//! Stable player identifier taken from the roster, independent of any
//! connection or seat index.
//!
//! ## PlayerDefinition
//!
//! The static `{id, name}` pair a game is set up from. Table order is the
//! order the definitions are supplied in.

use serde::{Deserialize, Serialize};

/// Stable player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
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

impl From<u32> for PlayerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Static roster entry.
///
/// ```
/// use quartets_core::core::{PlayerDefinition, PlayerId};
///
/// let alice = PlayerDefinition::new(PlayerId::new(7), "Alice");
/// assert_eq!(alice.id.raw(), 7);
/// assert_eq!(alice.name, "Alice");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDefinition {
    pub id: PlayerId,
    pub name: String,
}

impl PlayerDefinition {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p = PlayerId::new(3);
        assert_eq!(p.raw(), 3);
        assert_eq!(PlayerId::from(3), p);
        assert_eq!(format!("{}", p), "Player 3");
    }

    #[test]
    fn test_definition_serialization() {
        let def = PlayerDefinition::new(PlayerId::new(2), "Bob");
        let json = serde_json::to_string(&def).unwrap();
        assert_eq!(json, r#"{"id":2,"name":"Bob"}"#);

        let back: PlayerDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, def);
    }
}
