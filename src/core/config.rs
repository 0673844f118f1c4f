//! Game configuration.
//!
//! The rules of a session that are not card or roster data: how many cards
//! each player is dealt, how many cards make a quartet, whether the deck is
//! shuffled, and the seed for the shuffle and the first-turn draw.

use serde::{Deserialize, Serialize};

/// Session configuration.
///
/// ```
/// use quartets_core::core::GameConfig;
///
/// let config = GameConfig::default();
/// assert_eq!(config.hand_size, 5);
/// assert_eq!(config.quartet_size, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the deck shuffle and the first turn holder.
    pub seed: u64,
    /// Cards dealt to each player when the game starts.
    pub hand_size: usize,
    /// Cards of one suit that complete a set.
    pub quartet_size: usize,
    /// Shuffle the deck before dealing.
    pub shuffle_deck: bool,
    /// Setup fails with fewer players than this.
    pub min_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            hand_size: 5,
            quartet_size: 4,
            shuffle_deck: true,
            min_players: 2,
        }
    }
}

impl GameConfig {
    /// Configuration with the given seed and defaults otherwise.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}
