//! Initial data a session is built from.

use serde::{Deserialize, Serialize};

use crate::cards::CardDefinition;
use crate::core::{GameConfig, PlayerDefinition};
use crate::error::SetupError;

/// Card list, roster and configuration of one session.
///
/// Cards and players are kept in the order given: card order is the
/// unshuffled deck order, player order is table order.
///
/// ```
/// use quartets_core::game::GameSetup;
///
/// let setup = GameSetup::from_json(r#"{
///     "config": { "seed": 3 },
///     "cards": [
///         { "id": 1, "name": "Cod", "suit": "Fish", "siblingNames": ["Eel"] },
///         { "id": 2, "name": "Eel", "suit": "Fish" }
///     ],
///     "players": [ { "id": 1, "name": "Ann" }, { "id": 2, "name": "Ben" } ]
/// }"#).unwrap();
///
/// assert_eq!(setup.cards.len(), 2);
/// assert_eq!(setup.config.seed, 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    #[serde(default)]
    pub config: GameConfig,
    pub cards: Vec<CardDefinition>,
    pub players: Vec<PlayerDefinition>,
}

impl GameSetup {
    #[must_use]
    pub fn new(
        config: GameConfig,
        cards: Vec<CardDefinition>,
        players: Vec<PlayerDefinition>,
    ) -> Self {
        Self {
            config,
            cards,
            players,
        }
    }

    /// Parse and validate a JSON setup document.
    pub fn from_json(json: &str) -> Result<Self, SetupError> {
        let setup: Self = serde_json::from_str(json)?;
        setup.validate()?;
        Ok(setup)
    }

    /// Check the counts and the configuration.
    ///
    /// Duplicate ids are caught when the registry and the ledger are built.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.cards.is_empty() {
            return Err(SetupError::NoCards);
        }
        let required = self.config.min_players.max(2);
        if self.players.len() < required {
            return Err(SetupError::NotEnoughPlayers {
                required,
                found: self.players.len(),
            });
        }
        if self.config.quartet_size == 0 {
            return Err(SetupError::Malformed("quartet_size must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::core::PlayerId;

    fn cards() -> Vec<CardDefinition> {
        vec![CardDefinition::new(CardId::new(1), "Cod", "Fish")]
    }

    fn players(n: u32) -> Vec<PlayerDefinition> {
        (1..=n)
            .map(|i| PlayerDefinition::new(PlayerId::new(i), format!("P{}", i)))
            .collect()
    }

    #[test]
    fn test_validate_counts() {
        let no_cards = GameSetup::new(GameConfig::default(), vec![], players(2));
        assert_eq!(no_cards.validate(), Err(SetupError::NoCards));

        let lonely = GameSetup::new(GameConfig::default(), cards(), players(1));
        assert_eq!(
            lonely.validate(),
            Err(SetupError::NotEnoughPlayers { required: 2, found: 1 })
        );

        let ok = GameSetup::new(GameConfig::default(), cards(), players(2));
        assert_eq!(ok.validate(), Ok(()));
    }

    #[test]
    fn test_min_players_never_below_two() {
        let config = GameConfig {
            min_players: 1,
            ..GameConfig::default()
        };
        let setup = GameSetup::new(config, cards(), players(1));
        assert!(matches!(
            setup.validate(),
            Err(SetupError::NotEnoughPlayers { required: 2, .. })
        ));

        let config = GameConfig {
            min_players: 3,
            ..GameConfig::default()
        };
        let setup = GameSetup::new(config, cards(), players(2));
        assert!(setup.validate().is_err());
    }

    #[test]
    fn test_zero_quartet_size() {
        let config = GameConfig {
            quartet_size: 0,
            ..GameConfig::default()
        };
        let setup = GameSetup::new(config, cards(), players(2));
        assert!(matches!(setup.validate(), Err(SetupError::Malformed(_))));
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            GameSetup::from_json("{ not json"),
            Err(SetupError::Malformed(_))
        ));
        assert_eq!(
            GameSetup::from_json(r#"{ "cards": [], "players": [] }"#),
            Err(SetupError::NoCards)
        );
    }
}
