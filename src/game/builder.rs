//! Builder for sessions assembled in code.

use crate::cards::CardDefinition;
use crate::core::{GameConfig, PlayerDefinition, PlayerId};
use crate::error::SetupError;

use super::session::GameSession;
use super::setup::GameSetup;

/// Builder for creating a [`GameSession`].
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    cards: Vec<CardDefinition>,
    players: Vec<PlayerDefinition>,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn card(mut self, card: CardDefinition) -> Self {
        self.cards.push(card);
        self
    }

    #[must_use]
    pub fn cards(mut self, cards: impl IntoIterator<Item = CardDefinition>) -> Self {
        self.cards.extend(cards);
        self
    }

    /// Add a player at the next seat.
    #[must_use]
    pub fn player(mut self, id: PlayerId, name: impl Into<String>) -> Self {
        self.players.push(PlayerDefinition::new(id, name));
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    #[must_use]
    pub fn hand_size(mut self, size: usize) -> Self {
        self.config.hand_size = size;
        self
    }

    #[must_use]
    pub fn quartet_size(mut self, size: usize) -> Self {
        self.config.quartet_size = size;
        self
    }

    #[must_use]
    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.config.shuffle_deck = shuffle;
        self
    }

    #[must_use]
    pub fn min_players(mut self, count: usize) -> Self {
        self.config.min_players = count;
        self
    }

    /// Setup data collected so far.
    #[must_use]
    pub fn into_setup(self) -> GameSetup {
        GameSetup::new(self.config, self.cards, self.players)
    }

    /// Build an idle session.
    pub fn build(self) -> Result<GameSession, SetupError> {
        GameSession::new(self.into_setup())
    }
}
