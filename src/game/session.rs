//! The authoritative game session.

use std::collections::{BTreeMap, BTreeSet};

use log::info;

use crate::cards::{CardDefinition, CardId, CardRegistry, Suit};
use crate::core::{GameConfig, GameRng, PlayerId};
use crate::error::{SetupError, TransitionError};
use crate::events::{EventBus, EventLog, EventSink};
use crate::players::{Player, PlayerLedger};
use crate::rules::GameResult;
use crate::snapshot::PublicSnapshot;
use crate::table::Table;
use crate::turns::{GuessResult, TurnPhase, TurnSequencer};
use crate::zones::Container;

use super::setup::GameSetup;

/// One game, start to finish.
///
/// The session owns the card registry, the player ledger, the turn
/// sequencer and the event bus. Nothing else holds mutable game state; all
/// changes go through [`GameSession::submit_guess`] and the setup calls.
///
/// ```
/// use quartets_core::cards::{CardDefinition, CardId};
/// use quartets_core::core::PlayerId;
/// use quartets_core::game::GameBuilder;
///
/// let mut game = GameBuilder::new()
///     .cards((1..=8).map(|i| {
///         let suit = if i <= 4 { "Fish" } else { "Birds" };
///         CardDefinition::new(CardId::new(i), format!("card {}", i), suit)
///     }))
///     .player(PlayerId::new(1), "Ann")
///     .player(PlayerId::new(2), "Ben")
///     .hand_size(2)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// let first = game.start().unwrap();
/// assert_eq!(game.current_player(), Some(first));
/// assert_eq!(game.deck_remaining(), 4);
/// ```
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    rng: GameRng,
    cards: CardRegistry,
    players: PlayerLedger,
    turns: TurnSequencer,
    events: EventBus,
}

/// Contract violations during setup, reported as setup errors.
fn setup_error(err: TransitionError) -> SetupError {
    match err {
        TransitionError::UnknownPlayer(p) => SetupError::UnknownPlayer(p),
        TransitionError::UnknownCard(c) => SetupError::CardNotInDeck(c),
    }
}

impl GameSession {
    /// Build an idle session from setup data.
    pub fn new(setup: GameSetup) -> Result<Self, SetupError> {
        setup.validate()?;
        let GameSetup {
            config,
            cards,
            players,
        } = setup;

        let cards = CardRegistry::initialize(cards)?;
        let players = PlayerLedger::new(players)?;

        info!(
            "session set up: {} cards, {} players, seed {}",
            cards.len(),
            players.len(),
            config.seed
        );
        Ok(Self {
            rng: GameRng::new(config.seed),
            turns: TurnSequencer::new(config.quartet_size),
            events: EventBus::new(),
            config,
            cards,
            players,
        })
    }

    fn table(&mut self) -> Table<'_> {
        Table::new(&mut self.cards, &mut self.players, &mut self.events)
    }

    fn ensure_idle(&self) -> Result<(), SetupError> {
        if self.turns.phase() == TurnPhase::Idle {
            Ok(())
        } else {
            Err(SetupError::AlreadyStarted)
        }
    }

    // === Setup ===

    /// Move a specific deck card into a player's hand before the start.
    pub fn deal_card(&mut self, player: PlayerId, card: CardId) -> Result<(), SetupError> {
        self.ensure_idle()?;
        if !self.players.contains(player) {
            return Err(SetupError::UnknownPlayer(player));
        }
        if self.cards.container_of(card) != Some(Container::Deck) {
            return Err(SetupError::CardNotInDeck(card));
        }

        self.table()
            .relocate(card, Container::Hand(player))
            .map(|_| ())
            .map_err(setup_error)
    }

    /// Shuffle, deal and give the first turn to a random player.
    ///
    /// Returns the first turn holder.
    pub fn start(&mut self) -> Result<PlayerId, SetupError> {
        self.ensure_idle()?;
        let seat = self.rng.for_context("first-turn").gen_index(self.players.len());
        let first = self
            .players
            .at_seat(seat)
            .ok_or(SetupError::NotEnoughPlayers {
                required: self.config.min_players,
                found: self.players.len(),
            })?;
        self.start_with(first)?;
        Ok(first)
    }

    /// Shuffle, deal and give the first turn to `first`.
    pub fn start_with(&mut self, first: PlayerId) -> Result<(), SetupError> {
        self.ensure_idle()?;
        if !self.players.contains(first) {
            return Err(SetupError::UnknownPlayer(first));
        }

        if self.config.shuffle_deck {
            let mut shuffle = self.rng.for_context("shuffle");
            self.cards.shuffle_deck(&mut shuffle);
        }
        self.deal_hands()?;

        let mut table = Table::new(&mut self.cards, &mut self.players, &mut self.events);
        self.turns.begin(&mut table, first).map_err(setup_error)
    }

    /// Deal `hand_size` cards to each player in table order.
    fn deal_hands(&mut self) -> Result<(), SetupError> {
        let seats: Vec<PlayerId> = self.players.ids().collect();
        let hand_size = self.config.hand_size;
        let mut table = self.table();

        'deal: for player in seats {
            for _ in 0..hand_size {
                let drawn = table.draw(player).map_err(setup_error)?;
                if drawn.is_none() {
                    break 'deal;
                }
            }
        }
        Ok(())
    }

    /// Return every card to the deck and go back to `Idle`.
    ///
    /// Scores, hands, flags and the event history are cleared; observers
    /// stay subscribed. A following [`GameSession::start`] replays the same
    /// shuffle and first turn.
    pub fn reset(&mut self) {
        self.cards.reset();
        self.players.reset();
        self.turns.reset();
        self.events.clear_log();
        info!("session reset");
    }

    // === Commands ===

    /// Submit a guess.
    ///
    /// # Panics
    ///
    /// Panics if the registry and the ledger disagree about a card, which
    /// only happens if an internal invariant is broken.
    pub fn submit_guess(
        &mut self,
        requester: PlayerId,
        target: PlayerId,
        card: CardId,
    ) -> GuessResult {
        match self.try_submit_guess(requester, target, card) {
            Ok(result) => result,
            Err(err) => panic!("game state corrupted while resolving a guess: {}", err),
        }
    }

    /// Submit a guess, returning contract violations instead of panicking.
    pub fn try_submit_guess(
        &mut self,
        requester: PlayerId,
        target: PlayerId,
        card: CardId,
    ) -> Result<GuessResult, TransitionError> {
        let mut table = Table::new(&mut self.cards, &mut self.players, &mut self.events);
        self.turns.submit_guess(&mut table, requester, target, card)
    }

    /// Register an observer for every event from now on.
    pub fn subscribe(&mut self, observer: impl EventSink + 'static) {
        self.events.subscribe(Box::new(observer));
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.turns.phase()
    }

    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.turns.current_player()
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.turns.is_ended()
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.turns.result()
    }

    /// Winners once the game has ended. Empty before that.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        self.turns.result().map(GameResult::winners).unwrap_or(&[])
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Players in table order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Option<&BTreeSet<CardId>> {
        self.players.get(player).map(Player::hand)
    }

    #[must_use]
    pub fn score(&self, player: PlayerId) -> Option<u32> {
        self.players.get(player).map(Player::score)
    }

    #[must_use]
    pub fn askable_cards(&self, player: PlayerId) -> Option<&BTreeSet<CardId>> {
        self.players.get(player).map(Player::askable_cards)
    }

    #[must_use]
    pub fn askable_players(&self, player: PlayerId) -> Option<&[PlayerId]> {
        self.players.get(player).map(Player::askable_players)
    }

    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.cards.deck_len()
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(id)
    }

    #[must_use]
    pub fn find_card(&self, name: &str) -> Option<&CardDefinition> {
        self.cards.find_by_name(name)
    }

    #[must_use]
    pub fn cards_of_suit(&self, suit: &Suit) -> &[CardId] {
        self.cards.cards_of_suit(suit)
    }

    #[must_use]
    pub fn container_of(&self, card: CardId) -> Option<Container> {
        self.cards.container_of(card)
    }

    #[must_use]
    pub fn cards_in(&self, container: Container) -> &[CardId] {
        self.cards.cards_in_container(container)
    }

    /// Quartet pool grouped by suit.
    #[must_use]
    pub fn quartets_by_suit(&self) -> BTreeMap<Suit, Vec<CardId>> {
        self.cards.quartets_by_suit()
    }

    #[must_use]
    pub fn cards(&self) -> &CardRegistry {
        &self.cards
    }

    #[must_use]
    pub fn events(&self) -> &EventLog {
        self.events.log()
    }

    #[must_use]
    pub fn snapshot(&self) -> PublicSnapshot {
        PublicSnapshot::capture(&self.cards, &self.players, &self.turns, self.events.log().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RejectReason;
    use crate::events::GameEvent;
    use crate::game::GameBuilder;
    use crate::rules::GuessOutcome;

    const ANN: PlayerId = PlayerId::new(1);
    const BEN: PlayerId = PlayerId::new(2);

    fn builder() -> GameBuilder {
        let mut builder = GameBuilder::new();
        for (i, suit) in ["Fish", "Birds", "Trees"].iter().enumerate() {
            for j in 0..4u32 {
                let id = i as u32 * 4 + j + 1;
                builder = builder.card(CardDefinition::new(CardId::new(id), format!("{} {}", suit, j), *suit));
            }
        }
        builder.player(ANN, "Ann").player(BEN, "Ben")
    }

    #[test]
    fn test_setup_error_keeps_the_culprit() {
        assert_eq!(
            setup_error(TransitionError::UnknownCard(CardId::new(9))),
            SetupError::CardNotInDeck(CardId::new(9))
        );
        assert_eq!(
            setup_error(TransitionError::UnknownPlayer(BEN)),
            SetupError::UnknownPlayer(BEN)
        );
    }

    #[test]
    fn test_start_deals_hands() {
        let mut game = builder().hand_size(5).seed(11).build().unwrap();
        assert_eq!(game.phase(), TurnPhase::Idle);

        let first = game.start().unwrap();

        // A dealt quartet leaves the hand straight away.
        for p in [ANN, BEN] {
            let held = game.hand(p).unwrap().len() + 4 * game.score(p).unwrap() as usize;
            assert_eq!(held, 5);
        }
        assert_eq!(game.deck_remaining(), 2);
        assert_eq!(game.current_player(), Some(first));
        assert_eq!(game.player(first).map(Player::has_turn), Some(true));
        assert_eq!(game.snapshot().card_count(), 12);
    }

    #[test]
    fn test_start_is_deterministic() {
        let mut a = builder().seed(5).build().unwrap();
        let mut b = builder().seed(5).build().unwrap();
        assert_eq!(a.start().unwrap(), b.start().unwrap());
        assert_eq!(a.hand(ANN), b.hand(ANN));
        assert_eq!(a.cards_in(Container::Deck), b.cards_in(Container::Deck));
    }

    #[test]
    fn test_deal_runs_out() {
        let mut game = builder().hand_size(10).shuffle(false).build().unwrap();
        game.start_with(ANN).unwrap();

        // Ann was dealt Fish and Birds whole.
        assert_eq!(game.score(ANN), Some(2));
        assert_eq!(game.hand(ANN).unwrap().len(), 2);
        assert_eq!(game.hand(BEN).unwrap().len(), 2);
        assert_eq!(game.deck_remaining(), 0);
        assert_eq!(game.quartets_by_suit().len(), 2);
    }

    #[test]
    fn test_setup_calls_after_start() {
        let mut game = builder().hand_size(0).build().unwrap();
        game.deal_card(ANN, CardId::new(1)).unwrap();
        assert_eq!(
            game.deal_card(ANN, CardId::new(1)),
            Err(SetupError::CardNotInDeck(CardId::new(1)))
        );
        assert_eq!(
            game.deal_card(PlayerId::new(9), CardId::new(2)),
            Err(SetupError::UnknownPlayer(PlayerId::new(9)))
        );

        game.start_with(ANN).unwrap();
        assert_eq!(game.start(), Err(SetupError::AlreadyStarted));
        assert_eq!(
            game.deal_card(BEN, CardId::new(2)),
            Err(SetupError::AlreadyStarted)
        );
    }

    #[test]
    fn test_guess_before_start_is_rejected() {
        let mut game = builder().build().unwrap();
        let result = game.submit_guess(ANN, BEN, CardId::new(1));
        assert_eq!(result.rejection(), Some(RejectReason::GameNotStarted));
        assert!(game.events().is_empty());
    }

    #[test]
    fn test_observer_sees_events() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(0usize));
        let counter = Rc::clone(&seen);

        let mut game = builder().hand_size(0).shuffle(false).build().unwrap();
        game.subscribe(move |_: &GameEvent| *counter.borrow_mut() += 1);
        game.deal_card(ANN, CardId::new(1)).unwrap();
        game.deal_card(BEN, CardId::new(2)).unwrap();
        game.start_with(ANN).unwrap();

        let result = game.submit_guess(ANN, BEN, CardId::new(2));
        assert_eq!(result.outcome(), Some(GuessOutcome::Correct));
        assert_eq!(*seen.borrow(), game.events().len());
    }

    #[test]
    fn test_reset_replays() {
        let mut game = builder().seed(21).build().unwrap();
        let first = game.start().unwrap();
        let hand = game.hand(ANN).cloned();

        game.reset();
        assert_eq!(game.phase(), TurnPhase::Idle);
        assert_eq!(game.deck_remaining(), 12);
        assert!(game.events().is_empty());
        assert_eq!(game.score(ANN), Some(0));

        assert_eq!(game.start().unwrap(), first);
        assert_eq!(game.hand(ANN).cloned(), hand);
    }

    #[test]
    fn test_queries() {
        let game = builder().build().unwrap();
        assert_eq!(game.card(CardId::new(5)).map(|c| c.suit.as_str()), Some("Birds"));
        assert_eq!(game.find_card("Trees 0").map(|c| c.id), Some(CardId::new(9)));
        assert_eq!(game.cards_of_suit(&Suit::from("Fish")).len(), 4);
        assert_eq!(game.container_of(CardId::new(1)), Some(Container::Deck));
        assert!(game.winners().is_empty());
        assert!(game.quartets_by_suit().is_empty());
        assert_eq!(game.players().count(), 2);
    }
}
