//! The turn state machine.
//!
//! A submitted guess is validated, then driven synchronously through
//! `Resolving` and `PostCorrect`/`PostIncorrect` until the sequencer rests
//! in `AwaitingGuess` or `Ended` again. There is no polling; each call
//! returns with the state final.

use log::{debug, info, warn};

use super::phase::{GuessReport, GuessResult, PendingGuess, TurnPhase};
use crate::cards::{CardId, CardRegistry};
use crate::core::PlayerId;
use crate::error::{RejectReason, TransitionError};
use crate::events::GameEvent;
use crate::players::PlayerLedger;
use crate::rules::{extract_completed_suits, is_game_over, resolve_guess, GameResult, GuessOutcome};
use crate::table::Table;
use crate::zones::Container;

#[derive(Clone, Debug)]
pub struct TurnSequencer {
    phase: TurnPhase,
    result: Option<GameResult>,
    quartet_size: usize,
}

impl TurnSequencer {
    #[must_use]
    pub fn new(quartet_size: usize) -> Self {
        Self {
            phase: TurnPhase::Idle,
            result: None,
            quartet_size,
        }
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Player allowed to guess right now.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        match self.phase {
            TurnPhase::AwaitingGuess(p) => Some(p),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.phase == TurnPhase::Ended
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn quartet_size(&self) -> usize {
        self.quartet_size
    }

    /// Leave `Idle` and give the first turn to `first`.
    ///
    /// Suits completed by the deal are extracted first, in table order. If
    /// that empties the table the game ends without a turn being given.
    pub fn begin(&mut self, table: &mut Table<'_>, first: PlayerId) -> Result<(), TransitionError> {
        if !table.players.contains(first) {
            return Err(TransitionError::UnknownPlayer(first));
        }
        let seats: Vec<PlayerId> = table.players.ids().collect();
        for player in seats {
            extract_completed_suits(table, player, self.quartet_size)?;
        }
        if is_game_over(table.players, table.cards.deck_len()) {
            return self.finish(table);
        }

        table.players.clear_turns();
        table.players.set_turn(first, true)?;
        table.players.recompute_askable(first, table.cards)?;
        self.phase = TurnPhase::AwaitingGuess(first);

        info!("game started, {} has the turn", first);
        table.events.publish(&GameEvent::TurnChanged { player: first });
        Ok(())
    }

    /// Back to `Idle` with no result.
    pub fn reset(&mut self) {
        self.phase = TurnPhase::Idle;
        self.result = None;
    }

    /// Check a guess without touching any state.
    ///
    /// Rejections come in this order: game ended, game not started,
    /// unknown requester, unknown target, unknown card, self-target, and
    /// finally a requester who does not hold the turn.
    pub fn validate(
        &self,
        players: &PlayerLedger,
        cards: &CardRegistry,
        requester: PlayerId,
        target: PlayerId,
        card: CardId,
    ) -> Result<PendingGuess, RejectReason> {
        let holder = match self.phase {
            TurnPhase::Ended => return Err(RejectReason::GameEnded),
            TurnPhase::AwaitingGuess(p) => Some(p),
            TurnPhase::Idle => return Err(RejectReason::GameNotStarted),
            _ => None,
        };

        if !players.contains(requester) {
            return Err(RejectReason::UnknownPlayer(requester));
        }
        if !players.contains(target) {
            return Err(RejectReason::UnknownPlayer(target));
        }
        if !cards.contains(card) {
            return Err(RejectReason::UnknownCard(card));
        }
        if requester == target {
            return Err(RejectReason::SelfTarget);
        }
        if holder != Some(requester) {
            return Err(RejectReason::NotYourTurn(requester));
        }

        Ok(PendingGuess {
            guesser: requester,
            target,
            card,
        })
    }

    /// Submit a guess and drive the machine to its next stable phase.
    ///
    /// Rejections leave every piece of state untouched. An `Err` means the
    /// registry and ledger disagreed, which is a contract violation.
    pub fn submit_guess(
        &mut self,
        table: &mut Table<'_>,
        requester: PlayerId,
        target: PlayerId,
        card: CardId,
    ) -> Result<GuessResult, TransitionError> {
        let guess = match self.validate(table.players, table.cards, requester, target, card) {
            Ok(guess) => guess,
            Err(reason) => {
                warn!("rejected guess by {}: {}", requester, reason);
                return Ok(GuessResult::Rejected(reason));
            }
        };

        self.phase = TurnPhase::Resolving(guess);
        // The outcome is set by the `Resolving` step.
        let mut report = GuessReport::new(guess, GuessOutcome::Incorrect);
        while !self.phase.is_stable() {
            self.step(table, &mut report)?;
        }

        report.next_turn = self.current_player();
        report.ended = self.is_ended();
        Ok(GuessResult::Accepted(report))
    }

    fn resolve(
        &mut self,
        table: &mut Table<'_>,
        guess: PendingGuess,
        report: &mut GuessReport,
    ) -> Result<(), TransitionError> {
        let guesser = table
            .players
            .get(guess.guesser)
            .ok_or(TransitionError::UnknownPlayer(guess.guesser))?;
        let target = table
            .players
            .get(guess.target)
            .ok_or(TransitionError::UnknownPlayer(guess.target))?;
        let outcome = resolve_guess(guesser, target, guess.card, table.cards);

        debug!(
            "{} asked {} for {}: {:?}",
            guess.guesser, guess.target, guess.card, outcome
        );
        table.events.publish(&GameEvent::GuessResolved {
            guesser: guess.guesser,
            target: guess.target,
            card: guess.card,
            outcome,
        });

        report.outcome = outcome;
        match outcome {
            GuessOutcome::Correct => {
                table.relocate(guess.card, Container::Hand(guess.guesser))?;
                report.quartets =
                    extract_completed_suits(table, guess.guesser, self.quartet_size)?;
                self.phase = TurnPhase::PostCorrect(guess.guesser);
            }
            GuessOutcome::Incorrect => {
                self.phase = TurnPhase::PostIncorrect(guess.guesser);
            }
        }
        Ok(())
    }

    fn step(&mut self, table: &mut Table<'_>, report: &mut GuessReport) -> Result<(), TransitionError> {
        match self.phase {
            TurnPhase::Resolving(guess) => self.resolve(table, guess, report),
            TurnPhase::PostCorrect(p) => {
                if !Self::hand_is_empty(table, p)? {
                    return self.keep_turn(table, p);
                }
                if table.cards.deck_len() > 0 {
                    self.draw(table, p, report)?;
                    if !Self::hand_is_empty(table, p)? {
                        return self.keep_turn(table, p);
                    }
                }
                self.end_turn(table, p)
            }
            TurnPhase::PostIncorrect(p) => {
                self.draw(table, p, report)?;
                self.end_turn(table, p)
            }
            TurnPhase::Idle | TurnPhase::AwaitingGuess(_) | TurnPhase::Ended => Ok(()),
        }
    }

    /// Draw for `player`, then extract any suit the drawn card completed.
    fn draw(
        &self,
        table: &mut Table<'_>,
        player: PlayerId,
        report: &mut GuessReport,
    ) -> Result<(), TransitionError> {
        report.drawn = table.draw(player)?;
        if report.drawn.is_some() {
            let completed = extract_completed_suits(table, player, self.quartet_size)?;
            report.quartets.extend(completed);
        }
        Ok(())
    }

    fn hand_is_empty(table: &Table<'_>, player: PlayerId) -> Result<bool, TransitionError> {
        table
            .players
            .get(player)
            .map(|p| p.is_hand_empty())
            .ok_or(TransitionError::UnknownPlayer(player))
    }

    fn keep_turn(&mut self, table: &mut Table<'_>, player: PlayerId) -> Result<(), TransitionError> {
        table.players.recompute_askable(player, table.cards)?;
        self.phase = TurnPhase::AwaitingGuess(player);
        Ok(())
    }

    /// Game-end check, then round-robin advance.
    fn end_turn(&mut self, table: &mut Table<'_>, player: PlayerId) -> Result<(), TransitionError> {
        if is_game_over(table.players, table.cards.deck_len()) {
            return self.finish(table);
        }

        let next = table
            .players
            .next_player(player)
            .ok_or(TransitionError::UnknownPlayer(player))?;
        table.players.set_turn(player, false)?;
        table.players.set_turn(next, true)?;
        table.players.recompute_askable(next, table.cards)?;
        self.phase = TurnPhase::AwaitingGuess(next);

        info!("turn passes from {} to {}", player, next);
        table.events.publish(&GameEvent::TurnChanged { player: next });
        Ok(())
    }

    fn finish(&mut self, table: &mut Table<'_>) -> Result<(), TransitionError> {
        let result = GameResult::from_scores(table.players);
        let winners = result.as_ref().map(|r| r.winners().to_vec()).unwrap_or_default();
        for &winner in &winners {
            table.players.set_winner(winner, true)?;
        }
        table.players.clear_turns();
        self.result = result;
        self.phase = TurnPhase::Ended;

        info!("game over, winners: {:?}", winners);
        table.events.publish(&GameEvent::GameEnded { winners });
        Ok(())
    }
}
