//! Turn phases and guess results.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::PlayerId;
use crate::error::RejectReason;
use crate::rules::{CompletedQuartet, GuessOutcome};

/// A guess that passed validation and is being resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingGuess {
    pub guesser: PlayerId,
    pub target: PlayerId,
    pub card: CardId,
}

/// Where the turn state machine is.
///
/// Only `Idle`, `AwaitingGuess` and `Ended` are visible between calls; the
/// others exist while a guess is being driven to completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Players and deck are being set up.
    Idle,
    /// The player holds the turn and may guess.
    AwaitingGuess(PlayerId),
    /// A guess is being resolved.
    Resolving(PendingGuess),
    /// The player's last guess was correct.
    PostCorrect(PlayerId),
    /// The player's last guess missed.
    PostIncorrect(PlayerId),
    /// No more guesses are accepted.
    Ended,
}

impl TurnPhase {
    /// Phases the sequencer rests in between commands.
    #[must_use]
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            TurnPhase::Idle | TurnPhase::AwaitingGuess(_) | TurnPhase::Ended
        )
    }

    /// Player the phase belongs to, if any.
    #[must_use]
    pub fn player(self) -> Option<PlayerId> {
        match self {
            TurnPhase::AwaitingGuess(p) | TurnPhase::PostCorrect(p) | TurnPhase::PostIncorrect(p) => {
                Some(p)
            }
            TurnPhase::Resolving(guess) => Some(guess.guesser),
            TurnPhase::Idle | TurnPhase::Ended => None,
        }
    }
}

/// Everything that followed from one accepted guess.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessReport {
    pub guess: PendingGuess,
    pub outcome: GuessOutcome,
    /// Card drawn from the deck afterwards, if any.
    pub drawn: Option<CardId>,
    /// Suits completed and moved to the quartet pool.
    pub quartets: Vec<CompletedQuartet>,
    /// Turn holder once the guess settled. `None` once the game ended.
    pub next_turn: Option<PlayerId>,
    pub ended: bool,
}

impl GuessReport {
    pub(crate) fn new(guess: PendingGuess, outcome: GuessOutcome) -> Self {
        Self {
            guess,
            outcome,
            drawn: None,
            quartets: Vec::new(),
            next_turn: None,
            ended: false,
        }
    }

    /// Whether the guesser still holds the turn.
    #[must_use]
    pub fn keeps_turn(&self) -> bool {
        self.next_turn == Some(self.guess.guesser)
    }
}

/// Reply to a submitted guess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessResult {
    Accepted(GuessReport),
    Rejected(RejectReason),
}

impl GuessResult {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, GuessResult::Accepted(_))
    }

    /// Outcome of an accepted guess.
    #[must_use]
    pub fn outcome(&self) -> Option<GuessOutcome> {
        self.report().map(|r| r.outcome)
    }

    #[must_use]
    pub fn report(&self) -> Option<&GuessReport> {
        match self {
            GuessResult::Accepted(report) => Some(report),
            GuessResult::Rejected(_) => None,
        }
    }

    #[must_use]
    pub fn rejection(&self) -> Option<RejectReason> {
        match self {
            GuessResult::Accepted(_) => None,
            GuessResult::Rejected(reason) => Some(*reason),
        }
    }
}
