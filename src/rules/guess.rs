//! Guess legality and outcome. Pure functions, no side effects.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardRegistry};
use crate::players::Player;

/// Outcome of a resolved guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessOutcome {
    Correct,
    Incorrect,
}

impl GuessOutcome {
    #[must_use]
    pub fn is_correct(self) -> bool {
        self == GuessOutcome::Correct
    }
}

/// Check whether `guesser` may take `card` from `target`.
///
/// Valid iff the guesser does not hold the card, the target does, and the
/// guesser holds at least one other card of the same suit.
#[must_use]
pub fn is_valid_guess(
    guesser: &Player,
    target: &Player,
    card: CardId,
    cards: &CardRegistry,
) -> bool {
    if guesser.holds(card) || !target.holds(card) {
        return false;
    }

    let Some(suit) = cards.suit_of(card) else {
        return false;
    };
    guesser
        .hand()
        .iter()
        .any(|&held| cards.suit_of(held) == Some(suit))
}

/// Resolve a guess.
///
/// A guess that breaks a rule is `Incorrect`, the same as an honest miss.
#[must_use]
pub fn resolve_guess(
    guesser: &Player,
    target: &Player,
    card: CardId,
    cards: &CardRegistry,
) -> GuessOutcome {
    if !is_valid_guess(guesser, target, card, cards) {
        log::warn!(
            "{} asked {} for {}: not a valid guess",
            guesser.id(),
            target.id(),
            card
        );
        return GuessOutcome::Incorrect;
    }

    if target.holds(card) {
        GuessOutcome::Correct
    } else {
        GuessOutcome::Incorrect
    }
}
