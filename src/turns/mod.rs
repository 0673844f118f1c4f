//! Turn sequencing.
//!
//! [`TurnSequencer`] owns whose turn it is. It accepts one guess at a time,
//! resolves it against the rules, moves cards through the [`Table`], and
//! either keeps the turn with the guesser, passes it round-robin, or ends
//! the game.
//!
//! [`Table`]: crate::table::Table

mod phase;
mod sequencer;

pub use phase::{GuessReport, GuessResult, PendingGuess, TurnPhase};
pub use sequencer::TurnSequencer;
