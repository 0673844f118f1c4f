//! Quartets rules.
//!
//! - `guess`: whether a guess is legal and what it resolves to (pure)
//! - `quartet`: completed-suit detection and extraction to the quartet pool
//! - `result`: end-of-game check and winners
//!
//! The turn sequencer calls into these; none of them decides whose turn it is.

pub mod guess;
pub mod quartet;
pub mod result;

pub use guess::{is_valid_guess, resolve_guess, GuessOutcome};
pub use quartet::{completed_suits, extract_completed_suits, CompletedQuartet};
pub use result::{is_game_over, GameResult};
