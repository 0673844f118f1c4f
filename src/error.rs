//! Error taxonomy for the Quartets core.
//!
//! - [`SetupError`]: the initial card/player data is unusable. Fatal to startup.
//! - [`RejectReason`]: a guess was refused. State is unchanged and the caller
//!   may resubmit. Every reason is an "invalid input" rejection.
//! - [`TransitionError`]: an internal contract was broken (e.g. moving a card
//!   that does not exist). Correct integrations never see one.

use thiserror::Error;

use crate::cards::CardId;
use crate::core::PlayerId;

/// Malformed initial data.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("no card definitions supplied")]
    NoCards,
    #[error("at least {required} players are required, found {found}")]
    NotEnoughPlayers { required: usize, found: usize },
    #[error("card id {0} is defined more than once")]
    DuplicateCard(CardId),
    #[error("player id {0} is defined more than once")]
    DuplicatePlayer(PlayerId),
    #[error("{0} is not a registered player")]
    UnknownPlayer(PlayerId),
    #[error("{0} is not in the deck")]
    CardNotInDeck(CardId),
    #[error("the game has already started")]
    AlreadyStarted,
    #[error("malformed setup data: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for SetupError {
    fn from(err: serde_json::Error) -> Self {
        SetupError::Malformed(err.to_string())
    }
}

/// Why a submitted guess was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("the game has not started")]
    GameNotStarted,
    #[error("the game has ended")]
    GameEnded,
    #[error("{0} does not hold the turn")]
    NotYourTurn(PlayerId),
    #[error("{0} is not a registered player")]
    UnknownPlayer(PlayerId),
    #[error("{0} is not a registered card")]
    UnknownCard(CardId),
    #[error("a player cannot ask themselves")]
    SelfTarget,
}

impl RejectReason {
    /// All rejections fall under the invalid-input category.
    #[must_use]
    pub const fn is_invalid_input(self) -> bool {
        true
    }
}

/// Internal invariant violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("invalid transition: {0} is not a registered card")]
    UnknownCard(CardId),
    #[error("invalid transition: {0} is not a registered player")]
    UnknownPlayer(PlayerId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SetupError::NotEnoughPlayers { required: 2, found: 1 };
        assert_eq!(err.to_string(), "at least 2 players are required, found 1");

        let reject = RejectReason::UnknownCard(CardId::new(9));
        assert_eq!(reject.to_string(), "Card(9) is not a registered card");
        assert!(reject.is_invalid_input());
    }

    #[test]
    fn test_json_error_becomes_malformed() {
        let err: SetupError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, SetupError::Malformed(_)));
    }
}
