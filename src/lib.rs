//! # quartets-core
//!
//! Authoritative turn and state core for the Quartets card game.
//!
//! Players take turns asking another player for a specific card of a suit
//! they already hold. A correct guess moves the card across and lets the
//! guesser go again; a miss draws from the deck and passes the turn. Four
//! cards of one suit form a quartet, which leaves the hand and scores a
//! point. The game ends when the deck and every hand are empty.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: one [`GameSession`] owns the registry, the ledger
//!    and the sequencer. There is no global state.
//!
//! 2. **One Way to Move a Card**: every container change goes through the
//!    registry's `move_card`, wrapped by [`table::Table`] so the hand on
//!    each side changes in the same call.
//!
//! 3. **Synchronous Dispatch**: a guess drives the state machine to its
//!    next stable phase before the call returns. Observers are told
//!    afterwards and are never waited on.
//!
//! ## Modules
//!
//! - `core`: player ids, RNG, configuration
//! - `cards`: card definitions and the card registry
//! - `zones`: containers (deck, hands, quartet pool) and their index
//! - `players`: per-player state and the ledger
//! - `rules`: guess rules, quartet extraction, game end
//! - `events`: events and observers
//! - `turns`: the turn state machine
//! - `game`: session, builder and setup data
//! - `snapshot`: read-only projection for replicas
//!
//! ## Example
//!
//! ```
//! use quartets_core::{CardDefinition, CardId, GameBuilder, GuessOutcome, PlayerId};
//!
//! let ann = PlayerId::new(1);
//! let ben = PlayerId::new(2);
//! let mut game = GameBuilder::new()
//!     .card(CardDefinition::new(CardId::new(1), "Cod", "Fish"))
//!     .card(CardDefinition::new(CardId::new(2), "Eel", "Fish"))
//!     .card(CardDefinition::new(CardId::new(3), "Owl", "Birds"))
//!     .player(ann, "Ann")
//!     .player(ben, "Ben")
//!     .hand_size(0)
//!     .build()
//!     .unwrap();
//!
//! game.deal_card(ann, CardId::new(1)).unwrap();
//! game.deal_card(ben, CardId::new(2)).unwrap();
//! game.start_with(ann).unwrap();
//!
//! let result = game.submit_guess(ann, ben, CardId::new(2));
//! assert_eq!(result.outcome(), Some(GuessOutcome::Correct));
//! assert_eq!(game.current_player(), Some(ann));
//! ```

pub mod cards;
pub mod core;
pub mod error;
pub mod events;
pub mod game;
pub mod players;
pub mod rules;
pub mod snapshot;
pub mod table;
pub mod turns;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, PlayerDefinition, PlayerId};

pub use crate::cards::{CardDefinition, CardFace, CardId, CardRegistry, Suit};

pub use crate::zones::Container;

pub use crate::players::{Player, PlayerLedger};

pub use crate::rules::{CompletedQuartet, GameResult, GuessOutcome};

pub use crate::error::{RejectReason, SetupError, TransitionError};

pub use crate::events::{EventLog, EventSink, GameEvent};

pub use crate::turns::{GuessReport, GuessResult, PendingGuess, TurnPhase};

pub use crate::game::{GameBuilder, GameSession, GameSetup};

pub use crate::snapshot::{PlayerView, PublicSnapshot};
