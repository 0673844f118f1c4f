//! Session ownership and setup.
//!
//! A [`GameSession`] is the single owner of a game's mutable state. It is
//! created either from a [`GameSetup`] (for example one parsed from JSON)
//! or with a [`GameBuilder`], starts in the idle phase, and begins play on
//! [`GameSession::start`].

mod builder;
mod session;
mod setup;

pub use builder::GameBuilder;
pub use session::GameSession;
pub use setup::GameSetup;
