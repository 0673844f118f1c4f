//! Core types: player identity, RNG, configuration.
//!
//! Everything here is independent of card containers and turn rules.

pub mod player;
pub mod rng;
pub mod config;

pub use player::{PlayerId, PlayerDefinition};
pub use rng::GameRng;
pub use config::GameConfig;
