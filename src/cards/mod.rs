//! Card system: definitions and the registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for a card
//! - `Suit`: Grouping category; four of a suit make a quartet
//! - `CardDefinition`: Static card data (name, suit, hint, siblings)
//! - `CardRegistry`: Card catalog plus the authoritative container of each card

pub mod definition;
pub mod registry;

pub use definition::{CardDefinition, CardId, Suit};
pub use registry::{CardFace, CardRegistry};
