//! Card containers.
//!
//! A card is always in exactly one [`Container`]: the deck, one player's
//! hand, or the quartet pool. [`ContainerIndex`] keeps the forward and
//! reverse maps; the card registry is the only owner that mutates it.

pub mod index;

pub use index::{Container, ContainerIndex};
