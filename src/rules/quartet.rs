//! Quartet detection and extraction.
//!
//! A suit is complete once a hand holds `quartet_size` cards of it.
//! Extraction moves exactly that many cards (lowest ids first) to the
//! quartet pool and awards one point; extra cards of the suit stay in hand.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardId, CardRegistry, Suit};
use crate::core::PlayerId;
use crate::error::TransitionError;
use crate::events::GameEvent;
use crate::players::Player;
use crate::table::Table;
use crate::zones::Container;

/// A completed set moved out of a hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedQuartet {
    pub suit: Suit,
    pub cards: SmallVec<[CardId; 4]>,
}

/// Completed suits in a hand, without moving anything.
///
/// Suits come back in suit order; each carries the lowest `quartet_size`
/// card ids of that suit.
#[must_use]
pub fn completed_suits(
    player: &Player,
    cards: &CardRegistry,
    quartet_size: usize,
) -> Vec<CompletedQuartet> {
    if quartet_size == 0 {
        return Vec::new();
    }

    let mut by_suit: BTreeMap<&Suit, SmallVec<[CardId; 4]>> = BTreeMap::new();
    for &card in player.hand() {
        if let Some(suit) = cards.suit_of(card) {
            by_suit.entry(suit).or_default().push(card);
        }
    }

    by_suit
        .into_iter()
        .filter(|(_, held)| held.len() >= quartet_size)
        .map(|(suit, mut held)| {
            held.truncate(quartet_size);
            CompletedQuartet {
                suit: suit.clone(),
                cards: held,
            }
        })
        .collect()
}

/// Move every completed suit from a player's hand to the quartet pool.
///
/// Each extraction scores one point and publishes `QuartetCompleted`.
pub fn extract_completed_suits(
    table: &mut Table<'_>,
    player: PlayerId,
    quartet_size: usize,
) -> Result<Vec<CompletedQuartet>, TransitionError> {
    let holder = table
        .players
        .get(player)
        .ok_or(TransitionError::UnknownPlayer(player))?;
    let completed = completed_suits(holder, table.cards, quartet_size);

    for quartet in &completed {
        for &card in &quartet.cards {
            table.relocate(card, Container::QuartetPool)?;
            table.cards.set_face_up(card, true)?;
        }
        let score = table.players.increment_score(player)?;

        log::info!("{} completed {} (score {})", player, quartet.suit, score);
        table.events.publish(&GameEvent::QuartetCompleted {
            player,
            suit: quartet.suit.clone(),
            cards: quartet.cards.clone(),
        });
    }

    Ok(completed)
}
