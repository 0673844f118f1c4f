//! Player ledger: per-player hand, score, turn flag and askable sets.

mod ledger;
mod player;

pub use ledger::PlayerLedger;
pub use player::Player;
