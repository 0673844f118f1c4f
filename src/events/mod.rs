//! Game events and observers.
//!
//! The core publishes a [`GameEvent`] for every state change an outside
//! layer may want to show or mirror. Any [`EventSink`] can listen, including
//! a plain closure. [`EventLog`] keeps the full ordered history of a session.
//!
//! ```
//! use quartets_core::core::PlayerId;
//! use quartets_core::events::{EventLog, EventSink, GameEvent};
//!
//! let mut log = EventLog::new();
//! log.publish(&GameEvent::TurnChanged { player: PlayerId::new(1) });
//! assert_eq!(log.len(), 1);
//! ```

mod event;
mod sink;

pub use event::GameEvent;
pub use sink::{EventBus, EventLog, EventSink};
