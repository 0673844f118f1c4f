//! Event delivery: the observer trait, the history log and the fan-out bus.

use im::Vector;

use super::event::GameEvent;

/// Receiver of game events. Delivery is synchronous and fire-and-forget.
pub trait EventSink {
    fn publish(&mut self, event: &GameEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&GameEvent),
{
    fn publish(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Ordered history of every event of a session.
///
/// Backed by a persistent vector, so [`EventLog::history`] is an O(1)
/// snapshot that replicas can keep while the game goes on.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vector<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    /// Events from position `from` on, for observers catching up.
    pub fn since(&self, from: usize) -> impl Iterator<Item = &GameEvent> {
        self.events.iter().skip(from)
    }

    /// Cheap copy of the full history.
    #[must_use]
    pub fn history(&self) -> Vector<GameEvent> {
        self.events.clone()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for EventLog {
    fn publish(&mut self, event: &GameEvent) {
        self.events.push_back(event.clone());
    }
}

/// Records every event and forwards it to registered observers.
#[derive(Default)]
pub struct EventBus {
    log: EventLog,
    observers: Vec<Box<dyn EventSink>>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. It sees events published from now on.
    pub fn subscribe(&mut self, observer: Box<dyn EventSink>) {
        self.observers.push(observer);
    }

    #[must_use]
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Forget the history. Observers stay subscribed.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }
}

impl EventSink for EventBus {
    fn publish(&mut self, event: &GameEvent) {
        self.log.publish(event);
        for observer in &mut self.observers {
            observer.publish(event);
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("log", &self.log)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn turn(id: u32) -> GameEvent {
        GameEvent::TurnChanged { player: PlayerId::new(id) }
    }

    #[test]
    fn test_log_keeps_order() {
        let mut log = EventLog::new();
        log.publish(&turn(1));
        log.publish(&turn(2));
        log.publish(&turn(3));

        assert_eq!(log.len(), 3);
        assert_eq!(log.last(), Some(&turn(3)));
        let tail: Vec<_> = log.since(1).cloned().collect();
        assert_eq!(tail, vec![turn(2), turn(3)]);
    }

    #[test]
    fn test_history_is_a_snapshot() {
        let mut log = EventLog::new();
        log.publish(&turn(1));
        let snapshot = log.history();
        log.publish(&turn(2));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_bus_fans_out() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut bus = EventBus::new();
        bus.subscribe(Box::new(move |event: &GameEvent| sink.borrow_mut().push(event.clone())));
        bus.publish(&turn(7));

        assert_eq!(bus.observer_count(), 1);
        assert_eq!(bus.log().len(), 1);
        assert_eq!(*seen.borrow(), vec![turn(7)]);

        bus.clear_log();
        assert!(bus.log().is_empty());
        assert_eq!(bus.observer_count(), 1);
    }
}
