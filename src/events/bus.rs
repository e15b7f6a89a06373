//! # Event bus for broadcasting lifecycle events.
//!
//! [`Bus`] is a thin wrapper around [`tokio::sync::broadcast`] that provides
//! non-blocking event publishing from multiple sources (retrier, poller,
//! loader).
//!
//! ## Architecture
//! ```text
//! Publishers (many):                  Subscribers (many):
//!   Retrier ──┐
//!   Poller  ──┼──────► Bus ─────────► SubscriberSet worker ──► on_event()
//!   Loader  ──┘  (broadcast chan)  └► ad-hoc receivers (tests, callers)
//! ```
//!
//! ## Rules
//! - **Non-blocking publish**: `publish()` never blocks; it calls
//!   `broadcast::Sender::send`.
//! - **Bounded capacity**: a single ring buffer stores recent events for all
//!   receivers.
//! - **Lag handling**: slow receivers get `RecvError::Lagged(n)` and skip
//!   `n` oldest items.
//! - **No persistence**: events are lost if there are no active subscribers
//!   at send time.

use tokio::sync::broadcast;

use super::event::Event;

/// Broadcast channel for lifecycle events.
///
/// Thin wrapper over [`tokio::sync::broadcast`] that provides a
/// `publish`/`subscribe` API. Multiple publishers can publish concurrently;
/// subscribers receive clones of each event.
///
/// ### Properties
/// - **Non-blocking**: `publish()` returns immediately.
/// - **Fire-and-forget**: no delivery or durability guarantees.
/// - **Cloneable**: cheap to clone (internally holds an `Arc`-backed sender).
#[derive(Clone, Debug)]
pub struct Bus {
    tx: broadcast::Sender<Event>,
}

impl Bus {
    /// Creates a new bus with the given channel capacity.
    ///
    /// ### Notes
    /// - Capacity is **shared** across all receivers (not per-subscriber).
    /// - When receivers lag, they will observe `RecvError::Lagged`.
    /// - The minimum capacity is 1 (clamped).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _rx) = broadcast::channel::<Event>(capacity);
        Self { tx }
    }

    /// Publishes an event to all active subscribers.
    ///
    /// - Takes ownership of the event; the broadcast channel clones it for
    ///   each receiver.
    /// - If there are no receivers, the event is dropped (this function
    ///   still returns immediately).
    pub fn publish(&self, ev: Event) {
        let _ = self.tx.send(ev);
    }

    /// Creates a new receiver that will observe subsequent events.
    ///
    /// - Each call creates an **independent** receiver.
    /// - A receiver only gets events **sent after** it subscribes.
    /// - Slow receivers get `RecvError::Lagged(n)` and skip over missed
    ///   items.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;

    #[tokio::test]
    async fn test_subscriber_receives_published_event() {
        let bus = Bus::new(8);
        let mut rx = bus.subscribe();

        bus.publish(Event::new(EventKind::PollResolved).with_target("mod-a"));

        let ev = rx.recv().await.expect("event delivered");
        assert_eq!(ev.kind, EventKind::PollResolved);
        assert_eq!(ev.target.as_deref(), Some("mod-a"));
    }

    #[tokio::test]
    async fn test_publish_without_receivers_is_a_noop() {
        let bus = Bus::new(1);
        // No receiver attached; must not panic or block.
        bus.publish(Event::new(EventKind::AttemptStarting));
    }

    #[test]
    fn test_capacity_is_clamped() {
        // Capacity 0 would panic inside broadcast::channel.
        let _bus = Bus::new(0);
    }
}
