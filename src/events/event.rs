//! # Lifecycle events emitted by the retrier, poller and loader.
//!
//! The [`EventKind`] enum classifies event types across three categories:
//! - **Retry events**: attempt flow (starting, succeeded, failed, strike,
//!   scheduled, exhausted)
//! - **Poll events**: availability polling (tick, resolved)
//! - **Loader events**: component loading (installed, failed)
//!
//! The [`Event`] struct carries additional metadata such as timestamps,
//! target name, reasons, attempt numbers and delays.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Use `seq` to restore the exact order when events are
//! delivered out of order.
//!
//! ## Example
//! ```rust
//! use spanner::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::AttemptFailed)
//!     .with_target("fetch-profile")
//!     .with_reason("connection refused")
//!     .with_attempt(3);
//!
//! assert_eq!(ev.kind, EventKind::AttemptFailed);
//! assert_eq!(ev.target.as_deref(), Some("fetch-profile"));
//! assert_eq!(ev.reason.as_deref(), Some("connection refused"));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::{Duration, SystemTime};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Retry events ===
    /// An attempt of a wrapped operation is starting.
    ///
    /// Sets:
    /// - `target`: operation name
    /// - `attempt`: attempt number (1-based)
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    AttemptStarting,

    /// An attempt succeeded; the overall retry session settles now.
    ///
    /// Sets:
    /// - `target`: operation name
    /// - `attempt`: attempt number
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    AttemptSucceeded,

    /// An attempt failed with a retryable error.
    ///
    /// Sets:
    /// - `target`: operation name
    /// - `attempt`: attempt number
    /// - `reason`: failure message
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    AttemptFailed,

    /// An attempt failed with a strike; the session settles immediately,
    /// bypassing the remaining attempt budget.
    ///
    /// Sets:
    /// - `target`: operation name
    /// - `attempt`: attempt number
    /// - `reason`: strike message
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    StrikeRaised,

    /// Next attempt scheduled after a retryable failure.
    ///
    /// Sets:
    /// - `target`: operation name
    /// - `attempt`: previous attempt number
    /// - `delay_ms`: delay before the next attempt (ms)
    /// - `reason`: last failure message
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    RetryScheduled,

    /// Attempt budget consumed without success; the session settles failed.
    ///
    /// Sets:
    /// - `target`: operation name
    /// - `attempt`: final attempt number (equals the budget)
    /// - `reason`: last failure message
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    RetriesExhausted,

    // === Poll events ===
    /// One poll tick found the condition still false.
    ///
    /// Sets:
    /// - `target`: poll target name
    /// - `attempt`: tick number (1-based)
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    PollTick,

    /// The polled condition became true; the wait resolves.
    ///
    /// Sets:
    /// - `target`: poll target name
    /// - `attempt`: tick number on which the condition held
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    PollResolved,

    // === Loader events ===
    /// A component's template was fetched and registered.
    ///
    /// Sets:
    /// - `target`: component name
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    ComponentInstalled,

    /// Loading a component failed; the load still counts as settled
    /// (best-effort policy).
    ///
    /// Sets:
    /// - `target`: component name
    /// - `reason`: failure message
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    ComponentFailed,
}

/// Lifecycle event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// Name of the operation, poll target or component, if applicable.
    pub target: Option<Arc<str>>,
    /// Attempt or tick count (starting from 1).
    pub attempt: Option<u32>,
    /// Scheduled delay before the next attempt in milliseconds (compact).
    pub delay_ms: Option<u32>,
    /// Human-readable reason (errors, failure details).
    pub reason: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and
    /// next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            target: None,
            attempt: None,
            delay_ms: None,
            reason: None,
        }
    }

    /// Attaches the name of the operation, poll target or component.
    #[inline]
    pub fn with_target(mut self, target: impl Into<Arc<str>>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Attaches an attempt or tick count.
    #[inline]
    pub fn with_attempt(mut self, n: u32) -> Self {
        self.attempt = Some(n);
        self
    }

    /// Attaches a scheduled delay (stored as milliseconds).
    #[inline]
    pub fn with_delay(mut self, d: Duration) -> Self {
        let ms = d.as_millis().min(u128::from(u32::MAX)) as u32;
        self.delay_ms = Some(ms);
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_numbers_are_monotonic() {
        let a = Event::new(EventKind::AttemptStarting);
        let b = Event::new(EventKind::AttemptStarting);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn test_builders_set_fields() {
        let ev = Event::new(EventKind::RetryScheduled)
            .with_target("op")
            .with_attempt(2)
            .with_delay(Duration::from_millis(250))
            .with_reason("boom");
        assert_eq!(ev.target.as_deref(), Some("op"));
        assert_eq!(ev.attempt, Some(2));
        assert_eq!(ev.delay_ms, Some(250));
        assert_eq!(ev.reason.as_deref(), Some("boom"));
    }

    #[test]
    fn test_delay_saturates_at_u32_max() {
        let ev = Event::new(EventKind::RetryScheduled).with_delay(Duration::from_secs(u64::MAX));
        assert_eq!(ev.delay_ms, Some(u32::MAX));
    }
}
