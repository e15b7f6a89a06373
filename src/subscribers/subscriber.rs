//! # Core subscriber trait.
//!
//! `Subscriber` is the extension point for plugging custom event handlers
//! into the crate's facilities. Subscribers are driven by a
//! [`SubscriberSet`](crate::subscribers::SubscriberSet) worker fed from a
//! bus receiver.

use async_trait::async_trait;

use crate::events::Event;

/// Contract for event subscribers.
///
/// Called from the subscriber worker task. Implementations should avoid
/// blocking the async runtime (prefer async I/O and cooperative waits).
#[async_trait]
pub trait Subscriber: Send + Sync + 'static {
    /// Handle a single event.
    async fn on_event(&self, event: &Event);

    /// Human-readable name (for logs/metrics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
