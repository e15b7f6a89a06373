//! # Event subscribers.
//!
//! This module provides the [`Subscriber`] trait and the machinery for
//! handling lifecycle events broadcast through the
//! [`Bus`](crate::events::Bus).
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   Retrier/Poller/Loader ── publish(Event) ──► Bus
//!                                                │
//!                                                ▼
//!                                     SubscriberSet worker
//!                                                │
//!                                     ┌──────────┼──────────┐
//!                                     ▼          ▼          ▼
//!                               LogWriter     Metrics     Custom
//! ```
//!
//! ## Implementing custom subscribers
//! ```rust
//! use async_trait::async_trait;
//! use spanner::{Event, EventKind, Subscriber};
//!
//! struct FailureCounter;
//!
//! #[async_trait]
//! impl Subscriber for FailureCounter {
//!     async fn on_event(&self, event: &Event) {
//!         if event.kind == EventKind::AttemptFailed {
//!             // increment failure counter
//!         }
//!     }
//! }
//! ```

#[cfg(feature = "logging")]
mod log;
mod set;
mod subscriber;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use set::SubscriberSet;
pub use subscriber::Subscriber;
