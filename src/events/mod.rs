//! Runtime events: types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** used to
//! publish/subscribe to lifecycle events emitted by the retry executor,
//! the availability poller and the component loader.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//! - [`Bus`] thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: `Retrier`, `Poller`, `ComponentLoader`.
//! - **Consumers**: `SubscriberSet` workers and any ad-hoc
//!   `Bus::subscribe()` receiver.

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
