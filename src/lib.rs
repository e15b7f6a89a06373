//! # spanner
//!
//! **Spanner** is a small async utility library for Rust.
//!
//! It provides two cooperating facilities — a retrying task executor and an
//! await-availability poller — plus a best-effort component loader built on
//! them and a handful of pure helpers. Everything is single-runtime,
//! cooperative, and event-loop driven; there are no threads of its own and
//! no persistent state.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  ┌─────────────┐      ┌─────────────┐      ┌──────────────────┐
//!  │   Retrier   │      │   Poller    │      │  ComponentLoader │
//!  │ (attempts)  │      │  (ticks)    │      │  (best-effort)   │
//!  └──────┬──────┘      └──────┬──────┘      └────────┬─────────┘
//!         │ publishes          │ publishes            │ publishes
//!         ▼                    ▼                      ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │                     Bus (broadcast channel)                   │
//! └───────────────────────────────┬───────────────────────────────┘
//!                                 ▼
//!                       SubscriberSet worker
//!                      ┌──────────┼──────────┐
//!                      ▼          ▼          ▼
//!                 sub1.on    sub2.on    subN.on
//!                  _event()   _event()   _event()
//! ```
//!
//! ### Retry lifecycle
//! ```text
//! Retrier::run(op)
//!
//! loop {
//!   ├─► publish AttemptStarting{ op, attempt }
//!   ├─► op.run()
//!   │     │
//!   │     ├─ Ok     ──► publish AttemptSucceeded ─► settle Ok(value)
//!   │     ├─ Strike ──► publish StrikeRaised ─────► settle Err(original)
//!   │     └─ Fail   ──► publish AttemptFailed
//!   │                    ├─ budget left ─► publish RetryScheduled
//!   │                    │                 ├─ sleep(interval)
//!   │                    │                 └─ continue
//!   │                    └─ budget spent ─► publish RetriesExhausted
//!   │                                       └─ settle Err(Exhausted)
//! }
//! ```
//!
//! ## Features
//! | Area             | Description                                                  | Key types / traits                  |
//! |------------------|--------------------------------------------------------------|-------------------------------------|
//! | **Retry**        | Sequential retry with strike short-circuit and budget.       | [`Retrier`], [`Operation`], [`OpFn`]|
//! | **Polling**      | Fixed-interval waits on external availability, fan-out.      | [`Poller`], [`Registry`]            |
//! | **Loading**      | Best-effort component registration, counter-gated readiness. | [`ComponentLoader`], [`Fetch`]      |
//! | **Subscribers**  | Hook into lifecycle events (logging, metrics, custom).       | [`Subscriber`], [`SubscriberSet`]   |
//! | **Errors**       | Typed failures with retryability marker.                     | [`RetryError`], [`LoadError`]       |
//! | **Configuration**| Centralized settings with sentinel accessors.                | [`Config`]                          |
//! | **Helpers**      | Pure functions: sizes, GUIDs, dates, queries.                | [`readable_size`], [`new_guid`], …  |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use spanner::{Config, OpFn, Retrier, RetryError};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), RetryError> {
//!     let retrier = Retrier::new(Config {
//!         max_attempts: 3,
//!         interval: Duration::from_millis(100),
//!         ..Config::default()
//!     });
//!
//!     let op = OpFn::new("greet", || async { Ok::<_, RetryError>("hello") });
//!     let value = retrier.run(&op).await?;
//!     assert_eq!(value, "hello");
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod events;
mod loader;
mod poll;
mod retry;
mod subscribers;
mod util;

// ---- Public re-exports ----

pub use config::Config;
pub use error::{LoadError, RetryError};
pub use events::{Bus, Event, EventKind};
pub use loader::{ComponentLoader, Fetch, Install};
pub use poll::{MemoryRegistry, Poller, Registry};
pub use retry::{retry, OpFn, OpRef, Operation, Retrier};
pub use subscribers::{Subscriber, SubscriberSet};
pub use util::{concat, format_datetime, new_guid, parse_query, random_range, readable_size};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
