//! # Await-availability polling.
//!
//! This module provides the polling-related types:
//! - [`Registry`] - read-only key→value lookup the poller observes
//! - [`MemoryRegistry`] - in-memory registry for tests and in-process use
//! - [`Poller`] - fixed-interval condition polling with fan-out support

mod poller;
mod registry;

pub use poller::Poller;
pub use registry::{MemoryRegistry, Registry};
