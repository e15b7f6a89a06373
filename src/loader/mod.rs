//! # Best-effort component loading.
//!
//! This module provides the loader-related types:
//! - [`Fetch`] - injected resource-fetch collaborator
//! - [`Install`] - injected page-registration collaborator
//! - [`ComponentLoader`] - concurrent, best-effort loading with a
//!   counter-gated readiness wait

mod components;
mod fetch;

pub use components::ComponentLoader;
pub use fetch::{Fetch, Install};
