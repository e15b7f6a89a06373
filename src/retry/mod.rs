//! # Retrying task execution.
//!
//! This module provides the retry-related types:
//! - [`Operation`] - trait for argument-less async producers
//! - [`OpFn`] - function-backed operation implementation
//! - [`OpRef`] - shared reference to an operation (`Arc<dyn Operation>`)
//! - [`Retrier`] - the executor driving sequential attempts
//! - [`retry`] - one-call convenience wrapper

mod executor;
mod operation;

pub use executor::{retry, Retrier};
pub use operation::{OpFn, OpRef, Operation};
