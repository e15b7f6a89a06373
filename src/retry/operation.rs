//! # Operation abstraction and function-backed implementation.
//!
//! This module defines the [`Operation`] trait (an argument-less async
//! producer) and a convenient function-backed implementation [`OpFn`].
//! The common handle type is [`OpRef`], an `Arc<dyn Operation>` suitable
//! for sharing.
//!
//! An operation is invoked afresh on every attempt; it owns no attempt
//! state of its own.

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::RetryError;

/// # Argument-less asynchronous producer.
///
/// An `Operation` has a stable [`name`](Operation::name) (used in lifecycle
/// events) and an async [`run`](Operation::run) method invoked once per
/// attempt. Failing with [`RetryError::Fail`] requests another attempt while
/// budget remains; failing with [`RetryError::Strike`] settles the session
/// immediately.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use spanner::{Operation, RetryError};
///
/// struct Demo;
///
/// #[async_trait]
/// impl Operation for Demo {
///     type Output = u32;
///
///     fn name(&self) -> &str { "demo" }
///
///     async fn run(&self) -> Result<u32, RetryError> {
///         Ok(7)
///     }
/// }
/// ```
#[async_trait]
pub trait Operation: Send + Sync {
    /// Value produced on success.
    type Output: Send;

    /// Returns a stable, human-readable operation name.
    fn name(&self) -> &str;

    /// Executes one attempt.
    async fn run(&self) -> Result<Self::Output, RetryError>;
}

/// Shared handle to an operation producing `T`.
pub type OpRef<T> = Arc<dyn Operation<Output = T>>;

/// Function-backed operation implementation.
///
/// Wraps a closure that *creates* a new future per attempt, so no state is
/// shared between attempts unless the closure captures it explicitly
/// (e.g. via `Arc`).
#[derive(Debug)]
pub struct OpFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> OpFn<F> {
    /// Creates a new function-backed operation.
    ///
    /// Prefer [`OpFn::arc`] when you immediately need an [`OpRef`].
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the operation and returns it as a shared handle.
    ///
    /// ## Example
    /// ```
    /// use spanner::{OpFn, OpRef, Operation, RetryError};
    ///
    /// let op: OpRef<u32> = OpFn::arc("answer", || async { Ok::<_, RetryError>(42) });
    /// assert_eq!(op.name(), "answer");
    /// ```
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<F, Fut, T> Operation for OpFn<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<T, RetryError>> + Send,
    T: Send,
{
    type Output = T;

    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self) -> Result<T, RetryError> {
        (self.f)().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_op_fn_produces_fresh_future_per_run() {
        use std::sync::atomic::{AtomicU32, Ordering};

        let calls = Arc::new(AtomicU32::new(0));
        let counted = Arc::clone(&calls);
        let op = OpFn::new("counted", move || {
            let counted = Arc::clone(&counted);
            async move {
                counted.fetch_add(1, Ordering::Relaxed);
                Ok::<_, RetryError>(())
            }
        });

        op.run().await.unwrap();
        op.run().await.unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), 2);
    }
}
