//! # Retrier: sequential retry of an async operation.
//!
//! Executes an [`Operation`] until it succeeds, raises a strike, or the
//! attempt budget runs out, with a fixed delay between attempts.
//!
//! ## Event flow
//! For each attempt, the retrier publishes:
//! ```text
//! AttemptStarting → [operation run] → AttemptSucceeded (success, settle Ok)
//!                                   → StrikeRaised     (strike, settle Err)
//!                                   → AttemptFailed    (retryable failure)
//!
//! After a retryable failure:
//!   budget left  → RetryScheduled → [sleep interval] → next attempt
//!   budget spent → RetriesExhausted (settle Err)
//! ```
//!
//! ## Rules
//! - Attempts run **strictly sequentially**: attempt n+1 never starts until
//!   attempt n has fully settled.
//! - The attempt counter **increments after every attempt** regardless of
//!   outcome, including the one that raised a strike or exhausted the
//!   budget.
//! - A strike settles the session with the **original** failure value; no
//!   exhaustion error is synthesized for it.
//! - `max_attempts = 0` retries forever; the only exits are success or a
//!   strike. There is no built-in cancellation or timeout — a caller that
//!   needs a bound must race the returned future against its own timer and
//!   discard it (the dropped future stops at its next suspension point).

use std::time::Duration;

use tokio::time;

use crate::{
    config::Config,
    error::RetryError,
    events::{Bus, Event, EventKind},
    retry::Operation,
};

/// Executes operations with sequential retry, strike short-circuit and a
/// bounded (or unbounded) attempt budget.
///
/// ### Responsibilities
/// - **Control flow only**: its side effects are invoking the operation,
///   sleeping between attempts and publishing lifecycle events
/// - **Settlement**: every bounded session eventually settles; an unbounded
///   session settles on success or strike
///
/// ### Rules
/// - Attempts are sequential (never concurrent for one session)
/// - The attempt counter is private to one `run` call; concurrent `run`
///   calls on one `Retrier` do not share state
#[derive(Clone, Debug)]
pub struct Retrier {
    config: Config,
    bus: Bus,
}

impl Retrier {
    /// Creates a retrier with its own event bus sized from `config`.
    pub fn new(config: Config) -> Self {
        let bus = Bus::new(config.bus_capacity_clamped());
        Self { config, bus }
    }

    /// Creates a retrier publishing to an existing bus.
    ///
    /// Use this to share one bus (and one subscriber set) across the
    /// retrier, poller and loader.
    pub fn with_bus(config: Config, bus: Bus) -> Self {
        Self { config, bus }
    }

    /// Returns the event bus this retrier publishes to.
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Runs `op` until success, strike, or exhaustion.
    ///
    /// ### Flow
    /// 1. Publish `AttemptStarting` and invoke the operation
    /// 2. On success, settle `Ok` with the produced value
    /// 3. On a strike failure, settle `Err` with the original failure,
    ///    bypassing the remaining budget
    /// 4. Otherwise count the attempt; if budget remains (or is unbounded),
    ///    sleep the configured interval and repeat, else settle `Err` with
    ///    [`RetryError::Exhausted`]
    ///
    /// ### Exhaustion semantics
    /// With `max_attempts = N > 0` and an always-failing operation, exactly
    /// `N` invocations occur and the synthesized failure message contains
    /// `N` and the last underlying failure's description.
    ///
    /// ### Cancellation
    /// None built in. With `max_attempts = 0` a permanently failing
    /// operation never settles; callers choose between "never resolves"
    /// (unbounded) and "fails after N attempts" (bounded) via configuration.
    pub async fn run<O>(&self, op: &O) -> Result<O::Output, RetryError>
    where
        O: Operation + ?Sized,
    {
        let budget = self.config.attempt_budget();
        let mut attempts: u32 = 0;

        loop {
            self.bus.publish(
                Event::new(EventKind::AttemptStarting)
                    .with_target(op.name())
                    .with_attempt(attempts + 1),
            );

            let res = op.run().await;
            // Counting happens after every attempt, including the one that
            // raised a strike or exhausted the budget.
            attempts = attempts.saturating_add(1);

            let err = match res {
                Ok(value) => {
                    self.bus.publish(
                        Event::new(EventKind::AttemptSucceeded)
                            .with_target(op.name())
                            .with_attempt(attempts),
                    );
                    return Ok(value);
                }
                Err(RetryError::Strike { reason }) => {
                    self.bus.publish(
                        Event::new(EventKind::StrikeRaised)
                            .with_target(op.name())
                            .with_attempt(attempts)
                            .with_reason(reason.clone()),
                    );
                    return Err(RetryError::Strike { reason });
                }
                Err(err) => err,
            };

            self.bus.publish(
                Event::new(EventKind::AttemptFailed)
                    .with_target(op.name())
                    .with_attempt(attempts)
                    .with_reason(err.to_string()),
            );

            if let Some(limit) = budget {
                if attempts >= limit {
                    let last = err.to_string();
                    self.bus.publish(
                        Event::new(EventKind::RetriesExhausted)
                            .with_target(op.name())
                            .with_attempt(attempts)
                            .with_reason(last.clone()),
                    );
                    return Err(RetryError::Exhausted {
                        attempts: limit,
                        last,
                    });
                }
            }

            self.bus.publish(
                Event::new(EventKind::RetryScheduled)
                    .with_target(op.name())
                    .with_attempt(attempts)
                    .with_delay(self.config.interval)
                    .with_reason(err.to_string()),
            );
            time::sleep(self.config.interval).await;
        }
    }
}

/// Retries a closure-backed operation with the given budget and interval.
///
/// One-call wrapper over [`Retrier`] for callers that don't need a shared
/// bus or a named operation.
///
/// # Example
/// ```
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use std::time::Duration;
/// use spanner::{retry, RetryError};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     static CALLS: AtomicU32 = AtomicU32::new(0);
///
///     let out = retry(
///         || async {
///             if CALLS.fetch_add(1, Ordering::Relaxed) < 2 {
///                 Err(RetryError::fail("not yet"))
///             } else {
///                 Ok::<_, RetryError>(42)
///             }
///         },
///         5,
///         Duration::ZERO,
///     )
///     .await;
///
///     assert_eq!(out.unwrap(), 42);
///     assert_eq!(CALLS.load(Ordering::Relaxed), 3);
/// }
/// ```
pub async fn retry<F, Fut, T>(
    op: F,
    max_attempts: u32,
    interval: Duration,
) -> Result<T, RetryError>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: std::future::Future<Output = Result<T, RetryError>> + Send,
    T: Send,
{
    let config = Config {
        max_attempts,
        interval,
        ..Config::default()
    };
    let retrier = Retrier::new(config);
    let op = crate::retry::OpFn::new("operation", op);
    retrier.run(&op).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry::OpFn;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::Instant;

    /// Operation that fails its first `fail_first` invocations, then
    /// succeeds with the invocation number.
    fn counting_op(calls: &Arc<AtomicU32>, fail_first: u32) -> impl Operation<Output = u32> {
        let calls = Arc::clone(calls);
        OpFn::new("counted", move || {
            let calls = Arc::clone(&calls);
            async move {
                let n = calls.fetch_add(1, Ordering::Relaxed) + 1;
                if n <= fail_first {
                    Err(RetryError::fail(format!("boom #{n}")))
                } else {
                    Ok(n)
                }
            }
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_always_failing_makes_exactly_n_attempts() {
        let calls = Arc::new(AtomicU32::new(0));
        let op = counting_op(&calls, u32::MAX);
        let retrier = Retrier::new(Config {
            max_attempts: 5,
            interval: Duration::ZERO,
            ..Config::default()
        });

        let err = retrier.run(&op).await.unwrap_err();

        assert_eq!(calls.load(Ordering::Relaxed), 5);
        match &err {
            RetryError::Exhausted { attempts, last } => {
                assert_eq!(*attempts, 5);
                assert!(last.contains("boom #5"));
            }
            other => panic!("expected Exhausted, got {other:?}"),
        }
        assert!(err.to_string().contains('5'));
    }

    #[tokio::test(start_paused = true)]
    async fn test_succeeds_after_k_failures_with_k_plus_one_invocations() {
        let calls = Arc::new(AtomicU32::new(0));
        let op = counting_op(&calls, 2);
        let retrier = Retrier::new(Config {
            max_attempts: 5,
            interval: Duration::ZERO,
            ..Config::default()
        });

        let out = retrier.run(&op).await.unwrap();
        assert_eq!(out, 3);
        assert_eq!(calls.load(Ordering::Relaxed), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_strike_settles_after_one_invocation_with_original_failure() {
        let calls = Arc::new(AtomicU32::new(0));
        let counted = Arc::clone(&calls);
        let op = OpFn::new("striker", move || {
            let counted = Arc::clone(&counted);
            async move {
                counted.fetch_add(1, Ordering::Relaxed);
                Err::<(), _>(RetryError::strike("bad credentials"))
            }
        });
        let retrier = Retrier::new(Config {
            max_attempts: 5,
            ..Config::default()
        });

        let err = retrier.run(&op).await.unwrap_err();

        assert_eq!(calls.load(Ordering::Relaxed), 1);
        assert_eq!(
            err,
            RetryError::Strike {
                reason: "bad credentials".to_string()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_unbounded_retry_never_gives_up_before_success() {
        let calls = Arc::new(AtomicU32::new(0));
        let op = counting_op(&calls, 1000);
        let retrier = Retrier::new(Config {
            max_attempts: 0,
            interval: Duration::ZERO,
            ..Config::default()
        });

        let out = retrier.run(&op).await.unwrap();
        assert_eq!(out, 1001);
        assert_eq!(calls.load(Ordering::Relaxed), 1001);
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_elapses_between_attempts() {
        let calls = Arc::new(AtomicU32::new(0));
        let op = counting_op(&calls, 2);
        let retrier = Retrier::new(Config {
            max_attempts: 5,
            interval: Duration::from_millis(200),
            ..Config::default()
        });

        let started = Instant::now();
        retrier.run(&op).await.unwrap();

        // Two failures → two sleeps of 200ms before the succeeding attempt.
        assert_eq!(started.elapsed(), Duration::from_millis(400));
    }

    #[tokio::test(start_paused = true)]
    async fn test_lifecycle_events_for_exhausted_session() {
        let retrier = Retrier::new(Config {
            max_attempts: 2,
            interval: Duration::ZERO,
            bus_capacity: 64,
            ..Config::default()
        });
        let mut rx = retrier.bus().subscribe();

        let op = OpFn::new("doomed", || async { Err::<(), _>(RetryError::fail("boom")) });
        retrier.run(&op).await.unwrap_err();

        let mut kinds = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            kinds.push(ev.kind);
        }
        assert_eq!(
            kinds,
            vec![
                EventKind::AttemptStarting,
                EventKind::AttemptFailed,
                EventKind::RetryScheduled,
                EventKind::AttemptStarting,
                EventKind::AttemptFailed,
                EventKind::RetriesExhausted,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_convenience_wrapper() {
        static CALLS: AtomicU32 = AtomicU32::new(0);
        let out = retry(
            || async {
                if CALLS.fetch_add(1, Ordering::Relaxed) == 0 {
                    Err(RetryError::fail("warmup"))
                } else {
                    Ok::<_, RetryError>("ready")
                }
            },
            3,
            Duration::from_millis(10),
        )
        .await;
        assert_eq!(out.unwrap(), "ready");
    }
}
