//! # Example: retry_flaky
//!
//! Demonstrates how [`Retrier`] re-invokes a failing operation according to
//! the configured attempt budget and interval.
//!
//! The operation fails twice before succeeding, showing the fixed delay
//! applied between attempts and the lifecycle events on the bus.
//!
//! ## Flow
//! ```text
//! Retrier::run()
//!   ├─► publish(AttemptStarting, attempt=1)
//!   ├─► op.run() → Err("boom #1")
//!   ├─► publish(AttemptFailed)
//!   ├─► publish(RetryScheduled{delay=200ms})
//!   ├─► sleep(delay)
//!   ├─► retry → attempt=2
//!   │     ├─► publish(AttemptStarting)
//!   │     ├─► op.run() → Err("boom #2")
//!   │     ├─► publish(AttemptFailed)
//!   │     └─► publish(RetryScheduled) → sleep
//!   ├─► retry → attempt=3 → Ok("ready")
//!   └─► publish(AttemptSucceeded)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example retry_flaky --features logging
//! ```

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use spanner::{Config, LogWriter, OpFn, Retrier, RetryError, Subscriber, SubscriberSet};

static FAIL_COUNT: AtomicU32 = AtomicU32::new(0);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), RetryError> {
    // 1. Configure: 5 attempts max, 200ms between attempts
    let cfg = Config {
        max_attempts: 5,
        interval: Duration::from_millis(200),
        ..Config::default()
    };

    // 2. Create the retrier and attach the demo logger to its bus
    let retrier = Retrier::new(cfg);
    let subs = SubscriberSet::new(vec![Arc::new(LogWriter) as Arc<dyn Subscriber>]);
    let worker = subs.listen(retrier.bus());

    // 3. Define an operation that fails 2 times before succeeding
    let flaky = OpFn::new("flaky", || async {
        let attempt = FAIL_COUNT.fetch_add(1, Ordering::Relaxed) + 1;
        println!("[flaky] attempt {attempt}");

        if attempt <= 2 {
            println!("[flaky] simulated failure #{attempt}");
            Err(RetryError::fail(format!("boom #{attempt}")))
        } else {
            println!("[flaky] success on attempt {attempt}");
            Ok("ready")
        }
    });

    // 4. Run to settlement
    let value = retrier.run(&flaky).await?;
    println!("[main] settled with {value:?}");

    // 5. Close the bus so the log worker drains and exits
    drop(retrier);
    let _ = worker.await;
    Ok(())
}
