//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] prints events to stdout in a human-readable format.
//!
//! ## Output format
//! ```text
//! [attempt] op=sync-profile attempt=1
//! [failed] op=sync-profile err="connection refused" attempt=1
//! [retry] op=sync-profile delay=0ms after_attempt=1 err="connection refused"
//! [ok] op=sync-profile attempt=2
//! [strike] op=login err="bad credentials"
//! [exhausted] op=sync-profile attempts=5
//! [poll] target=mod-a tick=3
//! [ready] target=mod-a tick=4
//! [installed] component=nav-bar
//! [component-failed] component=side-bar err="fetch failed ..."
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscriber;

/// Simple stdout logging subscriber.
///
/// Enabled via the `logging` feature. Prints human-readable event
/// descriptions to stdout for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Subscriber`] for
/// structured logging or metrics collection.
pub struct LogWriter;

#[async_trait]
impl Subscriber for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::AttemptStarting => {
                if let (Some(op), Some(att)) = (&e.target, e.attempt) {
                    println!("[attempt] op={op} attempt={att}");
                }
            }
            EventKind::AttemptSucceeded => {
                println!("[ok] op={:?} attempt={:?}", e.target, e.attempt);
            }
            EventKind::AttemptFailed => {
                println!(
                    "[failed] op={:?} err={:?} attempt={:?}",
                    e.target, e.reason, e.attempt
                );
            }
            EventKind::StrikeRaised => {
                println!("[strike] op={:?} err={:?}", e.target, e.reason);
            }
            EventKind::RetryScheduled => {
                println!(
                    "[retry] op={:?} delay={:?}ms after_attempt={:?} err={:?}",
                    e.target, e.delay_ms, e.attempt, e.reason
                );
            }
            EventKind::RetriesExhausted => {
                println!("[exhausted] op={:?} attempts={:?}", e.target, e.attempt);
            }
            EventKind::PollTick => {
                println!("[poll] target={:?} tick={:?}", e.target, e.attempt);
            }
            EventKind::PollResolved => {
                println!("[ready] target={:?} tick={:?}", e.target, e.attempt);
            }
            EventKind::ComponentInstalled => {
                println!("[installed] component={:?}", e.target);
            }
            EventKind::ComponentFailed => {
                println!("[component-failed] component={:?} err={:?}", e.target, e.reason);
            }
        }
    }

    fn name(&self) -> &'static str {
        "log_writer"
    }
}
