//! # Subscriber fan-out worker.
//!
//! [`SubscriberSet`] owns a group of subscribers and drains a bus receiver
//! on a spawned worker task, invoking each subscriber in registration order
//! per event.
//!
//! ## Rules
//! - **Lag skips**: a worker that falls behind the bus ring buffer skips
//!   the missed items and keeps going.
//! - **Shutdown**: the worker exits once every publisher handle of the bus
//!   has been dropped and the buffered events are drained.

use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::events::Bus;
use crate::subscribers::Subscriber;

/// Group of subscribers sharing one drain worker.
#[derive(Clone)]
pub struct SubscriberSet {
    subs: Arc<[Arc<dyn Subscriber>]>,
}

impl SubscriberSet {
    /// Creates a set from the given subscribers.
    pub fn new(subs: Vec<Arc<dyn Subscriber>>) -> Self {
        Self { subs: subs.into() }
    }

    /// Number of subscribers in the set.
    pub fn len(&self) -> usize {
        self.subs.len()
    }

    /// Returns true if the set holds no subscribers.
    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }

    /// Spawns the drain worker for `bus` and returns its handle.
    ///
    /// Events published after this call are fanned out to every subscriber
    /// in registration order. The worker finishes when the bus closes.
    pub fn listen(&self, bus: &Bus) -> JoinHandle<()> {
        let mut rx = bus.subscribe();
        let subs = Arc::clone(&self.subs);
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(ev) => {
                        for sub in subs.iter() {
                            sub.on_event(&ev).await;
                        }
                    }
                    Err(RecvError::Lagged(_)) => continue,
                    Err(RecvError::Closed) => break,
                }
            }
        })
    }
}
