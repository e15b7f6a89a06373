//! # Poller: fixed-interval waiting for external availability.
//!
//! Resolves once a named condition becomes true, checked by repeated
//! polling. Used for waiting on asynchronously-initialized registry slots
//! (module globals in the original setting) and on the component loader's
//! settled counter.
//!
//! ## Tick flow
//! ```text
//! loop {
//!   ├─► test condition (synchronously, before any delay)
//!   │     ├─ true  → publish PollResolved → return value
//!   │     └─ false → publish PollTick
//!   └─► sleep(poll_interval)
//! }
//! ```
//!
//! ## Rules
//! - The condition is tested **first** on every tick; a condition that is
//!   already true resolves without sleeping.
//! - The poller never fails and never times out: a permanently-false
//!   condition pends forever. This is an accepted limitation, carried over
//!   faithfully; callers wanting a bound must race the returned future.
//! - Waiting on multiple keys polls each independently and concurrently;
//!   the aggregate resolves when the **slowest** resolves (all-of).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use futures::future::join_all;
use tokio::time;

use crate::{
    config::Config,
    events::{Bus, Event, EventKind},
    poll::Registry,
};

/// Fixed-interval availability poller.
///
/// State machine per wait: `Waiting → (tick: condition false) → Waiting`,
/// `Waiting → (tick: condition true) → Resolved`. There is no `Failed`
/// state.
#[derive(Clone, Debug)]
pub struct Poller {
    interval: Duration,
    bus: Bus,
}

impl Poller {
    /// Creates a poller with its own event bus sized from `config`.
    pub fn new(config: Config) -> Self {
        let bus = Bus::new(config.bus_capacity_clamped());
        Self {
            interval: config.poll_interval,
            bus,
        }
    }

    /// Creates a poller publishing to an existing bus.
    pub fn with_bus(config: Config, bus: Bus) -> Self {
        Self {
            interval: config.poll_interval,
            bus,
        }
    }

    /// Returns the event bus this poller publishes to.
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Waits until `registry` holds a value at `key` and returns it.
    ///
    /// Polls indefinitely; see the module docs for the no-timeout rule.
    pub async fn wait_for<R>(&self, registry: &R, key: &str) -> R::Value
    where
        R: Registry + ?Sized,
    {
        let mut tick: u32 = 0;
        loop {
            tick = tick.saturating_add(1);
            if let Some(value) = registry.get(key).await {
                self.bus.publish(
                    Event::new(EventKind::PollResolved)
                        .with_target(key)
                        .with_attempt(tick),
                );
                return value;
            }
            self.bus.publish(
                Event::new(EventKind::PollTick)
                    .with_target(key)
                    .with_attempt(tick),
            );
            time::sleep(self.interval).await;
        }
    }

    /// Waits until every key in `keys` is populated and returns the values
    /// in key order.
    ///
    /// Each key is polled independently and concurrently; the call resolves
    /// only when the slowest key resolves.
    pub async fn wait_for_all<R>(&self, registry: &R, keys: &[&str]) -> Vec<R::Value>
    where
        R: Registry + ?Sized,
    {
        join_all(keys.iter().map(|key| self.wait_for(registry, key))).await
    }

    /// Waits until `condition` returns true.
    ///
    /// `target` names the condition in published events.
    pub async fn wait_until<C>(&self, target: &str, condition: C)
    where
        C: Fn() -> bool + Send + Sync,
    {
        let mut tick: u32 = 0;
        loop {
            tick = tick.saturating_add(1);
            if condition() {
                self.bus.publish(
                    Event::new(EventKind::PollResolved)
                        .with_target(target)
                        .with_attempt(tick),
                );
                return;
            }
            self.bus.publish(
                Event::new(EventKind::PollTick)
                    .with_target(target)
                    .with_attempt(tick),
            );
            time::sleep(self.interval).await;
        }
    }

    /// Waits until `counter` reaches `target_count`.
    ///
    /// The counter is externally owned and incremented (e.g. by the
    /// component loader once per settled registration).
    pub async fn wait_for_count(&self, target: &str, counter: &AtomicUsize, target_count: usize) {
        self.wait_until(target, || counter.load(Ordering::SeqCst) >= target_count)
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poll::MemoryRegistry;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::Instant;

    fn test_config() -> Config {
        Config {
            bus_capacity: 256,
            ..Config::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_already_present_key_resolves_without_sleeping() {
        let registry = MemoryRegistry::new();
        registry.insert("mod-a", "ready").await;
        let poller = Poller::new(test_config());

        let started = Instant::now();
        let value = poller.wait_for(&registry, "mod-a").await;

        assert_eq!(value, "ready");
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolves_on_third_tick_and_not_before() {
        let registry = Arc::new(MemoryRegistry::new());
        let poller = Poller::new(test_config());

        let writer = Arc::clone(&registry);
        tokio::spawn(async move {
            // Lands between the 2nd tick (500ms) and the 3rd (1000ms).
            time::sleep(Duration::from_millis(700)).await;
            writer.insert("mod-a", 42).await;
        });

        let mut rx = poller.bus().subscribe();
        let started = Instant::now();
        let value = poller.wait_for(registry.as_ref(), "mod-a").await;

        assert_eq!(value, 42);
        assert_eq!(started.elapsed(), Duration::from_millis(1000));

        let mut kinds = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            kinds.push((ev.kind, ev.attempt));
        }
        assert_eq!(
            kinds,
            vec![
                (EventKind::PollTick, Some(1)),
                (EventKind::PollTick, Some(2)),
                (EventKind::PollResolved, Some(3)),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_fan_out_resolves_with_the_slowest_key() {
        let registry = Arc::new(MemoryRegistry::new());
        let poller = Poller::new(test_config());

        for (key, delay_ms, value) in [("a", 100u64, 1u32), ("b", 600, 2), ("c", 1100, 3)] {
            let writer = Arc::clone(&registry);
            tokio::spawn(async move {
                time::sleep(Duration::from_millis(delay_ms)).await;
                writer.insert(key, value).await;
            });
        }

        let started = Instant::now();
        let values = poller.wait_for_all(registry.as_ref(), &["a", "b", "c"]).await;

        assert_eq!(values, vec![1, 2, 3]);
        // Keys become present after 1, 2 and 3 ticks; the aggregate is bound
        // by the slowest.
        assert_eq!(started.elapsed(), Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_for_count_observes_external_counter() {
        let counter = Arc::new(AtomicUsize::new(0));
        let poller = Poller::new(test_config());

        let writer = Arc::clone(&counter);
        tokio::spawn(async move {
            time::sleep(Duration::from_millis(300)).await;
            writer.fetch_add(1, Ordering::SeqCst);
            time::sleep(Duration::from_millis(500)).await;
            writer.fetch_add(1, Ordering::SeqCst);
        });

        let started = Instant::now();
        poller.wait_for_count("components", &counter, 2).await;

        assert_eq!(started.elapsed(), Duration::from_millis(1000));
    }
}
