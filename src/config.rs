//! # Global configuration for the retry executor and poller.
//!
//! Provides [`Config`] centralized settings shared by [`Retrier`],
//! [`Poller`] and [`ComponentLoader`].
//!
//! ## Sentinel values
//! - `max_attempts = 0` → unbounded retry (the only exits are success or a
//!   strike failure)
//! - `interval = 0s` → retry as fast as the event loop allows
//!
//! Prefer the helper accessors over reading fields directly so sentinel
//! checks stay in one place.
//!
//! [`Retrier`]: crate::Retrier
//! [`Poller`]: crate::Poller
//! [`ComponentLoader`]: crate::ComponentLoader

use std::time::Duration;

/// Global configuration for spanner's asynchronous facilities.
///
/// ## Field semantics
/// - `max_attempts`: retry attempt budget (`0` = unbounded)
/// - `interval`: fixed delay between retry attempts (`0s` = immediate)
/// - `poll_interval`: fixed delay between availability poll ticks
/// - `bus_capacity`: event bus ring buffer size (min 1; clamped by Bus)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of operation invocations before declaring exhaustion.
    ///
    /// - `0` = unlimited (retry forever; exit only on success or strike)
    /// - `n > 0` = at most `n` invocations
    pub max_attempts: u32,

    /// Fixed delay between retry attempts.
    ///
    /// `Duration::ZERO` schedules the next attempt immediately (still a
    /// suspension point on the event loop, never a busy spin).
    pub interval: Duration,

    /// Fixed delay between availability poll ticks.
    pub poll_interval: Duration,

    /// Capacity of the event bus broadcast channel ring buffer.
    ///
    /// Slow subscribers that lag behind more than `bus_capacity` messages
    /// will skip older items. Minimum value is 1 (enforced by Bus).
    pub bus_capacity: usize,
}

impl Config {
    /// Returns the retry attempt budget as an `Option`.
    ///
    /// - `None` → unbounded
    /// - `Some(n)` → at most `n` invocations
    ///
    /// # Example
    /// ```
    /// use spanner::Config;
    ///
    /// let mut cfg = Config::default();
    /// assert_eq!(cfg.attempt_budget(), Some(5));
    ///
    /// cfg.max_attempts = 0;
    /// assert_eq!(cfg.attempt_budget(), None);
    /// ```
    #[inline]
    pub fn attempt_budget(&self) -> Option<u32> {
        if self.max_attempts == 0 {
            None
        } else {
            Some(self.max_attempts)
        }
    }

    /// Returns a bus capacity clamped to a minimum of 1.
    ///
    /// The `Bus` should use this value to avoid constructing an invalid
    /// channel.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `max_attempts = 5`
    /// - `interval = 0s` (immediate retry)
    /// - `poll_interval = 500ms`
    /// - `bus_capacity = 1024`
    fn default() -> Self {
        Self {
            max_attempts: 5,
            interval: Duration::ZERO,
            poll_interval: Duration::from_millis(500),
            bus_capacity: 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_attempts_means_unbounded() {
        let cfg = Config {
            max_attempts: 0,
            ..Config::default()
        };
        assert_eq!(cfg.attempt_budget(), None);
    }

    #[test]
    fn test_bus_capacity_clamped_to_one() {
        let cfg = Config {
            bus_capacity: 0,
            ..Config::default()
        };
        assert_eq!(cfg.bus_capacity_clamped(), 1);
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.max_attempts, 5);
        assert_eq!(cfg.interval, Duration::ZERO);
        assert_eq!(cfg.poll_interval, Duration::from_millis(500));
    }
}
