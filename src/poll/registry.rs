//! # Read-only registry lookup for the poller.
//!
//! The poller never owns the state it waits on; it observes an externally
//! populated mapping through the [`Registry`] trait. Injecting the lookup at
//! construction time keeps the poller free of process-wide state and makes
//! it testable with a fake in-memory registry.
//!
//! ## Rules
//! - The poller only **reads**; writers live outside this crate.
//! - Entries are assumed to transition absent→present **exactly once**
//!   (monotonic); [`MemoryRegistry::insert`] enforces first-write-wins.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Read-only key-presence lookup against an externally-populated mapping.
///
/// Implementations must be cheap to call once per poll tick.
#[async_trait]
pub trait Registry: Send + Sync {
    /// Value stored per key.
    type Value: Clone + Send + Sync;

    /// Returns the value at `key`, or `None` while the slot is still empty.
    async fn get(&self, key: &str) -> Option<Self::Value>;
}

/// Thread-safe in-memory registry.
///
/// The write side ([`insert`](MemoryRegistry::insert)) belongs to the
/// external producer; the poller consumes it through [`Registry`] only.
pub struct MemoryRegistry<V> {
    slots: RwLock<HashMap<String, V>>,
}

impl<V> MemoryRegistry<V>
where
    V: Clone + Send + Sync,
{
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Populates `key` if still empty. Returns `false` when the slot was
    /// already populated (first write wins; slots are monotonic).
    pub async fn insert(&self, key: impl Into<String>, value: V) -> bool {
        let mut slots = self.slots.write().await;
        let mut inserted = false;
        slots.entry(key.into()).or_insert_with(|| {
            inserted = true;
            value
        });
        inserted
    }

    /// Returns true if `key` is populated.
    pub async fn contains(&self, key: &str) -> bool {
        self.slots.read().await.contains_key(key)
    }
}

impl<V> Default for MemoryRegistry<V>
where
    V: Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<V> Registry for MemoryRegistry<V>
where
    V: Clone + Send + Sync,
{
    type Value = V;

    async fn get(&self, key: &str) -> Option<V> {
        self.slots.read().await.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_returns_none_until_populated() {
        let registry = MemoryRegistry::<u32>::new();
        assert_eq!(registry.get("slot").await, None);

        registry.insert("slot", 7).await;
        assert_eq!(registry.get("slot").await, Some(7));
    }

    #[tokio::test]
    async fn test_first_insert_wins() {
        let registry = MemoryRegistry::new();
        assert!(registry.insert("slot", "first").await);
        assert!(!registry.insert("slot", "second").await);
        assert_eq!(registry.get("slot").await, Some("first"));
    }
}
