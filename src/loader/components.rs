//! # ComponentLoader: concurrent, best-effort component registration.
//!
//! Loads named components through the injected [`Fetch`] / [`Install`]
//! collaborators and tracks how many loads have settled in a shared
//! counter, which [`ComponentLoader::wait_loaded`] observes through the
//! [`Poller`].
//!
//! ## Flow per component
//! ```text
//! load_one(name)
//!   ├─► fetch  /components/templates/<name>.html
//!   ├─► install(name, template, /components/<name>.js)
//!   │     ├─ Ok  → publish ComponentInstalled
//!   │     └─ Err → publish ComponentFailed      (load still settles)
//!   └─► settled counter += 1
//! ```
//!
//! ## Rules
//! - Loads are **best-effort**: a failed fetch or install is published as
//!   `ComponentFailed` and the component still counts as settled, so one
//!   missing optional component never blocks the aggregate. Failures are
//!   observable only through the event bus.
//! - The settled counter increments once per load, success or failure; a
//!   `wait_loaded` target that includes a failed component still resolves.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::future::join_all;

use crate::{
    config::Config,
    error::LoadError,
    events::{Bus, Event, EventKind},
    loader::{Fetch, Install},
    poll::Poller,
};

/// Concurrent best-effort loader for named components.
///
/// ### Responsibilities
/// - **Orchestration**: fan out one load per component, all-of completion
/// - **Best-effort policy**: swallow collaborator failures after publishing
///   them
/// - **Readiness**: expose a counter-gated wait built on the poller
pub struct ComponentLoader {
    fetcher: Arc<dyn Fetch>,
    installer: Arc<dyn Install>,
    settled: Arc<AtomicUsize>,
    poller: Poller,
    bus: Bus,
}

impl ComponentLoader {
    /// Creates a loader with its own event bus sized from `config`.
    pub fn new(config: Config, fetcher: Arc<dyn Fetch>, installer: Arc<dyn Install>) -> Self {
        let bus = Bus::new(config.bus_capacity_clamped());
        Self::assemble(config, fetcher, installer, bus)
    }

    /// Creates a loader publishing to an existing bus.
    pub fn with_bus(
        config: Config,
        fetcher: Arc<dyn Fetch>,
        installer: Arc<dyn Install>,
        bus: Bus,
    ) -> Self {
        Self::assemble(config, fetcher, installer, bus)
    }

    fn assemble(
        config: Config,
        fetcher: Arc<dyn Fetch>,
        installer: Arc<dyn Install>,
        bus: Bus,
    ) -> Self {
        Self {
            fetcher,
            installer,
            settled: Arc::new(AtomicUsize::new(0)),
            poller: Poller::with_bus(config, bus.clone()),
            bus,
        }
    }

    /// Returns the event bus this loader publishes to.
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Number of loads that have settled so far (success or swallowed
    /// failure).
    pub fn settled_count(&self) -> usize {
        self.settled.load(Ordering::SeqCst)
    }

    /// Loads every component concurrently; resolves once all have settled.
    ///
    /// Recommended to be invoked before the page body is parsed, so
    /// templates are registered ahead of first use.
    pub async fn load_all(&self, components: &[&str]) {
        join_all(components.iter().map(|name| self.load_one(name))).await;
    }

    /// Waits until `target` loads have settled.
    ///
    /// Counter-gated: resolves through the poller once the settled counter
    /// reaches `target`, including loads settled by swallowed failures.
    pub async fn wait_loaded(&self, target: usize) {
        self.poller
            .wait_for_count("components-loaded", &self.settled, target)
            .await;
    }

    async fn load_one(&self, name: &str) {
        match self.fetch_and_install(name).await {
            Ok(()) => {
                self.bus
                    .publish(Event::new(EventKind::ComponentInstalled).with_target(name));
            }
            Err(err) => {
                // Best-effort: the failure is published, never propagated.
                self.bus.publish(
                    Event::new(EventKind::ComponentFailed)
                        .with_target(name)
                        .with_reason(err.to_string()),
                );
            }
        }
        self.settled.fetch_add(1, Ordering::SeqCst);
    }

    async fn fetch_and_install(&self, name: &str) -> Result<(), LoadError> {
        let template_path = format!("/components/templates/{name}.html");
        let script_path = format!("/components/{name}.js");

        let template = self.fetcher.fetch_text(&template_path).await?;
        self.installer
            .install(name, &template, &script_path)
            .await?;
        Ok(())
    }
}
