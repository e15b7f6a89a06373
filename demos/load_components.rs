//! # Example: load_components
//!
//! Demonstrates best-effort component loading: every named component is
//! fetched and installed concurrently, a missing component is logged and
//! swallowed, and `wait_loaded` resolves once all loads have settled.
//!
//! ## Run
//! ```bash
//! cargo run --example load_components --features logging
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use spanner::{
    ComponentLoader, Config, Fetch, Install, LoadError, LogWriter, Subscriber, SubscriberSet,
};

/// In-process stand-in for the page's resource fetch.
struct DemoFetcher {
    bodies: HashMap<String, String>,
}

#[async_trait]
impl Fetch for DemoFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, LoadError> {
        // Simulated network latency.
        tokio::time::sleep(Duration::from_millis(50)).await;
        self.bodies
            .get(path)
            .cloned()
            .ok_or_else(|| LoadError::Fetch {
                resource: path.to_string(),
                reason: "404 not found".to_string(),
            })
    }
}

/// In-process stand-in for template/script registration.
struct DemoInstaller;

#[async_trait]
impl Install for DemoInstaller {
    async fn install(
        &self,
        component: &str,
        template: &str,
        script_path: &str,
    ) -> Result<(), LoadError> {
        println!("[install] {component}: {} bytes, script {script_path}", template.len());
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let mut bodies = HashMap::new();
    for name in ["nav-bar", "side-bar"] {
        bodies.insert(
            format!("/components/templates/{name}.html"),
            format!("<template id=\"{name}-template\"></template>"),
        );
    }

    let loader = Arc::new(ComponentLoader::new(
        Config::default(),
        Arc::new(DemoFetcher { bodies }),
        Arc::new(DemoInstaller),
    ));
    let subs = SubscriberSet::new(vec![Arc::new(LogWriter) as Arc<dyn Subscriber>]);
    let worker = subs.listen(loader.bus());

    // "missing" has no template; its failure is logged and swallowed.
    let components = ["nav-bar", "side-bar", "missing"];
    let loading = Arc::clone(&loader);
    let load = tokio::spawn(async move {
        loading.load_all(&components).await;
    });

    loader.wait_loaded(components.len()).await;
    println!("[main] {} components settled", loader.settled_count());

    let _ = load.await;
    drop(loader);
    let _ = worker.await;
}
