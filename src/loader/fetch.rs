//! # Collaborator seams for the component loader.
//!
//! The real resource fetch and page registration live outside this crate;
//! the loader drives them through these two traits. Implementations are
//! shared as `Arc<dyn _>` handles.

use async_trait::async_trait;

use crate::error::LoadError;

/// Fetches the raw text body of a resource.
///
/// The contract mirrors a raw-content request: a non-OK response is a
/// [`LoadError::Fetch`], not an empty body.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Returns the text body at `path`.
    async fn fetch_text(&self, path: &str) -> Result<String, LoadError>;
}

/// Registers a fetched component with the page.
///
/// Receives the fetched template content and the path of the component's
/// companion script; how both are attached (template element, script tag)
/// is the implementation's business.
#[async_trait]
pub trait Install: Send + Sync {
    /// Registers `component`'s template and script reference.
    async fn install(
        &self,
        component: &str,
        template: &str,
        script_path: &str,
    ) -> Result<(), LoadError>;
}
