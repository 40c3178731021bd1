//! Namespace loading and view-model expansion.
//!
//! This crate resolves:
//! - Raw namespace documents (JSON) into parsed schema trees
//! - Schema trees into template-ready view models
//! - `$ref` cross-references into navigable links

mod expand;
mod loader;

pub use expand::expand_namespace;
pub use loader::load_namespace;

use apidoc_core::{Availability, ContentProvider, NamespaceView, ResolveError, ViewNode};

/// Supplies channel annotations for namespaces.
pub trait AvailabilityProvider {
    fn availability(&self, namespace: &str) -> Option<Availability>;
}

/// Resolves namespace and symbol names into expanded view models.
///
/// Stateless apart from its collaborators: every call re-reads and
/// re-expands, leaving memoization to wrappers.
pub struct ApiResolver<'a> {
    content: &'a dyn ContentProvider,
    availability: Option<&'a dyn AvailabilityProvider>,
    root: String,
}

impl<'a> ApiResolver<'a> {
    pub fn new(content: &'a dyn ContentProvider) -> Self {
        Self {
            content,
            availability: None,
            root: "api".to_string(),
        }
    }

    /// Override the path prefix schema documents are read from.
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    /// Attach an availability collaborator.
    pub fn with_availability(mut self, provider: &'a dyn AvailabilityProvider) -> Self {
        self.availability = Some(provider);
        self
    }

    /// Load and expand a namespace.
    pub fn namespace(&self, name: &str) -> Result<NamespaceView, ResolveError> {
        let raw = load_namespace(self.content, &self.root, name)?;
        let availability = self.availability.and_then(|p| p.availability(name));
        Ok(expand_namespace(&raw, availability))
    }

    /// Look up one symbol in a namespace.
    ///
    /// Returns `Ok(None)` when the namespace exists but the symbol does
    /// not; a missing namespace is an error.
    pub fn get(&self, namespace: &str, symbol: &str) -> Result<Option<ViewNode>, ResolveError> {
        let view = self.namespace(namespace)?;
        Ok(view.get(symbol).cloned())
    }
}
