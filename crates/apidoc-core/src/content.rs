//! Content resolution boundary.
//!
//! The pipeline reads named resources (schema documents, intro documents)
//! through this trait. Real file systems, caching layers, and patch
//! overlays live behind it, outside this workspace; the pipeline only
//! needs "read one named resource, get bytes or not-found".

use std::collections::HashMap;

use crate::errors::ContentError;

/// Read one named resource.
pub trait ContentProvider {
    fn read(&self, path: &str) -> Result<Vec<u8>, ContentError>;
}

/// In-memory content store, the canned file system used by tests.
#[derive(Debug, Default)]
pub struct MemoryContent {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a resource.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.entries.insert(path.into(), content.into());
    }
}

impl ContentProvider for MemoryContent {
    fn read(&self, path: &str) -> Result<Vec<u8>, ContentError> {
        self.entries.get(path).cloned().ok_or_else(|| ContentError::NotFound {
            path: path.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_existing_resource() {
        let mut content = MemoryContent::new();
        content.insert("api/tester.json", "[]");

        assert_eq!(content.read("api/tester.json").unwrap(), b"[]");
    }

    #[test]
    fn test_read_missing_resource() {
        let content = MemoryContent::new();
        let result = content.read("api/missing.json");

        assert!(matches!(result, Err(ContentError::NotFound { .. })));
    }

    #[test]
    fn test_insert_replaces() {
        let mut content = MemoryContent::new();
        content.insert("doc.html", "old");
        content.insert("doc.html", "new");

        assert_eq!(content.read("doc.html").unwrap(), b"new");
    }
}
