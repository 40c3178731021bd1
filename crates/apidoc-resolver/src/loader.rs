//! Raw namespace document loading.

use apidoc_core::{ContentError, ContentProvider, Namespace, ResolveError};

/// Path of the schema document for a namespace.
fn schema_path(root: &str, name: &str) -> String {
    format!("{}/{}.json", root, name)
}

/// Fetch and parse the schema document for `name`.
///
/// A document holds a JSON array of namespace objects; the entry whose
/// `namespace` field matches is returned. A missing document and a
/// missing entry are both reported as `NamespaceNotFound`.
pub fn load_namespace(
    content: &dyn ContentProvider,
    root: &str,
    name: &str,
) -> Result<Namespace, ResolveError> {
    let path = schema_path(root, name);
    let bytes = match content.read(&path) {
        Ok(bytes) => bytes,
        Err(ContentError::NotFound { .. }) => {
            return Err(ResolveError::NamespaceNotFound {
                name: name.to_string(),
            });
        }
        Err(err) => return Err(err.into()),
    };

    let namespaces: Vec<Namespace> =
        serde_json::from_slice(&bytes).map_err(|source| ResolveError::InvalidSchema {
            namespace: name.to_string(),
            source,
        })?;

    namespaces
        .into_iter()
        .find(|ns| ns.namespace == name)
        .ok_or_else(|| ResolveError::NamespaceNotFound {
            name: name.to_string(),
        })
}
