//! Cross-reference links between namespaces.
//!
//! Shared by the resolver (schema `$ref` fields) and the renderer
//! (`$(ref:...)` directives): both turn a possibly-unqualified reference
//! string into a fully qualified link.

use serde::Serialize;

/// A `namespace.Symbol` reference, possibly unqualified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    pub namespace: Option<String>,
    pub name: String,
}

impl QualifiedName {
    /// Split a reference on its last `.`: `tester.TypeA` targets `TypeA`
    /// in `tester`, `app.window.AppWindow` targets `AppWindow` in
    /// `app.window`, and a bare `TypeA` carries no namespace.
    pub fn parse(text: &str) -> QualifiedName {
        match text.rsplit_once('.') {
            Some((namespace, name)) => QualifiedName {
                namespace: Some(namespace.to_string()),
                name: name.to_string(),
            },
            None => QualifiedName {
                namespace: None,
                name: text.to_string(),
            },
        }
    }

    /// Fully qualified form, defaulting the namespace component.
    pub fn qualify(&self, default_namespace: &str) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}.{}", namespace, self.name),
            None => format!("{}.{}", default_namespace, self.name),
        }
    }
}

/// A resolved reference link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// The reference text exactly as written in the schema.
    pub name: String,
    /// Fully qualified `namespace.Symbol` target.
    #[serde(rename = "ref")]
    pub ref_: String,
    /// Display text; defaults to `name`.
    pub text: String,
}

/// Build the link for a reference declared inside `default_namespace`.
pub fn link_for(ref_text: &str, default_namespace: &str) -> Link {
    let qualified = QualifiedName::parse(ref_text).qualify(default_namespace);
    Link {
        name: ref_text.to_string(),
        ref_: qualified,
        text: ref_text.to_string(),
    }
}

/// Builds documentation URLs for fully qualified symbols.
///
/// The URL scheme belongs to the serving layer; this crate only consumes
/// the resulting href strings.
pub trait UrlBuilder {
    /// The href for `namespace.Symbol`, or `None` when the symbol is
    /// unknown to this builder.
    fn build_href(&self, qualified: &str) -> Option<String>;
}
