//! View-model types consumed by the template layer.
//!
//! The serialized JSON shape of these types is the downstream contract.
//! Templates index keys unconditionally, so conceptually-absent values are
//! explicit `null`s and absent collections are `[]`; omission is not the
//! same as null. Presentation-only markers (`last`, `isCallback`, `link`,
//! ...) appear only where they apply.

use serde::Serialize;

use crate::link::Link;

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Channel annotation for a namespace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Availability {
    /// Release channel name (e.g. `stable`, `beta`, `dev`).
    pub channel: String,
    /// First version the namespace appeared in, when known.
    pub version: Option<u64>,
}

/// A fully expanded, template-ready schema element.
///
/// One struct covers every node kind (type, method, event, property,
/// parameter, choice, array element) so the key-presence contract is
/// uniform across the whole tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewNode {
    /// Element name. Anonymous nodes (choice alternatives) have none.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Globally addressable anchor id, `"<kind>-<context>-<name>"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub description: Option<String>,
    pub availability: Option<Availability>,
    pub optional: Option<bool>,
    /// Name of the enclosing function/type/property, when any.
    #[serde(rename = "parentName", skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    /// Set (to true) only on the final element of an ordered sibling list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<bool>,
    /// Leaf classification (`string`, `integer`, `object`, `function`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simple_type: Option<String>,
    /// Cross-namespace link, populated only on ref nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
    /// Union alternatives, populated only on choices nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<ViewNode>>,
    /// Element view, populated only on array nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub array: Option<Box<ViewNode>>,
    /// True on parameters that are callbacks.
    #[serde(rename = "isCallback", skip_serializing_if = "is_false")]
    pub is_callback: bool,
    /// Full function view of a callback parameter.
    #[serde(rename = "asFunction", skip_serializing_if = "Option::is_none")]
    pub as_function: Option<Box<ViewNode>>,
    pub parameters: Vec<ViewNode>,
    pub returns: Option<Box<ViewNode>>,
    pub properties: Vec<ViewNode>,
    pub functions: Vec<ViewNode>,
    pub events: Vec<ViewNode>,
    /// True on declarative events.
    #[serde(rename = "supportsRules", skip_serializing_if = "is_false")]
    pub supports_rules: bool,
    /// Condition type links of a declarative event.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Link>,
    /// Action type links of a declarative event.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Link>,
}

/// The expanded view of one namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NamespaceView {
    pub name: String,
    pub description: Option<String>,
    pub availability: Option<Availability>,
    pub types: Vec<ViewNode>,
    pub functions: Vec<ViewNode>,
    pub events: Vec<ViewNode>,
    pub properties: Vec<ViewNode>,
}

impl NamespaceView {
    /// Look up a symbol among this namespace's functions, types, and
    /// events, in that order. A method and a type may share a name; the
    /// method wins. Namespace-level properties are not part of the symbol
    /// space.
    pub fn get(&self, symbol: &str) -> Option<&ViewNode> {
        self.functions
            .iter()
            .chain(self.types.iter())
            .chain(self.events.iter())
            .find(|node| node.name == symbol)
    }
}
