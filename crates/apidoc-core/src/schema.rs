//! Raw JSON API schema types.
//!
//! These mirror the wire format of per-namespace schema documents. Field
//! names are load-bearing (`$ref`, `nodoc`, `minItems`, ...) and must be
//! parsed byte-for-byte compatibly.

use indexmap::IndexMap;
use serde::Deserialize;

/// One namespace entry of a schema document.
///
/// A schema document is a JSON array of these; each entry groups the
/// types, functions, events, and properties of one logical API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Namespace {
    /// Namespace name (e.g. `tester`).
    pub namespace: String,
    pub description: Option<String>,
    /// Declared type definitions.
    #[serde(default)]
    pub types: Vec<SchemaNode>,
    /// Declared methods.
    #[serde(default)]
    pub functions: Vec<SchemaNode>,
    /// Declared events.
    #[serde(default)]
    pub events: Vec<SchemaNode>,
    /// Namespace-level properties, in declaration order.
    #[serde(default)]
    pub properties: IndexMap<String, SchemaNode>,
}

/// One declared schema element: a parameter, property, return value, type
/// definition, function, or event.
///
/// The wire format is a single polymorphic object whose populated fields
/// imply its variant; [`classify`] performs that dispatch.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SchemaNode {
    /// Element name (functions, events, parameters).
    pub name: Option<String>,
    /// Type definitions carry `id` instead of `name`.
    pub id: Option<String>,
    /// Type discriminator (`string`, `object`, `array`, `function`, ...).
    #[serde(rename = "type")]
    pub type_: Option<String>,
    /// Reference to another type, optionally namespace-qualified.
    #[serde(rename = "$ref")]
    pub ref_: Option<String>,
    pub description: Option<String>,
    /// Tri-state: absent, explicitly false, or explicitly true.
    pub optional: Option<bool>,
    /// Excluded from generated documentation entirely.
    #[serde(default)]
    pub nodoc: bool,
    /// Object properties, in declaration order.
    #[serde(default)]
    pub properties: IndexMap<String, SchemaNode>,
    /// Array element schema.
    pub items: Option<Box<SchemaNode>>,
    /// Union alternatives.
    pub choices: Option<Vec<SchemaNode>>,
    /// Function parameters.
    #[serde(default)]
    pub parameters: Vec<SchemaNode>,
    /// Function return value schema.
    pub returns: Option<Box<SchemaNode>>,
    /// Methods declared on a type definition.
    #[serde(default)]
    pub functions: Vec<SchemaNode>,
    /// Events declared on a type definition.
    #[serde(default)]
    pub events: Vec<SchemaNode>,
    /// Declarative event options.
    pub options: Option<EventOptions>,
    /// Numeric lower bound. Parsed for wire compatibility; never surfaced
    /// in the view model.
    pub minimum: Option<f64>,
    /// Array length lower bound. Parsed for wire compatibility; never
    /// surfaced in the view model.
    #[serde(rename = "minItems")]
    pub min_items: Option<u64>,
}

/// Options block of a declarative event.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventOptions {
    /// Whether the event supports declarative rules.
    #[serde(default)]
    pub supports_rules: bool,
    /// Condition type refs usable in rules.
    #[serde(default)]
    pub conditions: Vec<String>,
    /// Action type refs usable in rules.
    #[serde(default)]
    pub actions: Vec<String>,
}

/// The closed set of schema node variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Variant<'a> {
    /// Reference to another type.
    Ref(&'a str),
    /// Union of alternative schemas.
    Choices(&'a [SchemaNode]),
    /// Array with an element schema.
    Array(&'a SchemaNode),
    /// Object with named properties.
    Object,
    /// Function or callback.
    Function,
    /// Leaf type, classified by its literal `type` string.
    Simple(&'a str),
}

/// Classify a raw node into its variant.
///
/// Dispatch is priority-ordered: `$ref` wins over everything, then
/// `choices`, `array`, `object` (an explicit `type` or a non-empty
/// properties map), `function`. Anything else is a simple type,
/// defaulting to `any` when no `type` is declared.
pub fn classify(node: &SchemaNode) -> Variant<'_> {
    if let Some(target) = node.ref_.as_deref() {
        return Variant::Ref(target);
    }
    if let Some(choices) = node.choices.as_deref() {
        return Variant::Choices(choices);
    }
    if node.type_.as_deref() == Some("choices") {
        return Variant::Choices(&[]);
    }
    if node.type_.as_deref() == Some("array") {
        return match node.items.as_deref() {
            Some(items) => Variant::Array(items),
            // An array with no element schema has nothing to expand.
            None => Variant::Simple("array"),
        };
    }
    if node.type_.as_deref() == Some("object") || !node.properties.is_empty() {
        return Variant::Object;
    }
    if node.type_.as_deref() == Some("function") {
        return Variant::Function;
    }
    match node.type_.as_deref() {
        Some(simple) => Variant::Simple(simple),
        None => Variant::Simple("any"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(type_: &str) -> SchemaNode {
        SchemaNode {
            type_: Some(type_.to_string()),
            ..SchemaNode::default()
        }
    }

    #[test]
    fn test_classify_ref_wins_over_everything() {
        let node = SchemaNode {
            ref_: Some("TypeA".to_string()),
            type_: Some("object".to_string()),
            choices: Some(vec![typed("string")]),
            ..SchemaNode::default()
        };

        assert!(matches!(classify(&node), Variant::Ref("TypeA")));
    }

    #[test]
    fn test_classify_choices_before_array() {
        let node = SchemaNode {
            type_: Some("array".to_string()),
            choices: Some(vec![typed("string"), typed("integer")]),
            ..SchemaNode::default()
        };

        match classify(&node) {
            Variant::Choices(choices) => assert_eq!(choices.len(), 2),
            other => panic!("Expected choices, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_array_without_items_degrades_to_simple() {
        assert!(matches!(classify(&typed("array")), Variant::Simple("array")));
    }

    #[test]
    fn test_classify_object_from_properties_alone() {
        let mut node = SchemaNode::default();
        node.properties.insert("a".to_string(), typed("string"));

        assert!(matches!(classify(&node), Variant::Object));
    }

    #[test]
    fn test_classify_simple_and_default() {
        assert!(matches!(classify(&typed("string")), Variant::Simple("string")));
        assert!(matches!(classify(&typed("integer")), Variant::Simple("integer")));
        assert!(matches!(classify(&SchemaNode::default()), Variant::Simple("any")));
    }

    #[test]
    fn test_classify_function() {
        assert!(matches!(classify(&typed("function")), Variant::Function));
    }

    #[test]
    fn test_parse_namespace_document() {
        let raw = r#"
        {
            "namespace": "tester",
            "description": "a test api",
            "types": [{"id": "TypeA", "type": "object"}],
            "functions": [{"name": "get", "type": "function", "parameters": []}],
            "properties": {"version": {"type": "string"}}
        }"#;

        let ns: Namespace = serde_json::from_str(raw).unwrap();
        assert_eq!(ns.namespace, "tester");
        assert_eq!(ns.types[0].id.as_deref(), Some("TypeA"));
        assert_eq!(ns.functions[0].name.as_deref(), Some("get"));
        assert!(ns.events.is_empty());
        assert!(ns.properties.contains_key("version"));
    }

    #[test]
    fn test_parse_preserves_property_order() {
        let raw = r#"
        {
            "type": "object",
            "properties": {
                "zebra": {"type": "string"},
                "apple": {"type": "string"},
                "mango": {"type": "string"}
            }
        }"#;

        let node: SchemaNode = serde_json::from_str(raw).unwrap();
        let names: Vec<&str> = node.properties.keys().map(String::as_str).collect();
        assert_eq!(names, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_parse_wire_field_names() {
        let raw = r#"
        {
            "name": "b",
            "type": "array",
            "optional": true,
            "nodoc": true,
            "items": {"$ref": "other.TypeB"},
            "minItems": 1,
            "minimum": 0.5
        }"#;

        let node: SchemaNode = serde_json::from_str(raw).unwrap();
        assert!(node.nodoc);
        assert_eq!(node.optional, Some(true));
        assert_eq!(node.min_items, Some(1));
        assert_eq!(node.minimum, Some(0.5));
        let items = node.items.as_deref().unwrap();
        assert_eq!(items.ref_.as_deref(), Some("other.TypeB"));
    }

    #[test]
    fn test_optional_is_tri_state() {
        let absent: SchemaNode = serde_json::from_str(r#"{"type": "string"}"#).unwrap();
        let off: SchemaNode =
            serde_json::from_str(r#"{"type": "string", "optional": false}"#).unwrap();

        assert_eq!(absent.optional, None);
        assert_eq!(off.optional, Some(false));
    }

    #[test]
    fn test_parse_event_options() {
        let raw = r#"
        {
            "name": "onRule",
            "type": "function",
            "options": {
                "supportsRules": true,
                "conditions": ["ns.Condition"],
                "actions": ["Action"]
            }
        }"#;

        let node: SchemaNode = serde_json::from_str(raw).unwrap();
        let options = node.options.unwrap();
        assert!(options.supports_rules);
        assert_eq!(options.conditions, ["ns.Condition"]);
        assert_eq!(options.actions, ["Action"]);
    }
}
