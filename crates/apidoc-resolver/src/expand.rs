//! Schema-to-view-model expansion.
//!
//! Expands each raw schema node into a fully annotated view node by:
//! 1. Classifying the node (ref, choices, array, object, function, simple)
//! 2. Assigning stable anchor ids and `last` markers
//! 3. Linking `$ref` targets instead of inlining them
//! 4. Dropping `nodoc` members and raw constraint fields

use apidoc_core::{
    classify, link_for, Availability, Namespace, NamespaceView, SchemaNode, Variant, ViewNode,
};
use indexmap::IndexMap;

/// Expand a parsed namespace into its view model.
pub fn expand_namespace(raw: &Namespace, availability: Option<Availability>) -> NamespaceView {
    let expander = Expander::new(&raw.namespace);
    expander.expand(raw, availability)
}

/// Anchor id prefixes, one per node context.
#[derive(Debug, Clone, Copy)]
enum IdKind {
    Type,
    Method,
    Event,
    Property,
}

impl IdKind {
    fn prefix(self) -> &'static str {
        match self {
            IdKind::Type => "type",
            IdKind::Method => "method",
            IdKind::Event => "event",
            IdKind::Property => "property",
        }
    }
}

/// `"<prefix>-<parent>-<name>"`, with the parent segment omitted for
/// top-level nodes. Anonymous nodes are not addressable and get no id.
fn make_id(kind: IdKind, parent: Option<&str>, name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    Some(match parent {
        Some(parent) => format!("{}-{}-{}", kind.prefix(), parent, name),
        None => format!("{}-{}", kind.prefix(), name),
    })
}

/// Mark the final element of an ordered sibling list.
fn mark_last(views: &mut [ViewNode]) {
    if let Some(last) = views.last_mut() {
        last.last = Some(true);
    }
}

fn member_name(node: &SchemaNode) -> String {
    node.name.clone().unwrap_or_default()
}

/// Type definitions carry `id` instead of `name`.
fn type_name(node: &SchemaNode) -> String {
    node.id.clone().or_else(|| node.name.clone()).unwrap_or_default()
}

struct Expander<'a> {
    /// Declaring namespace, used to qualify unqualified refs.
    namespace: &'a str,
}

impl<'a> Expander<'a> {
    fn new(namespace: &'a str) -> Self {
        Self { namespace }
    }

    fn expand(&self, raw: &Namespace, availability: Option<Availability>) -> NamespaceView {
        NamespaceView {
            name: raw.namespace.clone(),
            description: raw.description.clone(),
            availability,
            types: self.expand_types(&raw.types),
            functions: self.expand_functions(&raw.functions, None),
            events: self.expand_events(&raw.events, None),
            properties: self.expand_properties(&raw.properties, None),
        }
    }

    /// The recursive core: one raw node to one view node.
    fn expand_node(
        &self,
        node: &SchemaNode,
        name: &str,
        kind: IdKind,
        parent: Option<&str>,
    ) -> ViewNode {
        // Children of an anonymous node (a choice alternative) keep the
        // enclosing node as their context.
        let context = if name.is_empty() {
            parent.unwrap_or_default()
        } else {
            name
        };

        let mut view = ViewNode {
            name: name.to_string(),
            id: make_id(kind, parent, name),
            description: node.description.clone(),
            optional: node.optional,
            parent_name: parent.map(str::to_string),
            ..ViewNode::default()
        };

        match classify(node) {
            Variant::Ref(target) => {
                view.link = Some(link_for(target, self.namespace));
            }
            Variant::Choices(choices) => {
                view.choices = Some(self.expand_choices(choices, context));
            }
            Variant::Array(items) => {
                view.array = Some(Box::new(self.expand_array_element(items, context)));
            }
            Variant::Object => {
                view.simple_type = Some("object".to_string());
                view.properties = self.expand_properties(&node.properties, Some(context));
                view.functions = self.expand_functions(&node.functions, Some(context));
                view.events = self.expand_events(&node.events, Some(context));
            }
            Variant::Function => {
                view.simple_type = Some("function".to_string());
                view.parameters = self.expand_parameters(&node.parameters, context);
                view.returns = self.expand_returns(node.returns.as_deref(), context);
            }
            Variant::Simple(simple) => {
                view.simple_type = Some(simple.to_string());
            }
        }

        view
    }

    fn expand_types(&self, types: &[SchemaNode]) -> Vec<ViewNode> {
        let mut views: Vec<ViewNode> = types
            .iter()
            .filter(|node| !node.nodoc)
            .map(|node| {
                let name = type_name(node);
                self.expand_node(node, &name, IdKind::Type, None)
            })
            .collect();
        mark_last(&mut views);
        views
    }

    fn expand_functions(&self, functions: &[SchemaNode], parent: Option<&str>) -> Vec<ViewNode> {
        let mut views: Vec<ViewNode> = functions
            .iter()
            .filter(|node| !node.nodoc)
            .map(|node| {
                let name = member_name(node);
                self.expand_node(node, &name, IdKind::Method, parent)
            })
            .collect();
        mark_last(&mut views);
        views
    }

    fn expand_events(&self, events: &[SchemaNode], parent: Option<&str>) -> Vec<ViewNode> {
        let mut views: Vec<ViewNode> = events
            .iter()
            .filter(|node| !node.nodoc)
            .map(|node| {
                let name = member_name(node);
                let mut view = self.expand_node(node, &name, IdKind::Event, parent);
                if let Some(options) = &node.options {
                    if options.supports_rules {
                        view.supports_rules = true;
                        view.conditions = options
                            .conditions
                            .iter()
                            .map(|c| link_for(c, self.namespace))
                            .collect();
                        view.actions = options
                            .actions
                            .iter()
                            .map(|a| link_for(a, self.namespace))
                            .collect();
                    }
                }
                view
            })
            .collect();
        mark_last(&mut views);
        views
    }

    /// Expand an object's properties in declaration order, excluding
    /// `nodoc` members.
    fn expand_properties(
        &self,
        properties: &IndexMap<String, SchemaNode>,
        parent: Option<&str>,
    ) -> Vec<ViewNode> {
        let mut views: Vec<ViewNode> = properties
            .iter()
            .filter(|(_, node)| !node.nodoc)
            .map(|(name, node)| self.expand_node(node, name, IdKind::Property, parent))
            .collect();
        mark_last(&mut views);
        views
    }

    /// Expand a function's parameter list.
    ///
    /// A parameter that is itself a function is a callback: the flattened
    /// node keeps only the classification (`isCallback`, `simple_type`),
    /// and the full schema moves onto its `asFunction` view.
    fn expand_parameters(&self, parameters: &[SchemaNode], parent: &str) -> Vec<ViewNode> {
        let mut views: Vec<ViewNode> = parameters
            .iter()
            .filter(|node| !node.nodoc)
            .map(|node| {
                let name = member_name(node);
                let mut view = self.expand_node(node, &name, IdKind::Property, Some(parent));
                if matches!(classify(node), Variant::Function) {
                    view.is_callback = true;
                    view.as_function =
                        Some(Box::new(self.expand_node(node, &name, IdKind::Method, Some(parent))));
                    view.parameters = Vec::new();
                    view.returns = None;
                }
                view
            })
            .collect();
        mark_last(&mut views);
        views
    }

    /// Expand union alternatives in declaration order. Alternatives are
    /// anonymous; only the final one is marked `last`.
    fn expand_choices(&self, choices: &[SchemaNode], parent: &str) -> Vec<ViewNode> {
        let mut views: Vec<ViewNode> = choices
            .iter()
            .map(|node| self.expand_node(node, "", IdKind::Property, Some(parent)))
            .collect();
        mark_last(&mut views);
        views
    }

    /// Expand the element schema of an array declared by `parent`.
    ///
    /// Anonymous element types take the synthetic name `<parent>Type`
    /// (an array property `strings` yields element `stringsType` with id
    /// `type-strings-stringsType`).
    fn expand_array_element(&self, items: &SchemaNode, parent: &str) -> ViewNode {
        let name = format!("{}Type", parent);
        self.expand_node(items, &name, IdKind::Type, Some(parent))
    }

    fn expand_returns(&self, returns: Option<&SchemaNode>, parent: &str) -> Option<Box<ViewNode>> {
        returns.map(|node| {
            let name = node.name.clone().unwrap_or_else(|| "returns".to_string());
            Box::new(self.expand_node(node, &name, IdKind::Property, Some(parent)))
        })
    }
}
