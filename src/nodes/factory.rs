//! Node factory system with self-registration and static metadata
//!
//! Every node type ships a [`NodeFactory`] implementation; the registry maps
//! the type name to the factory's metadata provider and model constructor.
//! The default registry is built exactly once behind a `Lazy` and covers the
//! built-in calculator nodes; hosts embedding custom node types register
//! them on their own registry instance.

use super::interface::NodeModel;
use super::node::Node;
use super::value::NumberKind;
use log::debug;
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Hierarchical category system for organizing nodes in menus and trees
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeCategory {
    path: Vec<String>,
}

impl NodeCategory {
    /// Create a new category from path components
    pub fn new(path: &[&str]) -> Self {
        Self {
            path: path.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Get the full path as a slice
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Get the category name (last component)
    pub fn name(&self) -> &str {
        self.path.last().map(|s| s.as_str()).unwrap_or("")
    }

    /// Get display string for UI
    pub fn display_string(&self) -> String {
        self.path.join(" > ")
    }

    /// Standard category for arithmetic operations
    pub fn math() -> Self {
        Self::new(&["Math"])
    }

    /// Standard category for value sources
    pub fn data() -> Self {
        Self::new(&["Data"])
    }

    /// Standard category for sinks and displays
    pub fn output() -> Self {
        Self::new(&["Output"])
    }
}

/// Port definition used when instantiating a node from metadata
#[derive(Debug, Clone)]
pub struct PortDefinition {
    pub name: String,
    pub kind: NumberKind,
}

impl PortDefinition {
    /// Creates a port definition
    pub fn new(name: &str, kind: NumberKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }
}

/// Static metadata for a node type - the single source of truth for its
/// identity, categorization, and port layout
#[derive(Debug, Clone)]
pub struct NodeMetadata {
    pub type_name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub category: NodeCategory,
    pub inputs: Vec<PortDefinition>,
    pub outputs: Vec<PortDefinition>,
}

impl NodeMetadata {
    /// Create node metadata with no ports; add them with the builder methods
    pub fn new(
        type_name: &'static str,
        display_name: &'static str,
        category: NodeCategory,
        description: &'static str,
    ) -> Self {
        Self {
            type_name,
            display_name,
            description,
            category,
            inputs: vec![],
            outputs: vec![],
        }
    }

    pub fn with_inputs(mut self, inputs: Vec<PortDefinition>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_outputs(mut self, outputs: Vec<PortDefinition>) -> Self {
        self.outputs = outputs;
        self
    }
}

/// Factory trait implemented by every registrable node type
pub trait NodeFactory {
    /// Get the node type's static metadata
    fn metadata() -> NodeMetadata
    where
        Self: Sized;

    /// Create a fresh model instance for one placed node
    fn create_model() -> Box<dyn NodeModel>
    where
        Self: Sized;
}

type ModelCtor = fn() -> Box<dyn NodeModel>;
type MetadataProvider = fn() -> NodeMetadata;

/// Registry for managing node factories
pub struct NodeRegistry {
    ctors: BTreeMap<String, ModelCtor>,
    metadata_providers: BTreeMap<String, MetadataProvider>,
    categories: HashMap<NodeCategory, Vec<String>>,
}

impl NodeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            ctors: BTreeMap::new(),
            metadata_providers: BTreeMap::new(),
            categories: HashMap::new(),
        }
    }

    /// Register a node factory
    pub fn register<T: NodeFactory + 'static>(&mut self) {
        let metadata = T::metadata();
        let type_name = metadata.type_name.to_string();
        debug!("registering node type {}", type_name);

        self.ctors.insert(type_name.clone(), T::create_model);
        self.metadata_providers
            .insert(type_name.clone(), T::metadata);
        self.categories
            .entry(metadata.category.clone())
            .or_default()
            .push(type_name);
    }

    /// Create an arena record and model for a node type; the record's id is
    /// assigned when it is added to a graph
    pub fn create_node(&self, type_name: &str) -> Option<(Node, Box<dyn NodeModel>)> {
        let ctor = self.ctors.get(type_name)?;
        let metadata = self.metadata_providers.get(type_name)?();

        let mut node = Node::new(0, metadata.type_name, metadata.display_name);
        for input in &metadata.inputs {
            node.add_input(&input.name, input.kind);
        }
        for output in &metadata.outputs {
            node.add_output(&output.name, output.kind);
        }

        Some((node, ctor()))
    }

    /// Get metadata for a node type without creating the node
    pub fn metadata(&self, type_name: &str) -> Option<NodeMetadata> {
        self.metadata_providers.get(type_name).map(|p| p())
    }

    /// Get all available node types
    pub fn node_types(&self) -> Vec<&str> {
        self.ctors.keys().map(|s| s.as_str()).collect()
    }

    /// Get nodes in a specific category
    pub fn nodes_in_category(&self, category: &NodeCategory) -> Vec<&str> {
        self.categories
            .get(category)
            .map(|nodes| nodes.iter().map(|s| s.as_str()).collect())
            .unwrap_or_default()
    }

    /// Get all categories
    pub fn categories(&self) -> Vec<&NodeCategory> {
        self.categories.keys().collect()
    }

    /// The process-wide registry of built-in node types, built once
    pub fn shared() -> Arc<NodeRegistry> {
        static SHARED: Lazy<Arc<NodeRegistry>> = Lazy::new(|| Arc::new(NodeRegistry::default()));
        Arc::clone(&SHARED)
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        registry.register::<crate::nodes::math::add::AdditionNodeFactory>();
        registry.register::<crate::nodes::math::subtract::SubtractionNodeFactory>();
        registry.register::<crate::nodes::math::multiply::MultiplicationNodeFactory>();
        registry.register::<crate::nodes::math::divide::DivisionNodeFactory>();
        registry.register::<crate::nodes::math::modulo::ModuloNodeFactory>();

        registry.register::<crate::nodes::data::number_source::NumberSourceNodeFactory>();

        registry.register::<crate::nodes::output::number_display::NumberDisplayNodeFactory>();

        registry
    }
}
