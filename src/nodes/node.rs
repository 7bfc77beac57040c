//! Node records owned by the graph arena
//!
//! A `Node` is the topology-side record of a placed node: identity, type
//! name, and typed port lists. The behavior lives in the matching
//! [`NodeModel`](super::interface::NodeModel) owned by the engine; visual
//! concerns (position, size, color) belong to whatever UI embeds the graph.

use super::port::{Port, PortType};
use super::value::NumberKind;
use serde::{Deserialize, Serialize};

/// Unique identifier for a node, assigned by the owning graph
pub type NodeId = usize;

/// Core node structure representing one placed node in the graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Registry type name this node was created from
    pub type_name: String,
    /// User-facing title, editable without affecting dispatch
    pub title: String,
    pub inputs: Vec<Port>,
    pub outputs: Vec<Port>,
}

impl Node {
    /// Creates a new node with the specified type and title
    pub fn new(id: NodeId, type_name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            type_name: type_name.into(),
            title: title.into(),
            inputs: vec![],
            outputs: vec![],
        }
    }

    /// Adds an input port to the node
    pub fn add_input(&mut self, name: impl Into<String>, kind: NumberKind) -> &mut Self {
        let port_id = self.inputs.len();
        self.inputs
            .push(Port::new(port_id, name, PortType::Input, kind));
        self
    }

    /// Adds an output port to the node
    pub fn add_output(&mut self, name: impl Into<String>, kind: NumberKind) -> &mut Self {
        let port_id = self.outputs.len();
        self.outputs
            .push(Port::new(port_id, name, PortType::Output, kind));
        self
    }

    /// Declared kind of an input port, if the port exists
    pub fn input_kind(&self, port: usize) -> Option<NumberKind> {
        self.inputs.get(port).map(|p| p.kind)
    }

    /// Declared kind of an output port, if the port exists
    pub fn output_kind(&self, port: usize) -> Option<NumberKind> {
        self.outputs.get(port).map(|p| p.kind)
    }
}
