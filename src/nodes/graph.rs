//! Node graph data structures and operations
//!
//! The graph is the topology half of the host: an arena owning node records
//! under graph-local sequential ids, plus the connection list. Value routing
//! and per-node model state live in [`engine`](super::engine).

use super::error::GraphError;
use super::node::{Node, NodeId};
use super::port::PortId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents a connection between two ports on different nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub from_node: NodeId,
    pub from_port: PortId,
    pub to_node: NodeId,
    pub to_port: PortId,
}

impl Connection {
    /// Creates a new connection
    pub fn new(from_node: NodeId, from_port: PortId, to_node: NodeId, to_port: PortId) -> Self {
        Self {
            from_node,
            from_port,
            to_node,
            to_port,
        }
    }
}

/// A graph containing nodes and their connections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeGraph {
    pub nodes: HashMap<NodeId, Node>,
    pub connections: Vec<Connection>,
    next_node_id: NodeId,
}

impl NodeGraph {
    /// Creates a new empty node graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to the graph and returns its ID
    pub fn add_node(&mut self, mut node: Node) -> NodeId {
        let id = self.next_node_id;
        node.id = id;
        self.nodes.insert(id, node);
        self.next_node_id += 1;
        id
    }

    /// Removes a node and all its connections
    pub fn remove_node(&mut self, node_id: NodeId) -> Option<Node> {
        self.connections
            .retain(|conn| conn.from_node != node_id && conn.to_node != node_id);
        self.nodes.remove(&node_id)
    }

    /// Adds a connection between two ports
    ///
    /// Rejects self-connections, endpoints that do not exist, occupied input
    /// ports (an input slot holds at most one upstream), and connections
    /// that would close a cycle: push propagation requires a DAG.
    pub fn add_connection(&mut self, connection: Connection) -> Result<(), GraphError> {
        if connection.from_node == connection.to_node {
            return Err(GraphError::SelfConnection);
        }

        let from = self
            .nodes
            .get(&connection.from_node)
            .ok_or(GraphError::UnknownNode(connection.from_node))?;
        let to = self
            .nodes
            .get(&connection.to_node)
            .ok_or(GraphError::UnknownNode(connection.to_node))?;

        if connection.from_port >= from.outputs.len() {
            return Err(GraphError::UnknownPort {
                node: connection.from_node,
                port: connection.from_port,
                direction: "output",
            });
        }
        if connection.to_port >= to.inputs.len() {
            return Err(GraphError::UnknownPort {
                node: connection.to_node,
                port: connection.to_port,
                direction: "input",
            });
        }

        if self
            .connections
            .iter()
            .any(|c| c.to_node == connection.to_node && c.to_port == connection.to_port)
        {
            return Err(GraphError::InputOccupied {
                node: connection.to_node,
                port: connection.to_port,
            });
        }

        if self.reaches(connection.to_node, connection.from_node) {
            return Err(GraphError::Cycle);
        }

        self.connections.push(connection);
        Ok(())
    }

    /// Removes the connection matching all four endpoints
    pub fn remove_connection(
        &mut self,
        from_node: NodeId,
        from_port: PortId,
        to_node: NodeId,
        to_port: PortId,
    ) -> Option<Connection> {
        let index = self.connections.iter().position(|c| {
            c.from_node == from_node
                && c.from_port == from_port
                && c.to_node == to_node
                && c.to_port == to_port
        })?;
        Some(self.connections.remove(index))
    }

    /// All connections leaving the given output port
    pub fn connections_from(&self, node_id: NodeId, port: PortId) -> Vec<Connection> {
        self.connections
            .iter()
            .filter(|c| c.from_node == node_id && c.from_port == port)
            .cloned()
            .collect()
    }

    /// The connection feeding the given input port, if any
    pub fn connection_to(&self, node_id: NodeId, port: PortId) -> Option<&Connection> {
        self.connections
            .iter()
            .find(|c| c.to_node == node_id && c.to_port == port)
    }

    /// Whether `target` is reachable from `start` along connection direction
    fn reaches(&self, start: NodeId, target: NodeId) -> bool {
        let mut stack = vec![start];
        let mut visited = std::collections::HashSet::new();
        while let Some(node) = stack.pop() {
            if node == target {
                return true;
            }
            if visited.insert(node) {
                for conn in &self.connections {
                    if conn.from_node == node {
                        stack.push(conn.to_node);
                    }
                }
            }
        }
        false
    }
}
