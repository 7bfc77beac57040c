//! Error types for graph host operations
//!
//! These cover host-API misuse only. Computation failures (missing inputs,
//! division by zero, unparseable source text) never surface here; they stay
//! inside node validation state as described in the node modules.

use super::node::NodeId;
use super::port::PortId;
use super::value::NumberKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("unknown node type: {0}")]
    UnknownNodeType(String),
    #[error("node {0} does not exist")]
    UnknownNode(NodeId),
    #[error("node {node} has no {direction} port {port}")]
    UnknownPort {
        node: NodeId,
        port: PortId,
        direction: &'static str,
    },
    #[error("cannot connect a node to itself")]
    SelfConnection,
    #[error("input port {port} of node {node} is already connected")]
    InputOccupied { node: NodeId, port: PortId },
    #[error("connection would create a cycle")]
    Cycle,
    #[error("no conversion from {from} to {to}")]
    KindMismatch { from: NumberKind, to: NumberKind },
    #[error("connection does not exist")]
    UnknownConnection,
    #[error("node {0} is not an editable number source")]
    NotASource(NodeId),
    #[error("node {0} is not a number display")]
    NotADisplay(NodeId),
}
