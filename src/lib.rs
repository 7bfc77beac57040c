//! calcgraph - reactive dataflow core for a node-based calculator
//!
//! This library provides the computation half of a node-graph calculator:
//! numeric values, arithmetic operation nodes with validation state, source
//! and display nodes, kind conversions, and a graph host that routes values
//! between connected ports with synchronous push propagation. Canvas
//! rendering, widgets, and window chrome are left to the embedding UI, which
//! consumes this crate through [`GraphEngine`] and the registry metadata.

pub mod nodes;

pub use nodes::{
    Connection, ConverterRegistry, GraphEngine, GraphError, GraphObserver, Node, NodeCategory,
    NodeFactory, NodeGraph, NodeId, NodeMetadata, NodeModel, NodeRegistry, NodeState, NumberKind,
    NumberValue, Port, PortDefinition, PortId, PortSignal, PortType,
};
