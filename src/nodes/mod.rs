//! Node system - core data structures, node models, and the graph host

// Core node system modules
pub mod convert;
pub mod engine;
pub mod error;
pub mod factory;
pub mod graph;
pub mod hooks;
pub mod interface;
pub mod node;
pub mod port;
pub mod value;

// Node implementations
pub mod data;
pub mod math;
pub mod output;

// Re-export core types
pub use graph::{Connection, NodeGraph};
pub use node::{Node, NodeId};
pub use port::{Port, PortId, PortType};
pub use value::{NumberKind, NumberValue};

// Re-export factory types
pub use factory::{NodeCategory, NodeFactory, NodeMetadata, NodeRegistry, PortDefinition};

// Re-export host types
pub use convert::ConverterRegistry;
pub use engine::GraphEngine;
pub use error::GraphError;
pub use hooks::GraphObserver;
pub use interface::{NodeModel, NodeState, PortSignal};
