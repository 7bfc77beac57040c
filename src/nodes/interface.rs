//! Node model interface to the graph host
//!
//! A node model is the behavior half of a placed node: it owns the input
//! slots, the cached result, and the validation state the UI decorates the
//! node with. The host pushes values in with [`NodeModel::set_input`] and
//! routes the returned signal downstream; everything completes synchronously
//! inside that call, so downstream consumers only ever observe fully-settled
//! state.

use super::port::PortId;
use super::value::NumberValue;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Coarse health indicator of a node, used to gate computation and drive UI
/// decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeState {
    /// No input has arrived yet
    Uninitialized,
    /// An input slot is empty or holds an unusable value
    Warning,
    /// Both the inputs and the cached result are good
    Valid,
    /// The compute step failed (e.g. division by zero)
    Error,
}

/// Downstream notification produced by a model transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortSignal {
    /// The output port holds fresh data (possibly empty after a compute
    /// error); consumers should re-read it
    Updated(PortId),
    /// The output port's previous data no longer holds
    Invalidated(PortId),
}

/// Behavior contract implemented by every node model
pub trait NodeModel: Send {
    /// Stores `value` (or empty) into input slot `port` and runs the model's
    /// transition rule. Returns the signal to route downstream, if any.
    fn set_input(&mut self, port: PortId, value: Option<NumberValue>) -> Option<PortSignal>;

    /// Current data on output port `port`, empty when the model has nothing
    /// to publish
    fn output(&self, port: PortId) -> Option<NumberValue>;

    /// Validation state polled by the host to decorate the node
    fn validation_state(&self) -> NodeState {
        NodeState::Valid
    }

    /// Validation message accompanying the state, empty when `Valid`
    fn validation_message(&self) -> &str {
        ""
    }

    /// Persisted fields for this node; the default has none
    fn save(&self) -> serde_json::Value {
        serde_json::Value::Object(serde_json::Map::new())
    }

    /// Restores persisted fields, returning a signal when the restored state
    /// changed the output. Malformed payloads must leave prior state
    /// untouched.
    fn restore(&mut self, _state: &serde_json::Value) -> Option<PortSignal> {
        None
    }

    /// Downcast support for host accessors that address a concrete model
    fn as_any(&self) -> &dyn Any;

    /// Mutable downcast support
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
