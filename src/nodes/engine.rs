//! Graph host engine: model ownership and value routing
//!
//! The engine is the behavior half of the graph host. It owns one
//! [`NodeModel`] per placed node, delivers values into input slots, and
//! routes the resulting signals downstream: an "output updated" signal
//! re-reads the port and pushes the data along every outgoing connection
//! (converting across kind-crossing connections), an "output invalidated"
//! signal pushes empty. Routing recurses until no more ports update; the
//! graph is kept acyclic so the recursion terminates.
//!
//! All failure of the computation itself stays inside node validation state.
//! `Err` returns from engine methods mean host-API misuse (unknown ids, bad
//! ports, rejected connections) and leave graph and engine state unchanged.

use super::convert::ConverterRegistry;
use super::data::number_source::NumberSourceModel;
use super::error::GraphError;
use super::factory::NodeRegistry;
use super::graph::{Connection, NodeGraph};
use super::hooks::GraphObserver;
use super::interface::{NodeModel, NodeState, PortSignal};
use super::node::NodeId;
use super::output::number_display::NumberDisplayModel;
use super::port::PortId;
use super::value::NumberValue;
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::Arc;

/// Engine owning node models and routing values between connected ports
pub struct GraphEngine {
    models: HashMap<NodeId, Box<dyn NodeModel>>,
    converters: ConverterRegistry,
    registry: Arc<NodeRegistry>,
    observers: Vec<Box<dyn GraphObserver>>,
}

impl GraphEngine {
    /// Creates an engine over the shared built-in registry with the default
    /// conversions registered
    pub fn new() -> Self {
        Self::with_registry(NodeRegistry::shared())
    }

    /// Creates an engine over a custom registry
    pub fn with_registry(registry: Arc<NodeRegistry>) -> Self {
        Self {
            models: HashMap::new(),
            converters: ConverterRegistry::with_defaults(),
            registry,
            observers: Vec::new(),
        }
    }

    /// The converter registry consulted when connecting ports
    pub fn converters(&self) -> &ConverterRegistry {
        &self.converters
    }

    /// Replaces the converter registry
    pub fn set_converters(&mut self, converters: ConverterRegistry) {
        self.converters = converters;
    }

    /// Registers an observer notified of every routed signal
    pub fn add_observer(&mut self, observer: Box<dyn GraphObserver>) {
        self.observers.push(observer);
    }

    /// Instantiates a node type into the graph, returning its id
    pub fn add_node(&mut self, graph: &mut NodeGraph, type_name: &str) -> Result<NodeId, GraphError> {
        let (node, model) = self
            .registry
            .create_node(type_name)
            .ok_or_else(|| GraphError::UnknownNodeType(type_name.to_string()))?;
        let id = graph.add_node(node);
        self.models.insert(id, model);
        debug!("added {} node {}", type_name, id);
        Ok(id)
    }

    /// Removes a node; downstream inputs that lose their upstream receive an
    /// empty delivery
    pub fn remove_node(&mut self, graph: &mut NodeGraph, node: NodeId) -> Result<(), GraphError> {
        if !graph.nodes.contains_key(&node) {
            return Err(GraphError::UnknownNode(node));
        }
        let downstream: Vec<(NodeId, PortId)> = graph
            .connections
            .iter()
            .filter(|c| c.from_node == node)
            .map(|c| (c.to_node, c.to_port))
            .collect();

        graph.remove_node(node);
        self.models.remove(&node);
        debug!("removed node {}", node);

        for (to_node, to_port) in downstream {
            self.deliver(graph, to_node, to_port, None)?;
        }
        Ok(())
    }

    /// Connects an output port to an input port
    ///
    /// Declared kinds must match or have a registered conversion. On success
    /// the current upstream output is delivered to the new input immediately.
    pub fn connect(
        &mut self,
        graph: &mut NodeGraph,
        from_node: NodeId,
        from_port: PortId,
        to_node: NodeId,
        to_port: PortId,
    ) -> Result<(), GraphError> {
        let from_kind = graph
            .nodes
            .get(&from_node)
            .ok_or(GraphError::UnknownNode(from_node))?
            .output_kind(from_port)
            .ok_or(GraphError::UnknownPort {
                node: from_node,
                port: from_port,
                direction: "output",
            })?;
        let to_kind = graph
            .nodes
            .get(&to_node)
            .ok_or(GraphError::UnknownNode(to_node))?
            .input_kind(to_port)
            .ok_or(GraphError::UnknownPort {
                node: to_node,
                port: to_port,
                direction: "input",
            })?;

        if !self.converters.can_connect(from_kind, to_kind) {
            return Err(GraphError::KindMismatch {
                from: from_kind,
                to: to_kind,
            });
        }

        let connection = Connection::new(from_node, from_port, to_node, to_port);
        graph.add_connection(connection.clone())?;
        debug!(
            "connected {}:{} -> {}:{}",
            from_node, from_port, to_node, to_port
        );

        let value = self
            .models
            .get(&from_node)
            .and_then(|model| model.output(from_port))
            .map(|value| self.converted(graph, &connection, value));
        self.deliver(graph, to_node, to_port, value)
    }

    /// Removes a connection and delivers empty to the freed input
    pub fn disconnect(
        &mut self,
        graph: &mut NodeGraph,
        from_node: NodeId,
        from_port: PortId,
        to_node: NodeId,
        to_port: PortId,
    ) -> Result<(), GraphError> {
        graph
            .remove_connection(from_node, from_port, to_node, to_port)
            .ok_or(GraphError::UnknownConnection)?;
        debug!(
            "disconnected {}:{} -> {}:{}",
            from_node, from_port, to_node, to_port
        );
        self.deliver(graph, to_node, to_port, None)
    }

    /// Pushes a value (or empty) into an input slot and routes the fallout
    ///
    /// This is the host-facing entry point; routing between connected nodes
    /// goes through the same path internally.
    pub fn deliver_input(
        &mut self,
        graph: &NodeGraph,
        node: NodeId,
        port: PortId,
        value: Option<NumberValue>,
    ) -> Result<(), GraphError> {
        let record = graph
            .nodes
            .get(&node)
            .ok_or(GraphError::UnknownNode(node))?;
        if port >= record.inputs.len() {
            return Err(GraphError::UnknownPort {
                node,
                port,
                direction: "input",
            });
        }
        self.deliver(graph, node, port, value)
    }

    /// Edits a number source's text buffer, reparsing and republishing
    pub fn edit_source(
        &mut self,
        graph: &NodeGraph,
        node: NodeId,
        text: &str,
    ) -> Result<(), GraphError> {
        let signal = self
            .source_model_mut(node)?
            .set_text(text);
        self.route_signal(graph, node, signal)
    }

    /// Current text buffer of a number source
    pub fn source_text(&self, node: NodeId) -> Result<&str, GraphError> {
        Ok(self.source_model(node)?.text())
    }

    /// Rendered text of a number display (empty when cleared)
    pub fn display_text(&self, node: NodeId) -> Result<&str, GraphError> {
        let model = self.model(node)?;
        let display = model
            .as_any()
            .downcast_ref::<NumberDisplayModel>()
            .ok_or(GraphError::NotADisplay(node))?;
        Ok(display.text())
    }

    /// Current data on an output port
    pub fn read_output(&self, node: NodeId, port: PortId) -> Result<Option<NumberValue>, GraphError> {
        Ok(self.model(node)?.output(port))
    }

    /// Validation state polled for node decoration
    pub fn validation_state(&self, node: NodeId) -> Result<NodeState, GraphError> {
        Ok(self.model(node)?.validation_state())
    }

    /// Validation message accompanying the state
    pub fn validation_message(&self, node: NodeId) -> Result<&str, GraphError> {
        Ok(self.model(node)?.validation_message())
    }

    /// Persisted fields of a node (empty object for stateless nodes)
    pub fn save_node(&self, node: NodeId) -> Result<serde_json::Value, GraphError> {
        Ok(self.model(node)?.save())
    }

    /// Restores persisted fields, re-propagating when the restore changed
    /// the node's output; malformed payloads are a silent no-op
    pub fn restore_node(
        &mut self,
        graph: &NodeGraph,
        node: NodeId,
        state: &serde_json::Value,
    ) -> Result<(), GraphError> {
        let signal = self
            .models
            .get_mut(&node)
            .ok_or(GraphError::UnknownNode(node))?
            .restore(state);
        self.route_signal(graph, node, signal)
    }

    fn model(&self, node: NodeId) -> Result<&dyn NodeModel, GraphError> {
        self.models
            .get(&node)
            .map(|m| m.as_ref())
            .ok_or(GraphError::UnknownNode(node))
    }

    fn source_model(&self, node: NodeId) -> Result<&NumberSourceModel, GraphError> {
        self.model(node)?
            .as_any()
            .downcast_ref::<NumberSourceModel>()
            .ok_or(GraphError::NotASource(node))
    }

    fn source_model_mut(&mut self, node: NodeId) -> Result<&mut NumberSourceModel, GraphError> {
        self.models
            .get_mut(&node)
            .ok_or(GraphError::UnknownNode(node))?
            .as_any_mut()
            .downcast_mut::<NumberSourceModel>()
            .ok_or(GraphError::NotASource(node))
    }

    /// Unchecked delivery used once endpoints are known to exist
    fn deliver(
        &mut self,
        graph: &NodeGraph,
        node: NodeId,
        port: PortId,
        value: Option<NumberValue>,
    ) -> Result<(), GraphError> {
        let signal = self
            .models
            .get_mut(&node)
            .ok_or(GraphError::UnknownNode(node))?
            .set_input(port, value);
        self.route_signal(graph, node, signal)
    }

    /// Routes a model's signal along the node's outgoing connections
    fn route_signal(
        &mut self,
        graph: &NodeGraph,
        node: NodeId,
        signal: Option<PortSignal>,
    ) -> Result<(), GraphError> {
        let Some(signal) = signal else {
            return Ok(());
        };

        match signal {
            PortSignal::Updated(port) => {
                for observer in &mut self.observers {
                    observer.on_output_updated(node, port);
                }
                let value = self.models.get(&node).and_then(|m| m.output(port));
                for connection in graph.connections_from(node, port) {
                    let routed = value.map(|v| self.converted(graph, &connection, v));
                    self.deliver(graph, connection.to_node, connection.to_port, routed)?;
                }
            }
            PortSignal::Invalidated(port) => {
                for observer in &mut self.observers {
                    observer.on_output_invalidated(node, port);
                }
                for connection in graph.connections_from(node, port) {
                    self.deliver(graph, connection.to_node, connection.to_port, None)?;
                }
            }
        }
        Ok(())
    }

    /// Applies the registered conversion when a connection crosses kinds
    fn converted(&self, graph: &NodeGraph, connection: &Connection, value: NumberValue) -> NumberValue {
        let from = graph
            .nodes
            .get(&connection.from_node)
            .and_then(|n| n.output_kind(connection.from_port));
        let to = graph
            .nodes
            .get(&connection.to_node)
            .and_then(|n| n.input_kind(connection.to_port));

        match (from, to) {
            (Some(from), Some(to)) if from != to => match self.converters.find(from, to) {
                Some(convert) => convert(value),
                None => {
                    // Connections are kind-checked at creation; reaching this
                    // means the registry shrank afterwards.
                    warn!("no conversion from {} to {}, passing value through", from, to);
                    value
                }
            },
            _ => value,
        }
    }
}

impl Default for GraphEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::value::NumberKind;
    use std::sync::{Arc as StdArc, Mutex};

    fn setup() -> (NodeGraph, GraphEngine) {
        (NodeGraph::new(), GraphEngine::new())
    }

    #[test]
    fn test_add_node_unknown_type() {
        let (mut graph, mut engine) = setup();
        assert_eq!(
            engine.add_node(&mut graph, "Exponentiation"),
            Err(GraphError::UnknownNodeType("Exponentiation".to_string()))
        );
    }

    #[test]
    fn test_deliver_input_checks_endpoints() {
        let (mut graph, mut engine) = setup();
        let add = engine.add_node(&mut graph, "Addition").unwrap();

        assert_eq!(
            engine.deliver_input(&graph, 99, 0, None),
            Err(GraphError::UnknownNode(99))
        );
        assert_eq!(
            engine.deliver_input(&graph, add, 2, None),
            Err(GraphError::UnknownPort {
                node: add,
                port: 2,
                direction: "input"
            })
        );
    }

    #[test]
    fn test_connect_delivers_current_output() {
        let (mut graph, mut engine) = setup();
        let source = engine.add_node(&mut graph, "NumberSource").unwrap();
        let display = engine.add_node(&mut graph, "NumberDisplay").unwrap();

        // The source holds 0.0 from construction; connecting must push it.
        engine.connect(&mut graph, source, 0, display, 0).unwrap();
        assert_eq!(engine.display_text(display).unwrap(), "0");
        assert_eq!(engine.validation_state(display).unwrap(), NodeState::Valid);
    }

    #[test]
    fn test_disconnect_invalidates_downstream() {
        let (mut graph, mut engine) = setup();
        let source = engine.add_node(&mut graph, "NumberSource").unwrap();
        let display = engine.add_node(&mut graph, "NumberDisplay").unwrap();
        engine.connect(&mut graph, source, 0, display, 0).unwrap();

        engine.disconnect(&mut graph, source, 0, display, 0).unwrap();
        assert_eq!(engine.display_text(display).unwrap(), "");
        assert_eq!(
            engine.validation_state(display).unwrap(),
            NodeState::Warning
        );
    }

    #[test]
    fn test_remove_node_invalidates_downstream() {
        let (mut graph, mut engine) = setup();
        let source = engine.add_node(&mut graph, "NumberSource").unwrap();
        let add = engine.add_node(&mut graph, "Addition").unwrap();
        engine.connect(&mut graph, source, 0, add, 0).unwrap();
        engine.connect(&mut graph, source, 0, add, 1).unwrap();
        assert_eq!(engine.validation_state(add).unwrap(), NodeState::Valid);

        engine.remove_node(&mut graph, source).unwrap();
        assert_eq!(engine.validation_state(add).unwrap(), NodeState::Warning);
        assert_eq!(engine.read_output(add, 0).unwrap(), None);
        assert_eq!(
            engine.remove_node(&mut graph, source),
            Err(GraphError::UnknownNode(source))
        );
    }

    #[test]
    fn test_kind_mismatch_without_converter() {
        let (mut graph, mut engine) = setup();
        let modulo = engine.add_node(&mut graph, "Modulo").unwrap();
        let display = engine.add_node(&mut graph, "NumberDisplay").unwrap();

        engine.set_converters(ConverterRegistry::new());
        assert_eq!(
            engine.connect(&mut graph, modulo, 0, display, 0),
            Err(GraphError::KindMismatch {
                from: NumberKind::Integer,
                to: NumberKind::Decimal,
            })
        );
        assert!(graph.connections.is_empty());
    }

    #[test]
    fn test_conversion_applies_across_connections() {
        let (mut graph, mut engine) = setup();
        let dividend = engine.add_node(&mut graph, "NumberSource").unwrap();
        let divisor = engine.add_node(&mut graph, "NumberSource").unwrap();
        let modulo = engine.add_node(&mut graph, "Modulo").unwrap();
        let display = engine.add_node(&mut graph, "NumberDisplay").unwrap();

        // Decimal sources feed the integer ports through truncation, and the
        // integer result widens back for the decimal display.
        engine.connect(&mut graph, dividend, 0, modulo, 0).unwrap();
        engine.connect(&mut graph, divisor, 0, modulo, 1).unwrap();
        engine.connect(&mut graph, modulo, 0, display, 0).unwrap();

        engine.edit_source(&graph, dividend, "17.9").unwrap();
        engine.edit_source(&graph, divisor, "5.2").unwrap();

        assert_eq!(
            engine.read_output(modulo, 0).unwrap(),
            Some(NumberValue::integer(2))
        );
        assert_eq!(engine.display_text(display).unwrap(), "2");
    }

    #[test]
    fn test_edit_source_rejects_other_nodes() {
        let (mut graph, mut engine) = setup();
        let add = engine.add_node(&mut graph, "Addition").unwrap();
        assert_eq!(
            engine.edit_source(&graph, add, "1.0"),
            Err(GraphError::NotASource(add))
        );
        assert_eq!(
            engine.display_text(add),
            Err(GraphError::NotADisplay(add))
        );
    }

    #[derive(Default)]
    struct Recorder {
        events: StdArc<Mutex<Vec<(&'static str, NodeId, PortId)>>>,
    }

    impl GraphObserver for Recorder {
        fn on_output_updated(&mut self, node: NodeId, port: PortId) {
            self.events.lock().unwrap().push(("updated", node, port));
        }

        fn on_output_invalidated(&mut self, node: NodeId, port: PortId) {
            self.events.lock().unwrap().push(("invalidated", node, port));
        }
    }

    #[test]
    fn test_observer_sees_cascading_signals() {
        let (mut graph, mut engine) = setup();
        let source = engine.add_node(&mut graph, "NumberSource").unwrap();
        let add = engine.add_node(&mut graph, "Addition").unwrap();
        engine.connect(&mut graph, source, 0, add, 0).unwrap();
        engine.connect(&mut graph, source, 0, add, 1).unwrap();

        let recorder = Recorder::default();
        let events = StdArc::clone(&recorder.events);
        engine.add_observer(Box::new(recorder));

        engine.edit_source(&graph, source, "2.5").unwrap();
        assert_eq!(
            *events.lock().unwrap(),
            [
                ("updated", source, 0),
                ("updated", add, 0),
                ("updated", add, 0),
            ]
        );

        events.lock().unwrap().clear();
        engine.edit_source(&graph, source, "not a number").unwrap();
        assert_eq!(*events.lock().unwrap(), [("invalidated", source, 0)]);
        // The failed edit leaves the held value and the sum untouched.
        assert_eq!(
            engine.read_output(add, 0).unwrap(),
            Some(NumberValue::decimal(5.0))
        );
    }

    #[test]
    fn test_save_restore_round_trip() {
        let (mut graph, mut engine) = setup();
        let source = engine.add_node(&mut graph, "NumberSource").unwrap();
        engine.edit_source(&graph, source, "3.14").unwrap();
        let saved = engine.save_node(source).unwrap();

        let mut fresh_graph = NodeGraph::new();
        let mut fresh_engine = GraphEngine::new();
        let restored = fresh_engine
            .add_node(&mut fresh_graph, "NumberSource")
            .unwrap();
        fresh_engine
            .restore_node(&fresh_graph, restored, &saved)
            .unwrap();

        assert_eq!(
            fresh_engine.read_output(restored, 0).unwrap(),
            Some(NumberValue::decimal(3.14))
        );
        assert_eq!(fresh_engine.source_text(restored).unwrap(), "3.14");
    }
}
