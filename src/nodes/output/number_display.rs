//! Number display node implementation
//!
//! A one-input, zero-output node that renders the latest delivered value.
//! An empty delivery clears the rendered text and flags the warning state;
//! the embedding UI shows the text and decorates with the validation state.

use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::nodes::interface::{NodeModel, NodeState, PortSignal};
use crate::nodes::port::PortId;
use crate::nodes::value::{NumberKind, NumberValue};
use std::any::Any;

/// Number display node rendering its single input
#[derive(Default)]
pub struct NumberDisplayNodeFactory;

impl NodeFactory for NumberDisplayNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "NumberDisplay",
            "NumberDisplay",
            NodeCategory::output(),
            "Displays the connected numeric value",
        )
        .with_inputs(vec![PortDefinition::new("Number", NumberKind::Decimal)])
    }

    fn create_model() -> Box<dyn NodeModel> {
        Box::new(NumberDisplayModel::new())
    }
}

/// Model holding the last delivered value and its rendering
pub struct NumberDisplayModel {
    number: Option<NumberValue>,
    text: String,
    state: NodeState,
    message: String,
}

impl NumberDisplayModel {
    /// Creates an empty display
    pub fn new() -> Self {
        Self {
            number: None,
            text: String::new(),
            state: NodeState::Uninitialized,
            message: "Uninitialized".to_string(),
        }
    }

    /// The rendered text, empty when the display is cleared
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The last delivered value, if any
    pub fn number(&self) -> Option<NumberValue> {
        self.number
    }
}

impl Default for NumberDisplayModel {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeModel for NumberDisplayModel {
    fn set_input(&mut self, port: PortId, value: Option<NumberValue>) -> Option<PortSignal> {
        if port != 0 {
            return None;
        }
        self.number = value;
        match value {
            Some(number) => {
                self.state = NodeState::Valid;
                self.message.clear();
                self.text = number.as_text();
            }
            None => {
                self.state = NodeState::Warning;
                self.message = "Missing or incorrect inputs".to_string();
                self.text.clear();
            }
        }
        None
    }

    fn output(&self, _port: PortId) -> Option<NumberValue> {
        None
    }

    fn validation_state(&self) -> NodeState {
        self.state
    }

    fn validation_message(&self) -> &str {
        &self.message
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata() {
        let metadata = NumberDisplayNodeFactory::metadata();
        assert_eq!(metadata.type_name, "NumberDisplay");
        assert_eq!(metadata.inputs.len(), 1);
        assert_eq!(metadata.inputs[0].name, "Number");
        assert!(metadata.outputs.is_empty());
    }

    #[test]
    fn test_starts_uninitialized() {
        let model = NumberDisplayModel::new();
        assert_eq!(model.validation_state(), NodeState::Uninitialized);
        assert_eq!(model.validation_message(), "Uninitialized");
        assert_eq!(model.text(), "");
    }

    #[test]
    fn test_renders_delivered_value() {
        let mut model = NumberDisplayModel::new();
        let signal = model.set_input(0, Some(NumberValue::decimal(2.5)));
        assert_eq!(signal, None);
        assert_eq!(model.validation_state(), NodeState::Valid);
        assert_eq!(model.validation_message(), "");
        assert_eq!(model.text(), "2.5");
    }

    #[test]
    fn test_renders_integer_values() {
        let mut model = NumberDisplayModel::new();
        model.set_input(0, Some(NumberValue::integer(-3)));
        assert_eq!(model.text(), "-3");
    }

    #[test]
    fn test_empty_delivery_clears_and_warns() {
        let mut model = NumberDisplayModel::new();
        model.set_input(0, Some(NumberValue::decimal(2.5)));
        model.set_input(0, None);
        assert_eq!(model.validation_state(), NodeState::Warning);
        assert_eq!(model.validation_message(), "Missing or incorrect inputs");
        assert_eq!(model.text(), "");
        assert_eq!(model.number(), None);
    }
}
