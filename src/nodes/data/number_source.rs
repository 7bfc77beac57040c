//! Number source node implementation
//!
//! A zero-input, one-output node holding a user-editable decimal. The UI
//! layer owns the actual text widget and forwards edits here; the buffer is
//! kept so the widget can be repopulated after a restore.

use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::nodes::interface::{NodeModel, PortSignal};
use crate::nodes::port::PortId;
use crate::nodes::value::{NumberKind, NumberValue};
use std::any::Any;

/// Number source node that publishes an editable decimal value
#[derive(Default)]
pub struct NumberSourceNodeFactory;

impl NodeFactory for NumberSourceNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "NumberSource",
            "NumberSource",
            NodeCategory::data(),
            "Outputs an editable decimal value",
        )
        .with_outputs(vec![PortDefinition::new("Result", NumberKind::Decimal)])
    }

    fn create_model() -> Box<dyn NodeModel> {
        Box::new(NumberSourceModel::new())
    }
}

/// Model holding the current value and the text buffer backing the edit
/// widget
pub struct NumberSourceModel {
    number: Option<NumberValue>,
    text: String,
}

impl NumberSourceModel {
    /// Creates a source holding 0.0, matching its initial buffer text
    pub fn new() -> Self {
        Self {
            number: Some(NumberValue::decimal(0.0)),
            text: "0.0".to_string(),
        }
    }

    /// The held value, if any
    pub fn number(&self) -> Option<NumberValue> {
        self.number
    }

    /// The current edit buffer
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Stores the edited text and reparses it as a decimal. A successful
    /// parse replaces the held value and updates the output; a failed parse
    /// leaves the held value alone and only invalidates the output.
    pub fn set_text(&mut self, text: &str) -> Option<PortSignal> {
        self.text = text.to_string();
        match text.trim().parse::<f64>() {
            Ok(number) => {
                self.number = Some(NumberValue::decimal(number));
                Some(PortSignal::Updated(0))
            }
            Err(_) => Some(PortSignal::Invalidated(0)),
        }
    }
}

impl Default for NumberSourceModel {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeModel for NumberSourceModel {
    fn set_input(&mut self, _port: PortId, _value: Option<NumberValue>) -> Option<PortSignal> {
        None
    }

    fn output(&self, port: PortId) -> Option<NumberValue> {
        if port == 0 {
            self.number
        } else {
            None
        }
    }

    fn save(&self) -> serde_json::Value {
        let mut doc = serde_json::Map::new();
        if let Some(number) = self.number {
            doc.insert("number".to_string(), number.as_f64().into());
        }
        serde_json::Value::Object(doc)
    }

    fn restore(&mut self, state: &serde_json::Value) -> Option<PortSignal> {
        // Anything unusable leaves the prior state untouched: the original
        // editor swallowed every restore failure and this keeps that
        // contract.
        let number = match state.get("number")? {
            serde_json::Value::Number(n) => n.as_f64()?,
            serde_json::Value::String(s) => s.trim().parse().ok()?,
            _ => return None,
        };
        let value = NumberValue::decimal(number);
        self.text = value.as_text();
        self.number = Some(value);
        Some(PortSignal::Updated(0))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
