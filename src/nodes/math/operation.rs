//! Two-input arithmetic operation model
//!
//! Concrete operations differ only in their compute step and port labels;
//! the slot storage and the validation state machine live here. Transitions
//! fire on every input-slot write:
//!
//! - either slot empty -> `Warning`, result cleared, output invalidated
//! - both slots set -> compute; success publishes a fresh result as `Valid`,
//!   failure (division by zero) publishes an empty result as `Error`. Both
//!   outcomes signal "output updated" so downstream re-reads the port.
//!
//! Slots keep their values across unrelated writes: re-setting slot 0
//! recomputes against whatever slot 1 last held.

use crate::nodes::interface::{NodeModel, NodeState, PortSignal};
use crate::nodes::port::PortId;
use crate::nodes::value::NumberValue;
use std::any::Any;

/// Compute step of one concrete operation; `Err` carries the validation
/// message for the `Error` state
pub type ComputeFn = fn(NumberValue, NumberValue) -> Result<NumberValue, String>;

/// Shared model for all two-input, one-output operations
pub struct OperationModel {
    inputs: [Option<NumberValue>; 2],
    result: Option<NumberValue>,
    state: NodeState,
    message: String,
    compute: ComputeFn,
}

impl OperationModel {
    /// Creates an uninitialized operation around a compute step
    pub fn new(compute: ComputeFn) -> Self {
        Self {
            inputs: [None, None],
            result: None,
            state: NodeState::Uninitialized,
            message: "Uninitialized".to_string(),
            compute,
        }
    }

    /// Both slot values when usable; otherwise records the warning state
    fn checked_inputs(&mut self) -> Option<(NumberValue, NumberValue)> {
        match (self.inputs[0], self.inputs[1]) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => {
                self.state = NodeState::Warning;
                self.message = "Missing or incorrect inputs".to_string();
                self.result = None;
                None
            }
        }
    }
}

impl NodeModel for OperationModel {
    fn set_input(&mut self, port: PortId, value: Option<NumberValue>) -> Option<PortSignal> {
        match port {
            0 | 1 => self.inputs[port] = value,
            _ => return None,
        }

        let Some((a, b)) = self.checked_inputs() else {
            return Some(PortSignal::Invalidated(0));
        };

        match (self.compute)(a, b) {
            Ok(result) => {
                self.state = NodeState::Valid;
                self.message.clear();
                self.result = Some(result);
            }
            Err(message) => {
                self.state = NodeState::Error;
                self.message = message;
                self.result = None;
            }
        }
        Some(PortSignal::Updated(0))
    }

    fn output(&self, port: PortId) -> Option<NumberValue> {
        if port == 0 {
            self.result
        } else {
            None
        }
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
