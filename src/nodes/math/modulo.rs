//! Modulo node implementation
//!
//! Works in the integer domain: operands are truncated toward zero the same
//! way the registered decimal-to-integer conversion does, and the result
//! kind is always integer regardless of operand kinds. The remainder is
//! Euclidean, so it is never negative.

use super::operation::OperationModel;
use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::nodes::interface::NodeModel;
use crate::nodes::value::{NumberKind, NumberValue};

/// Modulo node producing the integer remainder of dividend over divisor
#[derive(Default)]
pub struct ModuloNodeFactory;

impl NodeFactory for ModuloNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Modulo",
            "Modulo",
            NodeCategory::math(),
            "Integer remainder of the first input divided by the second",
        )
        .with_inputs(vec![
            PortDefinition::new("Dividend", NumberKind::Integer),
            PortDefinition::new("Divisor", NumberKind::Integer),
        ])
        .with_outputs(vec![PortDefinition::new("Result", NumberKind::Integer)])
    }

    fn create_model() -> Box<dyn NodeModel> {
        Box::new(OperationModel::new(compute))
    }
}

fn compute(a: NumberValue, b: NumberValue) -> Result<NumberValue, String> {
    if b.as_f64() == 0.0 {
        return Err("Division by zero error".to_string());
    }
    let dividend = a.as_f64().trunc() as i64;
    let divisor = b.as_f64().trunc() as i64;
    if divisor == 0 {
        // A fractional divisor below one truncates to zero.
        return Err("Division by zero error".to_string());
    }
    Ok(NumberValue::integer(dividend.rem_euclid(divisor)))
}
