//! Division node implementation

use super::operation::OperationModel;
use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::nodes::interface::NodeModel;
use crate::nodes::value::{NumberKind, NumberValue};

/// Division node producing dividend over divisor; a zero divisor puts the
/// node into the error state instead of producing a value
#[derive(Default)]
pub struct DivisionNodeFactory;

impl NodeFactory for DivisionNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Division",
            "Division",
            NodeCategory::math(),
            "Divides the first input by the second",
        )
        .with_inputs(vec![
            PortDefinition::new("Dividend", NumberKind::Decimal),
            PortDefinition::new("Divisor", NumberKind::Decimal),
        ])
        .with_outputs(vec![PortDefinition::new("Result", NumberKind::Decimal)])
    }

    fn create_model() -> Box<dyn NodeModel> {
        Box::new(OperationModel::new(compute))
    }
}

fn compute(a: NumberValue, b: NumberValue) -> Result<NumberValue, String> {
    if b.as_f64() == 0.0 {
        return Err("Division by zero error".to_string());
    }
    Ok(NumberValue::decimal(a.as_f64() / b.as_f64()))
}
