//! Multiplication node implementation

use super::operation::OperationModel;
use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::nodes::interface::NodeModel;
use crate::nodes::value::{NumberKind, NumberValue};

/// Multiplication node that takes two decimal inputs and produces their
/// product
#[derive(Default)]
pub struct MultiplicationNodeFactory;

impl NodeFactory for MultiplicationNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Multiplication",
            "Multiplication",
            NodeCategory::math(),
            "Multiplies two numeric values",
        )
        .with_inputs(vec![
            PortDefinition::new("A", NumberKind::Decimal),
            PortDefinition::new("B", NumberKind::Decimal),
        ])
        .with_outputs(vec![PortDefinition::new("Result", NumberKind::Decimal)])
    }

    fn create_model() -> Box<dyn NodeModel> {
        Box::new(OperationModel::new(compute))
    }
}

fn compute(a: NumberValue, b: NumberValue) -> Result<NumberValue, String> {
    Ok(NumberValue::decimal(a.as_f64() * b.as_f64()))
}
