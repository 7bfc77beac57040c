//! Subtraction node implementation

use super::operation::OperationModel;
use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::nodes::interface::NodeModel;
use crate::nodes::value::{NumberKind, NumberValue};

/// Subtraction node producing minuend minus subtrahend
#[derive(Default)]
pub struct SubtractionNodeFactory;

impl NodeFactory for SubtractionNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Subtraction",
            "Subtraction",
            NodeCategory::math(),
            "Subtracts the second input from the first",
        )
        .with_inputs(vec![
            PortDefinition::new("Minuend", NumberKind::Decimal),
            PortDefinition::new("Subtrahend", NumberKind::Decimal),
        ])
        .with_outputs(vec![PortDefinition::new("Result", NumberKind::Decimal)])
    }

    fn create_model() -> Box<dyn NodeModel> {
        Box::new(OperationModel::new(compute))
    }
}

fn compute(a: NumberValue, b: NumberValue) -> Result<NumberValue, String> {
    Ok(NumberValue::decimal(a.as_f64() - b.as_f64()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_port_labels() {
        let metadata = SubtractionNodeFactory::metadata();
        assert_eq!(metadata.inputs[0].name, "Minuend");
        assert_eq!(metadata.inputs[1].name, "Subtrahend");
        assert_eq!(metadata.outputs[0].name, "Result");
    }

    #[test]
    fn test_difference() {
        let mut model = SubtractionNodeFactory::create_model();
        model.set_input(0, Some(NumberValue::decimal(10.0)));
        model.set_input(1, Some(NumberValue::decimal(4.5)));
        assert_eq!(model.output(0), Some(NumberValue::decimal(5.5)));
    }

    #[test]
    fn test_operand_order() {
        let mut model = SubtractionNodeFactory::create_model();
        model.set_input(0, Some(NumberValue::decimal(4.5)));
        model.set_input(1, Some(NumberValue::decimal(10.0)));
        assert_eq!(model.output(0), Some(NumberValue::decimal(-5.5)));
    }
}
