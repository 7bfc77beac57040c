//! Addition node implementation

use super::operation::OperationModel;
use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::nodes::interface::NodeModel;
use crate::nodes::value::{NumberKind, NumberValue};

/// Addition node that takes two decimal inputs and produces their sum
#[derive(Default)]
pub struct AdditionNodeFactory;

impl NodeFactory for AdditionNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Addition",
            "Addition",
            NodeCategory::math(),
            "Adds two numeric values together",
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
    Ok(NumberValue::decimal(a.as_f64() + b.as_f64()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::interface::NodeState;

    #[test]
    fn test_metadata() {
        let metadata = AdditionNodeFactory::metadata();
        assert_eq!(metadata.type_name, "Addition");
        assert_eq!(metadata.inputs.len(), 2);
        assert_eq!(metadata.outputs.len(), 1);
        assert_eq!(metadata.inputs[0].name, "A");
        assert_eq!(metadata.inputs[1].name, "B");
        assert_eq!(metadata.outputs[0].name, "Result");
    }

    #[test]
    fn test_sum() {
        let mut model = AdditionNodeFactory::create_model();
        model.set_input(0, Some(NumberValue::decimal(2.5)));
        model.set_input(1, Some(NumberValue::decimal(3.25)));
        assert_eq!(model.validation_state(), NodeState::Valid);
        assert_eq!(model.output(0), Some(NumberValue::decimal(5.75)));
    }

    #[test]
    fn test_integer_operands_widen() {
        let mut model = AdditionNodeFactory::create_model();
        model.set_input(0, Some(NumberValue::integer(2)));
        model.set_input(1, Some(NumberValue::integer(3)));
        assert_eq!(model.output(0), Some(NumberValue::decimal(5.0)));
    }
}
