//! Conversions between number kinds
//!
//! The graph host consults the registry when a connection crosses kinds and
//! applies the registered function to every value routed over it. Both
//! built-in conversions are total: no error paths.

use super::value::{NumberKind, NumberValue};
use std::collections::HashMap;

/// A pure conversion from one number kind to another
pub type ConvertFn = fn(NumberValue) -> NumberValue;

/// Truncates a decimal toward zero
pub fn decimal_to_integer(value: NumberValue) -> NumberValue {
    NumberValue::integer(value.as_f64().trunc() as i64)
}

/// Widens an integer exactly
pub fn integer_to_decimal(value: NumberValue) -> NumberValue {
    NumberValue::decimal(value.as_f64())
}

/// Registry of kind conversions, keyed by (source, target) kind
pub struct ConverterRegistry {
    converters: HashMap<(NumberKind, NumberKind), ConvertFn>,
}

impl ConverterRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            converters: HashMap::new(),
        }
    }

    /// Creates a registry with both built-in conversions registered
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(NumberKind::Decimal, NumberKind::Integer, decimal_to_integer);
        registry.register(NumberKind::Integer, NumberKind::Decimal, integer_to_decimal);
        registry
    }

    /// Registers a conversion, replacing any previous one for the same pair
    pub fn register(&mut self, from: NumberKind, to: NumberKind, converter: ConvertFn) {
        self.converters.insert((from, to), converter);
    }

    /// Looks up the conversion for a kind pair
    pub fn find(&self, from: NumberKind, to: NumberKind) -> Option<ConvertFn> {
        self.converters.get(&(from, to)).copied()
    }

    /// Whether an output of kind `from` may feed an input of kind `to`
    pub fn can_connect(&self, from: NumberKind, to: NumberKind) -> bool {
        from == to || self.find(from, to).is_some()
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
