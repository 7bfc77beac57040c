//! Numeric values flowing between node ports
//!
//! A value is immutable once constructed: recomputation replaces the value
//! held in a slot instead of mutating it, so a value fanned out to several
//! consumers can be shared without coordination.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar type tag of a [`NumberValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberKind {
    Decimal,
    Integer,
}

impl NumberKind {
    /// Stable identifier used for port compatibility checks
    pub fn id(&self) -> &'static str {
        match self {
            NumberKind::Decimal => "decimal",
            NumberKind::Integer => "integer",
        }
    }

    /// Human-readable name for UI decoration
    pub fn name(&self) -> &'static str {
        match self {
            NumberKind::Decimal => "Decimal",
            NumberKind::Integer => "Integer",
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A kind-tagged scalar carried between ports
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NumberValue {
    Decimal(f64),
    Integer(i64),
}

impl NumberValue {
    /// Creates a decimal value
    pub fn decimal(number: f64) -> Self {
        NumberValue::Decimal(number)
    }

    /// Creates an integer value
    pub fn integer(number: i64) -> Self {
        NumberValue::Integer(number)
    }

    /// Returns the kind tag of this value
    pub fn kind(&self) -> NumberKind {
        match self {
            NumberValue::Decimal(_) => NumberKind::Decimal,
            NumberValue::Integer(_) => NumberKind::Integer,
        }
    }

    /// Returns the scalar widened to `f64` for computation
    pub fn as_f64(&self) -> f64 {
        match self {
            NumberValue::Decimal(n) => *n,
            NumberValue::Integer(n) => *n as f64,
        }
    }

    /// Stable textual rendering: `%g`-style for decimals, plain text for
    /// integers
    pub fn as_text(&self) -> String {
        match self {
            NumberValue::Decimal(n) => format_general(*n),
            NumberValue::Integer(n) => n.to_string(),
        }
    }
}

/// Formats a decimal the way C's `%g` does with the default precision of six
/// significant digits: fixed notation for exponents in `[-4, 5]`, scientific
/// notation otherwise, trailing zeros trimmed either way.
fn format_general(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // Round to six significant digits first; the exponent must be read off
    // the rounded value so that e.g. 999999.5 lands in the scientific branch.
    let sci = format!("{:.5e}", value);
    let (mantissa, exponent) = sci
        .split_once('e')
        .expect("exponential format always contains an exponent");
    let exponent: i32 = exponent.parse().expect("exponent is a valid integer");

    if (-4..6).contains(&exponent) {
        let decimals = (5 - exponent).max(0) as usize;
        let mut text = format!("{:.*}", decimals, value);
        if text.contains('.') {
            while text.ends_with('0') {
                text.pop();
            }
            if text.ends_with('.') {
                text.pop();
            }
        }
        text
    } else {
        let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(NumberValue::decimal(1.5).kind(), NumberKind::Decimal);
        assert_eq!(NumberValue::integer(3).kind(), NumberKind::Integer);
        assert_eq!(NumberKind::Decimal.id(), "decimal");
        assert_eq!(NumberKind::Integer.id(), "integer");
        assert_eq!(NumberKind::Decimal.name(), "Decimal");
    }

    #[test]
    fn test_as_f64_widens_exactly() {
        assert_eq!(NumberValue::integer(-12).as_f64(), -12.0);
        assert_eq!(NumberValue::decimal(0.25).as_f64(), 0.25);
    }

    #[test]
    fn test_integer_text() {
        assert_eq!(NumberValue::integer(42).as_text(), "42");
        assert_eq!(NumberValue::integer(-7).as_text(), "-7");
        assert_eq!(NumberValue::integer(0).as_text(), "0");
    }

    #[test]
    fn test_decimal_text_fixed_notation() {
        assert_eq!(NumberValue::decimal(3.14).as_text(), "3.14");
        assert_eq!(NumberValue::decimal(2.5).as_text(), "2.5");
        assert_eq!(NumberValue::decimal(3.0).as_text(), "3");
        assert_eq!(NumberValue::decimal(0.0).as_text(), "0");
        assert_eq!(NumberValue::decimal(-0.25).as_text(), "-0.25");
        assert_eq!(NumberValue::decimal(0.0001).as_text(), "0.0001");
    }

    #[test]
    fn test_decimal_text_rounds_to_six_significant_digits() {
        assert_eq!(NumberValue::decimal(0.1 + 0.2).as_text(), "0.3");
        assert_eq!(NumberValue::decimal(123456.7).as_text(), "123457");
        assert_eq!(NumberValue::decimal(1.0 / 3.0).as_text(), "0.333333");
    }

    #[test]
    fn test_decimal_text_scientific_notation() {
        assert_eq!(NumberValue::decimal(1e7).as_text(), "1e+07");
        assert_eq!(NumberValue::decimal(1_500_000.0).as_text(), "1.5e+06");
        assert_eq!(NumberValue::decimal(0.00001).as_text(), "1e-05");
        assert_eq!(NumberValue::decimal(-2.5e10).as_text(), "-2.5e+10");
    }
}
