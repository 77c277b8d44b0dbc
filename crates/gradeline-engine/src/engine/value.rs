//! Normalized score values.
//!
//! [`Value`] makes "missing" an explicit state instead of a NaN that leaks
//! through arithmetic. Every operation here returns `Missing` as soon as an
//! operand is missing.

use std::ops::Sub;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Value {
    Number(f64),
    #[default]
    Missing,
}

impl Value {
    /// Wrap a float, mapping NaN to `Missing`.
    pub fn from_f64(n: f64) -> Value {
        if n.is_nan() {
            Value::Missing
        } else {
            Value::Number(n)
        }
    }

    pub fn as_f64(self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n),
            Value::Missing => None,
        }
    }

    pub fn is_missing(self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Percentage change `100 * self / base`, treating `self` as the delta.
    ///
    /// Missing when either side is missing or `base` is zero.
    pub fn percent_of(self, base: Value) -> Value {
        match (self, base) {
            (Value::Number(delta), Value::Number(base)) if base != 0.0 => {
                Value::from_f64(100.0 * delta / base)
            }
            _ => Value::Missing,
        }
    }
}

impl Sub for Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Number(a), Value::Number(b)) => Value::from_f64(a - b),
            _ => Value::Missing,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::from_f64(n)
    }
}

impl From<Option<f64>> for Value {
    fn from(n: Option<f64>) -> Self {
        n.map_or(Value::Missing, Value::from_f64)
    }
}
