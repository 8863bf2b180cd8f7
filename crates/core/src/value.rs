//! Cell value definitions for opldb.
//!
//! The compiled dataset stores mostly text: weights and ages arrive as numeric
//! strings, and absent cells are `Null`. Numeric interpretation is deferred to
//! [`Value::to_number`] so the sorters can decide how to treat cells that do not
//! coerce.

use alloc::string::String;
use core::hash::{Hash, Hasher};

/// A value stored in a table cell.
#[derive(Clone, Debug)]
pub enum Value {
    /// Missing cell
    Null,
    /// Numeric cell
    Number(f64),
    /// Text cell, possibly holding a number
    String(String),
}

impl Value {
    /// Returns true if this value is Null.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns a reference to the string if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Coerces the cell to a finite number.
    ///
    /// Text is trimmed before parsing and the empty string counts as missing.
    /// Returns `None` for `Null`, unparsable text, and non-finite results
    /// (`"inf"`, `"NaN"`), so callers can substitute their own extreme.
    pub fn to_number(&self) -> Option<f64> {
        let n = match self {
            Value::Null => return None,
            Value::Number(n) => *n,
            Value::String(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return None;
                }
                s.parse::<f64>().ok()?
            }
        };
        n.is_finite().then_some(n)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Number(a), Value::Number(b)) => {
                // Handle NaN comparison
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            (Value::String(a), Value::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Number(n) => {
                // 0.0 == -0.0 must hash alike; NaNs are all equal too
                let n = if *n == 0.0 {
                    0.0
                } else if n.is_nan() {
                    f64::NAN
                } else {
                    *n
                };
                n.to_bits().hash(state);
            }
            Value::String(s) => s.hash(state),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<Option<&str>> for Value {
    fn from(s: Option<&str>) -> Self {
        s.map_or(Value::Null, Value::from)
    }
}
