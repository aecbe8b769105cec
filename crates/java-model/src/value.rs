//! Scalar attribute values carried by nodes.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A leaf value whose equality is defined outside this crate.
///
/// Implementations come from the model library that produced the graph
/// (for example arbitrary-precision numbers). Their `equals` is not required
/// to be symmetric, so callers that need a symmetric answer must ask both
/// sides.
pub trait LeafValue: fmt::Debug + Send + Sync {
    /// One-directional equality as reported by `self`.
    fn equals(&self, other: &dyn LeafValue) -> bool;

    /// Downcasting support for `equals` implementations.
    fn as_any(&self) -> &dyn Any;
}

/// An attribute value.
#[derive(Debug, Clone)]
pub enum Value {
    Bool(bool),
    Char(char),
    /// Integer and long literal values, and counters such as array dimensions.
    Int(i128),
    Float(f32),
    Double(f64),
    Str(String),
    /// Namespace parts and other ordered name lists.
    StrList(Vec<String>),
    Opaque(Arc<dyn LeafValue>),
}

impl Value {
    /// Equality as seen from `self`.
    ///
    /// Floating point values are equal when both are NaN. Opaque values defer
    /// to their own [`LeafValue::equals`], which may disagree with the
    /// reverse direction.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => (a.is_nan() && b.is_nan()) || a == b,
            (Value::Double(a), Value::Double(b)) => (a.is_nan() && b.is_nan()) || a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::StrList(a), Value::StrList(b)) => a == b,
            (Value::Opaque(a), Value::Opaque(b)) => a.equals(b.as_ref()),
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_str_list(&self) -> Option<&[String]> {
        match self {
            Value::StrList(parts) => Some(parts),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i128> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Short rendering used in node labels.
    pub fn render(&self) -> String {
        match self {
            Value::Bool(b) => b.to_string(),
            Value::Char(c) => format!("'{}'", c),
            Value::Int(i) => i.to_string(),
            Value::Float(x) => format!("{}f", x),
            Value::Double(x) => x.to_string(),
            Value::Str(s) => format!("\"{}\"", s),
            Value::StrList(parts) => parts.join("."),
            Value::Opaque(v) => format!("{:?}", v),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<i128> for Value {
    fn from(value: i128) -> Self {
        Value::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value.into())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Value::StrList(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Lenient(u32);

    impl LeafValue for Lenient {
        fn equals(&self, other: &dyn LeafValue) -> bool {
            // accepts anything at least as large as itself
            other
                .as_any()
                .downcast_ref::<Lenient>()
                .is_some_and(|o| o.0 >= self.0)
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_nan_equals_nan() {
        assert!(Value::Double(f64::NAN).equals(&Value::Double(f64::NAN)));
        assert!(Value::Float(f32::NAN).equals(&Value::Float(f32::NAN)));
        assert!(!Value::Double(f64::NAN).equals(&Value::Double(1.0)));
    }

    #[test]
    fn test_mixed_variants_are_unequal() {
        assert!(!Value::Int(1).equals(&Value::Double(1.0)));
        assert!(!Value::Str("a".into()).equals(&Value::StrList(vec!["a".into()])));
    }

    #[test]
    fn test_opaque_equality_is_one_directional() {
        let small = Value::Opaque(Arc::new(Lenient(1)));
        let large = Value::Opaque(Arc::new(Lenient(2)));
        assert!(small.equals(&large));
        assert!(!large.equals(&small));
    }

    #[test]
    fn test_render() {
        assert_eq!(Value::from("x").render(), "\"x\"");
        assert_eq!(
            Value::from(vec!["a".to_string(), "b".to_string()]).render(),
            "a.b"
        );
        assert_eq!(Value::from(42i32).render(), "42");
    }
}
