// Copyright (c) Redstash Project Authors.

use std::fmt;

/// A payload accepted by the store facade.
///
/// Values are opaque to the store: each variant has a single stored
/// representation as raw bytes, and the `Display` of a `Value` always
/// equals that representation decoded as text.
///
/// # Examples
///
/// ```
/// use redstash_store::Value;
///
/// let text = Value::from("hello");
/// assert_eq!(text.to_bytes(), b"hello");
///
/// let number = Value::from(42_i64);
/// assert_eq!(number.to_string(), "42");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// UTF-8 text, stored as its bytes.
    Text(String),
    /// Raw bytes, stored verbatim.
    Binary(Vec<u8>),
    /// A 64-bit signed integer, stored as its decimal rendering.
    Int(i64),
    /// A 64-bit float, stored as its decimal rendering.
    Float(f64),
}

impl Value {
    /// Returns the stored representation of this value.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Text(text) => text.clone().into_bytes(),
            Self::Binary(bytes) => bytes.clone(),
            Self::Int(n) => n.to_string().into_bytes(),
            Self::Float(x) => x.to_string().into_bytes(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Binary(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Self::Binary(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Binary(bytes)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_round_trips_as_bytes() {
        let value = Value::from("hello");
        assert_eq!(value.to_bytes(), b"hello".to_vec());
        assert_eq!(value.to_string(), "hello");
    }

    #[test]
    fn binary_is_stored_verbatim() {
        let value = Value::from(vec![0_u8, 159, 146, 150]);
        assert_eq!(value.to_bytes(), vec![0, 159, 146, 150]);
    }

    #[test]
    fn int_renders_decimal() {
        let value = Value::from(42_i64);
        assert_eq!(value.to_bytes(), b"42".to_vec());
        assert_eq!(value.to_string(), "42");
    }

    #[test]
    fn float_renders_decimal() {
        let value = Value::from(3.5_f64);
        assert_eq!(value.to_bytes(), b"3.5".to_vec());
    }

    #[test]
    fn display_matches_stored_representation() {
        for value in [Value::from("abc"), Value::from(-7_i64), Value::from(0.25_f64)] {
            assert_eq!(value.to_string().into_bytes(), value.to_bytes());
        }
    }
}
