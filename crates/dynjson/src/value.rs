//! JSON value types and the reference encoder.
//!
//! [`Value`] is the dynamically typed cell the decoder fills: one
//! discriminant plus one payload. Its `Display` implementation re-emits
//! RFC 8259 text, which the round-trip tests use as the reference encoder.

use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};

pub type Map = BTreeMap<String, Value>;
pub type Array = Vec<Value>;

/// A decoded JSON value.
///
/// Numbers take one of three forms depending on
/// [`DecodeOptions`](crate::DecodeOptions):
///
/// - [`Double`](Value::Double) — the default; every numeric literal becomes
///   an `f64`.
/// - [`Integer`](Value::Integer) — with `use_int64`, literals without a
///   fraction or exponent become `i64` (falling back to `Double` on
///   overflow).
/// - [`Number`](Value::Number) — with `use_number`, every numeric literal is
///   preserved byte-for-byte as its source lexeme.
///
/// # Examples
///
/// ```
/// use dynjson::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".to_string(), Value::String("value".into()));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    /// A numeric literal preserved as its source lexeme.
    Number(String),
    String(String),
    Array(Array),
    Object(Map),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use dynjson::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for any of the three numeric forms.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Double(..) | Self::Number(..))
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the numeric value as `f64` for both parsed numeric forms.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(n) => Some(*n),
            Self::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(m) => Some(m),
            _ => None,
        }
    }
}

/// Escapes a string for inclusion in a JSON string literal.
///
/// Quotes, backslashes, and control characters below U+0020 are replaced by
/// their escape sequences; everything else passes through verbatim.
pub(crate) fn write_escaped_string<W: core::fmt::Write>(src: &str, f: &mut W) -> core::fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\u{0008}' => f.write_str("\\b")?,
            '\u{000C}' => f.write_str("\\f")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_ascii_control() => write!(f, "\\u{:04X}", c as u32)?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Integer(n) => f.write_str(&n.to_string()),
            // Shortest-round-trip formatting; non-finite doubles have no JSON
            // representation and render as-is.
            Value::Double(n) => f.write_str(&n.to_string()),
            Value::Number(lexeme) => f.write_str(lexeme),
            Value::String(s) => {
                f.write_str("\"")?;
                write_escaped_string(s, f)?;
                f.write_str("\"")
            }
            Value::Array(arr) => {
                f.write_str("[")?;
                let mut first = true;
                for v in arr {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                let mut first = true;
                for (k, v) in map {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    f.write_str("\"")?;
                    write_escaped_string(k, f)?;
                    f.write_str("\":")?;
                    write!(f, "{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}
