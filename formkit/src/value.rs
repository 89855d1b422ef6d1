//! The value of an input component.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Value held by an input component.
///
/// Mirrors what an embedding application may assign: text, a number, an
/// explicit null, or nothing at all.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    /// No value assigned.
    Unset,
    /// Explicitly cleared to null.
    Null,
    Text(String),
    Number(f64),
}

impl Default for InputValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl InputValue {
    /// String form of the value, or `None` when unset or null.
    ///
    /// Numbers use [`number_to_string`].
    pub fn as_string(&self) -> Option<String> {
        match self {
            Self::Unset | Self::Null => None,
            Self::Text(s) => Some(s.clone()),
            Self::Number(n) => Some(number_to_string(*n)),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Unset | Self::Null)
    }

    /// Whether assigning `other` over `self` leaves the value unchanged.
    ///
    /// Like `==`, except two `NaN` numbers are the same value.
    pub fn is_same(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) if a.is_nan() && b.is_nan() => true,
            _ => self == other,
        }
    }
}

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for InputValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for InputValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for InputValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl<T: Into<InputValue>> From<Option<T>> for InputValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Convert a number to the string a browser would produce for it.
///
/// Integral values print without a fractional part, `-0` prints as `0`, and
/// non-finite values print as `NaN`, `Infinity` or `-Infinity`.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        // Exponent form, with an explicit sign on positive exponents.
        let s = format!("{n:e}");
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        };
    }
    n.to_string()
}

impl Serialize for InputValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unset | Self::Null => serializer.serialize_none(),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Number(n) => serializer.serialize_f64(*n),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for InputValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<RawValue>::deserialize(deserializer)? {
            None => Self::Null,
            Some(RawValue::Number(n)) => Self::Number(n),
            Some(RawValue::Text(s)) => Self::Text(s),
        })
    }
}
