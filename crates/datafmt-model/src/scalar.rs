//! The scalar cell value shared by records and matrices.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell value.
///
/// Serialized untagged, so JSON `null`, booleans, numbers and strings map
/// directly onto the variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Scalar {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the text content, or `None` for non-text values.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Renders the value the way it appears in a CSV field.
    ///
    /// `Null` renders as an empty string, never as `"null"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use datafmt_model::Scalar;
    ///
    /// assert_eq!(Scalar::Null.render(), "");
    /// assert_eq!(Scalar::Number(2.0).render(), "2");
    /// assert_eq!(Scalar::Number(0.5).render(), "0.5");
    /// assert_eq!(Scalar::Bool(true).render(), "true");
    /// ```
    pub fn render(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(value) => value.to_string(),
            Self::Number(value) => render_number(*value),
            Self::Text(value) => value.clone(),
        }
    }
}

/// Formats a float using the shortest decimal form that round-trips.
///
/// Integral values have no fractional part, negative zero prints as `0`,
/// and non-finite values print as `NaN`, `Infinity` or `-Infinity`.
pub fn render_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

macro_rules! scalar_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Self::Number(f64::from(value))
                }
            }
        )*
    };
}

scalar_from_int!(i8, i16, i32, u8, u16, u32);

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<usize> for Scalar {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_numbers_without_trailing_zeros() {
        assert_eq!(render_number(1.0), "1");
        assert_eq!(render_number(-42.0), "-42");
        assert_eq!(render_number(1.25), "1.25");
        assert_eq!(render_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn renders_special_numbers() {
        assert_eq!(render_number(-0.0), "0");
        assert_eq!(render_number(f64::NAN), "NaN");
        assert_eq!(render_number(f64::INFINITY), "Infinity");
        assert_eq!(render_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn option_none_is_null() {
        assert_eq!(Scalar::from(None::<&str>), Scalar::Null);
        assert_eq!(Scalar::from(Some(3)), Scalar::Number(3.0));
    }
}
