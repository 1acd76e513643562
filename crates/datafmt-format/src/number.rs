//! Rounding and locale-neutral number formatting.

use datafmt_model::render_number;
use serde::{Deserialize, Serialize};

/// Rounds `value` to `precision` decimal places, half away from zero.
///
/// A negative precision rounds to tens, hundreds and so on. Non-finite
/// values, and values whose rounding would overflow, are returned unchanged. The result follows `f64` arithmetic, so
/// `round(1.005, 2)` is `1.0` because `1.005` is stored slightly below.
///
/// # Examples
///
/// ```
/// use datafmt_format::round;
///
/// assert_eq!(round(3.14159, 2), 3.14);
/// assert_eq!(round(1250.0, -2), 1300.0);
/// ```
pub fn round(value: f64, precision: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let rounded = if precision >= 0 {
        // Beyond 2^52 every f64 is already integral.
        if value.abs() >= INTEGRAL_THRESHOLD {
            return value;
        }
        let factor = 10f64.powi(precision);
        let scaled = value * factor;
        if !scaled.is_finite() {
            return value;
        }
        scaled.round() / factor
    } else {
        let factor = 10f64.powi(-precision);
        if !factor.is_finite() {
            return 0.0;
        }
        (value / factor).round() * factor
    };
    if rounded.is_finite() { rounded } else { value }
}

const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0;

/// Largest fraction width [`format_number`] renders; larger requests are capped.
pub const MAX_DECIMALS: usize = 100;

/// Separators and precision used by [`format_number`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberFormat {
    /// Fixed number of fraction digits, capped at [`MAX_DECIMALS`]; `None`
    /// keeps the shortest rendering.
    pub decimals: Option<usize>,
    pub thousands_separator: String,
    pub decimal_separator: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimals: None,
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
        }
    }
}

impl NumberFormat {
    #[must_use]
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = Some(decimals);
        self
    }

    #[must_use]
    pub fn with_thousands_separator(mut self, separator: impl Into<String>) -> Self {
        self.thousands_separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = separator.into();
        self
    }
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    let len = digits.len();
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a number with grouped thousands and configurable separators.
///
/// # Examples
///
/// ```
/// use datafmt_format::{NumberFormat, format_number};
///
/// let options = NumberFormat::default().with_decimals(2);
/// assert_eq!(format_number(1234567.891, &options), "1,234,567.89");
/// ```
pub fn format_number(value: f64, options: &NumberFormat) -> String {
    if !value.is_finite() {
        return render_number(value);
    }
    // Keeps `-0` from rendering with a sign.
    let value = if value == 0.0 { 0.0 } else { value };
    let rendered = match options.decimals {
        Some(decimals) => {
            let decimals = decimals.min(MAX_DECIMALS);
            format!("{value:.decimals$}")
        }
        None => render_number(value),
    };
    let (sign, digits) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let mut formatted = String::with_capacity(rendered.len() + 8);
    formatted.push_str(sign);
    formatted.push_str(&group_thousands(integer, &options.thousands_separator));
    if let Some(fraction) = fraction {
        formatted.push_str(&options.decimal_separator);
        formatted.push_str(fraction);
    }
    formatted
}
