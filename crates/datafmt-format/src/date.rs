//! Date formatting with `chrono` strftime patterns.

use std::fmt::{self, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDateTime};

use crate::FormatError;

fn parse_pattern(pattern: &str) -> Result<Vec<Item<'_>>, FormatError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(FormatError::InvalidPattern(pattern.to_string()));
    }
    Ok(items)
}

// chrono reports fields the value cannot supply (an offset on a naive
// datetime) as a `fmt::Error` while rendering.
fn render(pattern: &str, formatted: impl fmt::Display) -> Result<String, FormatError> {
    let mut output = String::new();
    write!(output, "{formatted}").map_err(|_| FormatError::InvalidPattern(pattern.to_string()))?;
    Ok(output)
}

/// Formats a datetime with a strftime pattern.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use datafmt_format::format_date;
///
/// let value = NaiveDate::from_ymd_opt(2024, 3, 5)
///     .and_then(|date| date.and_hms_opt(14, 7, 9))
///     .unwrap();
/// assert_eq!(format_date(&value, "%d/%m/%Y").unwrap(), "05/03/2024");
/// ```
///
/// # Errors
///
/// [`FormatError::InvalidPattern`] when the pattern has an unknown specifier
/// or asks for a field the value does not have.
pub fn format_date(value: &NaiveDateTime, pattern: &str) -> Result<String, FormatError> {
    let items = parse_pattern(pattern)?;
    render(pattern, value.format_with_items(items.iter()))
}

/// Formats a Unix timestamp in milliseconds as a UTC datetime.
///
/// # Errors
///
/// [`FormatError::TimestampOutOfRange`] for timestamps chrono cannot
/// represent, or [`FormatError::InvalidPattern`].
pub fn format_timestamp(millis: i64, pattern: &str) -> Result<String, FormatError> {
    let items = parse_pattern(pattern)?;
    let value =
        DateTime::from_timestamp_millis(millis).ok_or(FormatError::TimestampOutOfRange(millis))?;
    render(pattern, value.format_with_items(items.iter()))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .and_then(|date| date.and_hms_opt(14, 7, 9))
            .unwrap()
    }

    #[test]
    fn formats_iso_like_patterns() {
        assert_eq!(
            format_date(&sample(), "%Y-%m-%d %H:%M:%S").unwrap(),
            "2024-03-05 14:07:09"
        );
        assert_eq!(format_date(&sample(), "%b %e, %Y").unwrap(), "Mar  5, 2024");
    }

    #[test]
    fn rejects_unterminated_specifier() {
        assert_eq!(
            format_date(&sample(), "%Y-%m-%").unwrap_err(),
            FormatError::InvalidPattern("%Y-%m-%".to_string())
        );
    }

    #[test]
    fn rejects_offset_on_naive_value() {
        assert!(matches!(
            format_date(&sample(), "%H:%M %z"),
            Err(FormatError::InvalidPattern(_))
        ));
    }

    #[test]
    fn formats_epoch_millis_in_utc() {
        assert_eq!(
            format_timestamp(0, "%Y-%m-%dT%H:%M:%S%.3f%:z").unwrap(),
            "1970-01-01T00:00:00.000+00:00"
        );
        assert_eq!(
            format_timestamp(1_709_647_629_250, "%Y-%m-%d %H:%M:%S%.3f").unwrap(),
            "2024-03-05 14:07:09.250"
        );
    }

    #[test]
    fn rejects_out_of_range_timestamp() {
        assert_eq!(
            format_timestamp(i64::MAX, "%Y").unwrap_err(),
            FormatError::TimestampOutOfRange(i64::MAX)
        );
    }
}
