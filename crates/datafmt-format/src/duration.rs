//! Human-readable durations.

const UNITS: [(&str, u64); 5] = [
    ("d", 86_400_000),
    ("h", 3_600_000),
    ("m", 60_000),
    ("s", 1_000),
    ("ms", 1),
];

/// Renders milliseconds as space-separated units, largest first.
///
/// Zero components are omitted; a zero duration renders as `0ms`.
///
/// # Examples
///
/// ```
/// use datafmt_format::pretty_duration;
///
/// assert_eq!(pretty_duration(3_723_004), "1h 2m 3s 4ms");
/// assert_eq!(pretty_duration(90_000), "1m 30s");
/// ```
pub fn pretty_duration(milliseconds: u64) -> String {
    if milliseconds == 0 {
        return "0ms".to_string();
    }
    let mut remaining = milliseconds;
    let mut parts = Vec::with_capacity(UNITS.len());
    for (suffix, size) in UNITS {
        let count = remaining / size;
        if count > 0 {
            parts.push(format!("{count}{suffix}"));
            remaining %= size;
        }
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_zero_milliseconds() {
        assert_eq!(pretty_duration(0), "0ms");
    }

    #[test]
    fn skips_empty_units() {
        assert_eq!(pretty_duration(86_400_000 + 5), "1d 5ms");
        assert_eq!(pretty_duration(999), "999ms");
        assert_eq!(pretty_duration(1_000), "1s");
    }

    #[test]
    fn large_values_accumulate_days() {
        assert_eq!(pretty_duration(10 * 86_400_000 + 3_600_000), "10d 1h");
    }
}
