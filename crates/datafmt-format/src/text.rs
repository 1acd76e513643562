//! String casing helpers.

/// Uppercases the first character and leaves the rest untouched.
///
/// # Examples
///
/// ```
/// use datafmt_format::capitalize;
///
/// assert_eq!(capitalize("hello world"), "Hello world");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Splits on non-alphanumeric characters and on lower-to-upper boundaries.
fn words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut after_lower = false;
    for ch in s.chars() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            after_lower = false;
            continue;
        }
        if ch.is_uppercase() && after_lower {
            words.push(std::mem::take(&mut current));
        }
        current.push(ch);
        after_lower = ch.is_lowercase() || ch.is_numeric();
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Converts a phrase or identifier to lower camelCase.
///
/// # Examples
///
/// ```
/// use datafmt_format::camel_case;
///
/// assert_eq!(camel_case("hello world"), "helloWorld");
/// assert_eq!(camel_case("Foo_bar-baz"), "fooBarBaz");
/// ```
pub fn camel_case(s: &str) -> String {
    let mut output = String::with_capacity(s.len());
    for (index, word) in words(s).iter().enumerate() {
        let lower = word.to_lowercase();
        if index == 0 {
            output.push_str(&lower);
        } else {
            output.push_str(&capitalize(&lower));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_handles_unicode() {
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize("ß"), "SS");
    }

    #[test]
    fn camel_case_splits_existing_camel_case() {
        assert_eq!(camel_case("userId"), "userId");
        assert_eq!(camel_case("UserName"), "userName");
        assert_eq!(camel_case("version2Beta"), "version2Beta");
    }

    #[test]
    fn camel_case_collapses_separators() {
        assert_eq!(camel_case("  --first   SECOND__third "), "firstSecondThird");
        assert_eq!(camel_case("***"), "");
    }
}
